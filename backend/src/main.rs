mod error;
mod services;
mod store;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let host = "127.0.0.1";
    let port = 8080;

    // make sure the schema exists and a fresh installation has a template
    match store::open() {
        Ok(conn) => {
            if let Err(e) = store::templates::seed(&conn) {
                error!("could not seed the initial template: {e}");
            }
        }
        Err(e) => error!("could not open the database: {e}"),
    }

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .service(services::template::configure_routes())
            .service(services::profile::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}
