use actix_web::{HttpResponse, Responder};

use crate::error::ApiError;
use crate::store;

/// Actix web handler for `GET /api/template`.
///
/// # Returns
/// - `200 OK` with the current template as a JSON payload.
/// - `404 Not Found` if no template has been published yet.
pub async fn process() -> Result<impl Responder, ApiError> {
    let conn = store::open()?;
    let template = store::templates::get(&conn)?
        .ok_or_else(|| ApiError::NotFound("No template found.".to_string()))?;
    Ok(HttpResponse::Ok().json(template))
}
