//! SQLite persistence for the two document collections.
//!
//! Documents are stored as JSON text in one database file: a single-row
//! `templates` table and a `profiles` table keyed by user id. Handlers open
//! a connection per request; the store functions take `&Connection`, so
//! tests run against in-memory databases.

pub mod profiles;
pub mod templates;

use rusqlite::Connection;

const DB_PATH: &str = "profileconfig.sqlite";

/// Opens the database file and makes sure the schema exists.
pub fn open() -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(DB_PATH)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS templates (
            id TEXT PRIMARY KEY,
            doc TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL UNIQUE,
            doc TEXT NOT NULL
        );",
    )
}
