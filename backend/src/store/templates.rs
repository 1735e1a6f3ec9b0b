use common::identity;
use common::model::Template;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::ApiError;

/// Loads the single stored template, if one exists.
pub fn get(conn: &Connection) -> Result<Option<Template>, ApiError> {
    let row: Option<(String, String)> = conn
        .query_row("SELECT id, doc FROM templates LIMIT 1", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    match row {
        Some((id, doc)) => {
            let mut template: Template = serde_json::from_str(&doc)?;
            template.id = Some(id);
            Ok(Some(template))
        }
        None => Ok(None),
    }
}

/// Writes the template, assigning a record id if it has none yet. The
/// caller is responsible for pointing `template.id` at the existing record
/// when the single template is being overwritten.
pub fn save(conn: &Connection, template: &mut Template) -> Result<(), ApiError> {
    let id = template
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    template.id = Some(id.clone());

    let doc = serde_json::to_string(template)?;
    conn.execute(
        "INSERT OR REPLACE INTO templates (id, doc) VALUES (?1, ?2)",
        params![id, doc],
    )?;
    Ok(())
}

/// Stores the embedded default template if the collection is empty, so a
/// fresh installation starts with a usable schema. Runs the normal
/// publishing steps (identifier assignment, value clearing) on the seed.
pub fn seed(conn: &Connection) -> Result<(), ApiError> {
    if get(conn)?.is_some() {
        return Ok(());
    }
    let mut template: Template =
        serde_json::from_str(include_str!("../../data/init_template.json"))?;
    identity::assign_identifiers(&mut template);
    identity::clear_values(&mut template);
    save(conn, &mut template)?;
    info!("seeded initial template");
    Ok(())
}
