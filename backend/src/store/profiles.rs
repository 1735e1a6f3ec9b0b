use common::model::Profile;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::ApiError;

/// Loads the profile owned by the given user, if one exists.
pub fn find_by_user_id(conn: &Connection, user_id: &str) -> Result<Option<Profile>, ApiError> {
    let row: Option<(String, String)> = conn
        .query_row(
            "SELECT id, doc FROM profiles WHERE user_id = ?1",
            params![user_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match row {
        Some((id, doc)) => {
            let mut profile: Profile = serde_json::from_str(&doc)?;
            profile.document.id = Some(id);
            profile.user_id = user_id.to_string();
            Ok(Some(profile))
        }
        None => Ok(None),
    }
}

/// Upserts the profile, keyed by user id. A record id is assigned on first
/// save and kept on updates.
pub fn save(conn: &Connection, profile: &mut Profile) -> Result<(), ApiError> {
    if profile.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Profile is missing a user id.".to_string(),
        ));
    }

    let id = profile
        .document
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    profile.document.id = Some(id.clone());

    let doc = serde_json::to_string(profile)?;
    conn.execute(
        "INSERT OR REPLACE INTO profiles (id, user_id, doc) VALUES (?1, ?2, ?3)",
        params![id, profile.user_id, doc],
    )?;
    Ok(())
}
