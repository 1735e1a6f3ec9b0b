use actix_web::{web, HttpResponse, Responder};
use common::merge::merge_with_template;
use serde::Deserialize;

use crate::error::ApiError;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct GetProfileQuery {
    /// When set, the profile is merged with the latest template before it
    /// is returned. The merged view is ephemeral; nothing is persisted.
    #[serde(default)]
    merge: bool,
}

/// Actix web handler for `GET /api/profile/{user_id}`.
///
/// # Returns
/// - `200 OK` with the user's profile (optionally merged with the template).
/// - `200 OK` with the bare template when the user has no profile yet.
/// - `400 Bad Request` when neither a profile nor a template exists.
pub async fn process(
    user_id: web::Path<String>,
    query: web::Query<GetProfileQuery>,
) -> Result<impl Responder, ApiError> {
    let conn = store::open()?;

    let Some(profile) = store::profiles::find_by_user_id(&conn, &user_id)? else {
        let template = store::templates::get(&conn)?.ok_or_else(|| {
            ApiError::BadRequest(
                "You don't have a profile yet and there is currently no template available."
                    .to_string(),
            )
        })?;
        return Ok(HttpResponse::Ok().json(template));
    };

    if query.merge {
        // without a template the stored profile is already authoritative
        if let Some(template) = store::templates::get(&conn)? {
            return Ok(HttpResponse::Ok().json(merge_with_template(&template, &profile)));
        }
    }
    Ok(HttpResponse::Ok().json(profile))
}
