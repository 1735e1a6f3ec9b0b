use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::model::Profile;
use common::validate::validate_profile;
use log::info;

use crate::error::ApiError;
use crate::store;

/// Actix web handler for `POST /api/profile/{user_id}/save`.
///
/// Validates the profile against the current template and upserts it for
/// the user. Validation failures are rejected with the full violation list
/// as a JSON array; a profile can only be stored while a template exists.
pub async fn process(
    user_id: web::Path<String>,
    payload: web::Json<Profile>,
) -> Result<impl Responder, ApiError> {
    let mut profile = payload.into_inner();
    profile.user_id = user_id.into_inner();

    let conn = store::open()?;
    let template = store::templates::get(&conn)?.ok_or_else(|| {
        ApiError::BadRequest("There is currently no template to validate against.".to_string())
    })?;

    let report = validate_profile(&template, &profile);
    if !report.is_valid() {
        return Err(ApiError::Validation(report.violations));
    }

    if let Some(existing) = store::profiles::find_by_user_id(&conn, &profile.user_id)? {
        // updates stay bound to the user's existing record
        profile.document.id = existing.document.id;
        profile.document.created_by_user = existing.document.created_by_user;
        profile.document.created_date = existing.document.created_date;
    }
    let now = Utc::now();
    if profile.document.created_date.is_none() {
        profile.document.created_date = Some(now);
    }
    profile.document.last_modified_date = Some(now);

    store::profiles::save(&conn, &mut profile)?;

    info!("profile saved for user {}", profile.user_id);
    Ok(HttpResponse::Ok().json(profile))
}
