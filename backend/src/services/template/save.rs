use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use common::identity;
use common::model::Template;
use common::validate::validate_template;
use log::info;

use crate::error::ApiError;
use crate::store;

/// Actix web handler for `POST /api/template/save`.
///
/// Validates the payload, rejects it with the violation list on failure,
/// and otherwise publishes it as the new single template: identifiers are
/// assigned to new sections and elements, all values are cleared, and the
/// existing record (if any) is overwritten in place so profiles keep
/// reconciling against one authoritative document.
pub async fn process(payload: web::Json<Template>) -> Result<impl Responder, ApiError> {
    let mut template = payload.into_inner();

    let report = validate_template(&template);
    if !report.is_valid() {
        return Err(ApiError::Validation(report.violations));
    }

    let conn = store::open()?;
    if let Some(existing) = store::templates::get(&conn)? {
        // keep overwriting the single record and its creation audit trail
        template.id = existing.id;
        template.created_by_user = existing.created_by_user;
        template.created_date = existing.created_date;
    }
    let now = Utc::now();
    if template.created_date.is_none() {
        template.created_date = Some(now);
    }
    template.last_modified_date = Some(now);

    identity::assign_identifiers(&mut template);
    identity::clear_values(&mut template);
    store::templates::save(&conn, &mut template)?;

    info!("template '{}' published", template.title);
    Ok(HttpResponse::Ok().json(template))
}
