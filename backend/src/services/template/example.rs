use actix_web::{HttpResponse, Responder};
use common::example::fill_examples;

use crate::error::ApiError;
use crate::store;

/// Actix web handler for `GET /api/template/example`.
///
/// Returns the current template with every element value filled with
/// example data. The stored record stays untouched; this is a preview only.
pub async fn process() -> Result<impl Responder, ApiError> {
    let conn = store::open()?;
    let mut template = store::templates::get(&conn)?
        .ok_or_else(|| ApiError::NotFound("No template found.".to_string()))?;
    fill_examples(&mut template);
    Ok(HttpResponse::Ok().json(template))
}
