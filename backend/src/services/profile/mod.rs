//! # Profile Service Module
//!
//! Aggregates all API endpoints related to user profiles. A profile is one
//! user's filled-in instance of the template; it is validated against the
//! template on every save and can be served as an ephemeral view merged
//! with the latest template revision.

mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all profile-related API endpoints.
const API_PATH: &str = "/api/profile";

/// Configures and returns the Actix `Scope` for all profile-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /{user_id}?merge=bool`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the user's profile. With `merge=true` the
///       profile is first merged with the latest template (values are kept
///       wherever the slot still exists; the stored record is not changed).
///       A user without a profile receives the bare template instead.
///
/// *   **`POST /{user_id}/save`**:
///     - **Handler**: `save::process`
///     - **Description**: Validates the profile against the current
///       template and upserts it for the user. An invalid profile is
///       rejected with the violation list as a JSON array.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{user_id}/save", post().to(save::process))
        .route("/{user_id}", get().to(get::process))
}
