//! # Template Service Module
//!
//! Aggregates all API endpoints related to the single template document.
//! Routes under `/api/template` are directed to the handler logic in the
//! sub-modules.
//!
//! ## Sub-modules:
//! - `get`: Returns the currently published template.
//! - `save`: Validates and publishes a new template revision.
//! - `example`: Returns the template filled with example values.

mod example;
mod get;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/template";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /save`**:
///     - **Handler**: `save::process`
///     - **Description**: Publishes a template revision. The payload is
///       validated structurally; a fresh identifier is assigned to every
///       section and element that has none, all values are cleared, and the
///       single stored record is overwritten.
///
/// *   **`GET /`** (scope root):
///     - **Handler**: `get::process`
///     - **Description**: Returns the currently published template as JSON.
///
/// *   **`GET /example`**:
///     - **Handler**: `example::process`
///     - **Description**: Returns the current template with every element
///       value filled with example data, for client-side previews.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/example", get().to(example::process))
        .route("", get().to(get::process))
}
