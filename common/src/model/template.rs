use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::section::Section;
use crate::model::style::{Footer, Header, Style};

/// The single schema-and-defaults document that all profiles must follow.
///
/// Exactly one template exists process-wide. It is stored without user
/// values and with an identifier on every section and element (see
/// [`crate::identity::assign_identifiers`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Internal record id, managed by the store.
    #[serde(skip)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub style: Style,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub footer: Option<Footer>,
    #[serde(default)]
    pub created_by_user: Option<String>,
    #[serde(default)]
    pub modified_by_user: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_date: Option<DateTime<Utc>>,
}
