use serde::{Deserialize, Serialize};

use crate::model::element::Element;
use crate::model::style::Style;

/// A named, ordered group of elements within a template or profile.
///
/// Like elements, sections carry their identity in the `identifier` field:
/// [`Section::matches`] compares identifiers only, so a retitled section
/// keeps its values across a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub show_title: bool,
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub identifier: Option<String>,
}

impl Section {
    /// Whether both sections describe the same template section. A section
    /// without an identifier matches nothing, itself included.
    pub fn matches(&self, other: &Section) -> bool {
        match (&self.identifier, &other.identifier) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
