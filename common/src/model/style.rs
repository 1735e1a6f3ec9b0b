use serde::{Deserialize, Serialize};

/// Font and color configuration for a whole document or a single section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default)]
    pub font_type: String,
    #[serde(default)]
    pub font_size: u32,
    #[serde(default)]
    pub heading_size: u32,
    /// 3- or 6-digit hex code, without the leading `#`.
    #[serde(default)]
    pub primary_color: String,
    /// 3- or 6-digit hex code, without the leading `#`.
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default)]
    pub bold_keys: bool,
}

/// Free-form block rendered above the sections. Copied through untouched by
/// the merge engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub content: String,
}

/// Free-form block rendered below the sections. Copied through untouched by
/// the merge engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub content: String,
}
