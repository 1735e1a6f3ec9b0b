//! The element variant type used inside a [`Section`](crate::model::Section).
//!
//! Elements are a closed set of kinds, discriminated on the wire by the
//! `type` field. Identity is carried by the `identifier` field alone: two
//! elements describe the same slot iff both identifiers are present and
//! equal, so an element can be renamed without losing its values. Structural
//! equality (`PartialEq`) is derived for tests; the reconciliation engine
//! only ever compares slots through [`Element::matches`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_unique() -> bool {
    true
}

/// A calendar range with an inclusive start and end date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// A name/value pair where the value is a single string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringElement {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_unique")]
    pub unique: bool,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// A name/value pair where the value is an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringListElement {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_unique")]
    pub unique: bool,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// A name/value pair where the value is a single calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateElement {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<NaiveDate>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_unique")]
    pub unique: bool,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// A name/value pair where the value is a [`DateRange`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRangeElement {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<DateRange>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_unique")]
    pub unique: bool,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// A repeatable sub-record with a labelled key element and a list of value
/// elements, e.g. one job history entry.
///
/// The key element acts as the group's header. Value elements are always
/// singleton within their group; only the nested element's own `unique`
/// flag controls whether the whole group may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedElement {
    pub key: Box<Element>,
    #[serde(default)]
    pub value: Vec<Element>,
    #[serde(default)]
    pub highlight_nested_keys: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_unique")]
    pub unique: bool,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// One schema slot inside a section.
///
/// An unrecognized `type` discriminator deserializes to [`Element::Unknown`]
/// instead of failing the whole request; the validator reports it as a
/// violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Element {
    #[serde(rename = "string")]
    String(StringElement),
    #[serde(rename = "stringList")]
    StringList(StringListElement),
    #[serde(rename = "date")]
    Date(DateElement),
    #[serde(rename = "dateRange")]
    DateRange(DateRangeElement),
    #[serde(rename = "nested")]
    Nested(NestedElement),
    #[serde(other)]
    Unknown,
}

impl Element {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Element::String(e) => e.identifier.as_deref(),
            Element::StringList(e) => e.identifier.as_deref(),
            Element::Date(e) => e.identifier.as_deref(),
            Element::DateRange(e) => e.identifier.as_deref(),
            Element::Nested(e) => e.identifier.as_deref(),
            Element::Unknown => None,
        }
    }

    pub fn set_identifier(&mut self, id: String) {
        match self {
            Element::String(e) => e.identifier = Some(id),
            Element::StringList(e) => e.identifier = Some(id),
            Element::Date(e) => e.identifier = Some(id),
            Element::DateRange(e) => e.identifier = Some(id),
            Element::Nested(e) => e.identifier = Some(id),
            Element::Unknown => {}
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Element::String(e) => e.required,
            Element::StringList(e) => e.required,
            Element::Date(e) => e.required,
            Element::DateRange(e) => e.required,
            Element::Nested(e) => e.required,
            Element::Unknown => false,
        }
    }

    pub fn unique(&self) -> bool {
        match self {
            Element::String(e) => e.unique,
            Element::StringList(e) => e.unique,
            Element::Date(e) => e.unique,
            Element::DateRange(e) => e.unique,
            Element::Nested(e) => e.unique,
            Element::Unknown => true,
        }
    }

    pub fn set_unique(&mut self, unique: bool) {
        match self {
            Element::String(e) => e.unique = unique,
            Element::StringList(e) => e.unique = unique,
            Element::Date(e) => e.unique = unique,
            Element::DateRange(e) => e.unique = unique,
            Element::Nested(e) => e.unique = unique,
            Element::Unknown => {}
        }
    }

    /// The human-readable name of this element, used in violation messages.
    /// A nested element is labelled by its key sub-element.
    pub fn label(&self) -> &str {
        match self {
            Element::String(e) => &e.key,
            Element::StringList(e) => &e.key,
            Element::Date(e) => &e.key,
            Element::DateRange(e) => &e.key,
            Element::Nested(e) => e.key.label(),
            Element::Unknown => "unknown",
        }
    }

    /// Whether both elements describe the same template slot. True iff both
    /// carry an identifier and the identifiers are equal; an element without
    /// an identifier matches nothing.
    pub fn matches(&self, other: &Element) -> bool {
        match (self.identifier(), other.identifier()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Strips all user values, recursing into nested keys and values.
    pub fn clear_value(&mut self) {
        match self {
            Element::String(e) => e.value = None,
            Element::StringList(e) => e.value.clear(),
            Element::Date(e) => e.value = None,
            Element::DateRange(e) => e.value = None,
            Element::Nested(e) => {
                e.key.clear_value();
                for value in &mut e.value {
                    value.clear_value();
                }
            }
            Element::Unknown => {}
        }
    }
}
