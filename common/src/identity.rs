//! Identifier assignment for templates about to be published.
//!
//! Identifiers are what decouple slot identity from position and naming:
//! a section or element keeps its identifier for life, so profiles built
//! against an older revision of the template can still be matched against
//! the current one. This walk runs once per template save and fills in a
//! fresh UUID wherever an identifier is absent or blank. It never touches
//! an identifier that is already set, so running it twice is a no-op.

use uuid::Uuid;

use crate::model::element::Element;
use crate::model::template::Template;

/// Assigns a fresh identifier to every section, element, nested key
/// sub-element and nested value sub-element that has none yet. Value
/// sub-elements of nested groups are forced to `unique = true`; only the
/// enclosing group element controls repetition of the whole group.
pub fn assign_identifiers(template: &mut Template) {
    for section in &mut template.sections {
        if is_blank(section.identifier.as_deref()) {
            section.identifier = Some(new_identifier());
        }
        for element in &mut section.elements {
            if is_blank(element.identifier()) {
                element.set_identifier(new_identifier());
            }
            if let Element::Nested(nested) = element {
                if is_blank(nested.key.identifier()) {
                    nested.key.set_identifier(new_identifier());
                }
                for value in &mut nested.value {
                    value.set_unique(true);
                    if is_blank(value.identifier()) {
                        value.set_identifier(new_identifier());
                    }
                }
            }
        }
    }
}

/// Strips all element values from the template. Templates are never stored
/// with example or user values.
pub fn clear_values(template: &mut Template) {
    for section in &mut template.sections {
        for element in &mut section.elements {
            element.clear_value();
        }
    }
}

fn new_identifier() -> String {
    Uuid::new_v4().to_string()
}

fn is_blank(identifier: Option<&str>) -> bool {
    identifier.is_none_or(|id| id.trim().is_empty())
}
