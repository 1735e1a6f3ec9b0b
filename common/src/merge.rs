//! Merging a profile onto the current template.
//!
//! Whenever the template changes, a profile built against an older revision
//! is brought up to date by copying the template's structure and pulling the
//! user's values into every slot that still exists. Slots removed from the
//! template lose their data; slots added by the template come up empty. The
//! merge is a pure transform: it reads both inputs and returns a brand-new
//! tree, so the stored profile is never touched and nothing is aliased
//! between template and result.

use std::collections::HashMap;

use crate::model::element::{Element, NestedElement};
use crate::model::profile::Profile;
use crate::model::section::Section;
use crate::model::template::Template;

/// Builds a new profile with the template's structure and the old profile's
/// values wherever an identifier-compatible slot exists. Identity and audit
/// fields (record id, user id, created/modified user and timestamps) are
/// taken from the old profile; they describe the user's record, not the
/// section content.
pub fn merge_with_template(template: &Template, old_profile: &Profile) -> Profile {
    let mut merged = Profile::from_template(template);
    merged.document.id = old_profile.document.id.clone();
    merged.user_id = old_profile.user_id.clone();
    merged.document.created_by_user = old_profile.document.created_by_user.clone();
    merged.document.modified_by_user = old_profile.document.modified_by_user.clone();
    merged.document.created_date = old_profile.document.created_date;
    merged.document.last_modified_date = old_profile.document.last_modified_date;

    let old_sections: HashMap<&str, &Section> = old_profile
        .document
        .sections
        .iter()
        .filter_map(|section| section.identifier.as_deref().map(|id| (id, section)))
        .collect();

    for section in &mut merged.document.sections {
        let old_section = section
            .identifier
            .as_deref()
            .and_then(|id| old_sections.get(id).copied());
        if let Some(old_section) = old_section {
            patch_section(section, old_section);
        }
    }

    merged
}

/// Pulls the old section's values into the fresh (template-shaped) section.
///
/// Old elements whose slot no longer exists in the template are dropped.
/// A unique slot takes the value of its identifier match, if any. A
/// non-unique slot is replaced by one value-patched copy per old
/// occurrence, so a run of repeated entries survives with its length and
/// order intact; with no occurrences the placeholder disappears.
fn patch_section(fresh: &mut Section, old: &Section) {
    let surviving: Vec<&Element> = old
        .elements
        .iter()
        .filter(|old_element| {
            fresh
                .elements
                .iter()
                .any(|slot| slot.matches(old_element))
        })
        .collect();

    let mut by_identifier: HashMap<&str, &Element> = HashMap::new();
    for &element in &surviving {
        if let Some(id) = element.identifier() {
            // last write wins on duplicated identifiers
            by_identifier.insert(id, element);
        }
    }

    let slots = std::mem::take(&mut fresh.elements);
    let mut patched = Vec::with_capacity(slots.len());
    for mut slot in slots {
        if slot.unique() {
            let old_element = slot
                .identifier()
                .and_then(|id| by_identifier.get(id).copied());
            if let Some(old_element) = old_element {
                patch_element(&mut slot, old_element);
            }
            patched.push(slot);
        } else {
            for old_element in surviving.iter().filter(|old| old.matches(&slot)) {
                let mut copy = slot.clone();
                patch_element(&mut copy, old_element);
                patched.push(copy);
            }
        }
    }
    fresh.elements = patched;
}

/// Copies the value of `old` into `fresh`, kind by kind. A kind mismatch
/// means the template redefined the slot; the old value no longer applies.
fn patch_element(fresh: &mut Element, old: &Element) {
    match (fresh, old) {
        (Element::String(fresh), Element::String(old)) => fresh.value = old.value.clone(),
        (Element::StringList(fresh), Element::StringList(old)) => fresh.value = old.value.clone(),
        (Element::Date(fresh), Element::Date(old)) => fresh.value = old.value,
        (Element::DateRange(fresh), Element::DateRange(old)) => fresh.value = old.value.clone(),
        (Element::Nested(fresh), Element::Nested(old)) => patch_nested(fresh, old),
        _ => {}
    }
}

/// Nested groups patch their key sub-element, then each value sub-element
/// by identifier. Value slots inside a group are always singleton, so no
/// run expansion happens at this level.
fn patch_nested(fresh: &mut NestedElement, old: &NestedElement) {
    patch_element(&mut fresh.key, &old.key);

    let by_identifier: HashMap<&str, &Element> = old
        .value
        .iter()
        .filter(|old_value| fresh.value.iter().any(|slot| slot.matches(old_value)))
        .filter_map(|old_value| old_value.identifier().map(|id| (id, old_value)))
        .collect();

    for value in &mut fresh.value {
        let old_value = value
            .identifier()
            .and_then(|id| by_identifier.get(id).copied());
        if let Some(old_value) = old_value {
            patch_element(value, old_value);
        }
    }
}
