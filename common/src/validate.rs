//! Structural validation of profiles and templates.
//!
//! [`validate_profile`] decides whether a profile's section/element sequence
//! still conforms to the current template. Sections are compared pairwise by
//! position, but elements within a section go through a slot matcher that
//! compares identifiers, tolerates skipping optional slots and accepts
//! consecutive repeats of a non-unique slot. The matcher never throws for
//! data-shape reasons; every problem becomes a human-readable violation.

use crate::model::element::{Element, NestedElement};
use crate::model::profile::Profile;
use crate::model::section::Section;
use crate::model::style::Style;
use crate::model::template::Template;

/// Outcome of a validation run. Valid iff no violations were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validates a profile against the current template.
///
/// Top-level checks short-circuit: a profile without sections, with the
/// wrong section count, or with a section missing entirely is rejected with
/// a single violation. Once the section sequences line up, every section
/// pair is checked even after one of them fails.
pub fn validate_profile(template: &Template, profile: &Profile) -> ValidationReport {
    let mut violations = Vec::new();

    if profile.document.sections.is_empty() {
        violations.push("Your profile does not contain any sections.".to_string());
        return ValidationReport { violations };
    }

    if profile.document.sections.len() != template.sections.len() {
        violations.push("Your sections do not match the template.".to_string());
        return ValidationReport { violations };
    }

    for (template_section, profile_section) in
        template.sections.iter().zip(&profile.document.sections)
    {
        if !template_section.matches(profile_section) {
            violations.push(format!(
                "Section {} is missing in the profile.",
                template_section.title
            ));
            return ValidationReport { violations };
        }
        validate_section(template_section, profile_section, &mut violations);
    }

    ValidationReport { violations }
}

/// The per-section slot matcher.
///
/// Walks the profile's elements in order while moving a cursor over the
/// template's elements. A non-unique template slot keeps absorbing repeats
/// (the cursor stays put); a unique slot advances the cursor after its
/// first occurrence. When a profile element does not match the cursor, one
/// skip is allowed if the current slot is optional or already satisfied by
/// repeats. Any other divergence stops the section with a mismatch
/// violation; the remaining profile elements are not checked.
fn validate_section(
    template_section: &Section,
    profile_section: &Section,
    violations: &mut Vec<String>,
) {
    if profile_section.elements.is_empty() {
        violations.push(format!(
            "Section {} does not contain any elements.",
            template_section.title
        ));
        return;
    }

    let mut template_elements = template_section.elements.iter();
    let Some(mut template_element) = template_elements.next() else {
        violations.push(elements_mismatch(template_section));
        return;
    };
    let mut unique = template_element.unique();
    let mut allow_duplicate = false;
    let mut last_id: Option<&str> = None;

    for profile_element in &profile_section.elements {
        if profile_element.matches(template_element) {
            let is_duplicate = last_id.is_some() && profile_element.identifier() == last_id;
            if is_duplicate && !allow_duplicate {
                violations.push(elements_mismatch(template_section));
                return;
            }
            last_id = profile_element.identifier();
            // once the slot is known non-unique, subsequent repeats are fine
            allow_duplicate = !unique;

            validate_element(template_element, profile_element, violations);

            if unique {
                if let Some(next) = template_elements.next() {
                    template_element = next;
                    unique = template_element.unique();
                }
            }
        } else {
            // the current slot may be skipped if it is optional or already
            // satisfied by at least one repeat
            let mut matched_after_skip = false;
            if allow_duplicate || !template_element.required() {
                if let Some(next) = template_elements.next() {
                    template_element = next;
                    unique = template_element.unique();
                    if profile_element.matches(template_element) {
                        validate_element(template_element, profile_element, violations);
                        matched_after_skip = true;
                    }
                }
            }
            if !matched_after_skip {
                violations.push(elements_mismatch(template_section));
                return;
            }
        }
    }
}

fn elements_mismatch(template_section: &Section) -> String {
    format!(
        "Elements of section {} do not match the template.",
        template_section.title
    )
}

fn validate_element(
    template_element: &Element,
    profile_element: &Element,
    violations: &mut Vec<String>,
) -> bool {
    if !has_value(template_element, profile_element, violations) {
        violations.push(format!(
            "Element {} missing values.",
            template_element.label()
        ));
        return false;
    }
    true
}

/// The value presence rule, by kind. The template counterpart is needed for
/// nested elements, whose value lists are compared against the template's.
fn has_value(
    template_element: &Element,
    profile_element: &Element,
    violations: &mut Vec<String>,
) -> bool {
    match profile_element {
        Element::Date(e) => e.value.is_some(),
        Element::String(e) => e.value.as_deref().is_some_and(|v| !v.trim().is_empty()),
        Element::StringList(e) => {
            !e.value.is_empty() && e.value.iter().all(|entry| !entry.trim().is_empty())
        }
        Element::DateRange(e) => e
            .value
            .as_ref()
            .is_some_and(|range| range.from.is_some() && range.to.is_some()),
        Element::Nested(profile_nested) => match template_element {
            Element::Nested(template_nested) => {
                validate_nested(template_nested, profile_nested, violations)
            }
            _ => false,
        },
        Element::Unknown => {
            violations.push(format!("Unknown Element {}", profile_element.label()));
            false
        }
    }
}

/// A nested group has a value when its key does, its value list is as long
/// as the template's, and every value sub-element has a value of its own.
fn validate_nested(
    template_element: &NestedElement,
    profile_element: &NestedElement,
    violations: &mut Vec<String>,
) -> bool {
    let mut valid = has_value(&template_element.key, &profile_element.key, violations);

    if profile_element.value.is_empty() {
        return false;
    }
    if profile_element.value.len() != template_element.value.len() {
        return false;
    }

    for (template_value, profile_value) in template_element.value.iter().zip(&profile_element.value)
    {
        valid = validate_element(template_value, profile_value, violations) && valid;
    }
    valid
}

/// Validates a template before it is published.
///
/// Checks the document frame (title, style) and the section tree: visible
/// sections need a title, sections need elements and distinct titles,
/// elements need names and distinct keys, nested groups need at least one
/// named, unique value sub-element.
pub fn validate_template(template: &Template) -> ValidationReport {
    let mut violations = Vec::new();

    if template.title.trim().is_empty() {
        violations.push("Template must have a title.".to_string());
    }
    validate_style(&template.style, &mut violations);

    if template.sections.is_empty() {
        violations.push("Template does not contain any sections.".to_string());
        return ValidationReport { violations };
    }

    for section in &template.sections {
        if section.show_title && section.title.trim().is_empty() {
            violations.push("Section title is missing but set to show.".to_string());
            return ValidationReport { violations };
        }
        if section.elements.is_empty() {
            violations.push(format!(
                "Section {} does not contain any elements.",
                section.title
            ));
        } else if template
            .sections
            .iter()
            .filter(|other| other.title == section.title)
            .count()
            > 1
        {
            violations.push(format!(
                "Multiple declarations of section {}.",
                section.title
            ));
        } else {
            validate_template_elements(&section.elements, &section.title, &mut violations);
        }
    }

    ValidationReport { violations }
}

fn validate_style(style: &Style, violations: &mut Vec<String>) {
    if style.font_type.trim().is_empty() {
        violations.push("Font Type is missing.".to_string());
    }
    if style.font_size < 5 {
        violations.push("Font size must be bigger than 5.".to_string());
    }
    if style.heading_size < 10 {
        violations.push("Heading size must be bigger than 10.".to_string());
    }
    check_color(&style.primary_color, "Primary Color is missing", violations);
    check_color(
        &style.secondary_color,
        "Secondary Color is missing",
        violations,
    );
}

fn check_color(color: &str, missing_message: &str, violations: &mut Vec<String>) {
    if color.trim().is_empty() {
        violations.push(missing_message.to_string());
    } else if !is_hex_color(color) {
        violations.push("Not a valid hex code.".to_string());
    }
}

fn is_hex_color(color: &str) -> bool {
    (color.len() == 6 || color.len() == 3) && color.chars().all(|c| c.is_ascii_hexdigit())
}

fn validate_template_elements(
    elements: &[Element],
    section_title: &str,
    violations: &mut Vec<String>,
) {
    for element in elements {
        match element {
            Element::Nested(nested) => {
                validate_template_nested(nested, section_title, violations);
            }
            _ => {
                if element.label().trim().is_empty() {
                    violations.push(format!(
                        "Section element in section {section_title} is missing a name."
                    ));
                    return;
                }
            }
        }
        if elements
            .iter()
            .filter(|other| other.label() == element.label())
            .count()
            > 1
        {
            violations.push(format!(
                "Section element {} in section {} has multiple declarations.",
                element.label(),
                section_title
            ));
        }
    }
}

fn validate_template_nested(
    element: &NestedElement,
    section_title: &str,
    violations: &mut Vec<String>,
) {
    if element.value.is_empty() {
        violations.push(format!(
            "Nested element in section {section_title} does not have values."
        ));
        return;
    }
    for value in &element.value {
        if !value.unique() {
            violations.push("Values in Nested Elements must be unique.".to_string());
        }
        if value.label().trim().is_empty() {
            violations.push(format!(
                "Nested element in section {section_title} is missing names."
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::{DateRange, DateRangeElement, StringElement, StringListElement};
    use crate::model::style::Style;

    fn style() -> Style {
        Style {
            font_type: "Arial".to_string(),
            font_size: 11,
            heading_size: 14,
            primary_color: "1a2b3c".to_string(),
            secondary_color: "fff".to_string(),
            bold_keys: true,
        }
    }

    fn template(sections: Vec<Section>) -> Template {
        Template {
            id: None,
            title: "Profile".to_string(),
            sections,
            style: style(),
            header: None,
            footer: None,
            created_by_user: None,
            modified_by_user: None,
            created_date: None,
            last_modified_date: None,
        }
    }

    fn profile(sections: Vec<Section>) -> Profile {
        let mut profile = Profile::from_template(&template(Vec::new()));
        profile.document.sections = sections;
        profile
    }

    fn section(identifier: &str, elements: Vec<Element>) -> Section {
        Section {
            title: "Section 1".to_string(),
            elements,
            show_title: true,
            style: None,
            identifier: Some(identifier.to_string()),
        }
    }

    fn string_el(
        identifier: &str,
        unique: bool,
        required: bool,
        key: &str,
        value: Option<&str>,
    ) -> Element {
        Element::String(StringElement {
            key: key.to_string(),
            value: value.map(str::to_string),
            required,
            unique,
            identifier: Some(identifier.to_string()),
        })
    }

    fn assert_single_violation(report: &ValidationReport, expected: &str) {
        assert!(!report.is_valid());
        assert_eq!(report.violations, vec![expected.to_string()]);
    }

    #[test]
    fn invalid_if_profile_has_no_sections() {
        let template = template(vec![section("s1", Vec::new())]);
        let profile = profile(Vec::new());
        let report = validate_profile(&template, &profile);
        assert_single_violation(&report, "Your profile does not contain any sections.");
    }

    #[test]
    fn invalid_if_section_counts_differ() {
        let template = template(vec![
            section("s1", Vec::new()),
            section("s2", Vec::new()),
        ]);
        let profile = profile(vec![section("s1", Vec::new())]);
        let report = validate_profile(&template, &profile);
        assert_single_violation(&report, "Your sections do not match the template.");
    }

    #[test]
    fn invalid_if_section_is_missing() {
        let mut template_section = section("s1", Vec::new());
        template_section.title = "Allgemein".to_string();
        let template = template(vec![template_section]);
        let profile = profile(vec![section("other", Vec::new())]);
        let report = validate_profile(&template, &profile);
        assert_single_violation(&report, "Section Allgemein is missing in the profile.");
    }

    #[test]
    fn invalid_if_profile_section_has_no_elements() {
        let elements = vec![string_el("e1", true, true, "Name", None)];
        let template = template(vec![section("s1", elements)]);
        let profile = profile(vec![section("s1", Vec::new())]);
        let report = validate_profile(&template, &profile);
        assert_single_violation(&report, "Section Section 1 does not contain any elements.");
    }

    // the unique/required matrix below mirrors the slot matcher's behavior
    // for a template of [Name, Name2] (Name2 always unique and required)

    fn matrix_template(unique: bool, required: bool) -> Template {
        template(vec![section(
            "s1",
            vec![
                string_el("e1", unique, required, "Name", None),
                string_el("e2", true, true, "Name2", None),
            ],
        )])
    }

    fn matrix_profile(element_ids: &[&str]) -> Profile {
        let elements = element_ids
            .iter()
            .map(|id| {
                let key = if *id == "e1" { "Name" } else { "Name2" };
                string_el(id, true, true, key, Some("value"))
            })
            .collect();
        profile(vec![section("s1", elements)])
    }

    #[test]
    fn unique_required_present_once_is_valid() {
        let report = validate_profile(&matrix_template(true, true), &matrix_profile(&["e1", "e2"]));
        assert!(report.is_valid());
    }

    #[test]
    fn unique_required_duplicated_is_invalid() {
        let report = validate_profile(
            &matrix_template(true, true),
            &matrix_profile(&["e1", "e1", "e2"]),
        );
        assert_single_violation(
            &report,
            "Elements of section Section 1 do not match the template.",
        );
    }

    #[test]
    fn unique_required_missing_is_invalid() {
        let report = validate_profile(&matrix_template(true, true), &matrix_profile(&["e2"]));
        assert_single_violation(
            &report,
            "Elements of section Section 1 do not match the template.",
        );
    }

    #[test]
    fn unique_required_duplicated_against_single_slot_template_is_invalid() {
        let template = template(vec![section(
            "s1",
            vec![string_el("e1", true, true, "Name", None)],
        )]);
        let report = validate_profile(&template, &matrix_profile(&["e1", "e1"]));
        assert_single_violation(
            &report,
            "Elements of section Section 1 do not match the template.",
        );
    }

    #[test]
    fn repeatable_required_present_once_is_valid() {
        let report =
            validate_profile(&matrix_template(false, true), &matrix_profile(&["e1", "e2"]));
        assert!(report.is_valid());
    }

    #[test]
    fn repeatable_required_repeated_is_valid() {
        let report = validate_profile(
            &matrix_template(false, true),
            &matrix_profile(&["e1", "e1", "e2"]),
        );
        assert!(report.is_valid());
    }

    #[test]
    fn repeatable_required_missing_is_invalid() {
        let report = validate_profile(&matrix_template(false, true), &matrix_profile(&["e2"]));
        assert_single_violation(
            &report,
            "Elements of section Section 1 do not match the template.",
        );
    }

    #[test]
    fn repeatable_required_repeated_against_single_slot_template_is_valid() {
        let template = template(vec![section(
            "s1",
            vec![string_el("e1", false, true, "Name", None)],
        )]);
        let report = validate_profile(&template, &matrix_profile(&["e1", "e1"]));
        assert!(report.is_valid());
    }

    #[test]
    fn unique_optional_present_is_valid() {
        let report =
            validate_profile(&matrix_template(true, false), &matrix_profile(&["e1", "e2"]));
        assert!(report.is_valid());
    }

    #[test]
    fn unique_optional_duplicated_is_invalid() {
        let report = validate_profile(
            &matrix_template(true, false),
            &matrix_profile(&["e1", "e1", "e2"]),
        );
        assert_single_violation(
            &report,
            "Elements of section Section 1 do not match the template.",
        );
    }

    #[test]
    fn unique_optional_omitted_is_valid() {
        let report = validate_profile(&matrix_template(true, false), &matrix_profile(&["e2"]));
        assert!(report.is_valid());
    }

    #[test]
    fn repeatable_optional_present_is_valid() {
        let report = validate_profile(
            &matrix_template(false, false),
            &matrix_profile(&["e1", "e2"]),
        );
        assert!(report.is_valid());
    }

    #[test]
    fn repeatable_optional_repeated_is_valid() {
        let report = validate_profile(
            &matrix_template(false, false),
            &matrix_profile(&["e1", "e1", "e1", "e2"]),
        );
        assert!(report.is_valid());
    }

    #[test]
    fn repeatable_optional_omitted_is_valid() {
        let report = validate_profile(&matrix_template(false, false), &matrix_profile(&["e2"]));
        assert!(report.is_valid());
    }

    #[test]
    fn sections_after_a_failing_section_are_still_checked() {
        let template = template(vec![
            section("s1", vec![string_el("e1", true, true, "Name", None)]),
            section("s2", vec![string_el("e2", true, true, "Name2", None)]),
        ]);
        let profile = profile(vec![
            section("s1", vec![string_el("e1", true, true, "Name", None)]),
            section("s2", vec![string_el("e2", true, true, "Name2", None)]),
        ]);
        let report = validate_profile(&template, &profile);
        assert_eq!(
            report.violations,
            vec![
                "Element Name missing values.".to_string(),
                "Element Name2 missing values.".to_string(),
            ]
        );
    }

    #[test]
    fn blank_string_value_is_a_missing_value() {
        let template = template(vec![section(
            "s1",
            vec![string_el("e1", true, true, "Name", None)],
        )]);
        let profile = profile(vec![section(
            "s1",
            vec![string_el("e1", true, true, "Name", Some("   "))],
        )]);
        let report = validate_profile(&template, &profile);
        assert_single_violation(&report, "Element Name missing values.");
    }

    #[test]
    fn string_list_rejects_blank_entries() {
        let list = |entries: Vec<&str>| {
            Element::StringList(StringListElement {
                key: "Skills".to_string(),
                value: entries.into_iter().map(str::to_string).collect(),
                required: true,
                unique: true,
                identifier: Some("e1".to_string()),
            })
        };
        let template = template(vec![section("s1", vec![list(Vec::new())])]);
        let profile = profile(vec![section("s1", vec![list(vec!["Rust", " "])])]);
        let report = validate_profile(&template, &profile);
        assert_single_violation(&report, "Element Skills missing values.");
    }

    #[test]
    fn date_range_requires_both_bounds() {
        let range = |from: Option<&str>, to: Option<&str>| {
            Element::DateRange(DateRangeElement {
                key: "Employed".to_string(),
                value: Some(DateRange {
                    from: from.map(|d| d.parse().unwrap()),
                    to: to.map(|d| d.parse().unwrap()),
                }),
                required: true,
                unique: true,
                identifier: Some("e1".to_string()),
            })
        };
        let template = template(vec![section("s1", vec![range(None, None)])]);

        let half_open = profile(vec![section("s1", vec![range(Some("2020-01-01"), None)])]);
        let report = validate_profile(&template, &half_open);
        assert_single_violation(&report, "Element Employed missing values.");

        let closed = profile(vec![section(
            "s1",
            vec![range(Some("2020-01-01"), Some("2021-06-30"))],
        )]);
        assert!(validate_profile(&template, &closed).is_valid());
    }

    fn nested_el(identifier: &str, unique: bool, values: Vec<Element>) -> Element {
        Element::Nested(NestedElement {
            key: Box::new(string_el("k1", true, true, "Employer", Some("ACME"))),
            value: values,
            highlight_nested_keys: false,
            required: true,
            unique,
            identifier: Some(identifier.to_string()),
        })
    }

    #[test]
    fn nested_element_checks_key_and_every_value() {
        let template = template(vec![section(
            "s1",
            vec![nested_el(
                "n1",
                true,
                vec![
                    string_el("v1", true, true, "Role", None),
                    string_el("v2", true, true, "Location", None),
                ],
            )],
        )]);
        let filled = profile(vec![section(
            "s1",
            vec![nested_el(
                "n1",
                true,
                vec![
                    string_el("v1", true, true, "Role", Some("Engineer")),
                    string_el("v2", true, true, "Location", Some("Berlin")),
                ],
            )],
        )]);
        assert!(validate_profile(&template, &filled).is_valid());

        let half_filled = profile(vec![section(
            "s1",
            vec![nested_el(
                "n1",
                true,
                vec![
                    string_el("v1", true, true, "Role", Some("Engineer")),
                    string_el("v2", true, true, "Location", None),
                ],
            )],
        )]);
        let report = validate_profile(&template, &half_filled);
        // the empty value sub-element and the enclosing group both report
        assert_eq!(
            report.violations,
            vec![
                "Element Location missing values.".to_string(),
                "Element Employer missing values.".to_string(),
            ]
        );
    }

    #[test]
    fn nested_value_count_must_match_template() {
        let template = template(vec![section(
            "s1",
            vec![nested_el(
                "n1",
                true,
                vec![
                    string_el("v1", true, true, "Role", None),
                    string_el("v2", true, true, "Location", None),
                ],
            )],
        )]);
        let shortened = profile(vec![section(
            "s1",
            vec![nested_el(
                "n1",
                true,
                vec![string_el("v1", true, true, "Role", Some("Engineer"))],
            )],
        )]);
        let report = validate_profile(&template, &shortened);
        assert_single_violation(&report, "Element Employer missing values.");
    }

    #[test]
    fn repeated_nested_groups_are_accepted_for_repeatable_slots() {
        let group = |role: Option<&str>| {
            nested_el(
                "n1",
                false,
                vec![string_el("v1", true, true, "Role", role)],
            )
        };
        let template = template(vec![section("s1", vec![group(None)])]);
        let profile = profile(vec![section(
            "s1",
            vec![group(Some("Engineer")), group(Some("Manager"))],
        )]);
        assert!(validate_profile(&template, &profile).is_valid());
    }

    #[test]
    fn unknown_element_without_identifier_fails_matching() {
        let template = template(vec![section(
            "s1",
            vec![string_el("e1", true, true, "Name", None)],
        )]);
        let bad_profile = profile(vec![section("s1", vec![Element::Unknown])]);
        let report = validate_profile(&template, &bad_profile);
        assert_single_violation(
            &report,
            "Elements of section Section 1 do not match the template.",
        );
    }

    #[test]
    fn unknown_nested_key_is_reported_as_unknown_element() {
        let json = r#"{"type": "hologram", "key": "Photo"}"#;
        let unknown: Element = serde_json::from_str(json).unwrap();
        assert_eq!(unknown, Element::Unknown);

        let values = vec![string_el("v1", true, true, "Role", Some("Engineer"))];
        let template = template(vec![section("s1", vec![nested_el("n1", true, values.clone())])]);
        let mut bad_group = nested_el("n1", true, values);
        if let Element::Nested(nested) = &mut bad_group {
            nested.key = Box::new(unknown);
        }
        let bad_profile = profile(vec![section("s1", vec![bad_group])]);
        let report = validate_profile(&template, &bad_profile);
        assert_eq!(
            report.violations,
            vec![
                "Unknown Element unknown".to_string(),
                "Element Employer missing values.".to_string(),
            ]
        );
    }

    #[test]
    fn valid_template_passes() {
        let template = template(vec![section(
            "s1",
            vec![string_el("e1", true, true, "Name", None)],
        )]);
        assert!(validate_template(&template).is_valid());
    }

    #[test]
    fn template_frame_violations_are_collected() {
        let mut bad = template(Vec::new());
        bad.title = " ".to_string();
        bad.style.font_type = String::new();
        bad.style.font_size = 4;
        bad.style.heading_size = 9;
        bad.style.primary_color = "zzz".to_string();
        bad.style.secondary_color = String::new();
        let report = validate_template(&bad);
        assert_eq!(
            report.violations,
            vec![
                "Template must have a title.".to_string(),
                "Font Type is missing.".to_string(),
                "Font size must be bigger than 5.".to_string(),
                "Heading size must be bigger than 10.".to_string(),
                "Not a valid hex code.".to_string(),
                "Secondary Color is missing".to_string(),
                "Template does not contain any sections.".to_string(),
            ]
        );
    }

    #[test]
    fn template_section_rules() {
        let mut untitled = section("s1", vec![string_el("e1", true, true, "Name", None)]);
        untitled.title = String::new();
        untitled.show_title = true;
        let report = validate_template(&template(vec![untitled]));
        assert_single_violation(&report, "Section title is missing but set to show.");

        let empty = section("s1", Vec::new());
        let report = validate_template(&template(vec![empty]));
        assert_single_violation(&report, "Section Section 1 does not contain any elements.");

        let twin_a = section("s1", vec![string_el("e1", true, true, "Name", None)]);
        let twin_b = section("s2", vec![string_el("e2", true, true, "Name2", None)]);
        let report = validate_template(&template(vec![twin_a, twin_b]));
        assert_eq!(
            report.violations,
            vec![
                "Multiple declarations of section Section 1.".to_string(),
                "Multiple declarations of section Section 1.".to_string(),
            ]
        );
    }

    #[test]
    fn template_element_rules() {
        let unnamed = section("s1", vec![string_el("e1", true, true, " ", None)]);
        let report = validate_template(&template(vec![unnamed]));
        assert_single_violation(
            &report,
            "Section element in section Section 1 is missing a name.",
        );

        let duplicated = section(
            "s1",
            vec![
                string_el("e1", true, true, "Name", None),
                string_el("e2", true, true, "Name", None),
            ],
        );
        let report = validate_template(&template(vec![duplicated]));
        assert_eq!(
            report.violations,
            vec![
                "Section element Name in section Section 1 has multiple declarations.".to_string(),
                "Section element Name in section Section 1 has multiple declarations.".to_string(),
            ]
        );
    }

    #[test]
    fn template_nested_rules() {
        let empty_group = section("s1", vec![nested_el("n1", true, Vec::new())]);
        let report = validate_template(&template(vec![empty_group]));
        assert_single_violation(
            &report,
            "Nested element in section Section 1 does not have values.",
        );

        let mut repeatable_value = string_el("v1", true, true, "Role", None);
        repeatable_value.set_unique(false);
        let bad_group = section("s1", vec![nested_el("n1", true, vec![repeatable_value])]);
        let report = validate_template(&template(vec![bad_group]));
        assert_single_violation(&report, "Values in Nested Elements must be unique.");

        let unnamed_value = string_el("v1", true, true, "", None);
        let bad_group = section("s1", vec![nested_el("n1", true, vec![unnamed_value])]);
        let report = validate_template(&template(vec![bad_group]));
        assert_single_violation(
            &report,
            "Nested element in section Section 1 is missing names.",
        );
    }
}
