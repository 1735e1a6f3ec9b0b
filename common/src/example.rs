//! Example values for previewing a template.

use chrono::{Local, NaiveDate};

use crate::model::element::{DateRange, Element};
use crate::model::template::Template;

const EXAMPLE_STRING: &str = "Lorem ipsum";
const EXAMPLE_LIST: [&str; 7] = [
    "dolor",
    "sit amet",
    "consetetur",
    "sadipscing",
    "nonumy",
    "tempor",
    "invidunt",
];

/// Fills every empty element value in the template with fixed example data,
/// so a client can render a filled-in preview. Values that are already set
/// are left alone.
pub fn fill_examples(template: &mut Template) {
    let today = Local::now().date_naive();
    for section in &mut template.sections {
        for element in &mut section.elements {
            fill_element(element, today);
        }
    }
}

fn fill_element(element: &mut Element, today: NaiveDate) {
    match element {
        Element::String(e) => {
            if e.value.as_deref().is_none_or(str::is_empty) {
                e.value = Some(EXAMPLE_STRING.to_string());
            }
        }
        Element::StringList(e) => {
            if e.value.is_empty() {
                e.value = EXAMPLE_LIST.iter().map(|s| s.to_string()).collect();
            }
        }
        Element::Date(e) => {
            if e.value.is_none() {
                e.value = Some(today);
            }
        }
        Element::DateRange(e) => {
            let complete = e
                .value
                .as_ref()
                .is_some_and(|range| range.from.is_some() && range.to.is_some());
            if !complete {
                e.value = Some(DateRange {
                    from: Some(today),
                    to: Some(today),
                });
            }
        }
        Element::Nested(e) => {
            fill_element(&mut e.key, today);
            for value in &mut e.value {
                fill_element(value, today);
            }
        }
        Element::Unknown => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::{DateElement, NestedElement, StringElement, StringListElement};
    use crate::model::section::Section;
    use crate::model::style::Style;

    fn template(elements: Vec<Element>) -> Template {
        Template {
            id: None,
            title: "Profile".to_string(),
            sections: vec![Section {
                title: "General".to_string(),
                elements,
                show_title: true,
                style: None,
                identifier: Some("s1".to_string()),
            }],
            style: Style {
                font_type: "Arial".to_string(),
                font_size: 11,
                heading_size: 14,
                primary_color: "000000".to_string(),
                secondary_color: "ffffff".to_string(),
                bold_keys: false,
            },
            header: None,
            footer: None,
            created_by_user: None,
            modified_by_user: None,
            created_date: None,
            last_modified_date: None,
        }
    }

    #[test]
    fn fills_empty_values_of_every_kind() {
        let mut template = template(vec![
            Element::String(StringElement::default()),
            Element::StringList(StringListElement {
                key: String::new(),
                value: Vec::new(),
                required: false,
                unique: true,
                identifier: None,
            }),
            Element::Date(DateElement::default()),
            Element::Nested(NestedElement {
                key: Box::new(Element::String(StringElement::default())),
                value: vec![Element::Date(DateElement::default())],
                highlight_nested_keys: false,
                required: false,
                unique: true,
                identifier: None,
            }),
        ]);
        fill_examples(&mut template);

        let elements = &template.sections[0].elements;
        assert!(matches!(&elements[0], Element::String(e) if e.value.as_deref() == Some("Lorem ipsum")));
        assert!(matches!(&elements[1], Element::StringList(e) if e.value.len() == 7));
        assert!(matches!(&elements[2], Element::Date(e) if e.value.is_some()));
        let Element::Nested(nested) = &elements[3] else {
            panic!("expected nested element");
        };
        assert!(matches!(&*nested.key, Element::String(e) if e.value.is_some()));
        assert!(matches!(&nested.value[0], Element::Date(e) if e.value.is_some()));
    }

    #[test]
    fn existing_values_are_kept() {
        let mut template = template(vec![Element::String(StringElement {
            key: "Name".to_string(),
            value: Some("Jane".to_string()),
            required: false,
            unique: true,
            identifier: None,
        })]);
        fill_examples(&mut template);
        assert!(
            matches!(&template.sections[0].elements[0], Element::String(e) if e.value.as_deref() == Some("Jane"))
        );
    }
}
