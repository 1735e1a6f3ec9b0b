use serde::{Deserialize, Serialize};

use crate::model::template::Template;

/// One user's filled-in instance of the template.
///
/// A profile document is a structural superset of a template document: the
/// same sections and elements, carrying user values. At most one profile
/// exists per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub document: Template,
    /// The owning user. Managed by the store, never exposed on the wire.
    #[serde(skip)]
    pub user_id: String,
}

impl Profile {
    /// Creates an empty profile with the structure of the given template.
    /// Record id and audit fields are not taken over; the caller decides
    /// whose identity the new profile carries.
    pub fn from_template(template: &Template) -> Self {
        Profile {
            document: Template {
                id: None,
                title: template.title.clone(),
                sections: template.sections.clone(),
                style: template.style.clone(),
                header: template.header.clone(),
                footer: template.footer.clone(),
                created_by_user: None,
                modified_by_user: None,
                created_date: None,
                last_modified_date: None,
            },
            user_id: String::new(),
        }
    }
}
