pub mod element;
pub mod profile;
pub mod section;
pub mod style;
pub mod template;

pub use element::{
    DateElement, DateRange, DateRangeElement, Element, NestedElement, StringElement,
    StringListElement,
};
pub use profile::Profile;
pub use section::Section;
pub use style::{Footer, Header, Style};
pub use template::Template;
