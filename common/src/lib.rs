pub mod example;
pub mod identity;
pub mod merge;
pub mod model;
pub mod validate;
