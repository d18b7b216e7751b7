pub mod entities;
mod validation;

pub use validation::{ContentError, ContentSnapshot};
