pub mod blog;
pub mod content;
pub mod milestone;
pub mod profile;
pub mod project;
