mod get_featured_projects;
mod get_project_stats;
mod get_project_tags;
mod get_projects;
mod get_related_projects;
mod get_single_project;

pub use get_featured_projects::*;
pub use get_project_stats::*;
pub use get_project_tags::*;
pub use get_projects::*;
pub use get_related_projects::*;
pub use get_single_project::*;
