mod get_featured_projects;
mod get_project_stats;
mod get_project_tags;
mod get_projects;
mod get_related_projects;
mod get_single_project;

pub use get_featured_projects::GetFeaturedProjectsUseCase;
pub use get_project_stats::GetProjectStatsUseCase;
pub use get_project_tags::GetProjectTagsUseCase;
pub use get_projects::GetProjectsUseCase;
pub use get_related_projects::{GetRelatedProjectsError, GetRelatedProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
