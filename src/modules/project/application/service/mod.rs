mod get_featured_projects_service;
mod get_project_stats_service;
mod get_project_tags_service;
mod get_projects_service;
mod get_related_projects_service;
mod get_single_project_service;

pub use get_featured_projects_service::{GetFeaturedProjectsService, FEATURED_PROJECT_LIMIT};
pub use get_project_stats_service::GetProjectStatsService;
pub use get_project_tags_service::GetProjectTagsService;
pub use get_projects_service::GetProjectsService;
pub use get_related_projects_service::{GetRelatedProjectsService, RELATED_PROJECT_LIMIT};
pub use get_single_project_service::GetSingleProjectService;
