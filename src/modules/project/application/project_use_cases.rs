use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectStatsUseCase, GetProjectTagsUseCase,
    GetProjectsUseCase, GetRelatedProjectsUseCase, GetSingleProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_tags: Arc<dyn GetProjectTagsUseCase + Send + Sync>,
    pub get_stats: Arc<dyn GetProjectStatsUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    pub get_related: Arc<dyn GetRelatedProjectsUseCase + Send + Sync>,
}
