use async_trait::async_trait;

use crate::modules::project::application::domain::ProjectTypeStats;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectStatsUseCase, GetProjectTagsUseCase,
};

/// Returns the given tags regardless of content.
#[derive(Default, Clone)]
pub struct FixedProjectTags(pub Vec<String>);

#[async_trait]
impl GetProjectTagsUseCase for FixedProjectTags {
    async fn execute(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[derive(Default, Clone)]
pub struct FixedProjectStats(pub ProjectTypeStats);

#[async_trait]
impl GetProjectStatsUseCase for FixedProjectStats {
    async fn execute(&self) -> ProjectTypeStats {
        self.0
    }
}
