use async_trait::async_trait;

use crate::modules::project::application::domain::ProjectCardView;

/// Home page showcase.
#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<ProjectCardView>;
}
