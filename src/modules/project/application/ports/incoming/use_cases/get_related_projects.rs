use async_trait::async_trait;

use crate::modules::project::application::domain::ProjectCardView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetRelatedProjectsError {
    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait GetRelatedProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectCardView>, GetRelatedProjectsError>;
}
