use async_trait::async_trait;

use crate::modules::project::application::domain::ProjectDetailView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<ProjectDetailView, GetSingleProjectError>;
}
