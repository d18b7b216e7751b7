use async_trait::async_trait;

use crate::modules::project::application::domain::ProjectTypeStats;

#[async_trait]
pub trait GetProjectStatsUseCase: Send + Sync {
    async fn execute(&self) -> ProjectTypeStats;
}
