use async_trait::async_trait;

use crate::modules::profile::application::domain::ProfileView;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> ProfileView;
}
