use async_trait::async_trait;

use crate::modules::milestone::application::domain::MilestoneView;

/// The timeline, in authored order.
#[async_trait]
pub trait GetMilestonesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<MilestoneView>;
}
