use async_trait::async_trait;

/// Every distinct project tag, in first-seen order.
#[async_trait]
pub trait GetProjectTagsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<String>;
}
