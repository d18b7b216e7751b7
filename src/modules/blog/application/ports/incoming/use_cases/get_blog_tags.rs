use async_trait::async_trait;

#[async_trait]
pub trait GetBlogTagsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<String>;
}
