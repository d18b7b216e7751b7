use async_trait::async_trait;

use crate::modules::blog::application::domain::BlogPostView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSinglePostError {
    #[error("Post not found")]
    NotFound,
}

#[async_trait]
pub trait GetSinglePostUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> Result<BlogPostView, GetSinglePostError>;
}
