use async_trait::async_trait;

use crate::modules::blog::application::domain::{BlogListFilter, BlogListing};

#[async_trait]
pub trait GetBlogPostsUseCase: Send + Sync {
    async fn execute(&self, filter: BlogListFilter) -> BlogListing;
}
