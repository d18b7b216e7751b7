use async_trait::async_trait;

use crate::modules::blog::application::domain::BlogPostView;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetSinglePostError, GetSinglePostUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::shared::query::find_by_id;

pub struct GetSinglePostService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetSinglePostService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetSinglePostUseCase for GetSinglePostService<S>
where
    S: ContentStore,
{
    async fn execute(&self, post_id: &str) -> Result<BlogPostView, GetSinglePostError> {
        find_by_id(self.store.blog_posts(), post_id)
            .map(BlogPostView::from)
            .ok_or(GetSinglePostError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::sample_store;

    #[tokio::test]
    async fn execute_success() {
        let service = GetSinglePostService::new(sample_store());

        let post = service.execute("hosting").await.unwrap();

        assert_eq!(post.title, "Cheap Hosting");
        assert_eq!(post.content, "Cheap Hosting content");
    }

    #[tokio::test]
    async fn execute_maps_missing_id_to_not_found() {
        let service = GetSinglePostService::new(sample_store());

        assert_eq!(
            service.execute("missing").await,
            Err(GetSinglePostError::NotFound)
        );
    }
}
