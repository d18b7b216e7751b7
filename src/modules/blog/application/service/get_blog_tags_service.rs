use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::GetBlogTagsUseCase;
use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::shared::query::distinct_tags;

pub struct GetBlogTagsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetBlogTagsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetBlogTagsUseCase for GetBlogTagsService<S>
where
    S: ContentStore,
{
    async fn execute(&self) -> Vec<String> {
        distinct_tags(self.store.blog_posts())
    }
}
