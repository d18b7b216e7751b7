use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectTagsUseCase;
use crate::shared::query::distinct_tags;

pub struct GetProjectTagsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetProjectTagsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetProjectTagsUseCase for GetProjectTagsService<S>
where
    S: ContentStore,
{
    async fn execute(&self) -> Vec<String> {
        distinct_tags(self.store.projects())
    }
}
