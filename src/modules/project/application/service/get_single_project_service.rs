use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::project::application::domain::ProjectDetailView;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::shared::query::find_by_id;

pub struct GetSingleProjectService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetSingleProjectService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetSingleProjectUseCase for GetSingleProjectService<S>
where
    S: ContentStore,
{
    async fn execute(&self, project_id: &str) -> Result<ProjectDetailView, GetSingleProjectError> {
        find_by_id(self.store.projects(), project_id)
            .map(ProjectDetailView::from)
            .ok_or(GetSingleProjectError::NotFound)
    }
}
