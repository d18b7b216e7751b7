use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::project::application::domain::ProjectCardView;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetRelatedProjectsError, GetRelatedProjectsUseCase,
};
use crate::shared::query::find_by_id;

pub const RELATED_PROJECT_LIMIT: usize = 2;

pub struct GetRelatedProjectsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetRelatedProjectsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetRelatedProjectsUseCase for GetRelatedProjectsService<S>
where
    S: ContentStore,
{
    async fn execute(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectCardView>, GetRelatedProjectsError> {
        let projects = self.store.projects();
        if find_by_id(projects, project_id).is_none() {
            return Err(GetRelatedProjectsError::NotFound);
        }

        Ok(projects
            .iter()
            .filter(|p| p.id != project_id)
            .take(RELATED_PROJECT_LIMIT)
            .map(ProjectCardView::from)
            .collect())
    }
}
