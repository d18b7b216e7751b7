use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::project::application::domain::{
    ProjectCardView, ProjectListFilter, ProjectListResult,
};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::shared::query::filter;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetProjectsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetProjectsUseCase for GetProjectsService<S>
where
    S: ContentStore,
{
    async fn execute(&self, list_filter: ProjectListFilter) -> ProjectListResult {
        let projects = self.store.projects();
        let items: Vec<ProjectCardView> = filter(projects, &list_filter.predicate())
            .into_iter()
            .map(ProjectCardView::from)
            .collect();

        ProjectListResult {
            matched: items.len(),
            total: projects.len(),
            filters_active: list_filter.is_active(),
            items,
        }
    }
}
