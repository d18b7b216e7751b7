use async_trait::async_trait;

use crate::modules::content::application::domain::entities::ProjectType;
use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::project::application::domain::ProjectCardView;
use crate::modules::project::application::ports::incoming::use_cases::GetFeaturedProjectsUseCase;

pub const FEATURED_PROJECT_LIMIT: usize = 3;

pub struct GetFeaturedProjectsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetFeaturedProjectsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<S>
where
    S: ContentStore,
{
    /// Success and Free Tool projects, first three in store order.
    async fn execute(&self) -> Vec<ProjectCardView> {
        self.store
            .projects()
            .iter()
            .filter(|p| matches!(p.project_type, ProjectType::Success | ProjectType::FreeTool))
            .take(FEATURED_PROJECT_LIMIT)
            .map(ProjectCardView::from)
            .collect()
    }
}
