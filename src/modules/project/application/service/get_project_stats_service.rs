use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::project::application::domain::ProjectTypeStats;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectStatsUseCase;

pub struct GetProjectStatsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetProjectStatsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetProjectStatsUseCase for GetProjectStatsService<S>
where
    S: ContentStore,
{
    async fn execute(&self) -> ProjectTypeStats {
        ProjectTypeStats::tally(self.store.projects())
    }
}
