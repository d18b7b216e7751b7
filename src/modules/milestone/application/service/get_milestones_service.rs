use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::milestone::application::domain::MilestoneView;
use crate::modules::milestone::application::ports::incoming::use_cases::GetMilestonesUseCase;

pub struct GetMilestonesService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetMilestonesService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetMilestonesUseCase for GetMilestonesService<S>
where
    S: ContentStore,
{
    async fn execute(&self) -> Vec<MilestoneView> {
        self.store
            .milestones()
            .iter()
            .map(MilestoneView::from)
            .collect()
    }
}
