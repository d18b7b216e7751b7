use std::sync::Arc;

use actix_web::web;

use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::incoming::use_cases::GetSinglePostUseCase;
use crate::modules::content::adapter::outgoing::StaticContentStore;
use crate::modules::milestone::application::ports::incoming::use_cases::GetMilestonesUseCase;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectStatsUseCase, GetProjectTagsUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::content_fixtures::sample_store;
use crate::AppState;

/// Builds an `AppState` whose use cases run against the fixture store unless
/// a test swaps one out.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    blog: BlogUseCases,
    get_milestones: Arc<dyn GetMilestonesUseCase + Send + Sync>,
    get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
}

impl TestAppStateBuilder {
    pub fn with_store(store: StaticContentStore) -> Self {
        let state = AppState::from_store(store);
        Self {
            project: state.project,
            blog: state.blog,
            get_milestones: state.get_milestones_use_case,
            get_profile: state.get_profile_use_case,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::with_store(sample_store())
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_project_tags(mut self, uc: impl GetProjectTagsUseCase + 'static) -> Self {
        self.project.get_tags = Arc::new(uc);
        self
    }

    pub fn with_get_project_stats(mut self, uc: impl GetProjectStatsUseCase + 'static) -> Self {
        self.project.get_stats = Arc::new(uc);
        self
    }

    pub fn with_get_single_post(mut self, uc: impl GetSinglePostUseCase + 'static) -> Self {
        self.blog.get_single = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            blog: self.blog,
            get_milestones_use_case: self.get_milestones,
            get_profile_use_case: self.get_profile,
        })
    }
}
