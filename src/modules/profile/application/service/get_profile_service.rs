use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::modules::profile::application::domain::ProfileView;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;

pub struct GetProfileService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetProfileService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetProfileUseCase for GetProfileService<S>
where
    S: ContentStore,
{
    async fn execute(&self) -> ProfileView {
        ProfileView::from(self.store.personal_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::StaticContentStore;

    #[tokio::test]
    async fn authored_profile_stats() {
        let service = GetProfileService::new(StaticContentStore::load().unwrap());

        let profile = service.execute().await;

        let values: Vec<&str> = profile.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["$0K", "0.1K", "13", "2"]);
        assert_eq!(profile.social.keys().collect::<Vec<_>>(), vec!["github"]);
    }
}
