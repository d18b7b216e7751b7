use std::sync::Arc;

use tracing::info;

use crate::modules::content::adapter::outgoing::portfolio_snapshot;
use crate::modules::content::application::domain::entities::{
    BlogPost, Milestone, PersonalInfo, Project,
};
use crate::modules::content::application::domain::{ContentError, ContentSnapshot};
use crate::modules::content::application::ports::outgoing::ContentStore;

/// Compiled-in content, validated once and shared read-only afterwards.
/// Cloning only bumps a reference count.
#[derive(Debug, Clone)]
pub struct StaticContentStore {
    snapshot: Arc<ContentSnapshot>,
}

impl StaticContentStore {
    pub fn new(snapshot: ContentSnapshot) -> Result<Self, ContentError> {
        snapshot.validate()?;
        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }

    /// The authored portfolio content.
    pub fn load() -> Result<Self, ContentError> {
        let store = Self::new(portfolio_snapshot())?;
        info!(
            projects = store.snapshot.projects.len(),
            blog_posts = store.snapshot.blog_posts.len(),
            milestones = store.snapshot.milestones.len(),
            "Content store loaded"
        );
        Ok(store)
    }
}

impl ContentStore for StaticContentStore {
    fn projects(&self) -> &[Project] {
        &self.snapshot.projects
    }

    fn blog_posts(&self) -> &[BlogPost] {
        &self.snapshot.blog_posts
    }

    fn milestones(&self) -> &[Milestone] {
        &self.snapshot.milestones
    }

    fn personal_info(&self) -> &PersonalInfo {
        &self.snapshot.personal_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::entities::ProjectType;
    use crate::shared::query::{distinct_tags, find_by_id, first_featured};
    use crate::tests::support::content_fixtures::sample_snapshot;

    #[test]
    fn authored_content_passes_validation() {
        let store = StaticContentStore::load();
        assert!(store.is_ok(), "seed content invalid: {:?}", store.err());
    }

    #[test]
    fn authored_content_keeps_authored_order() {
        let store = StaticContentStore::load().unwrap();

        assert_eq!(store.projects().len(), 13);
        assert_eq!(store.projects()[0].id, "Google-Maps-Company-scraper");
        assert_eq!(store.blog_posts().len(), 11);
        assert_eq!(store.blog_posts()[0].id, "seo-basics");
        assert_eq!(store.milestones().len(), 15);
        assert_eq!(store.personal_info().total_users, 124);
    }

    #[test]
    fn authored_content_first_featured_post_is_seo_basics() {
        let store = StaticContentStore::load().unwrap();
        let featured = first_featured(store.blog_posts()).map(|p| p.id.as_str());

        assert_eq!(featured, Some("seo-basics"));
    }

    #[test]
    fn authored_content_has_no_success_projects_yet() {
        let store = StaticContentStore::load().unwrap();
        let successes = store
            .projects()
            .iter()
            .filter(|p| p.project_type == ProjectType::Success)
            .count();

        assert_eq!(successes, 0);
    }

    #[test]
    fn authored_blog_tags_start_with_first_post_tags() {
        let store = StaticContentStore::load().unwrap();
        let tags = distinct_tags(store.blog_posts());

        assert_eq!(&tags[..3], &["SEO", "SaaS", "Marketing"]);
        assert_eq!(tags.iter().filter(|t| *t == "SaaS").count(), 1);
    }

    #[test]
    fn lookup_miss_is_none() {
        let store = StaticContentStore::new(sample_snapshot()).unwrap();
        assert!(find_by_id(store.projects(), "does-not-exist").is_none());
    }

    #[test]
    fn invalid_snapshot_is_refused() {
        let mut snapshot = sample_snapshot();
        let dup = snapshot.blog_posts[0].clone();
        snapshot.blog_posts.push(dup);

        assert!(matches!(
            StaticContentStore::new(snapshot),
            Err(ContentError::DuplicateId { .. })
        ));
    }

    #[test]
    fn clones_share_the_same_snapshot() {
        let store = StaticContentStore::new(sample_snapshot()).unwrap();
        let clone = store.clone();

        assert!(Arc::ptr_eq(&store.snapshot, &clone.snapshot));
    }
}
