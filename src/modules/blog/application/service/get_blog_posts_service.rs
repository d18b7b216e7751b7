use async_trait::async_trait;

use crate::modules::blog::application::domain::{BlogListFilter, BlogListing, BlogPostCardView};
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogPostsUseCase;
use crate::modules::content::application::ports::outgoing::ContentStore;
use crate::shared::query::{filter, first_featured};

pub struct GetBlogPostsService<S>
where
    S: ContentStore,
{
    store: S,
}

impl<S> GetBlogPostsService<S>
where
    S: ContentStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetBlogPostsUseCase for GetBlogPostsService<S>
where
    S: ContentStore,
{
    async fn execute(&self, list_filter: BlogListFilter) -> BlogListing {
        let posts = self.store.blog_posts();
        let matched = filter(posts, &list_filter.predicate());

        // The featured slot only exists on the unfiltered index.
        let featured = if list_filter.is_active() {
            None
        } else {
            first_featured(posts)
        };

        let regular = matched
            .iter()
            .filter(|post| featured.map_or(true, |f| f.id != post.id))
            .map(|post| BlogPostCardView::from(*post))
            .collect();

        BlogListing {
            featured: featured.map(BlogPostCardView::from),
            posts: regular,
            matched: matched.len(),
            total: posts.len(),
            filters_active: list_filter.is_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::StaticContentStore;
    use crate::tests::support::content_fixtures::{sample_post, sample_snapshot, sample_store};

    fn ids(listing: &BlogListing) -> Vec<&str> {
        listing.posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn unfiltered_index_pulls_featured_out_of_the_list() {
        let service = GetBlogPostsService::new(sample_store());

        let listing = service.execute(BlogListFilter::default()).await;

        assert_eq!(listing.featured.as_ref().map(|p| p.id.as_str()), Some("seo-basics"));
        assert_eq!(ids(&listing), vec!["google-ads", "hosting"]);
        assert_eq!(listing.matched, 3);
        assert_eq!(listing.total, 3);
        assert!(!listing.filters_active);
    }

    #[tokio::test]
    async fn active_filter_hides_featured_slot_but_keeps_the_post() {
        let service = GetBlogPostsService::new(sample_store());

        let listing = service
            .execute(BlogListFilter {
                tag: Some("SaaS".to_string()),
                ..Default::default()
            })
            .await;

        assert!(listing.featured.is_none());
        assert_eq!(ids(&listing), vec!["seo-basics", "google-ads"]);
        assert!(listing.filters_active);
    }

    #[tokio::test]
    async fn only_the_first_featured_post_gets_the_slot() {
        let mut snapshot = sample_snapshot();
        snapshot.blog_posts = vec![
            sample_post("plain", "Plain", &[], false),
            sample_post("first", "First", &[], true),
            sample_post("second", "Second", &[], true),
        ];
        let service = GetBlogPostsService::new(StaticContentStore::new(snapshot).unwrap());

        let listing = service.execute(BlogListFilter::default()).await;

        assert_eq!(listing.featured.as_ref().map(|p| p.id.clone()), Some("first".to_string()));
        assert_eq!(ids(&listing), vec!["plain", "second"]);
    }

    #[tokio::test]
    async fn no_featured_post_leaves_the_slot_empty() {
        let mut snapshot = sample_snapshot();
        snapshot.blog_posts = vec![sample_post("plain", "Plain", &[], false)];
        let service = GetBlogPostsService::new(StaticContentStore::new(snapshot).unwrap());

        let listing = service.execute(BlogListFilter::default()).await;

        assert!(listing.featured.is_none());
        assert_eq!(ids(&listing), vec!["plain"]);
    }

    #[tokio::test]
    async fn search_with_no_hits_is_empty() {
        let service = GetBlogPostsService::new(sample_store());

        let listing = service
            .execute(BlogListFilter {
                search: "kubernetes".to_string(),
                ..Default::default()
            })
            .await;

        assert!(listing.featured.is_none());
        assert!(listing.posts.is_empty());
        assert_eq!(listing.matched, 0);
    }
}
