use crate::modules::content::application::domain::entities::BlogPost;
use crate::shared::query::{contains_ignore_case, Predicate};

/// Caller-owned filter state for the blog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListFilter {
    /// Exact tag membership; `None` matches every post.
    pub tag: Option<String>,
    /// Case-insensitive over title and description only. Empty matches all.
    pub search: String,
}

impl BlogListFilter {
    pub fn is_active(&self) -> bool {
        self.tag.is_some() || !self.search.is_empty()
    }

    pub fn predicate(&self) -> BlogPostPredicate<'_> {
        BlogPostPredicate {
            tag: self.tag.as_deref(),
            needle: self.search.to_lowercase(),
        }
    }
}

#[derive(Debug)]
pub struct BlogPostPredicate<'f> {
    tag: Option<&'f str>,
    needle: String,
}

impl Predicate<BlogPost> for BlogPostPredicate<'_> {
    fn matches(&self, post: &BlogPost) -> bool {
        let matches_search = self.needle.is_empty()
            || contains_ignore_case(&post.title, &self.needle)
            || contains_ignore_case(&post.description, &self.needle);
        let matches_tag = self
            .tag
            .map_or(true, |wanted| post.tags.iter().any(|t| t == wanted));

        matches_search && matches_tag
    }
}
