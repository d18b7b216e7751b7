use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::BlogPost;
use crate::shared::format::{format_calendar_date, leading_word_initials};

pub fn post_path(id: &str) -> String {
    format!("/blog/{id}")
}

fn read_time_label(minutes: u32) -> String {
    format!("{minutes} min read")
}

/// Listing card for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogPostCardView {
    #[schema(example = "seo-basics")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub published_at: String,
    #[schema(example = "January 10, 2024")]
    pub published_label: String,
    pub read_time: u32,
    #[schema(example = "6 min read")]
    pub read_time_label: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub initials: String,
    #[schema(example = "/blog/seo-basics")]
    pub path: String,
}

impl From<&BlogPost> for BlogPostCardView {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            published_at: post.published_at.clone(),
            published_label: format_calendar_date(&post.published_at),
            read_time: post.read_time,
            read_time_label: read_time_label(post.read_time),
            tags: post.tags.clone(),
            featured: post.featured,
            initials: leading_word_initials(&post.title),
            path: post_path(&post.id),
        }
    }
}

/// A single article, body included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogPostView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub published_at: String,
    pub published_label: String,
    pub read_time: u32,
    pub read_time_label: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl From<&BlogPost> for BlogPostView {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            content: post.content.clone(),
            published_at: post.published_at.clone(),
            published_label: format_calendar_date(&post.published_at),
            read_time: post.read_time,
            read_time_label: read_time_label(post.read_time),
            tags: post.tags.clone(),
            featured: post.featured,
        }
    }
}

/// Blog index. `featured` is only set when no filter is active, and that post
/// is then left out of `posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogListing {
    pub featured: Option<BlogPostCardView>,
    pub posts: Vec<BlogPostCardView>,
    /// Posts matching the filter, featured one included.
    pub matched: usize,
    pub total: usize,
    pub filters_active: bool,
}
