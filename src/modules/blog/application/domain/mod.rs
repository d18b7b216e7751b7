pub mod filter;
pub mod views;

pub use filter::{BlogListFilter, BlogPostPredicate};
pub use views::{BlogListing, BlogPostCardView, BlogPostView};
