mod get_blog_posts;
mod get_blog_tags;
mod get_single_post;

pub use get_blog_posts::*;
pub use get_blog_tags::*;
pub use get_single_post::*;
