mod get_blog_posts;
mod get_blog_tags;
mod get_single_post;

pub use get_blog_posts::GetBlogPostsUseCase;
pub use get_blog_tags::GetBlogTagsUseCase;
pub use get_single_post::{GetSinglePostError, GetSinglePostUseCase};
