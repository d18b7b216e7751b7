mod get_blog_posts_service;
mod get_blog_tags_service;
mod get_single_post_service;

pub use get_blog_posts_service::GetBlogPostsService;
pub use get_blog_tags_service::GetBlogTagsService;
pub use get_single_post_service::GetSinglePostService;
