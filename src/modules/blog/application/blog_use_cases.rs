use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsUseCase, GetBlogTagsUseCase, GetSinglePostUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_list: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSinglePostUseCase + Send + Sync>,
    pub get_tags: Arc<dyn GetBlogTagsUseCase + Send + Sync>,
}
