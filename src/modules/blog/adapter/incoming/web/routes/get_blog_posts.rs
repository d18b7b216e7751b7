use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::SuccessResponse;
use crate::modules::blog::application::domain::{BlogListFilter, BlogListing};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetBlogPostsQuery {
    /// Exact tag; blank means no tag filter.
    #[param(example = "SEO")]
    pub tag: Option<String>,

    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
}

impl From<GetBlogPostsQuery> for BlogListFilter {
    fn from(q: GetBlogPostsQuery) -> Self {
        BlogListFilter {
            tag: q.tag.filter(|t| !t.is_empty()),
            search: q.search.unwrap_or_default(),
        }
    }
}

/// Blog index
///
/// Filtered posts. On the unfiltered index the first featured post is returned
/// separately and left out of `posts`.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    params(GetBlogPostsQuery),
    responses(
        (status = 200, description = "Blog listing", body = inline(SuccessResponse<BlogListing>)),
    )
)]
#[get("/api/blog")]
pub async fn get_blog_posts_handler(
    query: web::Query<GetBlogPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = BlogListFilter::from(query.into_inner());
    ApiResponse::success(data.blog.get_list.execute(filter).await)
}
