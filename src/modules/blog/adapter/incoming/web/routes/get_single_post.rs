use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::domain::BlogPostView;
use crate::modules::blog::application::ports::incoming::use_cases::GetSinglePostError;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// Get a blog post
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "blog",
    params(("id" = String, Path, description = "Post id", example = "seo-basics")),
    responses(
        (status = 200, description = "The post", body = inline(SuccessResponse<BlogPostView>)),
        (status = 404, description = "No post with that id", body = ErrorResponse),
    )
)]
#[get("/api/blog/{id}")]
pub async fn get_single_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.get_single.execute(&post_id).await {
        Ok(post) => ApiResponse::success(post),

        Err(GetSinglePostError::NotFound) => {
            debug!("Blog post not found: {}", post_id);
            ApiResponse::failure(ErrorCode::PostNotFound, "Post not found")
        }
    }
}
