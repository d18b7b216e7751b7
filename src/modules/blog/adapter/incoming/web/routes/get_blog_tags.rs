use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List blog tags
#[utoipa::path(
    get,
    path = "/api/blog/tags",
    tag = "blog",
    responses(
        (status = 200, description = "Distinct blog tags in first-seen order", body = inline(SuccessResponse<Vec<String>>)),
    )
)]
#[get("/api/blog/tags")]
pub async fn get_blog_tags_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog.get_tags.execute().await)
}
