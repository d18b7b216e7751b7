use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List project tags
///
/// Every distinct tag across all projects, in the order first used.
#[utoipa::path(
    get,
    path = "/api/projects/tags",
    tag = "projects",
    responses(
        (status = 200, description = "Distinct project tags", body = inline(SuccessResponse<Vec<String>>)),
    )
)]
#[get("/api/projects/tags")]
pub async fn get_project_tags_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_tags.execute().await)
}
