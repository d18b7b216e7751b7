use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::domain::ProjectTypeStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project counts per type
#[utoipa::path(
    get,
    path = "/api/projects/stats",
    tag = "projects",
    responses(
        (status = 200, description = "Counts per project type", body = inline(SuccessResponse<ProjectTypeStats>)),
    )
)]
#[get("/api/projects/stats")]
pub async fn get_project_stats_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_stats.execute().await)
}
