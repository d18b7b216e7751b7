use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::domain::ProjectCardView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Home page showcase
///
/// The first three projects of type Success or Free Tool.
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Showcased project cards", body = inline(SuccessResponse<Vec<ProjectCardView>>)),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_featured.execute().await)
}
