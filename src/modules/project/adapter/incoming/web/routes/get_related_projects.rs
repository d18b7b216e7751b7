use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::ProjectCardView;
use crate::modules::project::application::ports::incoming::use_cases::GetRelatedProjectsError;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// Related projects
///
/// The first two other projects, shown under a case study.
#[utoipa::path(
    get,
    path = "/api/projects/{id}/related",
    tag = "projects",
    params(("id" = String, Path, description = "Project id of the current case study")),
    responses(
        (status = 200, description = "Other project cards", body = inline(SuccessResponse<Vec<ProjectCardView>>)),
        (status = 404, description = "No project with that id", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}/related")]
pub async fn get_related_projects_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_related.execute(&project_id).await {
        Ok(related) => ApiResponse::success(related),

        Err(GetRelatedProjectsError::NotFound) => {
            debug!("Related projects requested for unknown project: {}", project_id);
            ApiResponse::failure(ErrorCode::ProjectNotFound, "Project not found")
        }
    }
}
