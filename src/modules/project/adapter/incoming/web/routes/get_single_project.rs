use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::ProjectDetailView;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// Get a case study
///
/// Full detail for one project, looked up by its exact id.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id", example = "QR-Generator")),
    responses(
        (status = 200, description = "Case study", body = inline(SuccessResponse<ProjectDetailView>)),
        (status = 404, description = "No project with that id", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(&project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            debug!("Project not found: {}", project_id);
            ApiResponse::failure(ErrorCode::ProjectNotFound, "Project not found")
        }
    }
}
