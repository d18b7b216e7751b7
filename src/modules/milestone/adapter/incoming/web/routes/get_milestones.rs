use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::milestone::application::domain::MilestoneView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Journey timeline
#[utoipa::path(
    get,
    path = "/api/milestones",
    tag = "milestones",
    responses(
        (status = 200, description = "Milestones in authored order", body = inline(SuccessResponse<Vec<MilestoneView>>)),
    )
)]
#[get("/api/milestones")]
pub async fn get_milestones_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_milestones_use_case.execute().await)
}
