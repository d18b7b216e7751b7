use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::profile::application::domain::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Author profile
///
/// Personal info plus the formatted headline stats.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<ProfileView>)),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_profile_use_case.execute().await)
}
