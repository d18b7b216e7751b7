// src/api/schemas.rs
//
// Documentation-only mirrors of the `ApiResponse` envelope. Handlers reference
// them from `#[utoipa::path]` so every route shows the same wrapper.
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope around a successful read
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    /// The requested view (card list, case study, post, timeline or profile)
    pub data: T,
}

/// Envelope around a lookup miss or a rejected query
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `PROJECT_NOT_FOUND`, `POST_NOT_FOUND`, `INVALID_PROJECT_TYPE`, `INVALID_QUERY`
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Project not found")]
    pub message: String,
}
