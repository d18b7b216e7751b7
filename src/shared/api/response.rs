// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Stable error codes a client can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ProjectNotFound,
    PostNotFound,
    InvalidProjectType,
    InvalidQuery,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::PostNotFound => "POST_NOT_FOUND",
            ErrorCode::InvalidProjectType => "INVALID_PROJECT_TYPE",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::ProjectNotFound | ErrorCode::PostNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidProjectType | ErrorCode::InvalidQuery => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn failure(code: ErrorCode, message: &str) -> HttpResponse {
        HttpResponse::build(code.status()).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.as_str().to_string(),
                message: message.to_string(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_omits_error_field() {
        let resp = ApiResponse::success(vec!["SEO", "SaaS"]);
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][1], "SaaS");
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn failure_uses_the_code_status_and_omits_data() {
        let resp = ApiResponse::failure(ErrorCode::PostNotFound, "Post not found");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Post not found");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn rejected_input_maps_to_bad_request() {
        assert_eq!(ErrorCode::InvalidProjectType.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidQuery.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ProjectNotFound.status(), StatusCode::NOT_FOUND);
    }
}
