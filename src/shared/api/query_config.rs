// src/shared/api/query_config.rs
use crate::shared::api::{ApiResponse, ErrorCode};
use actix_web::web::QueryConfig;

/// Malformed query strings answer with the standard envelope instead of
/// actix's plain-text 400.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::failure(ErrorCode::InvalidQuery, &message),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct LimitQuery {
        #[allow(dead_code)]
        limit: u32,
    }

    #[get("/probe")]
    async fn probe(_q: web::Query<LimitQuery>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_query_is_wrapped_in_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_query_config())
                .service(probe),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/probe?limit=not-a-number")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_QUERY");
    }
}
