use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::content::adapter::outgoing::StaticContentStore;
use crate::modules::content::application::ports::outgoing::ContentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    projects: usize,
    blog_posts: usize,
    milestones: usize,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reports what the content store is serving
#[get("/ready")]
pub async fn readiness(store: web::Data<StaticContentStore>) -> impl Responder {
    let body = ReadinessResponse {
        status: "ok",
        projects: store.projects().len(),
        blog_posts: store.blog_posts().len(),
        milestones: store.milestones().len(),
    };

    if body.projects == 0 {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            ..body
        })
    } else {
        HttpResponse::Ok().json(body)
    }
}
