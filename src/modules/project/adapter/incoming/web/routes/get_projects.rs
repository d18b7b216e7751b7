use std::collections::BTreeSet;

use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::domain::entities::ProjectTypeParseError;
use crate::modules::project::application::domain::{ProjectListFilter, ProjectListResult};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// `All`, `Success`, `Free Tool`, `Failed` or `Ongoing`. Defaults to `All`.
    #[serde(rename = "type")]
    #[param(example = "Free Tool")]
    pub project_type: Option<String>,

    /// Comma-separated; a project matches when it carries any of them.
    #[param(example = "Django,Stripe")]
    pub tags: Option<String>,

    /// Case-insensitive substring of title, description or any tag.
    pub search: Option<String>,
}

/// Splits `a, b,,c` into `{a, b, c}`.
pub fn parse_tag_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl TryFrom<GetProjectsQuery> for ProjectListFilter {
    type Error = ProjectTypeParseError;

    fn try_from(q: GetProjectsQuery) -> Result<Self, Self::Error> {
        let project_type = match q.project_type.as_deref() {
            Some(raw) if !raw.is_empty() => raw.parse()?,
            _ => Default::default(),
        };

        Ok(ProjectListFilter {
            project_type,
            tags: q.tags.as_deref().map(parse_tag_list).unwrap_or_default(),
            search: q.search.unwrap_or_default(),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Filters the portfolio by type, tags and free-text search. Order follows the
/// authored content.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Matching project cards", body = inline(SuccessResponse<ProjectListResult>)),
        (status = 400, description = "Unknown project type", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match ProjectListFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(e) => {
            debug!("Rejected project listing query: {}", e);
            return ApiResponse::failure(ErrorCode::InvalidProjectType, &e.to_string());
        }
    };

    ApiResponse::success(data.project.get_list.execute(filter).await)
}
