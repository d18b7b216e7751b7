pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::service::{
    GetBlogPostsService, GetBlogTagsService, GetSinglePostService,
};
use crate::modules::content::adapter::outgoing::StaticContentStore;
use crate::modules::milestone::application::ports::incoming::use_cases::GetMilestonesUseCase;
use crate::modules::milestone::application::service::GetMilestonesService;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;
use crate::modules::profile::application::service::GetProfileService;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    GetFeaturedProjectsService, GetProjectStatsService, GetProjectTagsService,
    GetProjectsService, GetRelatedProjectsService, GetSingleProjectService,
};
use crate::shared::api::custom_query_config;
use crate::shared::config::ServerConfig;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub blog: BlogUseCases,
    pub get_milestones_use_case: Arc<dyn GetMilestonesUseCase + Send + Sync>,
    pub get_profile_use_case: Arc<dyn GetProfileUseCase + Send + Sync>,
}

impl AppState {
    pub fn from_store(store: StaticContentStore) -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(GetProjectsService::new(store.clone())),
                get_single: Arc::new(GetSingleProjectService::new(store.clone())),
                get_tags: Arc::new(GetProjectTagsService::new(store.clone())),
                get_stats: Arc::new(GetProjectStatsService::new(store.clone())),
                get_featured: Arc::new(GetFeaturedProjectsService::new(store.clone())),
                get_related: Arc::new(GetRelatedProjectsService::new(store.clone())),
            },
            blog: BlogUseCases {
                get_list: Arc::new(GetBlogPostsService::new(store.clone())),
                get_single: Arc::new(GetSinglePostService::new(store.clone())),
                get_tags: Arc::new(GetBlogTagsService::new(store.clone())),
            },
            get_milestones_use_case: Arc::new(GetMilestonesService::new(store.clone())),
            get_profile_use_case: Arc::new(GetProfileService::new(store)),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    ServerConfig::load_dotenv();
    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let store = StaticContentStore::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let state = AppState::from_store(store.clone());
    let expose_docs = !config.is_production();
    let server_url = config.bind_address();
    info!(%server_url, environment = %config.environment, "Server run on");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(custom_query_config())
            .configure(init_routes);

        if expose_docs {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

/// Static segments are registered before the `{id}` routes that would
/// otherwise capture them.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_tags_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_stats_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
    );
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_related_projects_handler,
    );
    // Blog
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_posts_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_tags_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_single_post_handler);
    // Timeline and profile
    cfg.service(crate::modules::milestone::adapter::incoming::web::routes::get_milestones_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
