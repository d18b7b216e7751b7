use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::blog::application::domain::{BlogListing, BlogPostCardView, BlogPostView};
use crate::modules::content::application::domain::entities::{
    Duration, Links, Metrics, MilestoneType, ProjectStatus, ProjectType, TechStack,
};
use crate::modules::milestone::application::domain::MilestoneView;
use crate::modules::profile::application::domain::{ProfileStat, ProfileView};
use crate::modules::project::application::domain::{
    ProjectCardView, ProjectDetailView, ProjectListResult, ProjectTypeStats, SeoMeta,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Showcase API",
        version = "1.0.0",
        description = "Read-only API over the portfolio projects, blog posts, milestones and profile",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_tags_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_stats_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_related_projects_handler,

        // Blog endpoints
        crate::modules::blog::adapter::incoming::web::routes::get_blog_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_blog_tags_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_single_post_handler,

        // Timeline and profile
        crate::modules::milestone::adapter::incoming::web::routes::get_milestones_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_profile_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Content records
            ProjectType,
            ProjectStatus,
            Duration,
            TechStack,
            Metrics,
            Links,
            MilestoneType,

            // Views
            ProjectCardView,
            ProjectDetailView,
            SeoMeta,
            ProjectTypeStats,
            ProjectListResult,
            BlogPostCardView,
            BlogPostView,
            BlogListing,
            MilestoneView,
            ProfileView,
            ProfileStat
        )
    ),
    tags(
        (name = "projects", description = "Portfolio project listing and case studies"),
        (name = "blog", description = "Blog listing and posts"),
        (name = "milestones", description = "Journey timeline"),
        (name = "profile", description = "Owner profile and headline stats"),
    )
)]
pub struct ApiDoc;
