use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::{
    Links, Metrics, Project, ProjectStatus, ProjectType, TechStack,
};
use crate::shared::format::{excerpt, format_date_range, initials, MonthStyle};

pub const CARD_VISIBLE_TAGS: usize = 4;
pub const SEO_DESCRIPTION_CHARS: usize = 160;
pub const SITE_NAME: &str = "AxoLab";

pub fn case_study_path(id: &str) -> String {
    format!("/case-study/{id}")
}

/// Listing card for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectCardView {
    #[schema(example = "QR-Generator")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arr_milestone: Option<String>,
    #[schema(example = "QR")]
    pub initials: String,
    #[schema(example = "Jul 2024 → May 2025")]
    pub duration_label: String,
    /// At most the first four tags.
    pub tags: Vec<String>,
    /// Tags left off the card, shown as "+N more".
    pub hidden_tag_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[schema(example = "/case-study/QR-Generator")]
    pub case_study_path: String,
}

impl From<&Project> for ProjectCardView {
    fn from(project: &Project) -> Self {
        let visible: Vec<String> = project
            .tags
            .iter()
            .take(CARD_VISIBLE_TAGS)
            .cloned()
            .collect();

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            project_type: project.project_type,
            arr_milestone: project.arr_milestone.clone(),
            initials: initials(&project.title),
            duration_label: format_date_range(&project.duration, MonthStyle::Short),
            hidden_tag_count: project.tags.len() - visible.len(),
            tags: visible,
            metrics: project.metrics.clone(),
            live_url: project.links.as_ref().and_then(|l| l.live.clone()),
            case_study_path: case_study_path(&project.id),
        }
    }
}

/// Full case study page for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectDetailView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arr_milestone: Option<String>,
    pub initials: String,
    #[schema(example = "July 2024 → May 2025")]
    pub duration_label: String,
    pub tags: Vec<String>,
    pub tech_stack: TechStack,
    pub lessons: Vec<String>,
    /// Empty when there are no lessons.
    pub lessons_heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    pub seo: SeoMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl From<&Project> for ProjectDetailView {
    fn from(project: &Project) -> Self {
        let lessons_heading = match (project.lessons.is_empty(), project.project_type) {
            (true, _) => String::new(),
            (false, ProjectType::Failed) => "Lessons from Failure".to_string(),
            (false, _) => "Key Lessons Learned".to_string(),
        };

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            long_description: project.long_description.clone(),
            project_type: project.project_type,
            status: project.status,
            arr_milestone: project.arr_milestone.clone(),
            initials: initials(&project.title),
            duration_label: format_date_range(&project.duration, MonthStyle::Long),
            tags: project.tags.clone(),
            tech_stack: project.tech_stack.clone(),
            lessons: project.lessons.clone(),
            lessons_heading,
            metrics: project.metrics.clone(),
            links: project.links.clone(),
            seo: SeoMeta {
                title: format!("{} Case Study - {}", project.title, SITE_NAME),
                description: excerpt(&project.long_description, SEO_DESCRIPTION_CHARS),
                keywords: format!("{}, {}, case study, SaaS", project.title, project.tags.join(", ")),
            },
        }
    }
}

/// Project counts per type, as shown above the portfolio listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectTypeStats {
    pub success: usize,
    pub free_tool: usize,
    pub ongoing: usize,
    pub failed: usize,
    pub total: usize,
}

impl ProjectTypeStats {
    pub fn tally(projects: &[Project]) -> Self {
        projects.iter().fold(Self::default(), |mut stats, project| {
            match project.project_type {
                ProjectType::Success => stats.success += 1,
                ProjectType::FreeTool => stats.free_tool += 1,
                ProjectType::Ongoing => stats.ongoing += 1,
                ProjectType::Failed => stats.failed += 1,
            }
            stats.total += 1;
            stats
        })
    }
}

/// One page of filtered project cards. `matched` of `total` projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectListResult {
    pub items: Vec<ProjectCardView>,
    pub matched: usize,
    pub total: usize,
    /// True when any of type, tags or search narrows the listing.
    pub filters_active: bool,
}
