use std::collections::HashSet;

use crate::modules::content::application::domain::entities::{
    BlogPost, Milestone, PersonalInfo, Project,
};
use crate::shared::format::parse_year_month;
use crate::shared::query::Identified;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("Malformed {field} on {id}: expected YYYY-MM, got {value}")]
    MalformedYearMonth {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("Project {id} ends ({end}) before it starts ({start})")]
    InvertedDuration {
        id: String,
        start: String,
        end: String,
    },

    #[error("Blog post {0} has a zero read time")]
    ZeroReadTime(String),
}

/// The whole authored content set, as loaded at startup.
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub milestones: Vec<Milestone>,
    pub personal_info: PersonalInfo,
}

impl ContentSnapshot {
    pub fn validate(&self) -> Result<(), ContentError> {
        ensure_unique_ids("project", &self.projects)?;
        ensure_unique_ids("blog post", &self.blog_posts)?;
        ensure_unique_ids("milestone", &self.milestones)?;

        for project in &self.projects {
            validate_project_duration(project)?;
        }

        for post in &self.blog_posts {
            if post.read_time == 0 {
                return Err(ContentError::ZeroReadTime(post.id.clone()));
            }
        }

        for milestone in &self.milestones {
            require_year_month(&milestone.id, "date", &milestone.date)?;
        }

        Ok(())
    }
}

fn ensure_unique_ids<T: Identified>(
    collection: &'static str,
    items: &[T],
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(ContentError::DuplicateId {
                collection,
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

fn require_year_month(
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<chrono::NaiveDate, ContentError> {
    parse_year_month(value).ok_or_else(|| ContentError::MalformedYearMonth {
        id: id.to_string(),
        field,
        value: value.to_string(),
    })
}

fn validate_project_duration(project: &Project) -> Result<(), ContentError> {
    let start = require_year_month(&project.id, "duration.start", &project.duration.start)?;

    if let Some(end_raw) = project.duration.end.as_deref() {
        let end = require_year_month(&project.id, "duration.end", end_raw)?;
        if end < start {
            return Err(ContentError::InvertedDuration {
                id: project.id.clone(),
                start: project.duration.start.clone(),
                end: end_raw.to_string(),
            });
        }
    }

    Ok(())
}
