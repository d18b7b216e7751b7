use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::shared::query::{Featured, Identified, Tagged};

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProjectType {
    Success,
    #[serde(rename = "Free Tool", alias = "FreeTool")]
    FreeTool,
    Failed,
    Ongoing,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Success => "Success",
            ProjectType::FreeTool => "Free Tool",
            ProjectType::Failed => "Failed",
            ProjectType::Ongoing => "Ongoing",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project type: {0}")]
pub struct ProjectTypeParseError(pub String);

impl FromStr for ProjectType {
    type Err = ProjectTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(ProjectType::Success),
            "Free Tool" | "FreeTool" => Ok(ProjectType::FreeTool),
            "Failed" => Ok(ProjectType::Failed),
            "Ongoing" => Ok(ProjectType::Ongoing),
            other => Err(ProjectTypeParseError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
    Failed,
    Completed,
}

/// `start`/`end` are `YYYY-MM`; a missing `end` means the project is ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Duration {
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl Duration {
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Metrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_study: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    pub duration: Duration,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arr_milestone: Option<String>,
    pub lessons: Vec<String>,
    pub tech_stack: TechStack,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Tagged for Project {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    /// `YYYY-MM-DD`
    pub published_at: String,
    /// Minutes, always positive.
    pub read_time: u32,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Identified for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Tagged for BlogPost {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Featured for BlogPost {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

//
// ──────────────────────────────────────────────────────────
// Timeline
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneType {
    Launch,
    Revenue,
    Users,
    Feature,
    Learning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Milestone {
    pub id: String,
    /// `YYYY-MM`
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Identified for Milestone {
    fn id(&self) -> &str {
        &self.id
    }
}

//
// ──────────────────────────────────────────────────────────
// Personal info
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub current_mrr: u64,
    pub total_users: u64,
    pub products_built: u32,
    pub years_building: u32,
    pub location: String,
    pub email: String,
    /// Platform -> URL. An empty URL means the platform is not provided.
    pub social: BTreeMap<String, String>,
}

impl PersonalInfo {
    /// Social links that actually point somewhere.
    pub fn provided_social(&self) -> BTreeMap<String, String> {
        self.social
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| (platform.clone(), url.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_parses_display_and_enum_names() {
        assert_eq!("Free Tool".parse::<ProjectType>(), Ok(ProjectType::FreeTool));
        assert_eq!("FreeTool".parse::<ProjectType>(), Ok(ProjectType::FreeTool));
        assert_eq!("Failed".parse::<ProjectType>(), Ok(ProjectType::Failed));
    }

    #[test]
    fn project_type_parse_is_case_sensitive() {
        assert_eq!(
            "failed".parse::<ProjectType>(),
            Err(ProjectTypeParseError("failed".to_string()))
        );
    }

    #[test]
    fn project_type_serializes_with_space() {
        let json = serde_json::to_string(&ProjectType::FreeTool).unwrap();
        assert_eq!(json, "\"Free Tool\"");

        let back: ProjectType = serde_json::from_str("\"FreeTool\"").unwrap();
        assert_eq!(back, ProjectType::FreeTool);
    }

    #[test]
    fn duration_without_end_is_ongoing() {
        let d = Duration {
            start: "2022-06".to_string(),
            end: None,
        };
        assert!(d.is_ongoing());
    }

    #[test]
    fn provided_social_skips_empty_urls() {
        let info = PersonalInfo {
            name: "Gin".to_string(),
            title: "Founder".to_string(),
            bio: String::new(),
            current_mrr: 0,
            total_users: 0,
            products_built: 0,
            years_building: 0,
            location: String::new(),
            email: String::new(),
            social: BTreeMap::from([
                ("github".to_string(), "https://github.com/xgino".to_string()),
                ("twitter".to_string(), String::new()),
            ]),
        };

        let social = info.provided_social();
        assert_eq!(social.len(), 1);
        assert!(social.contains_key("github"));
    }
}
