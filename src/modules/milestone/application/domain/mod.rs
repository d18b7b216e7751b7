use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::{Milestone, MilestoneType};
use crate::shared::format::{format_year_month, MonthStyle};

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MilestoneView {
    pub id: String,
    /// `YYYY-MM`
    pub date: String,
    #[schema(example = "Oct 2024")]
    pub date_label: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&Milestone> for MilestoneView {
    fn from(milestone: &Milestone) -> Self {
        Self {
            id: milestone.id.clone(),
            date: milestone.date.clone(),
            date_label: format_year_month(&milestone.date, MonthStyle::Short),
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            milestone_type: milestone.milestone_type,
            value: milestone.value.clone(),
        }
    }
}
