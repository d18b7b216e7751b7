use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::domain::entities::PersonalInfo;
use crate::shared::format::abbreviate_thousands;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileStat {
    #[schema(example = "Monthly MRR")]
    pub label: String,
    #[schema(example = "$15K")]
    pub value: String,
}

impl ProfileStat {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// About page record with the headline numbers already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileView {
    pub name: String,
    pub first_name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[schema(example = "mailto:gin@example.com")]
    pub contact_url: String,
    /// Only platforms with a non-empty URL.
    pub social: BTreeMap<String, String>,
    pub stats: Vec<ProfileStat>,
}

impl From<&PersonalInfo> for ProfileView {
    fn from(info: &PersonalInfo) -> Self {
        Self {
            name: info.name.clone(),
            first_name: info
                .name
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string(),
            title: info.title.clone(),
            bio: info.bio.clone(),
            location: info.location.clone(),
            email: info.email.clone(),
            contact_url: format!("mailto:{}", info.email),
            social: info.provided_social(),
            stats: vec![
                ProfileStat::new(
                    "Monthly MRR",
                    format!("${}", abbreviate_thousands(info.current_mrr, 0)),
                ),
                ProfileStat::new("Total Users", abbreviate_thousands(info.total_users, 1)),
                ProfileStat::new("Products Built", info.products_built.to_string()),
                ProfileStat::new("Years Building", info.years_building.to_string()),
            ],
        }
    }
}
