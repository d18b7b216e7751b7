use std::collections::BTreeMap;

use crate::modules::content::application::domain::entities::{
    BlogPost, Duration, Links, Metrics, Milestone, MilestoneType, PersonalInfo, Project,
    ProjectStatus, ProjectType, TechStack,
};
use crate::modules::content::application::domain::ContentSnapshot;
use crate::modules::content::adapter::outgoing::StaticContentStore;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_project(id: &str, title: &str, tags: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        long_description: format!("{} long description", title),
        tags: strings(tags),
        duration: Duration {
            start: "2024-07".to_string(),
            end: Some("2025-05".to_string()),
        },
        project_type: ProjectType::Ongoing,
        status: ProjectStatus::Active,
        arr_milestone: None,
        lessons: vec![],
        tech_stack: TechStack {
            frontend: strings(&["HTML"]),
            backend: strings(&["Django"]),
            database: strings(&["SQLite"]),
            tools: vec![],
        },
        metrics: Some(Metrics {
            users: Some(45),
            revenue: Some(0),
            growth: None,
        }),
        links: Some(Links {
            live: Some("https://example.com".to_string()),
            ..Links::default()
        }),
    }
}

pub fn typed_project(id: &str, title: &str, project_type: ProjectType) -> Project {
    Project {
        project_type,
        ..sample_project(id, title, &[])
    }
}

pub fn sample_post(id: &str, title: &str, tags: &[&str], featured: bool) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        content: format!("{} content", title),
        published_at: "2024-01-10".to_string(),
        read_time: 5,
        tags: strings(tags),
        featured,
    }
}

pub fn sample_milestone(id: &str, date: &str, milestone_type: MilestoneType) -> Milestone {
    Milestone {
        id: id.to_string(),
        date: date.to_string(),
        title: format!("Milestone {}", id),
        description: "What happened".to_string(),
        milestone_type,
        value: None,
    }
}

pub fn sample_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Gin".to_string(),
        title: "SaaS Founder".to_string(),
        bio: "Building things".to_string(),
        current_mrr: 15_000,
        total_users: 12_650,
        products_built: 13,
        years_building: 2,
        location: "The Netherlands".to_string(),
        email: "gin@example.com".to_string(),
        social: BTreeMap::from([
            ("github".to_string(), "https://github.com/xgino".to_string()),
            ("linkedin".to_string(), String::new()),
            ("twitter".to_string(), String::new()),
        ]),
    }
}

/// Small, valid content set: three projects, three posts (one featured),
/// two milestones.
pub fn sample_snapshot() -> ContentSnapshot {
    ContentSnapshot {
        projects: vec![
            Project {
                project_type: ProjectType::FreeTool,
                ..sample_project("invoicor", "Invoicor Free Invoice Generator", &["Free Tool", "Finance"])
            },
            sample_project("qrdive", "QRDive SaaS Analytics", &["Django", "SaaS", "Stripe"]),
            Project {
                project_type: ProjectType::Failed,
                ..sample_project("dating", "Dating Web App", &["Python", "ML"])
            },
        ],
        blog_posts: vec![
            sample_post("seo-basics", "SEO for SaaS", &["SEO", "SaaS"], true),
            sample_post("google-ads", "Google Ads", &["Ads", "SaaS", "Growth"], false),
            sample_post("hosting", "Cheap Hosting", &["Hosting"], false),
        ],
        milestones: vec![
            sample_milestone("first-launch", "2024-10", MilestoneType::Launch),
            sample_milestone("first-lesson", "2023-12", MilestoneType::Learning),
        ],
        personal_info: sample_personal_info(),
    }
}

pub fn sample_store() -> StaticContentStore {
    StaticContentStore::new(sample_snapshot()).expect("sample snapshot should be valid")
}
