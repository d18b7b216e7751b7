// src/modules/content/application/ports/outgoing/content_store.rs

use std::sync::Arc;

use crate::modules::content::application::domain::entities::{
    BlogPost, Milestone, PersonalInfo, Project,
};

//
// ──────────────────────────────────────────────────────────
// Port (read-only; content is fixed for the process lifetime)
// ──────────────────────────────────────────────────────────
//

pub trait ContentStore: Send + Sync {
    /// Projects in authored order.
    fn projects(&self) -> &[Project];

    /// Blog posts in authored order.
    fn blog_posts(&self) -> &[BlogPost];

    /// Timeline entries in authored order (not re-sorted by date).
    fn milestones(&self) -> &[Milestone];

    fn personal_info(&self) -> &PersonalInfo;
}

impl<S> ContentStore for Arc<S>
where
    S: ContentStore + ?Sized,
{
    fn projects(&self) -> &[Project] {
        (**self).projects()
    }

    fn blog_posts(&self) -> &[BlogPost] {
        (**self).blog_posts()
    }

    fn milestones(&self) -> &[Milestone] {
        (**self).milestones()
    }

    fn personal_info(&self) -> &PersonalInfo {
        (**self).personal_info()
    }
}
