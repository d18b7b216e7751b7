use std::collections::BTreeSet;
use std::str::FromStr;

use crate::modules::content::application::domain::entities::{
    Project, ProjectType, ProjectTypeParseError,
};
use crate::shared::query::{contains_ignore_case, Predicate};

pub const ALL_TYPES: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectTypeFilter {
    #[default]
    All,
    Only(ProjectType),
}

impl ProjectTypeFilter {
    pub fn matches(&self, project_type: ProjectType) -> bool {
        match self {
            ProjectTypeFilter::All => true,
            ProjectTypeFilter::Only(wanted) => *wanted == project_type,
        }
    }
}

impl FromStr for ProjectTypeFilter {
    type Err = ProjectTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_TYPES {
            return Ok(ProjectTypeFilter::All);
        }
        s.parse().map(ProjectTypeFilter::Only)
    }
}

/// Caller-owned filter state for the project listing. Groups combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub project_type: ProjectTypeFilter,
    /// Empty matches everything; otherwise any one selected tag must be present.
    pub tags: BTreeSet<String>,
    /// Empty matches everything.
    pub search: String,
}

impl ProjectListFilter {
    pub fn is_active(&self) -> bool {
        self.project_type != ProjectTypeFilter::All || !self.tags.is_empty() || !self.search.is_empty()
    }

    pub fn predicate(&self) -> ProjectPredicate<'_> {
        ProjectPredicate {
            filter: self,
            needle: self.search.to_lowercase(),
        }
    }
}

/// Borrowing predicate built from a `ProjectListFilter`; the search needle is
/// lowercased once up front.
#[derive(Debug)]
pub struct ProjectPredicate<'f> {
    filter: &'f ProjectListFilter,
    needle: String,
}

impl ProjectPredicate<'_> {
    fn matches_tags(&self, project: &Project) -> bool {
        self.filter.tags.is_empty() || project.tags.iter().any(|t| self.filter.tags.contains(t))
    }

    fn matches_search(&self, project: &Project) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        contains_ignore_case(&project.title, &self.needle)
            || contains_ignore_case(&project.description, &self.needle)
            || project
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag, &self.needle))
    }
}

impl Predicate<Project> for ProjectPredicate<'_> {
    fn matches(&self, project: &Project) -> bool {
        self.filter.project_type.matches(project.project_type)
            && self.matches_tags(project)
            && self.matches_search(project)
    }
}
