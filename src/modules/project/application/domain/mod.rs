pub mod filter;
pub mod views;

pub use filter::{ProjectListFilter, ProjectPredicate, ProjectTypeFilter};
pub use views::{ProjectCardView, ProjectDetailView, ProjectListResult, ProjectTypeStats, SeoMeta};
