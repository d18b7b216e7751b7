mod get_milestones_service;

pub use get_milestones_service::GetMilestonesService;
