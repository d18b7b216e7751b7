mod get_milestones;

pub use get_milestones::GetMilestonesUseCase;
