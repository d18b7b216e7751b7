mod seed;
mod static_content_store;

pub use seed::portfolio_snapshot;
pub use static_content_store::StaticContentStore;
