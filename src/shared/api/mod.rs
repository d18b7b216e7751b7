mod query_config;
mod response;

pub use query_config::custom_query_config;
pub use response::{ApiResponse, ErrorCode};
