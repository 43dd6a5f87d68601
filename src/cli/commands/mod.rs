//! CLI command implementations.

mod analyze;
mod comments;
mod config;
mod mcp;
mod video_id;

pub use analyze::run_analyze;
pub use comments::run_comments;
pub use config::run_config;
pub use mcp::run_mcp;
pub use video_id::run_video_id;
