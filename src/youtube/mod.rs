//! YouTube access: URL parsing and comment retrieval.

mod comments;
mod video_id;

pub use self::comments::{YoutubeCommentClient, COMMENT_PAGE_SIZE};
pub use self::video_id::extract_video_id;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for comment providers.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch the first page of top-level comment texts for a video, in API order.
    async fn fetch_comments(&self, video_id: &str) -> Result<Vec<String>>;
}
