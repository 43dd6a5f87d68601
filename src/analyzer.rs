//! The three comment-analysis operations.
//!
//! The comment source and the scorer are built once and injected, so the same
//! analyzer serves every tool call and tests can swap in fakes.

use crate::config::Settings;
use crate::error::{Result, SentimentError};
use crate::sentiment::{Lexicon, SentimentScorer, SentimentTally, VaderAnalyzer};
use crate::youtube::{extract_video_id, CommentSource, YoutubeCommentClient};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Failure of an analysis operation.
///
/// `Display` renders the exact text tool callers receive.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Error: Invalid YouTube URL")]
    InvalidUrl,

    #[error("Error fetching comments: {0}")]
    Fetch(#[source] SentimentError),

    #[error("Error: No comments found for video {0}")]
    NoComments(String),
}

/// Outcome of `analyze_comments_sentiment`: a tally or an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SentimentReport {
    Tally(SentimentTally),
    Error { error: String },
}

impl SentimentReport {
    pub fn is_error(&self) -> bool {
        matches!(self, SentimentReport::Error { .. })
    }
}

impl From<std::result::Result<SentimentTally, AnalysisError>> for SentimentReport {
    fn from(result: std::result::Result<SentimentTally, AnalysisError>) -> Self {
        match result {
            Ok(tally) => SentimentReport::Tally(tally),
            Err(e) => SentimentReport::Error {
                error: e.to_string(),
            },
        }
    }
}

/// Comment analyzer over a shared comment source and scorer.
#[derive(Clone)]
pub struct CommentAnalyzer {
    comments: Arc<dyn CommentSource>,
    scorer: Arc<dyn SentimentScorer>,
}

impl CommentAnalyzer {
    /// Create an analyzer from explicit handles.
    pub fn new(comments: Arc<dyn CommentSource>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { comments, scorer }
    }

    /// Build the YouTube client and VADER scorer from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = YoutubeCommentClient::new(&settings.youtube)?;

        let mut lexicon = Lexicon::builtin();
        if let Some(path) = settings.lexicon_path() {
            lexicon.merge(Lexicon::load(&path)?);
            info!("Merged custom lexicon from {:?}", path);
        }

        Ok(Self::new(
            Arc::new(client),
            Arc::new(VaderAnalyzer::with_lexicon(lexicon)),
        ))
    }

    /// Extract the video ID from a YouTube URL.
    pub fn video_id(&self, url: &str) -> std::result::Result<String, AnalysisError> {
        extract_video_id(url).map_err(|_| AnalysisError::InvalidUrl)
    }

    /// Fetch the first page of top-level comments for a video.
    #[instrument(skip(self))]
    pub async fn comments(&self, video_id: &str) -> std::result::Result<Vec<String>, AnalysisError> {
        self.comments.fetch_comments(video_id).await.map_err(|e| {
            warn!("Comment fetch failed: {}", e);
            AnalysisError::Fetch(e)
        })
    }

    /// Classify every fetched comment of the video at `video_url`.
    ///
    /// An invalid URL fails before any fetch is attempted.
    #[instrument(skip(self))]
    pub async fn analyze(&self, video_url: &str) -> std::result::Result<SentimentTally, AnalysisError> {
        let video_id = self.video_id(video_url)?;
        let comments = self.comments(&video_id).await?;

        if comments.is_empty() {
            return Err(AnalysisError::NoComments(video_id));
        }

        let tally = SentimentTally::from_comments(self.scorer.as_ref(), &comments);
        info!("Analyzed {} comments for {}", tally.total(), video_id);
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeComments {
        result: std::result::Result<Vec<String>, String>,
        calls: AtomicUsize,
    }

    impl FakeComments {
        fn ok(comments: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(comments.iter().map(|c| c.to_string()).collect()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                result: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CommentSource for FakeComments {
        async fn fetch_comments(&self, _video_id: &str) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(|message| SentimentError::Api {
                status: 403,
                message,
            })
        }
    }

    fn analyzer(source: Arc<FakeComments>) -> CommentAnalyzer {
        CommentAnalyzer::new(source, Arc::new(VaderAnalyzer::new()))
    }

    #[tokio::test]
    async fn test_analyze_mixed_comments() {
        let source = FakeComments::ok(&["I love this!", "I hate this.", "It's okay."]);
        let tally = analyzer(source)
            .analyze("https://www.youtube.com/watch?v=abc123&t=5s")
            .await
            .unwrap();

        assert_eq!(
            (tally.positive(), tally.negative(), tally.neutral(), tally.total()),
            (1, 1, 1, 3)
        );
    }

    #[tokio::test]
    async fn test_invalid_url_skips_fetch() {
        let source = FakeComments::ok(&["never read"]);
        let report: SentimentReport = analyzer(source.clone())
            .analyze("not a youtube link")
            .await
            .into();

        assert_eq!(
            report,
            SentimentReport::Error {
                error: "Error: Invalid YouTube URL".to_string()
            }
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported_not_tallied() {
        let source = FakeComments::failing("quota exceeded");
        let report: SentimentReport = analyzer(source)
            .analyze("https://youtu.be/xyz789?si=foo")
            .await
            .into();

        match report {
            SentimentReport::Error { error } => {
                assert!(error.starts_with("Error fetching comments: "));
                assert!(error.contains("quota exceeded"));
            }
            SentimentReport::Tally(t) => panic!("expected error, got {:?}", t),
        }
    }

    #[tokio::test]
    async fn test_no_comments_is_an_error() {
        let err = analyzer(FakeComments::ok(&[]))
            .analyze("https://youtu.be/xyz789")
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::NoComments(ref id) if id == "xyz789"));
    }

    #[tokio::test]
    async fn test_comment_text_mentioning_error_is_still_a_comment() {
        let source = FakeComments::ok(&["Error at 2:31 but great video"]);
        let tally = analyzer(source).analyze("v=abc").await.unwrap();
        assert_eq!(tally.total(), 1);
    }

    #[tokio::test]
    async fn test_comments_error_text() {
        let err = analyzer(FakeComments::failing("video not found"))
            .comments("abc")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error fetching comments: YouTube API returned 403: video not found"
        );
    }

    #[test]
    fn test_tally_report_serialization() {
        let mut tally = SentimentTally::default();
        tally.record(crate::sentiment::Polarity::Negative);
        let json = serde_json::to_value(SentimentReport::Tally(tally)).unwrap();
        assert_eq!(json["negative"], 1);
        assert_eq!(json["total"], 1);

        let json = serde_json::to_value(SentimentReport::Error {
            error: "Error: Invalid YouTube URL".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"error": "Error: Invalid YouTube URL"}));
    }
}
