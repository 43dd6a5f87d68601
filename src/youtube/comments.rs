//! Top-level comment retrieval via the YouTube Data API.

use super::CommentSource;
use crate::config::YoutubeSettings;
use crate::error::{Result, SentimentError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Comments requested per call. Only this first page is ever read.
pub const COMMENT_PAGE_SIZE: u32 = 50;

/// `commentThreads.list` response, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct CommentThreadListResponse {
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// Error body returned by Google APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Comment fetcher backed by the YouTube Data API v3.
///
/// Requests a single page of plain-text top-level comments. Replies and
/// further pages are never fetched.
pub struct YoutubeCommentClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl YoutubeCommentClient {
    /// Create a client from settings.
    ///
    /// A missing API key is not an error here; it is reported on the first fetch
    /// so the tool server can still start and answer the other tools.
    pub fn new(settings: &YoutubeSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let mut base = Url::parse(&settings.api_base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join("commentThreads")?;

        if settings.api_key().is_none() {
            warn!("No YouTube API key configured; comment fetching will fail");
        }

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key().map(str::to_string),
        })
    }

    /// The resolved `commentThreads` endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CommentSource for YoutubeCommentClient {
    #[instrument(skip(self))]
    async fn fetch_comments(&self, video_id: &str) -> Result<Vec<String>> {
        let api_key = self.api_key.as_deref().ok_or(SentimentError::MissingApiKey)?;
        let page_size = COMMENT_PAGE_SIZE.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("textFormat", "plainText"),
                ("maxResults", page_size.as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        let body = response.text().await.map_err(redact_url)?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let comments = parse_comment_threads(&body)?;
        debug!("Fetched {} comments", comments.len());
        Ok(comments)
    }
}

/// Extract comment display texts from a `commentThreads.list` body, in order.
fn parse_comment_threads(body: &str) -> Result<Vec<String>> {
    let response: CommentThreadListResponse = serde_json::from_str(body)
        .map_err(|e| SentimentError::UnexpectedResponse(e.to_string()))?;

    Ok(response
        .items
        .into_iter()
        .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
        .collect())
}

/// Drop the request URL from a transport error; its query carries the API key.
fn redact_url(err: reqwest::Error) -> SentimentError {
    SentimentError::Http(err.without_url())
}

fn api_error(status: u16, body: &str) -> SentimentError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    SentimentError::Api { status, message }
}
