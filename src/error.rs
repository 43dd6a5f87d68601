//! Error types for yt-sentiment.

use thiserror::Error;

/// Library-level error type.
///
/// The `Display` output of [`SentimentError::InvalidUrl`] is the exact text
/// returned to tool callers, so it must not change.
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error: Invalid YouTube URL")]
    InvalidUrl,

    #[error("YouTube API key is not configured (set YOUTUBE_API_KEY or youtube.api_key)")]
    MissingApiKey,

    #[error("YouTube API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected API response: {0}")]
    UnexpectedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid lexicon entry at line {line}: {reason}")]
    Lexicon { line: usize, reason: String },
}

/// Result type alias for yt-sentiment operations.
pub type Result<T> = std::result::Result<T, SentimentError>;
