//! yt-sentiment - YouTube Comment Sentiment Analysis
//!
//! An MCP tool server that lets AI assistants gauge how viewers feel about a video.
//!
//! # Overview
//!
//! Three operations are exposed, each callable on its own:
//! - `get_video_id_from_url` - extract a video ID from a YouTube URL
//! - `get_video_comments` - fetch the first page of top-level comments
//! - `analyze_comments_sentiment` - classify each comment and tally the results
//!
//! # Architecture
//!
//! - `config` - Configuration management
//! - `youtube` - URL parsing and the Data API comment client
//! - `sentiment` - Lexicon-based polarity scoring and tallies
//! - `analyzer` - The three operations over injected handles
//! - `mcp` - JSON-RPC 2.0 tool server over stdio
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use yt_sentiment::analyzer::CommentAnalyzer;
//! use yt_sentiment::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let analyzer = CommentAnalyzer::from_settings(&settings)?;
//!
//!     let tally = analyzer.analyze("https://youtu.be/dQw4w9WgXcQ").await?;
//!     println!("{} positive of {}", tally.positive(), tally.total());
//!
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod sentiment;
pub mod youtube;

pub use error::{Result, SentimentError};
