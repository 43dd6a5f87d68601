//! CLI module for yt-sentiment.

pub mod commands;
mod output;

pub use output::Output;

use crate::config::{Settings, API_KEY_ENV};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// yt-sentiment - YouTube comment sentiment analysis
///
/// Runs as an MCP server for AI assistants, or analyzes a video directly from the shell.
#[derive(Parser, Debug)]
#[command(name = "yt-sentiment")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// YouTube Data API key (overrides the config file)
    #[arg(long, env = API_KEY_ENV, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The `--config` path with `~` expanded.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(Settings::expand_path)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server for AI assistant integration (Claude, Cursor, etc.)
    Mcp,

    /// Extract the video ID from a YouTube URL
    VideoId {
        /// YouTube video URL
        url: String,
    },

    /// Fetch the first page of top-level comments for a video
    Comments {
        /// YouTube video ID
        video_id: String,

        /// Print comments as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Analyze the sentiment of a video's comments
    Analyze {
        /// YouTube video URL
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration file path
    Path,
}
