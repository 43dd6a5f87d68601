//! Configuration module for yt-sentiment.
//!
//! Settings come from a TOML file, with the API key overridable from the environment.

mod settings;

pub use settings::{GeneralSettings, SentimentSettings, Settings, YoutubeSettings, API_KEY_ENV};
