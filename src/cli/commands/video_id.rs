//! Video ID command implementation.

use crate::youtube::extract_video_id;
use anyhow::Result;

/// Run the video-id command.
pub fn run_video_id(url: &str) -> Result<()> {
    let video_id = extract_video_id(url)?;
    println!("{}", video_id);
    Ok(())
}
