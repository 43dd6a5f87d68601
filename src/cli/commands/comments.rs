//! Comments command implementation.

use crate::analyzer::CommentAnalyzer;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the comments command.
pub async fn run_comments(video_id: &str, json: bool, settings: Settings) -> Result<()> {
    let analyzer = CommentAnalyzer::from_settings(&settings)?;

    let comments = analyzer.comments(video_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comments)?);
        return Ok(());
    }

    if comments.is_empty() {
        Output::info(&format!("No comments found for {}.", video_id));
        return Ok(());
    }

    Output::header(&format!("Comments for {} ({})", video_id, comments.len()));
    println!();
    for comment in &comments {
        Output::list_item(&comment.replace('\n', " "));
    }

    Ok(())
}
