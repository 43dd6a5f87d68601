//! Analyze command implementation.

use crate::analyzer::{CommentAnalyzer, SentimentReport};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the analyze command.
pub async fn run_analyze(url: &str, json: bool, settings: Settings) -> Result<()> {
    let analyzer = CommentAnalyzer::from_settings(&settings)?;
    let result = analyzer.analyze(url).await;

    if json {
        let report = SentimentReport::from(result);
        println!("{}", serde_json::to_string_pretty(&report)?);
        if let SentimentReport::Error { error } = report {
            anyhow::bail!(error);
        }
        return Ok(());
    }

    let tally = result?;
    Output::header("Comment Sentiment");
    println!();
    Output::kv("Video", url);
    println!();
    Output::tally(&tally);
    Ok(())
}
