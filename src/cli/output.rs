//! CLI output formatting utilities.

use crate::sentiment::SentimentTally;
use console::style;

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(msg: &str) {
        println!("  {} {}", style("*").cyan(), msg);
    }

    /// Print a sentiment tally with percentages.
    pub fn tally(tally: &SentimentTally) {
        let rows = [
            ("Positive", tally.positive(), style("+").green()),
            ("Negative", tally.negative(), style("-").red()),
            ("Neutral", tally.neutral(), style("~").dim()),
        ];

        for (label, count, marker) in rows {
            println!(
                "  {} {:<9} {:>5}  ({})",
                marker,
                label,
                count,
                percent(count, tally.total())
            );
        }
        println!("  {} {:<9} {:>5}", style("=").bold(), "Total", tally.total());
    }
}

/// Format `part / whole` as a percentage.
fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / whole as f64)
}
