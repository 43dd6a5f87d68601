//! Comment sentiment scoring and aggregation.

mod lexicon;
mod vader;

pub use lexicon::Lexicon;
pub use vader::VaderAnalyzer;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Compound score at or above which a text is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a text is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Polarity breakdown for one text.
///
/// `positive`, `negative` and `neutral` are proportions of the text; `compound`
/// is the normalized overall score in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    #[serde(rename = "pos")]
    pub positive: f64,
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    pub compound: f64,
}

/// Trait for sentiment scorers.
///
/// Scoring is infallible: any string, including the empty one, has a score.
pub trait SentimentScorer: Send + Sync {
    /// Score a text.
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Compound score of a text.
    fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}

/// Polarity class of a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Classify a compound score. Both thresholds are inclusive.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Polarity::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-class comment counts.
///
/// Only built through [`SentimentTally::record`], which keeps
/// `positive + negative + neutral == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    positive: usize,
    negative: usize,
    neutral: usize,
    total: usize,
}

impl SentimentTally {
    /// Score and classify every comment.
    pub fn from_comments<S>(scorer: &dyn SentimentScorer, comments: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut tally = Self::default();
        for comment in comments {
            let compound = scorer.compound(comment.as_ref());
            tally.record(Polarity::from_compound(compound));
        }
        debug!(
            positive = tally.positive,
            negative = tally.negative,
            neutral = tally.neutral,
            "Tallied {} comments",
            tally.total
        );
        tally
    }

    /// Count one classified comment.
    pub fn record(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Positive => self.positive += 1,
            Polarity::Negative => self.negative += 1,
            Polarity::Neutral => self.neutral += 1,
        }
        self.total += 1;
    }

    pub fn positive(&self) -> usize {
        self.positive
    }

    pub fn negative(&self) -> usize {
        self.negative
    }

    pub fn neutral(&self) -> usize {
        self.neutral
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
