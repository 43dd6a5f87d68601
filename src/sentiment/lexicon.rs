//! Sentiment lexicon: token → valence in roughly [-4, 4].

use crate::error::{Result, SentimentError};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Bundled VADER-format lexicon. Neutral words such as "okay" are absent.
const BUILTIN: &str = include_str!("vader_lexicon.txt");

/// A token → valence lookup table.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// The built-in lexicon.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN).expect("Invalid bundled lexicon")
    }

    /// Parse lexicon text: one `token<TAB>valence[<TAB>...]` entry per line.
    ///
    /// Extra tab-separated columns are ignored, so VADER-format lexicon files
    /// load as-is. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default().trim();
            let valence = fields.next().ok_or_else(|| SentimentError::Lexicon {
                line: idx + 1,
                reason: "missing valence column".to_string(),
            })?;
            let valence: f64 = valence.trim().parse().map_err(|_| SentimentError::Lexicon {
                line: idx + 1,
                reason: format!("invalid valence '{}'", valence.trim()),
            })?;

            if token.is_empty() {
                return Err(SentimentError::Lexicon {
                    line: idx + 1,
                    reason: "empty token".to_string(),
                });
            }

            entries.insert(token.to_lowercase(), valence);
        }

        Ok(Self { entries })
    }

    /// Load a lexicon file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(&text)?;
        debug!("Loaded {} lexicon entries from {:?}", lexicon.len(), path);
        Ok(lexicon)
    }

    /// Merge another lexicon over this one; its entries win.
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    /// Valence of a token, case-insensitively.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.entries.get(&token.to_lowercase()).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valence(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
