//! Lexicon and rule-based polarity scorer in the style of VADER.
//!
//! Each token found in the lexicon contributes its valence, adjusted by
//! preceding boosters and negations, by ALL-CAPS emphasis when the text mixes
//! case, and by a "but" contrast shift. The summed valence plus exclamation
//! and question-mark emphasis is normalized into a compound score in [-1, 1].

use super::lexicon::Lexicon;
use super::{PolarityScores, SentimentScorer};
use regex::Regex;
use std::borrow::Cow;

/// Increment for boosters such as "very".
const BOOSTER_INCR: f64 = 0.293;
/// Decrement for dampeners such as "slightly".
const BOOSTER_DECR: f64 = -0.293;
/// Increment for an ALL-CAPS sentiment word in mixed-case text.
const CAPS_INCR: f64 = 0.733;
/// Scalar applied to a valence following a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant approximating the maximum expected valence sum.
const NORMALIZATION_ALPHA: f64 = 15.0;

const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

const BOOSTERS_UP: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "deeply",
    "especially",
    "extremely",
    "fully",
    "highly",
    "hugely",
    "incredibly",
    "most",
    "particularly",
    "purely",
    "really",
    "so",
    "soo",
    "sooo",
    "too",
    "totally",
    "truly",
    "utterly",
    "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "no", "nobody", "none",
    "nope", "nor", "not", "nothing", "nowhere", "rarely", "seldom", "shouldnt", "wasnt",
    "werent", "without", "wont", "wouldnt",
];

/// VADER-style sentiment analyzer.
pub struct VaderAnalyzer {
    lexicon: Lexicon,
    edge_punctuation: Regex,
}

impl VaderAnalyzer {
    /// Create an analyzer over the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    /// Create an analyzer over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        let edge_punctuation =
            Regex::new(r"^[[:punct:]]+|[[:punct:]]+$").expect("Invalid regex");
        Self {
            lexicon,
            edge_punctuation,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Split on whitespace and strip edge punctuation from words.
    ///
    /// Tokens that would shrink to two characters or fewer are kept intact so
    /// emoticons like `:)` survive.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        text.split_whitespace()
            .map(|raw| {
                let stripped = self.edge_punctuation.replace_all(raw, "");
                if stripped.chars().count() <= 2 {
                    Cow::Borrowed(raw)
                } else {
                    stripped
                }
            })
            .collect()
    }

    fn is_booster(word: &str) -> Option<f64> {
        let lower = word.to_lowercase();
        if BOOSTERS_UP.contains(&lower.as_str()) {
            Some(BOOSTER_INCR)
        } else if BOOSTERS_DOWN.contains(&lower.as_str()) {
            Some(BOOSTER_DECR)
        } else {
            None
        }
    }

    fn is_negation(word: &str) -> bool {
        let lower = word.to_lowercase();
        if lower.contains("n't") {
            return true;
        }
        let squashed: String = lower.chars().filter(|c| *c != '\'').collect();
        NEGATIONS.contains(&squashed.as_str())
    }

    /// Scalar a booster word adds to the valence that follows it.
    fn booster_scalar(word: &str, valence: f64, caps_differ: bool) -> f64 {
        let Some(mut scalar) = Self::is_booster(word) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if caps_differ && is_all_caps(word) {
            scalar += if valence > 0.0 { CAPS_INCR } else { -CAPS_INCR };
        }
        scalar
    }

    /// Valence of the token at `i`, with context rules applied.
    fn token_valence(&self, tokens: &[Cow<'_, str>], i: usize, caps_differ: bool) -> f64 {
        let token: &str = &tokens[i];

        if Self::is_booster(token).is_some() {
            return 0.0;
        }

        let Some(mut valence) = self.lexicon.valence(token) else {
            return 0.0;
        };

        if caps_differ && is_all_caps(token) {
            valence += if valence > 0.0 { CAPS_INCR } else { -CAPS_INCR };
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev: &str = &tokens[i - distance];

            if !self.lexicon.contains(prev) {
                let damping = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += Self::booster_scalar(prev, valence, caps_differ) * damping;
            }

            if Self::is_negation(prev) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    /// Shift weight around a "but": halve what precedes it, boost what follows.
    fn apply_but(tokens: &[Cow<'_, str>], sentiments: &mut [f64]) {
        let Some(but) = tokens.iter().position(|t| t.eq_ignore_ascii_case("but")) else {
            return;
        };
        for (idx, s) in sentiments.iter_mut().enumerate() {
            if idx < but {
                *s *= 0.5;
            } else if idx > but {
                *s *= 1.5;
            }
        }
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = self.tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::default();
        }

        let caps_differ = has_mixed_caps(&tokens);
        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, i, caps_differ))
            .collect();
        Self::apply_but(&tokens, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        let sum: f64 = sentiments.iter().sum();
        let compound = if sum > 0.0 {
            normalize(sum + emphasis)
        } else if sum < 0.0 {
            normalize(sum - emphasis)
        } else {
            normalize(sum)
        };

        let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
        for s in &sentiments {
            if *s > 0.0 {
                pos_sum += s + 1.0;
            } else if *s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        PolarityScores {
            positive: round3(pos_sum / total),
            negative: round3(neg_sum.abs() / total),
            neutral: round3(neu_count / total),
            compound: round4(compound),
        }
    }
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some, but not all, tokens are ALL CAPS.
fn has_mixed_caps(tokens: &[Cow<'_, str>]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_WEIGHT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        VaderAnalyzer::new().compound(text)
    }

    #[test]
    fn test_basic_polarity() {
        assert!(compound("I love this!") >= 0.05);
        assert!(compound("I hate this.") <= -0.05);
        assert_eq!(compound("It's okay."), 0.0);
    }

    #[test]
    fn test_everyday_comments_are_not_neutral() {
        for text in ["Terrific explanation", "This video made my day ❤️", "lmao", "You are a legend"] {
            assert!(compound(text) >= 0.05, "{}", text);
        }
        for text in ["What a disappointment", "This is horrendous", "so boring 👎"] {
            assert!(compound(text) <= -0.05, "{}", text);
        }
        assert!((compound("Terrific explanation") - 0.6369).abs() < 0.001);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let scores = VaderAnalyzer::new().polarity_scores("");
        assert_eq!(scores, PolarityScores::default());
        assert_eq!(compound("   \n\t "), 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("This is good") > 0.0);
        assert!(compound("This is not good") < 0.0);
        assert!(compound("This isn't good") < 0.0);
        assert!(compound("I don't hate it") > 0.0);
    }

    #[test]
    fn test_booster_intensifies() {
        assert!(compound("This is very good") > compound("This is good"));
        assert!(compound("This is slightly good") < compound("This is good"));
        assert!(compound("This is very bad") < compound("This is bad"));
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert!(compound("This is good!!!") > compound("This is good"));
        assert!(compound("This is bad!!!") < compound("This is bad"));
        // Capped at four exclamation marks.
        assert_eq!(compound("good!!!!"), compound("good!!!!!!!"));
    }

    #[test]
    fn test_caps_emphasis_needs_mixed_case() {
        assert!(compound("This is GREAT") > compound("This is great"));
        assert_eq!(compound("GREAT"), compound("great"));
    }

    #[test]
    fn test_but_shifts_weight() {
        assert!(compound("The intro was bad but the ending was great") > 0.0);
        assert!(compound("The intro was great but the ending was bad") < 0.0);
    }

    #[test]
    fn test_emoticons_survive_tokenization() {
        assert!(compound("nice video :)") > compound("nice video"));
        assert!(compound(":(") < 0.0);
    }

    #[test]
    fn test_compound_is_bounded() {
        let text = "BEST BEST BEST love love love amazing awesome perfect!!!!";
        let c = compound(text);
        assert!(c <= 1.0 && c > 0.9);

        let c = compound("worst hate hate awful horrible terrible disgusting!!!!");
        assert!(c >= -1.0 && c < -0.9);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let scores = VaderAnalyzer::new().polarity_scores("great video but bad audio");
        let sum = scores.positive + scores.negative + scores.neutral;
        assert!((sum - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::parse("okay\t0.9").unwrap();
        let analyzer = VaderAnalyzer::with_lexicon(lexicon);
        assert!(analyzer.compound("It's okay.") > 0.05);
        assert_eq!(analyzer.compound("I love this!"), 0.0);
    }
}
