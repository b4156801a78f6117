use crate::core::{normalize::normalize, similarity::similarity};
use crate::models::{ConversationPair, MatchThresholds};

/// Score of a pattern equal to the input after normalization
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Best stored answer found for an input
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub response: Option<String>,
    pub score: f64,
}

impl MatchResult {
    pub fn none() -> Self {
        Self { response: None, score: 0.0 }
    }
}

/// Match engine - picks the stored pair closest to a user utterance
///
/// # Cascade (per pair, in knowledge base order)
/// 1. Exact match after normalization: returns immediately with score 1.0
/// 2. Substring containment in either direction: containment score
/// 3. Otherwise: Jaccard similarity of the token sets
///
/// A candidate replaces the running best only when strictly higher, so the
/// earliest pair wins ties.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    thresholds: MatchThresholds,
}

impl Matcher {
    pub fn new(thresholds: MatchThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
        }
    }

    /// Score a single normalized input against a single normalized pattern
    #[inline]
    pub fn score_normalized(&self, input: &str, pattern: &str) -> f64 {
        if input == pattern {
            EXACT_MATCH_SCORE
        } else if pattern.contains(input) || input.contains(pattern) {
            self.thresholds.containment_score
        } else {
            similarity(input, pattern)
        }
    }

    /// Find the best matching pair for `input`
    ///
    /// # Returns
    /// The best response and its score, or `(None, 0.0)` for an empty slice
    pub fn find_best_match(&self, input: &str, pairs: &[ConversationPair]) -> MatchResult {
        let normalized_input = normalize(input);
        let mut best = MatchResult::none();

        for pair in pairs {
            let normalized_pattern = normalize(pair.pattern());

            if normalized_input == normalized_pattern {
                return MatchResult {
                    response: Some(pair.response().to_string()),
                    score: EXACT_MATCH_SCORE,
                };
            }

            let score = self.score_normalized(&normalized_input, &normalized_pattern);
            if score > best.score {
                best = MatchResult {
                    response: Some(pair.response().to_string()),
                    score,
                };
            }
        }

        best
    }

    /// Whether `result` is good enough to be returned verbatim
    pub fn is_accepted(&self, result: &MatchResult) -> bool {
        result.response.is_some() && result.score >= self.thresholds.accept_threshold
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
