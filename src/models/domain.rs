use serde::{Deserialize, Serialize};

/// Score assigned when one normalized text contains the other
pub const DEFAULT_CONTAINMENT_SCORE: f64 = 0.85;

/// Minimum score for a stored answer to be returned verbatim
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.45;

/// Maximum number of stored pairs sent to the backend as few-shot examples
pub const DEFAULT_MAX_EXAMPLES: usize = 20;

/// Maximum number of tokens the backend may generate per reply
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// One stored exchange: an expected user utterance and its canned answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationPair {
    pattern: String,
    response: String,
}

impl ConversationPair {
    pub fn new(pattern: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            response: response.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

impl<P: Into<String>, R: Into<String>> From<(P, R)> for ConversationPair {
    fn from((pattern, response): (P, R)) -> Self {
        Self::new(pattern, response)
    }
}

/// Author of a message sent to the generative backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A role-tagged message in chat-completions form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Tunable scores used by the match engine and its caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Score given to substring containment in either direction
    pub containment_score: f64,
    /// A stored answer is accepted when its score is at least this value
    pub accept_threshold: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            containment_score: DEFAULT_CONTAINMENT_SCORE,
            accept_threshold: DEFAULT_ACCEPT_THRESHOLD,
        }
    }
}

/// Bounds on the prompt and reply of a fallback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackLimits {
    pub max_examples: usize,
    pub max_tokens: u32,
}

impl Default for FallbackLimits {
    fn default() -> Self {
        Self {
            max_examples: DEFAULT_MAX_EXAMPLES,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
