use crate::core::{build_messages, KnowledgeBase, Matcher};
use crate::models::FallbackLimits;
use crate::services::inference::{InferenceClient, InferenceError};
use std::sync::Arc;

/// Outcome of answering one utterance
#[derive(Debug)]
pub enum Reply {
    /// A stored response cleared the acceptance threshold
    Stored { response: String, score: f64 },
    /// The generative backend produced the answer
    Generated(String),
    /// The backend call failed
    Failed(InferenceError),
}

impl Reply {
    /// Text returned to the caller; failures become `"Error: <description>"`
    pub fn into_text(self) -> String {
        match self {
            Reply::Stored { response, .. } => response,
            Reply::Generated(text) => text,
            Reply::Failed(err) => format!("Error: {}", err),
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Reply::Stored { .. } => "stored",
            Reply::Generated(_) => "generated",
            Reply::Failed(_) => "failed",
        }
    }
}

/// Answers utterances from the knowledge base, escalating to the generative
/// backend when no stored pair is a confident match.
pub struct Assistant {
    knowledge: Arc<KnowledgeBase>,
    matcher: Matcher,
    backend: InferenceClient,
    limits: FallbackLimits,
}

impl Assistant {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        matcher: Matcher,
        backend: InferenceClient,
        limits: FallbackLimits,
    ) -> Self {
        Self {
            knowledge,
            matcher,
            backend,
            limits,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn backend(&self) -> &InferenceClient {
        &self.backend
    }

    /// Decide how to answer `input`, keeping the provenance of the answer
    pub async fn answer(&self, input: &str) -> Reply {
        let best = self.knowledge.find_best_match(&self.matcher, input).await;

        tracing::debug!(score = best.score, matched = best.response.is_some(), "Best stored match");

        if self.matcher.is_accepted(&best) {
            if let Some(response) = best.response {
                return Reply::Stored {
                    response,
                    score: best.score,
                };
            }
        }

        match self.respond_via_backend(input).await {
            Ok(text) => Reply::Generated(text),
            Err(err) => {
                tracing::error!(error = %err, model = %self.backend.model(), "Fallback request failed");
                Reply::Failed(err)
            }
        }
    }

    /// Answer `input` as plain text; never fails
    pub async fn get_response(&self, input: &str) -> String {
        self.answer(input).await.into_text()
    }

    /// Ask the backend, with stored pairs as few-shot examples
    pub async fn respond_via_backend(&self, input: &str) -> Result<String, InferenceError> {
        // Examples are copied out so the lock is not held across the network call
        let examples = self.knowledge.examples(self.limits.max_examples).await;
        let messages = build_messages(input, &examples, self.limits.max_examples);

        self.backend.complete(&messages, self.limits.max_tokens).await
    }

    /// Store a new pair; returns the knowledge base size
    pub async fn add_pair(&self, pattern: &str, response: &str) -> usize {
        let total = self.knowledge.add_pair(pattern, response).await;
        tracing::info!(total_pairs = total, "Conversation pair added");
        total
    }
}
