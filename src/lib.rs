//! Persona Assist - personal assistant chat service
//!
//! Answers utterances from a curated, in-memory list of question/answer pairs
//! and falls back to a generative backend, primed with those pairs as
//! few-shot examples, when no stored answer is a confident match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{KnowledgeBase, MatchResult, Matcher, normalize, similarity, tokenize};
pub use models::{ChatMessage, ConversationPair, FallbackLimits, MatchThresholds, Role};
pub use services::{Assistant, InferenceClient, InferenceError, Reply};
