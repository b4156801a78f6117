// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ChatMessage, ConversationPair, FallbackLimits, MatchThresholds, Role};
pub use requests::{ChatRequest, FeedbackRequest};
pub use responses::{ChatResponse, ErrorResponse, FeedbackResponse, HealthResponse};
