// Core algorithm exports
pub mod knowledge;
pub mod matcher;
pub mod normalize;
pub mod prompt;
pub mod similarity;

pub use knowledge::{KnowledgeBase, SEED_CONVERSATIONS};
pub use matcher::{MatchResult, Matcher, EXACT_MATCH_SCORE};
pub use normalize::{normalize, tokenize};
pub use prompt::{build_messages, SYSTEM_INSTRUCTION};
pub use similarity::similarity;
