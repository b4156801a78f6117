use crate::core::matcher::{MatchResult, Matcher};
use crate::models::ConversationPair;
use tokio::sync::RwLock;

/// Pairs the assistant knows about at startup
pub const SEED_CONVERSATIONS: &[(&str, &str)] = &[
    ("Hi there!", "Hey! I'm Ashwin’s assistant. How’s your day going?"),
    (
        "Do you believe in God?",
        "I don't hold personal beliefs, but Ashwin is curious about philosophy, spirituality, and cultural roots. He often likes to explore questions rather than accept easy answers.",
    ),
    (
        "Tell me about your character",
        "Ashwin is thoughtful, ambitious, and creative. He blends technical problem-solving with artistic expression, like writing poetry and books.",
    ),
    (
        "What are your favourite things?",
        "Ashwin enjoys building real-world problem-solving apps, writing heartfelt poetry, and working on creative projects like his book 'Second Chance Comet'.",
    ),
    (
        "I'm feeling sad today.",
        "Ashwin values empathy \u{2014} he’d say it’s okay to feel this way. Do you want to share what’s on your mind?",
    ),
    (
        "How do you usually approach challenges?",
        "Ashwin approaches challenges with persistence, breaking them into steps, balancing logic with creativity, and always looking for growth.",
    ),
    (
        "Do you ever think about life and its meaning?",
        "Yes \u{2014} Ashwin often reflects on life deeply. His book idea and poems show he thinks about existence, choices, and second chances.",
    ),
    (
        "How do you feel about helping others?",
        "Helping others is at the core of Ashwin’s mindset. His DIY Assistant project is literally about solving everyday problems for people.",
    ),
    (
        "What are your goals in life?",
        "Ashwin aims to grow as a full-stack engineer, build impactful products, and also pursue his creative side as a writer.",
    ),
    (
        "Tell me about your projects.",
        "Ashwin is building DIY Assistant with Next.js, Tailwind, ShadCN, Node.js, and Firebase/Supabase \u{2014} a real-world problem solver app. He also planned an e-commerce service platform and is writing a book.",
    ),
    (
        "What inspires your writing?",
        "Ashwin is inspired by raw, realistic storytelling \u{2014} like the Tamil movie 'Koozhangal'. He avoids commercial shortcuts and prefers authenticity.",
    ),
    (
        "What do you think about technology?",
        "Ashwin sees tech as a tool for impact \u{2014} not just fancy features, but solutions that help people in daily life.",
    ),
];

/// Ordered, append-only collection of conversation pairs
///
/// Shared by every request handler. Scans take the read lock, appends take
/// the write lock, so a scan sees the base either before or after a
/// concurrent append, never in between.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    pairs: RwLock<Vec<ConversationPair>>,
}

impl KnowledgeBase {
    pub fn new(pairs: Vec<ConversationPair>) -> Self {
        Self {
            pairs: RwLock::new(pairs),
        }
    }

    /// Knowledge base holding [`SEED_CONVERSATIONS`]
    pub fn seeded() -> Self {
        Self::new(
            SEED_CONVERSATIONS
                .iter()
                .map(|&pair| ConversationPair::from(pair))
                .collect(),
        )
    }

    /// Append a pair to the end; returns the new size
    pub async fn add_pair(&self, pattern: impl Into<String>, response: impl Into<String>) -> usize {
        let mut pairs = self.pairs.write().await;
        pairs.push(ConversationPair::new(pattern, response));
        pairs.len()
    }

    pub async fn len(&self) -> usize {
        self.pairs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pairs.read().await.is_empty()
    }

    /// Run the match engine over the current pairs
    pub async fn find_best_match(&self, matcher: &Matcher, input: &str) -> MatchResult {
        let pairs = self.pairs.read().await;
        matcher.find_best_match(input, &pairs)
    }

    /// Copy of the first `limit` pairs, in insertion order
    pub async fn examples(&self, limit: usize) -> Vec<ConversationPair> {
        let pairs = self.pairs.read().await;
        pairs.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_preserves_order() {
        let kb = KnowledgeBase::seeded();
        assert_eq!(kb.len().await, SEED_CONVERSATIONS.len());

        let examples = kb.examples(2).await;
        assert_eq!(examples[0].pattern(), "Hi there!");
        assert_eq!(examples[1].pattern(), "Do you believe in God?");
    }

    #[test]
    fn test_seed_answers_kept_verbatim() {
        assert_eq!(
            SEED_CONVERSATIONS[4].1,
            "Ashwin values empathy — he’d say it’s okay to feel this way. Do you want to share what’s on your mind?"
        );
        assert_eq!(
            SEED_CONVERSATIONS[6].1,
            "Yes — Ashwin often reflects on life deeply. His book idea and poems show he thinks about existence, choices, and second chances."
        );
        assert_eq!(
            SEED_CONVERSATIONS[11].1,
            "Ashwin sees tech as a tool for impact — not just fancy features, but solutions that help people in daily life."
        );
    }

    #[tokio::test]
    async fn test_add_pair_appends_to_end() {
        let kb = KnowledgeBase::new(vec![ConversationPair::new("a", "1")]);

        let size = kb.add_pair("b", "2").await;
        assert_eq!(size, 2);

        let examples = kb.examples(10).await;
        assert_eq!(examples.last().map(|p| p.pattern()), Some("b"));
    }

    #[tokio::test]
    async fn test_add_pair_does_not_dedupe() {
        let kb = KnowledgeBase::default();
        kb.add_pair("same", "first").await;
        kb.add_pair("same", "second").await;

        assert_eq!(kb.len().await, 2);

        // Exact match short-circuits on the earlier pair
        let result = kb.find_best_match(&Matcher::default(), "same").await;
        assert_eq!(result.response.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_examples_capped() {
        let kb = KnowledgeBase::default();
        for i in 0..30 {
            kb.add_pair(format!("q{i}"), format!("a{i}")).await;
        }

        let examples = kb.examples(20).await;
        assert_eq!(examples.len(), 20);
        assert_eq!(examples[19].pattern(), "q19");
    }

    #[tokio::test]
    async fn test_empty_base() {
        let kb = KnowledgeBase::default();
        assert!(kb.is_empty().await);

        let result = kb.find_best_match(&Matcher::default(), "hello").await;
        assert_eq!(result.score, 0.0);
        assert!(result.response.is_none());
    }
}
