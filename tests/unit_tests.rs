// Unit tests for Persona Assist

use persona_assist::core::{
    build_messages, normalize, similarity, tokenize, KnowledgeBase, Matcher, SEED_CONVERSATIONS,
};
use persona_assist::models::{ConversationPair, Role};

fn seed_pairs() -> Vec<ConversationPair> {
    SEED_CONVERSATIONS
        .iter()
        .map(|&pair| ConversationPair::from(pair))
        .collect()
}

#[test]
fn test_normalize_and_tokenize() {
    assert_eq!(normalize("\n  What ARE\tyour   goals? "), "what are your goals?");

    let tokens = tokenize("the THE the end");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_similarity_reference_values() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("a b", ""), 0.0);
    assert!((similarity("a b", "b c") - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_similarity_bounded_and_symmetric() {
    let samples = ["", "hi", "hi there", "tell me about your projects", "a a a b"];
    for a in samples {
        for b in samples {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s));
            assert_eq!(s, similarity(b, a));
        }
    }
}

#[test]
fn test_every_seed_pattern_matches_itself() {
    let matcher = Matcher::default();
    let pairs = seed_pairs();

    for pair in &pairs {
        let shouted = pair.pattern().to_uppercase();
        let result = matcher.find_best_match(&shouted, &pairs);
        assert_eq!(result.response.as_deref(), Some(pair.response()));
        assert_eq!(result.score, 1.0);
    }
}

#[test]
fn test_hi_there_scenario() {
    let matcher = Matcher::default();
    let pairs = vec![ConversationPair::new("Hi there!", "Hello!")];

    // "hi there" is contained in "hi there!", so it scores as containment
    let result = matcher.find_best_match("hi there", &pairs);
    assert_eq!(result.response.as_deref(), Some("Hello!"));
    assert!(matcher.is_accepted(&result));

    let result = matcher.find_best_match("Hi  THERE!", &pairs);
    assert_eq!(result.score, 1.0);
}

#[test]
fn test_character_scenario() {
    let matcher = Matcher::default();
    let pairs = seed_pairs();

    let result = matcher.find_best_match("character", &pairs);

    assert_eq!(result.score, 0.85);
    assert!(result.response.as_deref().unwrap().starts_with("Ashwin is thoughtful"));
    assert!(matcher.is_accepted(&result));
}

#[test]
fn test_unrelated_question_is_not_accepted() {
    let matcher = Matcher::default();
    let pairs = seed_pairs();

    let result = matcher.find_best_match("What time is it in Tokyo?", &pairs);

    assert!(result.score < 0.45, "score was {}", result.score);
    assert!(!matcher.is_accepted(&result));
}

#[test]
fn test_tie_break_prefers_earlier_pair() {
    let matcher = Matcher::default();
    let pairs = vec![
        ConversationPair::new("red green", "first"),
        ConversationPair::new("green red", "second"),
    ];

    // Same token set for both patterns
    let result = matcher.find_best_match("green blue red", &pairs);
    assert_eq!(result.response.as_deref(), Some("first"));
}

#[test]
fn test_prompt_includes_at_most_twenty_examples() {
    let pairs: Vec<ConversationPair> = (0..50)
        .map(|i| ConversationPair::new(format!("question {i}"), format!("answer {i}")))
        .collect();

    let messages = build_messages("hello", &pairs, 20);

    let examples = messages.iter().filter(|m| m.role == Role::Assistant).count();
    assert_eq!(examples, 20);
    assert_eq!(messages.first().map(|m| m.role), Some(Role::System));
    assert_eq!(messages.last().map(|m| m.content.as_str()), Some("hello"));
}

#[tokio::test]
async fn test_add_pair_then_exact_match() {
    let kb = KnowledgeBase::seeded();
    let matcher = Matcher::default();

    kb.add_pair("Where do you live?", "Chennai").await;

    let result = kb.find_best_match(&matcher, "where do you live?").await;
    assert_eq!(result.response.as_deref(), Some("Chennai"));
    assert_eq!(result.score, 1.0);
}
