use crate::models::{ChatMessage, ConversationPair};

/// Instruction sent ahead of the few-shot examples
pub const SYSTEM_INSTRUCTION: &str = "You are Ashwin’s assistant. First, try to answer using the provided prior \
Q&A examples verbatim if they match the user's question. If none match, \
answer concisely and helpfully, staying consistent with those examples.";

/// Build the message sequence for a fallback request
///
/// Layout: system instruction, then up to `max_examples` stored pairs as
/// user/assistant turns in order, then the user input as the final turn.
pub fn build_messages(
    input: &str,
    examples: &[ConversationPair],
    max_examples: usize,
) -> Vec<ChatMessage> {
    let shown = examples.len().min(max_examples);
    let mut messages = Vec::with_capacity(2 + shown * 2);

    messages.push(ChatMessage::system(SYSTEM_INSTRUCTION));
    for pair in &examples[..shown] {
        messages.push(ChatMessage::user(pair.pattern()));
        messages.push(ChatMessage::assistant(pair.response()));
    }
    messages.push(ChatMessage::user(input));

    messages
}
