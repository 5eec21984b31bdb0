use crate::models::chat::{ChatMessage, ChatRequest};

/// Assemble the chat-completion payload: the persona as a system message
/// followed by the user's query, verbatim. An empty query passes through.
pub fn build_request(model: &str, system_prompt: &str, query: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(query)],
    }
}
