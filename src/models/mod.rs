//! Data models for the Chat Completions API.
//!
//! Only the subset shellbot sends and reads is modelled: a two-message
//! request and the `choices[].message.content` path of the response.

pub mod chat;

pub use chat::{
    ApiErrorBody, ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage, Role,
};
