//! Conversation history, prompt rendering, and the chat service.

pub mod history;
pub mod prompt;
pub mod service;
