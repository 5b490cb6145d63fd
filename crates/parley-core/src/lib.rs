//! Conversation logic and port traits for Parley.
//!
//! This crate defines the ports (`LlmProvider`, `HistoryStore`) that the
//! infrastructure layer implements, plus the `ChatService` that drives
//! them. It depends only on `parley-types` and `parley-observe` -- never
//! on `parley-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
