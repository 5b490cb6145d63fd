//! Shared domain types for Parley.
//!
//! Chat turns, generation request/response shapes, and the error types
//! used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod error;
pub mod llm;
