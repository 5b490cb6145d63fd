//! Infrastructure layer for Parley.
//!
//! Contains the concrete `LlmProvider` for Google Gemini and the
//! environment-backed startup configuration.

pub mod config;
pub mod llm;
