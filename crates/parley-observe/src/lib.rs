//! Tracing setup and GenAI span attribute conventions for Parley.

pub mod genai_attrs;
pub mod tracing_setup;
