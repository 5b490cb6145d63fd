//! HTTP layer for Parley.
//!
//! Axum router with four JSON endpoints at the root path and an
//! allow-everything CORS policy for the browser frontend.

pub mod error;
pub mod handlers;
pub mod router;
