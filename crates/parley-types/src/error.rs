use thiserror::Error;

/// Errors raised while assembling startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} missing: set it in the environment or a .env file")]
    MissingApiKey { var: &'static str },

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}
