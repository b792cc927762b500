//! Error type shared by the HTTP wrapper and configuration loading.
//! Messages are shown to users, so they must never contain credentials or
//! cookie values.

use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Response error: {0}")]
    Parse(String),

    #[error("Request error: {0}")]
    Serialization(String),
}
