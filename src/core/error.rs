//! Error types for the cube-blocks widget

use thiserror::Error;

/// Main error type for the widget
#[derive(Debug, Error)]
pub enum Error {
    #[error("mount error: {0}")]
    Mount(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("payload error: {0}")]
    Payload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
