//! Error types for editor configuration.
//!
//! Diagram transitions are total and never fail, so configuration is the only
//! fallible surface of the crate.

use thiserror::Error;

/// Errors raised while loading or validating an [`EditorConfig`](crate::EditorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Grid width must be at least one column
    #[error("grid width must be positive")]
    ZeroWidth,

    /// Grid height must be at least one row
    #[error("grid height must be positive")]
    ZeroHeight,

    /// Grid exceeds the supported number of columns or rows
    #[error("grid {width}x{height} exceeds the maximum of {max} cells per side")]
    TooLarge {
        /// Configured columns
        width: u32,
        /// Configured rows
        height: u32,
        /// Maximum cells per side
        max: u32,
    },

    /// Display scale must be a positive, finite number of pixels per cell
    #[error("display scale must be positive and finite, got {0}")]
    InvalidScale(f32),

    /// Mode string other than `dot` or `line`
    #[error("unknown mode {0:?}, expected \"dot\" or \"line\"")]
    UnknownMode(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
