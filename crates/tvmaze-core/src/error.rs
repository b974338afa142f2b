//! Error types for the TVMaze widget
//!
//! This module defines all error types used throughout the library.
//! TvMazeError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for TVMaze widget operations
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Failed to parse the JSON body
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Client configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to render markup
    #[error("Failed to render markup: {0}")]
    RenderError(String),
}

impl From<serde_json::Error> for TvMazeError {
    fn from(err: serde_json::Error) -> Self {
        TvMazeError::ParseError(err.to_string())
    }
}

impl From<askama::Error> for TvMazeError {
    fn from(err: askama::Error) -> Self {
        TvMazeError::RenderError(err.to_string())
    }
}

/// Serialize TvMazeError as a string for Tauri compatibility
impl Serialize for TvMazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVMaze widget operations
pub type Result<T> = std::result::Result<T, TvMazeError>;
