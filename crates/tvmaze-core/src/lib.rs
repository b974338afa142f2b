//! TVMaze Show Widget Core Library
//!
//! This crate provides the core of a small show browser backed by the public
//! TVMaze API (<https://api.tvmaze.com>).
//!
//! # Features
//! - Search shows by free-text term
//! - List the episodes of a show on demand
//! - Render escaped show cards and episode entries
//! - Widget controller that discards stale responses
//! - Rate-limited HTTP client with retries for transient failures

pub mod api;
pub mod client;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;
pub mod url;
pub mod view;
pub mod widget;

// Re-export main types for convenience
pub use api::TvMazeApi;
pub use client::{ClientConfig, RateLimiter, TvMazeClient};
pub use error::{Result, TvMazeError};
pub use types::{Episode, Show};
pub use view::{EpisodesArea, ShowCard, ShowsList, UiEvent, View, ViewSnapshot};
pub use widget::{Outcome, ShowWidget};
