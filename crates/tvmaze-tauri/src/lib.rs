//! TVMaze Show Widget Tauri Integration
//!
//! This crate provides Tauri commands that drive the show widget from a
//! webview frontend. The frontend forwards its form submission and the
//! "Episodes" control activations; every command answers with a
//! [`ViewSnapshot`](tvmaze_core::ViewSnapshot) to draw.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tvmaze_tauri::WidgetState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(WidgetState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             tvmaze_tauri::commands::submit_search,
//!             tvmaze_tauri::commands::request_episodes,
//!             tvmaze_tauri::commands::activate_episodes,
//!             tvmaze_tauri::commands::view_snapshot,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `submit_search` - Search shows and render the cards
//! - `request_episodes` - Load and reveal the episodes of a show
//! - `activate_episodes` - Same, resolving the show from a card position
//! - `view_snapshot` - Current state of both containers

pub mod commands;

use std::sync::Arc;

use tvmaze_core::{ShowWidget, TvMazeApi};

/// Shared widget managed by Tauri.
///
/// The widget synchronizes its own containers, so commands only need a
/// shared reference.
pub struct WidgetState {
    widget: Arc<ShowWidget>,
}

impl WidgetState {
    /// Create a widget backed by the public TVMaze API.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        let api = TvMazeApi::new().map_err(|e| e.to_string())?;
        Ok(Self::with_api(api))
    }

    /// Create a widget around a preconfigured API.
    pub fn with_api(api: TvMazeApi) -> Self {
        Self {
            widget: Arc::new(ShowWidget::new(api)),
        }
    }

    /// Get a reference to the inner widget.
    pub fn widget(&self) -> &Arc<ShowWidget> {
        &self.widget
    }
}
