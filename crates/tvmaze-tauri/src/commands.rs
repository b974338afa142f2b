//! Tauri commands for the TVMaze show widget
//!
//! This module contains all Tauri commands that can be invoked from the frontend.
//! Failures are logged and returned to the frontend as their message.

use tauri::State;

use crate::WidgetState;
use tvmaze_core::{Outcome, TvMazeError, ViewSnapshot};

/// Search for shows and render the cards.
///
/// The episodes area is hidden as part of the search.
///
/// # Arguments
/// * `term` - Text of the search input, sent as-is
///
/// # Returns
/// * `Ok(ViewSnapshot)` with the updated containers
/// * `Err(String)` with error message if the search fails
#[tauri::command]
pub async fn submit_search(
    state: State<'_, WidgetState>,
    term: String,
) -> Result<ViewSnapshot, String> {
    let widget = state.widget();
    let outcome = widget.submit_search(&term).await.map_err(report)?;
    tracing::debug!(?outcome, "submit_search");
    Ok(widget.snapshot().await)
}

/// Load the episodes of a show and reveal the episodes area.
///
/// # Arguments
/// * `show_id` - TVMaze ID of the show
#[tauri::command]
pub async fn request_episodes(
    state: State<'_, WidgetState>,
    show_id: u32,
) -> Result<ViewSnapshot, String> {
    let widget = state.widget();
    let outcome = widget.request_episodes(show_id).await.map_err(report)?;
    tracing::debug!(?outcome, "request_episodes");
    Ok(widget.snapshot().await)
}

/// Activate the "Episodes" control of the card at `position`.
///
/// # Arguments
/// * `position` - Zero-based index of the card in the shows container
///
/// # Returns
/// * `Ok(ViewSnapshot)`, unchanged when no card exists at `position`
#[tauri::command]
pub async fn activate_episodes(
    state: State<'_, WidgetState>,
    position: usize,
) -> Result<ViewSnapshot, String> {
    let widget = state.widget();
    if widget.activate_episodes(position).await.map_err(report)? == Outcome::Ignored {
        tracing::debug!(position, "no show card at position");
    }
    Ok(widget.snapshot().await)
}

/// Current state of both containers.
#[tauri::command]
pub async fn view_snapshot(state: State<'_, WidgetState>) -> Result<ViewSnapshot, String> {
    Ok(state.widget().snapshot().await)
}

fn report(err: TvMazeError) -> String {
    tracing::warn!(error = %err, "widget command failed");
    err.to_string()
}
