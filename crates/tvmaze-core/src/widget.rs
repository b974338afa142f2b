//! Widget controller
//!
//! Wires the two user actions to the API and the view containers:
//! - search submitted: fetch shows, hide the episodes area, render the cards
//! - episodes requested: fetch episodes, render them, reveal the area
//!
//! Every request takes a generation number. A response whose generation is
//! no longer the newest is discarded, so a slow older search can never
//! overwrite a newer one. The view lock is never held across a request.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::api::TvMazeApi;
use crate::error::Result;
use crate::view::{UiEvent, View, ViewSnapshot};

/// What happened to the view after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered
    Rendered,
    /// A newer request superseded this one; the response was dropped
    Stale,
    /// The activation did not resolve to any show card
    Ignored,
}

/// Show search and episode listing widget
pub struct ShowWidget {
    api: TvMazeApi,
    view: Mutex<View>,
    search_generation: AtomicU64,
    episodes_generation: AtomicU64,
}

impl ShowWidget {
    /// Create a widget with empty containers
    pub fn new(api: TvMazeApi) -> Self {
        Self::with_view(api, View::new())
    }

    /// Create a widget that renders into the given containers
    pub fn with_view(api: TvMazeApi, view: View) -> Self {
        Self {
            api,
            view: Mutex::new(view),
            search_generation: AtomicU64::new(0),
            episodes_generation: AtomicU64::new(0),
        }
    }

    /// Dispatch a user interface event
    pub async fn handle(&self, event: UiEvent) -> Result<Outcome> {
        match event {
            UiEvent::SearchSubmitted { term } => self.submit_search(&term).await,
            UiEvent::EpisodesRequested { show_id } => self.request_episodes(show_id).await,
        }
    }

    /// Search for `term`, hide the episodes area and render the result cards.
    ///
    /// Also invalidates any episode request still in flight.
    pub async fn submit_search(&self, term: &str) -> Result<Outcome> {
        let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.episodes_generation.fetch_add(1, Ordering::SeqCst);

        let shows = self.api.search_shows(term).await.inspect_err(|e| {
            tracing::warn!(term, error = %e, "show search failed");
        })?;

        let mut view = self.view.lock().await;
        if generation != self.search_generation.load(Ordering::SeqCst) {
            tracing::debug!(term, generation, "discarding stale search response");
            return Ok(Outcome::Stale);
        }

        view.shows.populate(&shows)?;
        view.episodes.hide();
        tracing::info!(term, count = shows.len(), "rendered shows");
        Ok(Outcome::Rendered)
    }

    /// Fetch the episodes of `show_id`, render them and reveal the area.
    pub async fn request_episodes(&self, show_id: u32) -> Result<Outcome> {
        let generation = self.episodes_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let episodes = self.api.list_episodes(show_id).await.inspect_err(|e| {
            tracing::warn!(show_id, error = %e, "episode listing failed");
        })?;

        let mut view = self.view.lock().await;
        if generation != self.episodes_generation.load(Ordering::SeqCst) {
            tracing::debug!(show_id, generation, "discarding stale episodes response");
            return Ok(Outcome::Stale);
        }

        view.episodes.populate(&episodes)?;
        view.episodes.show();
        tracing::info!(show_id, count = episodes.len(), "rendered episodes");
        Ok(Outcome::Rendered)
    }

    /// Activate the "Episodes" control of the card at `position`.
    ///
    /// The show id comes from the card itself; positions without a card are
    /// ignored.
    pub async fn activate_episodes(&self, position: usize) -> Result<Outcome> {
        let event = self.view.lock().await.shows.episodes_request_at(position);

        match event {
            Some(event) => self.handle(event).await,
            None => {
                tracing::debug!(position, "episodes control did not resolve to a card");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Copy of the current view state
    pub async fn snapshot(&self) -> ViewSnapshot {
        self.view.lock().await.snapshot()
    }

    /// Run `f` with read access to the containers
    pub async fn with_view_ref<R>(&self, f: impl FnOnce(&View) -> R) -> R {
        f(&*self.view.lock().await)
    }
}
