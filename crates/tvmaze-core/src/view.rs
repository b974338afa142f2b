//! View containers for the widget
//!
//! Two containers hold the rendered markup: the shows list (one card per
//! show) and the episodes area (one entry per episode, hidden until an
//! episode list has been loaded). Both are always fully replaced, never
//! patched.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{render_episode_item, render_show_card, summary_text};
use crate::types::{Episode, Show};

/// Structured event produced by the user interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search form was submitted with the given text
    SearchSubmitted { term: String },
    /// The "Episodes" control of a show card was activated
    EpisodesRequested { show_id: u32 },
}

/// A rendered show card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    pub show_id: u32,
    pub html: String,
}

/// Container of rendered show cards
#[derive(Debug, Default)]
pub struct ShowsList {
    cards: Vec<ShowCard>,
}

impl ShowsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with one card per show, in order.
    ///
    /// All cards are rendered before anything is replaced, so a rendering
    /// failure leaves the previous content in place.
    pub fn populate(&mut self, shows: &[Show]) -> Result<()> {
        let cards = shows
            .iter()
            .map(|show| {
                Ok(ShowCard {
                    show_id: show.id,
                    html: render_show_card(show)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.cards = cards;
        Ok(())
    }

    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Markup of the whole container
    pub fn html(&self) -> String {
        self.cards
            .iter()
            .map(|card| card.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve an activation of the "Episodes" control of the card at `position`.
    ///
    /// The show id is read back from the `data-show-id` attribute of the
    /// `.Show` card that owns the control. Returns `None` when there is no
    /// such card, the card has no episodes control, or its id is unreadable.
    pub fn episodes_request_at(&self, position: usize) -> Option<UiEvent> {
        let document = Html::parse_fragment(&self.html());
        let card_selector = Selector::parse(".Show").ok()?;
        let control_selector = Selector::parse(".Show-getEpisodes").ok()?;

        let card = document.select(&card_selector).nth(position)?;
        card.select(&control_selector).next()?;

        let show_id = card.value().attr("data-show-id")?.parse().ok()?;
        Some(UiEvent::EpisodesRequested { show_id })
    }
}

/// Container of rendered episode entries
#[derive(Debug, Default)]
pub struct EpisodesArea {
    entries: Vec<String>,
    visible: bool,
}

impl EpisodesArea {
    /// Empty, hidden area
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with one entry per episode, in order.
    ///
    /// Visibility is left untouched.
    pub fn populate(&mut self, episodes: &[Episode]) -> Result<()> {
        let entries = episodes
            .iter()
            .map(render_episode_item)
            .collect::<Result<Vec<_>>>()?;

        self.entries = entries;
        Ok(())
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Markup of the whole container
    pub fn html(&self) -> String {
        self.entries.join("\n")
    }

    /// Displayed text of every entry, whitespace collapsed
    pub fn entry_texts(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| summary_text(entry))
            .collect()
    }
}

/// Both containers of the widget
#[derive(Debug, Default)]
pub struct View {
    pub shows: ShowsList,
    pub episodes: EpisodesArea,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializable copy of the current state
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            shows_html: self.shows.html(),
            show_ids: self.shows.cards().iter().map(|card| card.show_id).collect(),
            episodes_html: self.episodes.html(),
            episodes_visible: self.episodes.is_visible(),
        }
    }
}

/// What the frontend needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Markup for the shows container
    pub shows_html: String,
    /// Show id of every card, in display order
    pub show_ids: Vec<u32>,
    /// Markup for the episodes container
    pub episodes_html: String,
    /// Whether the episodes container is shown
    pub episodes_visible: bool,
}
