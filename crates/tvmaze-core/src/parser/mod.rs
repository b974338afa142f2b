//! JSON parsers for TVMaze API responses
//!
//! This module contains parsers for the two endpoints the widget consumes:
//! - `search`: Parse `/search/shows` hits into normalized shows
//! - `episodes`: Parse `/shows/{id}/episodes` into episodes

pub mod episodes;
pub mod search;

// Re-export main parsing functions
pub use episodes::{parse_episodes, RawEpisode, UNTITLED_EPISODE};
pub use search::{
    normalize_show, parse_search_results, RawImage, RawShow, SearchHit, DEFAULT_PLACEHOLDER_IMAGE,
};
