//! Path helpers for the TVMaze API
//!
//! Builds the request paths relative to the API root.

/// Builds the show search path for a given term
///
/// The term is percent-encoded and otherwise passed through untouched;
/// an empty term yields an empty `q` parameter.
///
/// # Example
/// ```
/// use tvmaze_core::url::build_search_path;
/// assert_eq!(build_search_path("doctor who"), "/search/shows?q=doctor%20who");
/// assert_eq!(build_search_path(""), "/search/shows?q=");
/// ```
pub fn build_search_path(term: &str) -> String {
    format!("/search/shows?q={}", urlencoding::encode(term))
}

/// Builds the episode list path for a show
///
/// # Example
/// ```
/// use tvmaze_core::url::build_episodes_path;
/// assert_eq!(build_episodes_path(42), "/shows/42/episodes");
/// ```
pub fn build_episodes_path(show_id: u32) -> String {
    format!("/shows/{}/episodes", show_id)
}
