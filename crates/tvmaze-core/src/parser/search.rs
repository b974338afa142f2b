//! Search results parser for the TVMaze API
//!
//! Parses the JSON body of `/search/shows` and normalizes every hit into a
//! [`Show`].

use serde::Deserialize;

use crate::error::Result;
use crate::types::Show;

/// Image used when the API supplies no medium-size image
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://static.tvmaze.com/images/no-img/no-img-portrait-text.png";

/// One entry of the search response; the relevance score is ignored
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub show: RawShow,
}

/// Show as returned by the API
#[derive(Debug, Deserialize)]
pub struct RawShow {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<RawImage>,
}

/// Image variants of a show; only the medium size is displayed
#[derive(Debug, Deserialize)]
pub struct RawImage {
    #[serde(default)]
    pub medium: Option<String>,
}

/// Normalize a raw show, substituting `placeholder` when no medium image exists.
///
/// # Examples
/// ```
/// use tvmaze_core::parser::{normalize_show, RawShow};
///
/// let raw = RawShow { id: 2, name: "Nowhere".into(), summary: None, image: None };
/// let show = normalize_show(raw, "missing.png");
/// assert_eq!(show.image, "missing.png");
/// assert_eq!(show.summary, "");
/// ```
pub fn normalize_show(raw: RawShow, placeholder: &str) -> Show {
    let image = raw
        .image
        .and_then(|image| image.medium)
        .filter(|medium| !medium.is_empty())
        .unwrap_or_else(|| placeholder.to_string());

    Show {
        id: raw.id,
        name: raw.name,
        summary: raw.summary.unwrap_or_default(),
        image,
    }
}

/// Parse the `/search/shows` response body.
///
/// # Arguments
/// * `json` - Raw response body
/// * `placeholder` - Image URL used for shows without a medium image
///
/// # Returns
/// * `Ok(Vec<Show>)` in response order
/// * `Err(TvMazeError::ParseError)` if the body is not the expected JSON
pub fn parse_search_results(json: &str, placeholder: &str) -> Result<Vec<Show>> {
    let hits: Vec<SearchHit> = serde_json::from_str(json)?;

    Ok(hits
        .into_iter()
        .map(|hit| normalize_show(hit.show, placeholder))
        .collect())
}
