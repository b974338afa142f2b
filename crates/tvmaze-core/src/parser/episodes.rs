//! Episode list parser for the TVMaze API
//!
//! Parses the JSON body of `/shows/{id}/episodes`.

use serde::Deserialize;

use crate::error::Result;
use crate::types::Episode;

/// Title shown for episodes the API has not named yet
pub const UNTITLED_EPISODE: &str = "Unknown";

/// Episode as returned by the API; fields beyond these are ignored
#[derive(Debug, Deserialize)]
pub struct RawEpisode {
    pub id: u32,
    /// May be null for announced but untitled episodes
    #[serde(default)]
    pub name: Option<String>,
    pub season: u32,
    pub number: u32,
}

impl From<RawEpisode> for Episode {
    fn from(raw: RawEpisode) -> Self {
        Episode {
            id: raw.id,
            name: raw.name.unwrap_or_else(|| UNTITLED_EPISODE.to_string()),
            season: raw.season,
            number: raw.number,
        }
    }
}

/// Parse the `/shows/{id}/episodes` response body.
///
/// Episodes keep the order the API sends them in (season, then number).
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    let raw: Vec<RawEpisode> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Episode::from).collect())
}
