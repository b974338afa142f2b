//! Data types for the TVMaze widget
//!
//! Normalized view models built from API responses. All types implement
//! Serialize and Deserialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// Normalized view of a television series returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// TVMaze show identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Summary as supplied by the API (HTML); empty when the API has none
    pub summary: String,
    /// Medium-size image URL, or the placeholder image URL; never empty
    pub image: String,
}

/// Normalized view of a single episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// TVMaze episode identifier
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}

impl Episode {
    /// Human-readable entry, e.g. `Pilot (season 1, ep. 1)`
    pub fn label(&self) -> String {
        format!("{} (season {}, ep. {})", self.name, self.season, self.number)
    }
}
