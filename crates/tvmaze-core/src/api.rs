//! Main TVMaze API
//!
//! This module provides the high-level API used by the widget. It combines
//! the HTTP client with the JSON parsers: search shows by term and list the
//! episodes of a show.

use crate::client::TvMazeClient;
use crate::error::Result;
use crate::parser::{parse_episodes, parse_search_results, DEFAULT_PLACEHOLDER_IMAGE};
use crate::types::{Episode, Show};
use crate::url::{build_episodes_path, build_search_path};

/// High-level TVMaze API
///
/// All operations are asynchronous and return a typed [`Result`].
///
/// # Example
/// ```no_run
/// use tvmaze_core::TvMazeApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = TvMazeApi::new()?;
///
///     let shows = api.search_shows("Lost").await?;
///     println!("Found {} shows", shows.len());
///
///     Ok(())
/// }
/// ```
pub struct TvMazeApi {
    client: TvMazeClient,
    placeholder_image: String,
}

impl TvMazeApi {
    /// Create a new API with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(TvMazeClient::new()?))
    }

    /// Create a new API with a custom client.
    ///
    /// Useful for tests or when the client needs a different base URL.
    pub fn with_client(client: TvMazeClient) -> Self {
        Self {
            client,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Replace the image used for shows without a medium-size image.
    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    /// Image used for shows without a medium-size image.
    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Search for shows matching a free-text term.
    ///
    /// The term is sent as-is (percent-encoded); an empty term is not rejected.
    ///
    /// # Returns
    /// * `Ok(Vec<Show>)` in API order, empty when nothing matches
    /// * `Err(TvMazeError)` if the request or the body fails
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let api = TvMazeApi::new()?;
    /// for show in api.search_shows("Breaking Bad").await? {
    ///     println!("{} ({})", show.name, show.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let body = self.client.fetch(&build_search_path(term)).await?;
        parse_search_results(&body, &self.placeholder_image)
    }

    /// List all episodes of a show.
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` in API order (season, then episode number)
    /// * `Err(TvMazeError::NotFound)` if the show does not exist
    ///
    /// # Example
    /// ```no_run
    /// use tvmaze_core::TvMazeApi;
    ///
    /// # async fn example() -> Result<(), tvmaze_core::TvMazeError> {
    /// let api = TvMazeApi::new()?;
    /// for ep in api.list_episodes(123).await? {
    ///     println!("{}", ep.label());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_episodes(&self, show_id: u32) -> Result<Vec<Episode>> {
        let body = self.client.fetch(&build_episodes_path(show_id)).await?;
        parse_episodes(&body)
    }
}
