//! HTTP client with rate limiting for the TVMaze API
//!
//! This module provides a rate-limited HTTP client that stays under the
//! TVMaze request quota and retries transient failures with exponential
//! backoff.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, TvMazeError};

/// Base URL of the public TVMaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("tvmaze-widget/", env!("CARGO_PKG_VERSION"));

/// Base delay for exponential backoff (in milliseconds)
const BASE_RETRY_DELAY_MS: u64 = 500;

/// Upper bound for a single backoff delay (in milliseconds)
const MAX_RETRY_DELAY_MS: u64 = 30_000;

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart.
/// TVMaze allows roughly 20 calls per 10 seconds per IP.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// A rate that does not yield a representable interval (zero, negative,
    /// NaN, or vanishingly small) disables throttling; [`TvMazeClient::with_config`]
    /// rejects such rates before they get here.
    ///
    /// # Example
    /// ```
    /// use tvmaze_core::client::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(2.0); // 2 requests per second
    /// ```
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = min_interval_for(requests_per_second).unwrap_or(Duration::ZERO);
        let now = Instant::now();
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(now.checked_sub(min_interval).unwrap_or(now))),
        }
    }

    /// Acquire permission to make a request
    ///
    /// Waits if necessary so the minimum interval between requests holds.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the TVMaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash (default: https://api.tvmaze.com)
    pub base_url: String,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Retries for 429 and 5xx responses (default: 2)
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            requests_per_second: 2.0,
            timeout_secs: 30,
            max_retries: 2,
        }
    }
}

/// HTTP client for the TVMaze API with rate limiting and retry logic
///
/// This client automatically:
/// - Limits request rate to stay under the API quota
/// - Retries on transient errors (429, 5xx) with exponential backoff
/// - Asks for JSON responses
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Rate limiter for request throttling
    rate_limiter: RateLimiter,
    /// API root without trailing slash
    base_url: String,
    /// Retry budget for transient failures
    max_retries: u32,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `TvMazeError::InvalidConfig` - `requests_per_second` is not a positive, finite rate
    /// - `TvMazeError::HttpError` - The HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if min_interval_for(config.requests_per_second).is_none() {
            return Err(TvMazeError::InvalidConfig(format!(
                "requests_per_second must be a positive finite number, got {}",
                config.requests_per_second
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of a TVMaze path
    ///
    /// This method handles rate limiting and retries automatically.
    ///
    /// # Arguments
    /// * `path` - Path and query relative to the API root (e.g., "/search/shows?q=lost")
    ///
    /// # Errors
    /// - `TvMazeError::HttpError` - Network failure or timeout
    /// - `TvMazeError::RateLimited` - Server returned 429 after all retries
    /// - `TvMazeError::NotFound` - Server returned 404
    /// - `TvMazeError::Status` - Any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0;

        loop {
            self.rate_limiter.acquire().await;
            tracing::debug!(%url, attempt, "GET");

            let response = self.client.get(&url).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response.text().await?);
            }

            if status == StatusCode::NOT_FOUND {
                return Err(TvMazeError::NotFound(path.to_string()));
            }

            let transient = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            if transient && attempt < self.max_retries {
                let delay = calculate_backoff_delay(attempt);
                tracing::warn!(%url, status = status.as_u16(), ?delay, "transient failure, retrying");
                sleep(delay).await;
                attempt += 1;
                continue;
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(TvMazeError::RateLimited);
            }

            return Err(TvMazeError::Status {
                status: status.as_u16(),
                url,
            });
        }
    }

    /// Get a reference to the rate limiter (for testing)
    #[cfg(test)]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

/// Interval between requests for a rate, if the rate is usable
fn min_interval_for(requests_per_second: f64) -> Option<Duration> {
    if !(requests_per_second.is_finite() && requests_per_second > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(1.0 / requests_per_second).ok()
}

/// Exponential backoff: 500ms, 1s, 2s, ... capped at 30s
fn calculate_backoff_delay(attempt: u32) -> Duration {
    let delay_ms = 2u64
        .checked_pow(attempt)
        .and_then(|factor| BASE_RETRY_DELAY_MS.checked_mul(factor))
        .map_or(MAX_RETRY_DELAY_MS, |ms| ms.min(MAX_RETRY_DELAY_MS));
    Duration::from_millis(delay_ms)
}
