//! Random-user API client.
//!
//! Thin async wrapper over [`crate::http`] used by commands. Errors carry
//! enough detail for the log; the UI shows a generic failure label and
//! leaves the specifics here.

use thiserror::Error;

use crate::http;
use crate::records::{RandomUserResponse, UserRecord};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// GET `/api/?results={results}&page={page}[&seed={seed}]`
pub async fn fetch_users(
    api_base_url: &str,
    results: u32,
    seed: Option<&str>,
    page: u32,
) -> ApiResult<Vec<UserRecord>> {
    let mut url = format!("{api_base_url}/api/?results={results}&page={page}");
    if let Some(seed) = seed {
        url.push_str("&seed=");
        url.push_str(seed);
    }

    log::debug!("fetch_users: GET {url}");

    let response = http::get(&url)
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.is_success() {
        log::warn!("fetch_users: {url} returned {}", response.status);
        return Err(ApiError::Status(response.status));
    }

    let parsed: RandomUserResponse = response
        .json()
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    log::debug!(
        "fetch_users: page {page} returned {} users",
        parsed.results.len()
    );
    Ok(parsed.results)
}
