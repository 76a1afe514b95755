//! Single-request fetch unit for the resolver service.

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// Errors that can occur during one best-effort fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, TLS, read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    /// CIR reports unknown names as 404, indistinguishable here from a
    /// server-side error.
    #[error("server returned {0}")]
    Status(StatusCode),

    /// The response body was not valid UTF-8
    #[error("response body was not valid UTF-8")]
    Decode,

    /// The fetch task was cancelled or panicked
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Fetch one plain-text resource from the service.
pub(crate) async fn fetch_text(client: &Client, url: Url) -> Result<String, FetchError> {
    log::debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let bytes = response.bytes().await?;
    String::from_utf8(bytes.to_vec()).map_err(|_| FetchError::Decode)
}
