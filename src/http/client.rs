//! HTTP client for API lookups and in-memory asset downloads.

use std::time::Duration;

use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, LOCATION};
use reqwest::{Client, StatusCode, redirect};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Timeout for release metadata requests.
pub const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for each asset download request.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum number of redirect hops followed for an asset download.
pub const MAX_REDIRECTS: usize = 5;

const USER_AGENT: &str = concat!("bucket-tools/", env!("CARGO_PKG_VERSION"));

/// HTTP client pairing an authenticated API client with an anonymous
/// download client. The download client never auto-follows redirects so the
/// hop count stays bounded; the access token is never attached to asset
/// downloads.
#[derive(Clone)]
pub struct HttpClient {
    api: Client,
    download: Client,
}

impl HttpClient {
    /// Creates a new HTTP client. The token, when present, authenticates
    /// release metadata requests only.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Config(format!("invalid access token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let api = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(API_TIMEOUT)
            .build()
            .map_err(Error::Network)?;

        let download = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(Error::Network)?;

        Ok(Self { api, download })
    }

    /// Performs a GET request and deserializes the JSON response.
    /// A non-success status becomes [`Error::Api`] carrying the raw body.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}...", url);

        let response = self.api.get(url).send().await.map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        response.json::<T>().await.map_err(Error::Network)
    }

    /// Downloads a URL into memory, following redirects manually up to
    /// [`MAX_REDIRECTS`] hops. Relative `Location` values resolve against
    /// the previous URL. A terminal non-200 status fails the download.
    #[tracing::instrument(skip(self))]
    pub async fn download_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut current = Url::parse(url)
            .map_err(|e| Error::Config(format!("invalid download URL '{}': {}", url, e)))?;

        for _hop in 0..=MAX_REDIRECTS {
            debug!("GET {}...", current);

            let response = self
                .download
                .get(current.clone())
                .send()
                .await
                .map_err(Error::Network)?;

            let status = response.status();
            if status.is_redirection() {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .ok_or(Error::Download { status })?;
                current = current.join(location).map_err(|e| {
                    Error::Config(format!("invalid redirect location '{}': {}", location, e))
                })?;
                continue;
            }
            if status != StatusCode::OK {
                return Err(Error::Download { status });
            }

            let bytes = response.bytes().await.map_err(Error::Network)?;
            debug!("Downloaded {} bytes", bytes.len());
            return Ok(bytes.to_vec());
        }

        Err(Error::TooManyRedirects {
            url: url.to_string(),
            limit: MAX_REDIRECTS,
        })
    }
}
