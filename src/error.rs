//! Error types shared across the crate.

use std::path::PathBuf;

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("GitHub API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error(
        "release '{tag}' has no windows amd64/x86_64 asset (available: {})",
        .names.join(", ")
    )]
    AssetNotFound { tag: String, names: Vec<String> },

    #[error("asset download failed with status {status}")]
    Download { status: StatusCode },

    #[error("download of '{url}' exceeded {limit} redirects")]
    TooManyRedirects { url: String, limit: usize },

    #[error("invalid repository: {0}")]
    InvalidRepo(String),

    #[error("manifest '{}' not found", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("manifest is not valid JSON: {0}")]
    ManifestParse(#[source] serde_json::Error),

    #[error("failed to serialize manifest: {0}")]
    ManifestSerialize(#[source] serde_json::Error),

    #[error("{0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
