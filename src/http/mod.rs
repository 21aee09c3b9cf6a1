//! HTTP client module for API lookups and bounded-redirect downloads.

mod client;

pub use client::{API_TIMEOUT, DOWNLOAD_TIMEOUT, HttpClient, MAX_REDIRECTS};
