//! Release resolution: tag lookup, asset selection, download and hashing.

use log::info;
use sha2::{Digest, Sha256};
use url::Url;

use crate::asset::pick_windows_asset;
use crate::error::{Error, Result};
use crate::github::{GetRelease, GitHubRepo};
use crate::http::HttpClient;

/// Everything the manifest updater needs to know about one resolved release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseInfo {
    /// Tag string as supplied by the caller, not re-verified against the API.
    pub version: String,
    /// Canonical `https://host/owner/repo` URL.
    pub repo_url: String,
    /// The release's human-facing page URL.
    pub release_url: String,
    /// Direct download URL of the chosen asset.
    pub asset_url: String,
    /// Lowercase hex SHA-256 of the asset's raw bytes.
    pub hash: String,
}

/// Resolves a tagged release into a [`ReleaseInfo`].
pub struct ReleaseResolver<G> {
    github: G,
    http: HttpClient,
}

impl<G: GetRelease> ReleaseResolver<G> {
    pub fn new(github: G, http: HttpClient) -> Self {
        Self { github, http }
    }

    /// Fetches the release for `version`, picks its Windows asset, downloads
    /// it into memory and hashes it. Fails without side effects; nothing is
    /// written to disk.
    #[tracing::instrument(skip(self, repo))]
    pub async fn resolve(&self, repo: &GitHubRepo, version: &str) -> Result<ReleaseInfo> {
        info!("Resolving release {} of {}...", version, repo);

        let release = self.github.release_by_tag(repo, version).await?;

        let asset = pick_windows_asset(&release.assets).ok_or_else(|| Error::AssetNotFound {
            tag: version.to_string(),
            names: release.assets.iter().map(|a| a.name.clone()).collect(),
        })?;

        info!("Downloading asset {}...", asset.name);
        let bytes = self.http.download_bytes(&asset.browser_download_url).await?;

        let hash = hex::encode(Sha256::digest(&bytes));
        info!("Asset is {} bytes, sha256 {}", bytes.len(), hash);

        Ok(ReleaseInfo {
            version: version.to_string(),
            repo_url: derive_repo_url(&release.html_url, repo),
            release_url: release.html_url.clone(),
            asset_url: asset.browser_download_url.clone(),
            hash,
        })
    }
}

/// Re-derives `https://host/owner/repo` from the release page URL rather than
/// from the input coordinates, tolerating casing and redirect differences
/// coming back from the API. Falls back to the input coordinates when the
/// page URL does not carry two path segments.
pub fn derive_repo_url(release_url: &str, repo: &GitHubRepo) -> String {
    if let Ok(parsed) = Url::parse(release_url)
        && let (Some(host), Some(mut segments)) = (parsed.host_str(), parsed.path_segments())
        && let (Some(owner), Some(name)) = (segments.next(), segments.next())
        && !owner.is_empty()
        && !name.is_empty()
    {
        return format!("{}://{}/{}/{}", parsed.scheme(), host, owner, name);
    }
    format!("https://github.com/{}/{}", repo.owner, repo.repo)
}
