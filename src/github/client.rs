use async_trait::async_trait;
use log::debug;

use crate::error::Result;
use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::Release;

/// Lookup of a single tagged release.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetRelease: Send + Sync {
    async fn release_by_tag(&self, repo: &GitHubRepo, tag: &str) -> Result<Release>;
}

pub struct GitHub {
    http: HttpClient,
    api_url: String,
}

impl GitHub {
    pub fn new(http: HttpClient) -> Self {
        Self::with_api_url(http, "https://api.github.com")
    }

    pub fn with_api_url(http: HttpClient, api_url: &str) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
        }
    }
}

#[async_trait]
impl GetRelease for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn release_by_tag(&self, repo: &GitHubRepo, tag: &str) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_url, repo.owner, repo.repo, tag
        );

        debug!("Fetching release {} from {}...", tag, url);

        self.http.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_release_by_tag() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let repo = GitHubRepo::new("test-owner", "test-repo").unwrap();

        let mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/tags/v1.0.0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "v1.0.0",
                    "html_url": "https://github.com/test-owner/test-repo/releases/tag/v1.0.0",
                    "assets": [
                        {
                            "name": "app-1.0.0-windows-amd64.zip",
                            "browser_download_url": "https://github.com/test-owner/test-repo/releases/download/v1.0.0/app-1.0.0-windows-amd64.zip"
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let github = GitHub::with_api_url(HttpClient::new(None).unwrap(), &url);
        let release = github.release_by_tag(&repo, "v1.0.0").await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "app-1.0.0-windows-amd64.zip");
    }

    #[tokio::test]
    async fn test_release_by_tag_not_found() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let repo = GitHubRepo::new("test-owner", "test-repo").unwrap();

        let mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/tags/v9.9.9")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let github = GitHub::with_api_url(HttpClient::new(None).unwrap(), &url);
        let result = github.release_by_tag(&repo, "v9.9.9").await;

        mock.assert_async().await;
        match result {
            Err(Error::Api { status, body }) => {
                assert_eq!(status.as_u16(), 404);
                assert!(body.contains("Not Found"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_release_by_tag_sends_auth_header() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let repo = GitHubRepo::new("test-owner", "test-repo").unwrap();

        let mock = server
            .mock("GET", "/repos/test-owner/test-repo/releases/tags/v1.0.0")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "v1.0.0",
                    "html_url": "https://github.com/test-owner/test-repo/releases/tag/v1.0.0",
                    "assets": []
                }"#,
            )
            .create_async()
            .await;

        let github = GitHub::with_api_url(HttpClient::new(Some("test-token")).unwrap(), &url);
        let release = github.release_by_tag(&repo, "v1.0.0").await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag_name, "v1.0.0");
        assert!(release.assets.is_empty());
    }
}
