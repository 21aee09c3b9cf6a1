use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use bucket_tools::github::{GitHub, GitHubRepo};
use bucket_tools::http::HttpClient;
use bucket_tools::manifest::update_manifest;
use bucket_tools::resolver::{ReleaseInfo, ReleaseResolver, derive_repo_url};

/// update-manifest - sync a bucket manifest with a tagged GitHub release
///
/// Looks up the release, picks the windows amd64/x86_64 asset, downloads and
/// hashes it, then rewrites the manifest's version/url/hash and autoupdate
/// fields in place.
///
/// If the GITHUB_TOKEN environment variable is set, it is used to
/// authenticate the release lookup. The asset download is always anonymous.
///
/// Passing --release-url, --asset-url and --hash together skips the network
/// entirely and applies the pre-resolved release data directly.
#[derive(Parser, Debug)]
#[command(name = "update-manifest", version, about)]
struct Cli {
    /// Path to the JSON manifest to rewrite
    manifest: PathBuf,

    /// Repository owner
    owner: String,

    /// Repository name
    repo: String,

    /// Release tag to resolve
    #[arg(id = "release-version", value_name = "VERSION")]
    version: String,

    /// Pre-resolved release page URL
    #[arg(long, value_name = "URL", requires = "asset_url", requires = "hash")]
    release_url: Option<String>,

    /// Pre-resolved asset download URL
    #[arg(long, value_name = "URL", requires = "release_url", requires = "hash")]
    asset_url: Option<String>,

    /// Pre-resolved lowercase hex SHA-256 of the asset
    #[arg(long, value_name = "HEX", requires = "release_url", requires = "asset_url")]
    hash: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Access token for the release lookup
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> bucket_tools::Result<()> {
    let repo = GitHubRepo::new(&cli.owner, &cli.repo)?;

    let release_info = match (cli.release_url, cli.asset_url, cli.hash) {
        (Some(release_url), Some(asset_url), Some(hash)) => {
            info!("Using pre-resolved release data for {}@{}", repo, cli.version);
            ReleaseInfo {
                version: cli.version,
                repo_url: derive_repo_url(&release_url, &repo),
                release_url,
                asset_url,
                hash,
            }
        }
        _ => {
            let http = HttpClient::new(cli.token.as_deref())?;
            let github = match cli.api_url.as_deref() {
                Some(api_url) => GitHub::with_api_url(http.clone(), api_url),
                None => GitHub::new(http.clone()),
            };
            ReleaseResolver::new(github, http)
                .resolve(&repo, &cli.version)
                .await?
        }
    };

    update_manifest(&cli.manifest, &release_info)
}
