//! GitHub release API types and client.

mod client;
mod repo;
mod types;

pub use client::{GetRelease, GitHub};
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockGetRelease;
