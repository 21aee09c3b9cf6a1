//! Asset selection module
//!
//! Selects which asset to download from a GitHub release. The bucket targets
//! a single platform, so selection is a fixed windows + amd64/x86_64 name
//! match with no fallback.

mod picker;

pub use picker::pick_windows_asset;
