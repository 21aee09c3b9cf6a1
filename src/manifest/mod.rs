//! Bucket manifest documents.
//!
//! A manifest is an opaque JSON document: it is read, partially rewritten
//! and written back with its key order intact. Only the fields owned by the
//! updater ever change; everything else round-trips untouched.

mod template;
mod update;
mod validate;

pub use template::VersionTemplate;
pub use update::{apply_release, update_manifest};
pub use validate::{ValidationReport, validate, validate_manifest};

use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Fields a manifest must carry.
pub const REQUIRED_FIELDS: [&str; 5] = ["version", "homepage", "license", "url", "hash"];

/// Fields a manifest should carry; their absence is only a warning.
pub const RECOMMENDED_FIELDS: [&str; 4] = ["description", "bin", "checkver", "autoupdate"];

/// Reads and parses the manifest at `path`.
pub fn load(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::ManifestNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(Error::ManifestParse)
}

/// Serializes a manifest with 2-space indentation and a single trailing
/// newline, overwriting `path`.
pub fn save(path: &Path, doc: &Value) -> Result<()> {
    let mut text = serde_json::to_string_pretty(doc).map_err(Error::ManifestSerialize)?;
    text.push('\n');
    std::fs::write(path, text)?;
    Ok(())
}
