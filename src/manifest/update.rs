//! Partial manifest rewrite from resolved release data.

use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::error::Result;
use crate::resolver::ReleaseInfo;

use super::template::VersionTemplate;

/// Rewrites the release-owned fields of the manifest at `path` in place.
/// The file is only touched after the document parsed successfully.
#[tracing::instrument(skip(info))]
pub fn update_manifest(path: &Path, info: &ReleaseInfo) -> Result<()> {
    let mut doc = super::load(path)?;

    apply_release(&mut doc, info);
    super::save(path, &doc)?;

    info!("Updated {} to version {}", path.display(), info.version);
    Ok(())
}

/// Applies the field rewrite rules to an in-memory manifest document.
///
/// `version`, `url` and `hash` are always set. `homepage` and
/// `checkver.github` are overwritten with the repo URL only when already
/// present. The `autoupdate` templates are derived from the asset URL when
/// an `autoupdate` object exists. Everything else is left untouched.
pub fn apply_release(doc: &mut Value, info: &ReleaseInfo) {
    if let Some(obj) = doc.as_object_mut() {
        obj.insert("version".to_string(), Value::String(info.version.clone()));
        obj.insert("url".to_string(), Value::String(info.asset_url.clone()));
        obj.insert("hash".to_string(), Value::String(info.hash.clone()));

        if obj.contains_key("homepage") {
            obj.insert("homepage".to_string(), Value::String(info.repo_url.clone()));
        }
    }

    if let Some(github) = doc.pointer_mut("/checkver/github") {
        *github = Value::String(info.repo_url.clone());
    }

    if doc.get("autoupdate").is_some() {
        apply_autoupdate(doc, info);
    }
}

fn apply_autoupdate(doc: &mut Value, info: &ReleaseInfo) {
    let (base, filename) = split_asset_url(&info.asset_url);

    let templated = match VersionTemplate::locate(filename, &info.version) {
        Some(template) => template.render(),
        None => {
            warn!(
                "version {} does not occur in asset filename {}; autoupdate URL left untemplated",
                info.version, filename
            );
            filename.to_string()
        }
    };
    let autoupdate_url = format!("{}{}", base, templated);

    if let Some(autoupdate) = doc.get_mut("autoupdate").and_then(Value::as_object_mut) {
        autoupdate.insert("url".to_string(), Value::String(autoupdate_url));
    }

    if let Some(hash_url) = doc.pointer_mut("/autoupdate/hash/url") {
        *hash_url = Value::String(format!("{}.sha256", info.asset_url));
    }
}

/// Splits an asset URL at its final path segment.
fn split_asset_url(url: &str) -> (&str, &str) {
    match url.rfind('/') {
        Some(i) => url.split_at(i + 1),
        None => ("", url),
    }
}
