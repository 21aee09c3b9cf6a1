//! Manifest field presence and format checks.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::error::Result;

use super::{RECOMMENDED_FIELDS, REQUIRED_FIELDS};

/// Three numeric components with an optional suffix, e.g. `1.2.3` or
/// `1.2.3-beta.1`.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+([.-].+)?$").expect("version pattern compiles"));

/// Outcome of validating one manifest.
#[derive(Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Required fields absent from the document. Any entry fails validation.
    pub missing_required: Vec<String>,
    /// The `url` field when it does not parse as a URL. Fails validation.
    pub invalid_url: Option<String>,
    /// Soft findings: missing recommended fields, odd-looking version,
    /// malformed hash.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing_required.is_empty() && self.invalid_url.is_none()
    }
}

/// Loads the manifest at `path` and checks it.
pub fn validate_manifest(path: &Path) -> Result<ValidationReport> {
    let doc = super::load(path)?;
    Ok(validate(&doc))
}

/// Checks an in-memory manifest document.
pub fn validate(doc: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in REQUIRED_FIELDS {
        if doc.get(field).is_none() {
            report.missing_required.push(field.to_string());
        }
    }

    for field in RECOMMENDED_FIELDS {
        if doc.get(field).is_none() {
            report
                .warnings
                .push(format!("recommended field '{}' is missing", field));
        }
    }

    if let Some(version) = doc.get("version").and_then(Value::as_str)
        && !VERSION_PATTERN.is_match(version)
    {
        report.warnings.push(format!(
            "version '{}' does not look like MAJOR.MINOR.PATCH",
            version
        ));
    }

    if let Some(url) = doc.get("url") {
        let valid = url.as_str().is_some_and(|s| Url::parse(s).is_ok());
        if !valid {
            report.invalid_url = Some(url.to_string());
        }
    }

    // A present-but-malformed hash is only a warning; a missing hash is
    // already a required-field failure.
    if let Some(hash) = doc.get("hash").and_then(Value::as_str)
        && (hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit()))
    {
        report
            .warnings
            .push(format!("hash '{}' is not a 64-character hex digest", hash));
    }

    report
}
