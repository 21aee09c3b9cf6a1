//! Typed URL-template value for autoupdate fields.

/// Placeholder token the package manager substitutes at update time.
pub const PLACEHOLDER: &str = "$version";

/// The position of a version string inside an asset filename, stored as the
/// literal text around it. Computed once and rendered functionally, so a
/// filename that does not embed the version is an explicit `None` rather
/// than a silent no-op substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionTemplate {
    prefix: String,
    suffix: String,
}

impl VersionTemplate {
    /// Locates the first occurrence of `version` inside `filename`.
    pub fn locate(filename: &str, version: &str) -> Option<Self> {
        let start = filename.find(version)?;
        Some(Self {
            prefix: filename[..start].to_string(),
            suffix: filename[start + version.len()..].to_string(),
        })
    }

    /// Renders the filename with the version replaced by [`PLACEHOLDER`].
    pub fn render(&self) -> String {
        format!("{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
    }
}
