use crate::github::ReleaseAsset;

const PLATFORM_MARKER: &str = "windows";
const ARCH_MARKERS: [&str; 2] = ["amd64", "x86_64"];

/// Check if an asset name carries both the platform and an architecture marker
fn matches_target(name: &str) -> bool {
    let name_lower = name.to_lowercase();

    name_lower.contains(PLATFORM_MARKER) && ARCH_MARKERS.iter().any(|m| name_lower.contains(m))
}

/// Picks the first asset whose name names the Windows amd64/x86_64 build.
///
/// Returns `None` if no asset matches; there is no fallback selection.
pub fn pick_windows_asset(assets: &[ReleaseAsset]) -> Option<&ReleaseAsset> {
    assets.iter().find(|a| matches_target(&a.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to create test assets from names
    fn make_assets(names: &[&str]) -> Vec<ReleaseAsset> {
        names
            .iter()
            .map(|name| ReleaseAsset {
                name: name.to_string(),
                browser_download_url: format!("https://example.com/{}", name),
            })
            .collect()
    }

    #[test]
    fn test_picks_windows_amd64() {
        let assets = make_assets(&[
            "app-0.0.33-darwin-arm64.tar.gz",
            "app-0.0.33-linux-amd64.tar.gz",
            "app-0.0.33-windows-amd64.zip",
        ]);

        let picked = pick_windows_asset(&assets).unwrap();
        assert_eq!(picked.name, "app-0.0.33-windows-amd64.zip");
    }

    #[test]
    fn test_picks_windows_x86_64() {
        let assets = make_assets(&["app-linux-x86_64.tar.gz", "app-windows-x86_64.zip"]);

        let picked = pick_windows_asset(&assets).unwrap();
        assert_eq!(picked.name, "app-windows-x86_64.zip");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let assets = make_assets(&["App-Windows-AMD64.zip"]);

        assert!(pick_windows_asset(&assets).is_some());
    }

    #[test]
    fn test_no_windows_asset() {
        let assets = make_assets(&["app-linux-amd64.tar.gz", "app-darwin-arm64.tar.gz"]);

        assert!(pick_windows_asset(&assets).is_none());
    }

    #[test]
    fn test_windows_without_arch_marker_skipped() {
        // Platform marker alone is not enough
        let assets = make_assets(&["app-windows-arm64.zip", "app-windows-amd64.zip"]);

        let picked = pick_windows_asset(&assets).unwrap();
        assert_eq!(picked.name, "app-windows-amd64.zip");
    }

    #[test]
    fn test_first_match_wins() {
        let assets = make_assets(&[
            "app-windows-amd64.zip",
            "app-windows-amd64.msi",
        ]);

        let picked = pick_windows_asset(&assets).unwrap();
        assert_eq!(picked.name, "app-windows-amd64.zip");
    }

    #[test]
    fn test_empty_asset_list() {
        assert!(pick_windows_asset(&[]).is_none());
    }
}
