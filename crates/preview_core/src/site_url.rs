//! Site URL derivation from the manifest location.

/// File name the site URL heuristic strips from the manifest URL.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Returns `manifest_url` up to the last occurrence of `manifest.json`.
///
/// This is a textual heuristic rather than a URL path operation: manifests served under any
/// other file name (`app.webmanifest`, `site.json`, ...) come back unchanged.
pub fn resolve_site_url(manifest_url: &str) -> String {
    match manifest_url.rfind(MANIFEST_FILE_NAME) {
        Some(index) => manifest_url[..index].to_string(),
        None => manifest_url.to_string(),
    }
}
