//! Error types surfaced by the preview engine.

use thiserror::Error;

/// Result alias used by fallible preview-engine entry points.
pub type PreviewResult<T> = Result<T, PreviewError>;

#[derive(Debug, Error)]
/// Failures reported by parsing and resolution helpers.
///
/// None of these reach the renderer: the total entry points ([`crate::resolve_icon_url`],
/// [`crate::legible_foreground`], [`crate::ViewModelBuilder::build`]) map them to documented
/// fallbacks.
pub enum PreviewError {
    /// The manifest document could not be decoded.
    #[error("manifest parse failed: {0}")]
    ManifestParse(#[source] serde_json::Error),
    /// The preview configuration document could not be decoded.
    #[error("preview config parse failed: {0}")]
    ConfigParse(#[source] serde_json::Error),
    /// An icon source could not be turned into an absolute URL.
    #[error("icon source `{src}` cannot be resolved against `{base}`")]
    UnresolvableIcon {
        /// Icon `src` as written in the manifest.
        src: String,
        /// Base URL the source was resolved against.
        base: String,
    },
    /// A CSS color string was not recognized.
    #[error("invalid color value `{0}`")]
    InvalidColor(String),
}
