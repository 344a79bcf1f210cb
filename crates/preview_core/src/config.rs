//! Session configuration for the preview engine.

use serde::{Deserialize, Serialize};

use crate::{
    error::{PreviewError, PreviewResult},
    icon::{IconResolver, DEFAULT_ICON_PROXY_BASE, PREFERRED_ICON_SIZE},
    model::{Platform, PreviewStage, PreviewState, DEFAULT_APP_DESCRIPTION, DEFAULT_APP_NAME},
    presentation::MAX_SHORTCUTS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Host-supplied knobs. Every field is optional in JSON and falls back to [`Default`].
pub struct PreviewConfig {
    /// Stage shown when a preview session starts.
    pub initial_stage: PreviewStage,
    /// Platform selected when a preview session starts.
    pub initial_platform: Platform,
    /// Icon proxy endpoint; icon URLs are rendered as `{icon_proxy_base}?url={absolute}`.
    pub icon_proxy_base: String,
    /// `sizes` token preferred when picking the display icon.
    pub preferred_icon_size: String,
    /// Name shown when the manifest name is blank.
    pub default_app_name: String,
    /// Description shown on the install stage when the manifest has none.
    pub default_description: String,
    /// Maximum number of shortcuts projected into the shortcuts stage.
    pub max_shortcuts: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            initial_stage: PreviewStage::Install,
            initial_platform: Platform::Android,
            icon_proxy_base: DEFAULT_ICON_PROXY_BASE.to_string(),
            preferred_icon_size: PREFERRED_ICON_SIZE.to_string(),
            default_app_name: DEFAULT_APP_NAME.to_string(),
            default_description: DEFAULT_APP_DESCRIPTION.to_string(),
            max_shortcuts: MAX_SHORTCUTS,
        }
    }
}

impl PreviewConfig {
    /// Decodes a (possibly partial) JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ConfigParse`] when `raw` is not valid configuration JSON.
    pub fn from_json(raw: &str) -> PreviewResult<Self> {
        serde_json::from_str(raw).map_err(PreviewError::ConfigParse)
    }

    pub fn initial_state(&self) -> PreviewState {
        PreviewState::new(self.initial_stage, self.initial_platform)
    }

    pub fn icon_resolver(&self) -> IconResolver {
        IconResolver::new(
            self.icon_proxy_base.trim_end_matches('?'),
            self.preferred_icon_size.as_str(),
        )
    }
}
