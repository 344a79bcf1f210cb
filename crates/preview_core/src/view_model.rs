//! Per-render view model composition.
//!
//! [`ViewModelBuilder`] is the single place where raw manifest data, the session configuration,
//! and the current [`PreviewState`] are combined into display-ready values. Renderers receive the
//! resulting [`ViewModel`] and never reach back into the manifest.

use std::{cell::RefCell, collections::HashMap};

use serde::Serialize;

use crate::{
    capability::{supports, Capability},
    color::ContrastCache,
    config::PreviewConfig,
    error::PreviewResult,
    icon::{IconResolver, IconUrlCache},
    model::{DisplayMode, Manifest, Platform, PreviewStage, PreviewState},
    presentation::{
        fullscreen_scale, stage_info, theme_color_fallback, APP_INITIAL_FALLBACK,
        SPLASH_BACKGROUND_FALLBACK, SPLASH_BAR_FALLBACK,
    },
    site_url::resolve_site_url,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Immutable snapshot handed to the rendering layer.
pub struct ViewModel {
    pub stage: PreviewStage,
    pub platform: Platform,
    pub is_full_screen: bool,
    /// Mockup zoom to apply; `1.0` unless the preview is fullscreen.
    pub fullscreen_scale: f32,
    /// Proxied display icon, or `None` when the renderer should draw its placeholder.
    pub icon_url: Option<String>,
    pub site_url: String,
    /// Foreground that stays legible on the stage's background color.
    pub contrast_color: String,
    pub capability: Capability,
    /// Explanatory copy shown above the mockup.
    pub info: Option<&'static str>,
    pub content: StageContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutPreview {
    pub name: String,
    pub url: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// Manifest members projected for the current stage only.
pub enum StageContent {
    Install {
        app_name: String,
        /// Label under the icon in the install prompt.
        install_label: String,
        description: String,
    },
    Splashscreen {
        app_name: String,
        background_color: String,
        theme_color: String,
    },
    Name {
        app_name: String,
        app_initial: char,
    },
    Shortname {
        short_name: String,
    },
    ThemeColor {
        app_name: String,
        theme_color: String,
    },
    Shortcuts {
        shortcuts: Vec<ShortcutPreview>,
    },
    Display {
        display: DisplayMode,
        theme_color: Option<String>,
    },
}

#[derive(Debug)]
/// Builds [`ViewModel`] values, memoizing icon, site URL, and contrast resolution across builds.
pub struct ViewModelBuilder {
    config: PreviewConfig,
    icon_resolver: IconResolver,
    icon_urls: IconUrlCache,
    site_urls: RefCell<HashMap<String, String>>,
    contrast: ContrastCache,
}

impl Default for ViewModelBuilder {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

impl ViewModelBuilder {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            icon_resolver: config.icon_resolver(),
            config,
            icon_urls: IconUrlCache::new(),
            site_urls: RefCell::new(HashMap::new()),
            contrast: ContrastCache::new(),
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn icon_resolver(&self) -> &IconResolver {
        &self.icon_resolver
    }

    /// Builds the view model for `state`. Deterministic for identical inputs.
    pub fn build(
        &self,
        manifest: &Manifest,
        manifest_url: &str,
        state: &PreviewState,
    ) -> ViewModel {
        let background = self.stage_background(manifest, state);

        ViewModel {
            stage: state.stage,
            platform: state.platform,
            is_full_screen: state.is_full_screen,
            fullscreen_scale: if state.is_full_screen {
                fullscreen_scale(state.stage, state.platform)
            } else {
                1.0
            },
            icon_url: self.icon_url(manifest, manifest_url),
            site_url: self.site_url(manifest_url),
            contrast_color: self.contrast.legible_foreground(background.as_deref()),
            capability: supports(state.stage, state.platform),
            info: stage_info(state.stage, state.platform),
            content: self.stage_content(manifest, manifest_url, state),
        }
    }

    /// Fallible icon resolution, for hosts that want to report unresolvable sources.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PreviewError::UnresolvableIcon`] when the display icon's `src` cannot be
    /// made absolute against `manifest_url`.
    pub fn try_icon_url(
        &self,
        manifest: &Manifest,
        manifest_url: &str,
    ) -> PreviewResult<Option<String>> {
        self.icon_resolver.try_resolve(&manifest.icons, manifest_url)
    }

    pub fn icon_url(&self, manifest: &Manifest, manifest_url: &str) -> Option<String> {
        self.icon_urls
            .resolve(&self.icon_resolver, &manifest.icons, manifest_url)
    }

    pub fn site_url(&self, manifest_url: &str) -> String {
        if let Some(hit) = self.site_urls.borrow().get(manifest_url) {
            return hit.clone();
        }
        let site_url = resolve_site_url(manifest_url);
        self.site_urls
            .borrow_mut()
            .insert(manifest_url.to_string(), site_url.clone());
        site_url
    }

    fn stage_background(&self, manifest: &Manifest, state: &PreviewState) -> Option<String> {
        let background = match state.stage {
            PreviewStage::Splashscreen => Some(
                manifest
                    .background_color()
                    .unwrap_or(SPLASH_BACKGROUND_FALLBACK),
            ),
            PreviewStage::ThemeColor => Some(
                manifest
                    .theme_color()
                    .unwrap_or_else(|| theme_color_fallback(state.platform)),
            ),
            PreviewStage::Display => manifest.theme_color().or_else(|| manifest.background_color()),
            PreviewStage::Install
            | PreviewStage::Name
            | PreviewStage::Shortname
            | PreviewStage::Shortcuts => None,
        };
        background.map(str::to_string)
    }

    fn stage_content(
        &self,
        manifest: &Manifest,
        manifest_url: &str,
        state: &PreviewState,
    ) -> StageContent {
        let app_name = manifest.display_name(&self.config.default_app_name).to_string();
        match state.stage {
            PreviewStage::Install => StageContent::Install {
                install_label: match (state.platform, manifest.short_name()) {
                    (Platform::Android, Some(short_name)) => short_name.to_string(),
                    _ => app_name.clone(),
                },
                description: manifest
                    .description()
                    .unwrap_or(&self.config.default_description)
                    .to_string(),
                app_name,
            },
            PreviewStage::Splashscreen => StageContent::Splashscreen {
                app_name,
                background_color: manifest
                    .background_color()
                    .unwrap_or(SPLASH_BACKGROUND_FALLBACK)
                    .to_string(),
                theme_color: manifest
                    .theme_color()
                    .unwrap_or(SPLASH_BAR_FALLBACK)
                    .to_string(),
            },
            PreviewStage::Name => StageContent::Name {
                app_initial: app_name.chars().next().unwrap_or(APP_INITIAL_FALLBACK),
                app_name,
            },
            PreviewStage::Shortname => StageContent::Shortname {
                short_name: manifest
                    .short_name()
                    .map(str::to_string)
                    .unwrap_or(app_name),
            },
            PreviewStage::ThemeColor => StageContent::ThemeColor {
                app_name,
                theme_color: manifest
                    .theme_color()
                    .unwrap_or_else(|| theme_color_fallback(state.platform))
                    .to_string(),
            },
            PreviewStage::Shortcuts => StageContent::Shortcuts {
                shortcuts: manifest
                    .shortcuts
                    .iter()
                    .flatten()
                    .take(self.config.max_shortcuts)
                    .map(|shortcut| ShortcutPreview {
                        name: shortcut.name.clone(),
                        url: shortcut.url.clone(),
                        icon_url: self
                            .icon_resolver
                            .resolve_shortcut_icon(shortcut.icons.as_deref(), manifest_url),
                    })
                    .collect(),
            },
            PreviewStage::Display => StageContent::Display {
                display: manifest.display.unwrap_or_default(),
                theme_color: manifest.theme_color().map(str::to_string),
            },
        }
    }
}

/// Builds a view model with the default configuration.
pub fn build_view_model(
    manifest: &Manifest,
    manifest_url: &str,
    state: &PreviewState,
) -> ViewModel {
    ViewModelBuilder::default().build(manifest, manifest_url, state)
}
