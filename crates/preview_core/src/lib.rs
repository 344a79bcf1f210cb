//! Headless decision engine for web app manifest previews.
//!
//! Given a parsed [`Manifest`], the URL it was served from, and the current [`PreviewState`],
//! the engine derives everything a platform mockup needs: the proxied display icon, the site URL,
//! a legible foreground color, per-platform support with disclaimers, and the manifest members
//! relevant to the stage being previewed. Rendering, fullscreen plumbing, and manifest fetching
//! live outside this crate.

pub mod capability;
pub mod color;
pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod presentation;
pub mod reducer;
pub mod site_url;
pub mod view_model;

pub use capability::{supports, Capability, CAPABILITY_EXCEPTIONS};
pub use color::{
    legible_foreground, parse_css_color, ContrastCache, Rgb, DARK_FOREGROUND, DEFAULT_FOREGROUND,
    LIGHT_FOREGROUND,
};
pub use config::PreviewConfig;
pub use error::{PreviewError, PreviewResult};
pub use icon::{
    absolute_url, resolve_icon_url, IconResolver, IconUrlCache, DEFAULT_ICON_PROXY_BASE,
    PREFERRED_ICON_SIZE,
};
pub use model::*;
pub use presentation::{fullscreen_scale, stage_info, theme_color_fallback};
pub use reducer::{reduce_preview, PreviewAction, PreviewEffect};
pub use site_url::resolve_site_url;
pub use view_model::{build_view_model, ShortcutPreview, StageContent, ViewModel, ViewModelBuilder};
