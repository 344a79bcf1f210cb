//! Per-stage presentation constants shared by every renderer: explanatory copy, fallback colors,
//! and the zoom applied to mockups while fullscreen.

use crate::model::{Platform, PreviewStage};

/// Splash screen background when the manifest has no `background_color`.
pub const SPLASH_BACKGROUND_FALLBACK: &str = "#FFF";
/// Splash screen system bars when the manifest has no `theme_color`.
pub const SPLASH_BAR_FALLBACK: &str = "#FFF";
/// Initial shown in the Windows start menu tile when the name is blank.
pub const APP_INITIAL_FALLBACK: char = 'A';
/// Shortcuts menus show at most this many entries.
pub const MAX_SHORTCUTS: usize = 5;

const NAME_INFO: &str =
    "The name of the web application is displayed on menus, system preferences, dialogs, etc.";
const SHORTNAME_INFO: &str = "The short name member is used when there is not enough space to \
    display the entire name of the application (e.g., as a label for an icon on the phone home \
    screen).";
const THEME_COLOR_INFO: &str = "The theme color defines the default color theme for the \
    application, and affects how the site is displayed.";
const WINDOWS_SHORTCUTS_INFO: &str = "This attribute (A.K.A. jump list) assembles a context menu \
    that is shown when a user right-clicks on the app's icon on the taskbar.";
const ANDROID_SHORTCUTS_INFO: &str = "This attribute (A.K.A. jump list) assembles a context menu \
    that is shown when a user long-presses the app's icon on the home screen.";
const IOS_SHORTCUTS_INFO: &str = "This attribute (A.K.A. jump list) defines a list of \
    shortcuts/links to key tasks or pages within a web app, assembling a context menu when a \
    user interacts with the app's icon.";

/// Explanatory sentence rendered above the mockup, if the stage has one.
pub fn stage_info(stage: PreviewStage, platform: Platform) -> Option<&'static str> {
    match (stage, platform) {
        (PreviewStage::Name, _) => Some(NAME_INFO),
        (PreviewStage::Shortname, _) => Some(SHORTNAME_INFO),
        (PreviewStage::ThemeColor, _) => Some(THEME_COLOR_INFO),
        (PreviewStage::Shortcuts, Platform::Windows) => Some(WINDOWS_SHORTCUTS_INFO),
        (PreviewStage::Shortcuts, Platform::Android) => Some(ANDROID_SHORTCUTS_INFO),
        (PreviewStage::Shortcuts, Platform::Ios) => Some(IOS_SHORTCUTS_INFO),
        (PreviewStage::Install | PreviewStage::Splashscreen | PreviewStage::Display, _) => None,
    }
}

/// Theme color painted when the manifest has none.
pub fn theme_color_fallback(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows | Platform::Android => "#1F59A1",
        Platform::Ios => "#FFF",
    }
}

/// Zoom factor applied to the stage mockup while the preview is fullscreen.
pub fn fullscreen_scale(stage: PreviewStage, platform: Platform) -> f32 {
    match (stage, platform) {
        (PreviewStage::Name, _) => 2.2,
        (PreviewStage::Shortname, _) => 2.5,
        (PreviewStage::ThemeColor, Platform::Ios) => 2.2,
        (PreviewStage::ThemeColor, _) => 3.0,
        (PreviewStage::Shortcuts, _) => 2.5,
        (PreviewStage::Install | PreviewStage::Splashscreen | PreviewStage::Display, _) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_copy_differs_per_platform() {
        let copies: Vec<_> = Platform::ALL
            .iter()
            .filter_map(|platform| stage_info(PreviewStage::Shortcuts, *platform))
            .collect();
        assert_eq!(copies.len(), 3);
        assert!(copies[0].contains("right-clicks"));
        assert!(copies[1].contains("long-presses"));
        assert_ne!(copies[1], copies[2]);
    }

    #[test]
    fn theme_fallback_is_light_only_on_ios() {
        assert_eq!(theme_color_fallback(Platform::Ios), "#FFF");
        assert_eq!(theme_color_fallback(Platform::Android), "#1F59A1");
    }

    #[test]
    fn stages_without_zoomed_mockups_keep_unit_scale() {
        assert_eq!(fullscreen_scale(PreviewStage::Install, Platform::Android), 1.0);
        assert!(fullscreen_scale(PreviewStage::ThemeColor, Platform::Windows) > 2.5);
    }
}
