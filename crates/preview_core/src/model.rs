use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PreviewError, PreviewResult};

pub const DEFAULT_APP_NAME: &str = "PWA App";
pub const DEFAULT_APP_DESCRIPTION: &str = "A description about your app";
pub const PREVIEW_STAGE_COUNT: usize = PreviewStage::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "iOS")]
    Ios,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Self::Windows, Self::Android, Self::Ios];

    pub fn id(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Android => "android",
            Self::Ios => "iOS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Android => "Android",
            Self::Ios => "iOS",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "windows" => Some(Self::Windows),
            "android" => Some(Self::Android),
            "iOS" | "ios" => Some(Self::Ios),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Manifest attribute currently being previewed, in navigation order.
pub enum PreviewStage {
    Install,
    Splashscreen,
    Name,
    Shortname,
    ThemeColor,
    Shortcuts,
    Display,
}

impl PreviewStage {
    pub const ALL: [PreviewStage; 7] = [
        Self::Install,
        Self::Splashscreen,
        Self::Name,
        Self::Shortname,
        Self::ThemeColor,
        Self::Shortcuts,
        Self::Display,
    ];

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|stage| *stage == self)
            .unwrap_or_default()
    }

    /// Stable keyword, identical to the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Splashscreen => "splashscreen",
            Self::Name => "name",
            Self::Shortname => "shortname",
            Self::ThemeColor => "theme-color",
            Self::Shortcuts => "shortcuts",
            Self::Display => "display",
        }
    }

    /// Returns the stage at `index`, wrapping around the stage count.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PREVIEW_STAGE_COUNT]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Self {
        Self::from_index(self.index() + PREVIEW_STAGE_COUNT - 1)
    }

    /// Manifest member previewed by this stage.
    pub fn manifest_member(self) -> &'static str {
        match self {
            Self::Install => "name",
            Self::Splashscreen => "background_color",
            Self::Name => "name",
            Self::Shortname => "short_name",
            Self::ThemeColor => "theme_color",
            Self::Shortcuts => "shortcuts",
            Self::Display => "display",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Install => "Install",
            Self::Splashscreen => "Splash screen",
            Self::Name => "Name",
            Self::Shortname => "Short name",
            Self::ThemeColor => "Theme color",
            Self::Shortcuts => "Shortcuts",
            Self::Display => "Display",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
    MinimalUi,
    #[default]
    Browser,
}

impl DisplayMode {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Standalone => "standalone",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "fullscreen" => Some(Self::Fullscreen),
            "standalone" => Some(Self::Standalone),
            "minimal-ui" => Some(Self::MinimalUi),
            "browser" => Some(Self::Browser),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageResource {
    pub src: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sizes: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mime_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

impl ImageResource {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            sizes: None,
            mime_type: None,
            label: None,
        }
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    /// Returns whether `sizes` mentions `size` anywhere, ignoring ASCII case.
    ///
    /// Matching is by substring so loosely written lists such as `"192x192,512x512"` or
    /// `"192x192px"` still count.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.as_deref().is_some_and(|sizes| {
            sizes
                .to_ascii_lowercase()
                .contains(&size.to_ascii_lowercase())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub icons: Option<Vec<ImageResource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Web app manifest members read by the preview engine.
///
/// Decoding is lenient member by member: a member of the wrong type is treated as absent,
/// `null` or missing lists become empty, list entries that do not decode are dropped, and
/// unknown `display` keywords are treated as absent. Only a document that is not a JSON object
/// is rejected.
pub struct Manifest {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub icons: Vec<ImageResource>,
    #[serde(
        default,
        deserialize_with = "lenient_display_mode",
        skip_serializing_if = "Option::is_none"
    )]
    pub display: Option<DisplayMode>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub shortcuts: Option<Vec<Shortcut>>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Manifest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Decodes a manifest document and fills a blank `name` with [`DEFAULT_APP_NAME`].
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ManifestParse`] when `raw` is not a JSON object of the expected
    /// shape.
    pub fn from_json(raw: &str) -> PreviewResult<Self> {
        let mut manifest: Self = serde_json::from_str(raw).map_err(PreviewError::ManifestParse)?;
        if manifest.name.trim().is_empty() {
            manifest.name = DEFAULT_APP_NAME.to_string();
        }
        Ok(manifest)
    }

    /// The application name, or `fallback` when the manifest name is blank.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_blank(Some(self.name.as_str())).unwrap_or(fallback)
    }

    pub fn short_name(&self) -> Option<&str> {
        non_blank(self.short_name.as_deref())
    }

    pub fn theme_color(&self) -> Option<&str> {
        non_blank(self.theme_color.as_deref())
    }

    pub fn background_color(&self) -> Option<&str> {
        non_blank(self.background_color.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Mutable selection state for one preview session.
pub struct PreviewState {
    pub stage: PreviewStage,
    pub platform: Platform,
    pub is_full_screen: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new(PreviewStage::Install, Platform::Android)
    }
}

impl PreviewState {
    pub fn new(stage: PreviewStage, platform: Platform) -> Self {
        Self {
            stage,
            platform,
            is_full_screen: false,
        }
    }

    pub fn select_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn select_stage(&mut self, stage: PreviewStage) {
        self.stage = stage;
    }

    pub fn navigate_next(&mut self) {
        self.stage = self.stage.next();
    }

    pub fn navigate_previous(&mut self) {
        self.stage = self.stage.previous();
    }

    /// Mirrors the host-reported fullscreen state; never initiates a fullscreen change.
    pub fn toggle_full_screen(&mut self, is_full_screen: bool) {
        self.is_full_screen = is_full_screen;
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn lenient_display_mode<'de, D>(deserializer: D) -> Result<Option<DisplayMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer)?;
    Ok(raw.as_deref().and_then(DisplayMode::from_keyword))
}

fn lenient_optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => Some(
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value(entry).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_optional_list(deserializer)?.unwrap_or_default())
}
