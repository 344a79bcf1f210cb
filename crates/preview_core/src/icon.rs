//! Display-icon selection and icon-proxy URL construction.

use std::{
    cell::RefCell,
    collections::{hash_map::DefaultHasher, HashMap},
    hash::{Hash, Hasher},
};

use url::Url;

use crate::{
    error::{PreviewError, PreviewResult},
    model::ImageResource,
};

/// Proxy endpoint that sanitizes absolute icon URLs before they are displayed.
pub const DEFAULT_ICON_PROXY_BASE: &str =
    "https://pwabuilder-safe-url.azurewebsites.net/api/getsafeurl";
/// Size token preferred when picking the display icon (Android Chrome's launcher size).
pub const PREFERRED_ICON_SIZE: &str = "192x192";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rules for turning a manifest icon list into a single proxied URL.
pub struct IconResolver {
    pub proxy_base: String,
    pub preferred_size: String,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self {
            proxy_base: DEFAULT_ICON_PROXY_BASE.to_string(),
            preferred_size: PREFERRED_ICON_SIZE.to_string(),
        }
    }
}

impl IconResolver {
    pub fn new(proxy_base: impl Into<String>, preferred_size: impl Into<String>) -> Self {
        Self {
            proxy_base: proxy_base.into(),
            preferred_size: preferred_size.into(),
        }
    }

    /// Picks the icon to display: the first one declaring the preferred size, else the first one.
    pub fn select<'a>(&self, icons: &'a [ImageResource]) -> Option<&'a ImageResource> {
        icons
            .iter()
            .find(|icon| icon.has_size(&self.preferred_size))
            .or_else(|| icons.first())
    }

    /// Resolves the display icon of `icons` to a proxied absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::UnresolvableIcon`] when the chosen `src` is relative and
    /// `base_url` is not an absolute URL.
    pub fn try_resolve(
        &self,
        icons: &[ImageResource],
        base_url: &str,
    ) -> PreviewResult<Option<String>> {
        let Some(icon) = self.select(icons) else {
            return Ok(None);
        };
        self.proxied_url(&icon.src, base_url).map(Some)
    }

    /// Total form of [`Self::try_resolve`]: unresolvable sources render as the placeholder.
    pub fn resolve(&self, icons: &[ImageResource], base_url: &str) -> Option<String> {
        self.try_resolve(icons, base_url).ok().flatten()
    }

    /// Resolves a shortcut's own icon list, which always uses its first entry.
    pub fn resolve_shortcut_icon(
        &self,
        icons: Option<&[ImageResource]>,
        base_url: &str,
    ) -> Option<String> {
        let icon = icons?.first()?;
        self.proxied_url(&icon.src, base_url).ok()
    }

    /// Wraps `src`, resolved against `base_url`, in the proxy URL template.
    ///
    /// The absolute URL is appended verbatim, as the proxy expects.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::UnresolvableIcon`] when no absolute URL can be formed.
    pub fn proxied_url(&self, src: &str, base_url: &str) -> PreviewResult<String> {
        let absolute = absolute_url(src, base_url)?;
        Ok(format!("{}?url={}", self.proxy_base, absolute))
    }
}

/// Resolves `src` against `base_url` the way a browser resolves `new URL(src, base)`.
///
/// # Errors
///
/// Returns [`PreviewError::UnresolvableIcon`] when `src` is relative and `base_url` is not
/// absolute.
pub fn absolute_url(src: &str, base_url: &str) -> PreviewResult<String> {
    let src = src.trim();
    Url::parse(base_url.trim())
        .and_then(|base| base.join(src))
        .or_else(|_| Url::parse(src))
        .map(String::from)
        .map_err(|_| PreviewError::UnresolvableIcon {
            src: src.to_string(),
            base: base_url.to_string(),
        })
}

/// Resolves the display icon with the default proxy and preferred size.
pub fn resolve_icon_url(icons: &[ImageResource], base_url: &str) -> Option<String> {
    IconResolver::default().resolve(icons, base_url)
}

#[derive(Debug, Default)]
/// Memoizes [`IconResolver::resolve`] per `(icons, base_url)` pair.
///
/// Entries are keyed by a hash of the icon list, so a lookup never copies the list.
pub struct IconUrlCache {
    entries: RefCell<HashMap<(u64, String), Option<String>>>,
}

fn icon_list_hash(icons: &[ImageResource]) -> u64 {
    let mut hasher = DefaultHasher::new();
    icons.hash(&mut hasher);
    hasher.finish()
}

impl IconUrlCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &self,
        resolver: &IconResolver,
        icons: &[ImageResource],
        base_url: &str,
    ) -> Option<String> {
        let key = (icon_list_hash(icons), base_url.to_string());
        if let Some(hit) = self.entries.borrow().get(&key) {
            return hit.clone();
        }
        let resolved = resolver.resolve(icons, base_url);
        self.entries.borrow_mut().insert(key, resolved.clone());
        resolved
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BASE: &str = "https://app.example.com/static/manifest.json";

    fn proxied(absolute: &str) -> String {
        format!("{DEFAULT_ICON_PROXY_BASE}?url={absolute}")
    }

    #[test]
    fn empty_icon_list_resolves_to_none() {
        assert_eq!(resolve_icon_url(&[], BASE), None);
    }

    #[test]
    fn preferred_size_wins_regardless_of_position() {
        let icons = vec![
            ImageResource::new("small.png").with_sizes("48x48"),
            ImageResource::new("large.png").with_sizes("512x512"),
            ImageResource::new("launcher.png").with_sizes("96x96 192x192"),
        ];
        assert_eq!(
            resolve_icon_url(&icons, BASE),
            Some(proxied("https://app.example.com/static/launcher.png"))
        );

        let mut reversed = icons.clone();
        reversed.reverse();
        assert_eq!(resolve_icon_url(&reversed, BASE), resolve_icon_url(&icons, BASE));
    }

    #[test]
    fn comma_separated_sizes_still_select_the_launcher_icon() {
        let icons = vec![
            ImageResource::new("/first.png").with_sizes("48x48"),
            ImageResource::new("/launcher.png").with_sizes("192x192,512x512"),
        ];
        assert_eq!(
            resolve_icon_url(&icons, "https://foo.com/manifest.json"),
            Some(proxied("https://foo.com/launcher.png"))
        );
    }

    #[test]
    fn first_icon_is_used_without_preferred_size() {
        let icons = vec![
            ImageResource::new("/icons/first.png").with_sizes("48x48"),
            ImageResource::new("/icons/second.png"),
        ];
        assert_eq!(
            resolve_icon_url(&icons, BASE),
            Some(proxied("https://app.example.com/icons/first.png"))
        );
    }

    #[test]
    fn absolute_sources_survive_an_unusable_base() {
        let icons = vec![ImageResource::new("https://cdn.example.net/icon.png")];
        assert_eq!(
            resolve_icon_url(&icons, ""),
            Some(proxied("https://cdn.example.net/icon.png"))
        );
    }

    #[test]
    fn relative_source_without_base_is_reported() {
        let resolver = IconResolver::default();
        let icons = vec![ImageResource::new("icon.png")];
        let err = resolver.try_resolve(&icons, "").expect_err("no base");
        assert!(matches!(err, PreviewError::UnresolvableIcon { ref src, .. } if src == "icon.png"));
        assert_eq!(resolver.resolve(&icons, ""), None);
    }

    #[test]
    fn shortcut_icons_use_first_entry_and_custom_proxy() {
        let resolver = IconResolver::new("https://proxy.test/safe", PREFERRED_ICON_SIZE);
        let icons = vec![
            ImageResource::new("/s/one.png"),
            ImageResource::new("/s/two.png").with_sizes("192x192"),
        ];
        assert_eq!(
            resolver.resolve_shortcut_icon(Some(icons.as_slice()), BASE),
            Some("https://proxy.test/safe?url=https://app.example.com/s/one.png".to_string())
        );
        assert_eq!(resolver.resolve_shortcut_icon(None, BASE), None);
        assert_eq!(resolver.resolve_shortcut_icon(Some(&[][..]), BASE), None);
    }

    #[test]
    fn cache_memoizes_per_icon_list_and_base() {
        let resolver = IconResolver::default();
        let cache = IconUrlCache::new();
        let icons = vec![ImageResource::new("a.png")];

        let first = cache.resolve(&resolver, &icons, BASE);
        let second = cache.resolve(&resolver, &icons, BASE);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        cache.resolve(&resolver, &icons, "https://other.example.com/");
        assert_eq!(cache.len(), 2);

        let other_icons = vec![ImageResource::new("b.png")];
        assert_ne!(cache.resolve(&resolver, &other_icons, BASE), first);
        assert_eq!(cache.len(), 3);
    }
}
