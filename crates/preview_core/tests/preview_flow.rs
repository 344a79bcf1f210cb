use pretty_assertions::assert_eq;
use preview_core::{
    reduce_preview, Manifest, Platform, PreviewAction, PreviewConfig, PreviewStage, PreviewState,
    StageContent, ViewModelBuilder, DEFAULT_ICON_PROXY_BASE, LIGHT_FOREGROUND,
};

const MANIFEST_URL: &str = "https://foo.com/manifest.json";

fn foo_manifest() -> Manifest {
    Manifest::from_json(
        r##"{
            "name": "Foo",
            "icons": [{"src": "/a.png", "sizes": "192x192"}],
            "background_color": "#000000"
        }"##,
    )
    .expect("foo manifest")
}

#[test]
fn splashscreen_on_android_resolves_site_icon_and_light_text() {
    let builder = ViewModelBuilder::default();
    let state = PreviewState::new(PreviewStage::Splashscreen, Platform::Android);

    let view = builder.build(&foo_manifest(), MANIFEST_URL, &state);

    assert_eq!(view.site_url, "https://foo.com/");
    assert_eq!(
        view.icon_url.as_deref(),
        Some(format!("{DEFAULT_ICON_PROXY_BASE}?url=https://foo.com/a.png").as_str())
    );
    assert_eq!(view.contrast_color, LIGHT_FOREGROUND);
    assert!(view.capability.supported);
    assert_eq!(
        view.content,
        StageContent::Splashscreen {
            app_name: "Foo".to_string(),
            background_color: "#000000".to_string(),
            theme_color: "#FFF".to_string(),
        }
    );
}

#[test]
fn stepping_through_a_session_rebuilds_consistent_view_models() {
    let config = PreviewConfig {
        initial_platform: Platform::Ios,
        ..PreviewConfig::default()
    };
    let builder = ViewModelBuilder::new(config.clone());
    let manifest = foo_manifest();
    let mut state = config.initial_state();
    let mut visited = Vec::new();

    for _ in PreviewStage::ALL {
        let view = builder.build(&manifest, MANIFEST_URL, &state);
        assert_eq!(view.stage, state.stage);
        assert_eq!(view.site_url, "https://foo.com/");
        visited.push((view.stage, view.capability.supported));
        reduce_preview(&mut state, PreviewAction::NavigateNext);
    }

    assert_eq!(state.stage, PreviewStage::Install);
    assert_eq!(
        visited
            .iter()
            .filter(|(_, supported)| !supported)
            .map(|(stage, _)| *stage)
            .collect::<Vec<_>>(),
        vec![PreviewStage::Shortcuts]
    );
}

#[test]
fn manifest_without_icons_renders_placeholder() {
    let manifest = Manifest::from_json(r#"{"name": "Bare"}"#).expect("bare manifest");
    let view = ViewModelBuilder::default().build(
        &manifest,
        "https://bare.dev/app.webmanifest",
        &PreviewState::default(),
    );

    assert_eq!(view.icon_url, None);
    assert_eq!(view.site_url, "https://bare.dev/app.webmanifest");
}

#[test]
fn view_model_serializes_with_renderer_keywords() {
    let view = ViewModelBuilder::default().build(
        &foo_manifest(),
        MANIFEST_URL,
        &PreviewState::new(PreviewStage::ThemeColor, Platform::Ios),
    );
    let json = serde_json::to_value(&view).expect("serialize view model");

    assert_eq!(json["platform"], "iOS");
    assert_eq!(json["stage"], "theme-color");
    assert_eq!(json["content"]["kind"], "theme-color");
    assert_eq!(json["content"]["theme_color"], "#FFF");
}

#[test]
fn one_bad_shortcut_does_not_discard_the_rest_of_the_manifest() {
    let manifest = Manifest::from_json(
        r##"{
            "name": "Foo",
            "theme_color": "#336699",
            "icons": [{"src": "/a.png"}],
            "shortcuts": [{"name": "Today"}]
        }"##,
    )
    .expect("best-effort manifest");
    let builder = ViewModelBuilder::default();

    let theme = builder.build(
        &manifest,
        MANIFEST_URL,
        &PreviewState::new(PreviewStage::ThemeColor, Platform::Android),
    );
    assert_eq!(
        theme.content,
        StageContent::ThemeColor {
            app_name: "Foo".to_string(),
            theme_color: "#336699".to_string(),
        }
    );
    assert_eq!(
        theme.icon_url,
        Some(format!("{DEFAULT_ICON_PROXY_BASE}?url=https://foo.com/a.png"))
    );

    let shortcuts = builder.build(
        &manifest,
        MANIFEST_URL,
        &PreviewState::new(PreviewStage::Shortcuts, Platform::Android),
    );
    assert_eq!(shortcuts.content, StageContent::Shortcuts { shortcuts: Vec::new() });
}
