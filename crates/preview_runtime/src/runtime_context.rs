//! Runtime provider and context wiring for manifest previews.
//!
//! The manifest and its URL are fixed for the lifetime of a provider. Only [`PreviewState`]
//! changes, and every change goes through [`reduce_preview`].
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;
use preview_core::{
    reduce_preview, Manifest, PreviewAction, PreviewConfig, PreviewResult, PreviewState,
    ViewModel, ViewModelBuilder,
};
use preview_host::{FullscreenService, FullscreenSubscription, NoopFullscreenService};

use crate::host::PreviewHostContext;

/// Default DOM id of the element enlarged by [`PreviewAction::RequestEnlarge`].
pub const PREVIEW_FRAME_DOM_ID: &str = "pwa-preview-frame";

#[derive(Debug, Clone, PartialEq)]
/// Manifest handed to the provider, either already decoded or as raw JSON.
pub enum ManifestSource {
    /// Decoded manifest.
    Parsed(Manifest),
    /// Raw manifest JSON, decoded leniently at boot.
    Json(String),
}

impl ManifestSource {
    /// Decodes the source into a [`Manifest`].
    ///
    /// # Errors
    ///
    /// Returns [`preview_core::PreviewError::ManifestParse`] when raw JSON does not decode.
    pub fn into_manifest(self) -> PreviewResult<Manifest> {
        match self {
            Self::Parsed(manifest) => Ok(manifest),
            Self::Json(raw) => Manifest::from_json(&raw),
        }
    }
}

impl From<Manifest> for ManifestSource {
    fn from(manifest: Manifest) -> Self {
        Self::Parsed(manifest)
    }
}

impl From<String> for ManifestSource {
    fn from(raw: String) -> Self {
        Self::Json(raw)
    }
}

impl From<&str> for ManifestSource {
    fn from(raw: &str) -> Self {
        Self::Json(raw.to_string())
    }
}

/// Everything a preview session is booted from.
pub struct PreviewInputs {
    /// Manifest being previewed.
    pub manifest: ManifestSource,
    /// URL the manifest was served from.
    pub manifest_url: String,
    /// Session configuration.
    pub config: PreviewConfig,
    /// Host fullscreen service.
    pub fullscreen: Rc<dyn FullscreenService>,
    /// DOM id of the element to enlarge.
    pub target_dom_id: String,
}

impl PreviewInputs {
    /// Inputs with default configuration and no fullscreen support.
    pub fn new(manifest: impl Into<ManifestSource>, manifest_url: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            manifest_url: manifest_url.into(),
            config: PreviewConfig::default(),
            fullscreen: Rc::new(NoopFullscreenService),
            target_dom_id: PREVIEW_FRAME_DOM_ID.to_string(),
        }
    }
}

struct PreviewSession {
    manifest: Manifest,
    manifest_url: String,
    builder: ViewModelBuilder,
}

#[derive(Clone, Copy)]
/// Leptos context for reading preview state and dispatching [`PreviewAction`] values.
pub struct PreviewRuntimeContext {
    /// Host bridge used to execute reducer effects.
    pub host: StoredValue<PreviewHostContext>,
    /// Reactive preview state signal.
    pub state: RwSignal<PreviewState>,
    /// View model derived from the session manifest and [`Self::state`].
    pub view_model: Memo<ViewModel>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PreviewAction>,
    session: StoredValue<PreviewSession>,
    fullscreen_subscription: StoredValue<Option<FullscreenSubscription>>,
}

impl PreviewRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PreviewAction) {
        self.dispatch.call(action);
    }

    /// Manifest being previewed.
    pub fn manifest(&self) -> Manifest {
        self.session.with_value(|session| session.manifest.clone())
    }

    /// URL the manifest was served from.
    pub fn manifest_url(&self) -> String {
        self.session
            .with_value(|session| session.manifest_url.clone())
    }

    /// Configuration the session was booted with.
    pub fn config(&self) -> PreviewConfig {
        self.session
            .with_value(|session| session.builder.config().clone())
    }

    /// DOM id of the element enlarged on [`PreviewAction::RequestEnlarge`].
    pub fn target_dom_id(&self) -> String {
        self.host.with_value(|host| host.target_dom_id().to_string())
    }

    /// Stops listening for host fullscreen changes. Runs automatically on owner cleanup.
    pub fn detach_host(&self) {
        self.fullscreen_subscription.update_value(|subscription| {
            if let Some(subscription) = subscription.take() {
                subscription.unsubscribe();
            }
        });
    }
}

/// Boots a preview session in the current reactive owner without providing it as context.
///
/// A manifest that fails to decode is logged and replaced by an empty manifest carrying the
/// configured default name, so the preview still renders.
pub fn create_preview_runtime(inputs: PreviewInputs) -> PreviewRuntimeContext {
    let PreviewInputs {
        manifest,
        manifest_url,
        config,
        fullscreen,
        target_dom_id,
    } = inputs;

    let manifest = match manifest.into_manifest() {
        Ok(manifest) => manifest,
        Err(err) => {
            logging::warn!("preview manifest from {manifest_url} rejected: {err}");
            Manifest::named(config.default_app_name.clone())
        }
    };

    let builder = ViewModelBuilder::new(config.clone());
    if let Err(err) = builder.try_icon_url(&manifest, &manifest_url) {
        logging::warn!("preview icon unavailable: {err}");
    }

    let host = PreviewHostContext::new(fullscreen, target_dom_id);
    let mut initial = config.initial_state();
    initial.toggle_full_screen(host.is_fullscreen());

    let host = store_value(host);
    let state = create_rw_signal(initial);
    let session = store_value(PreviewSession {
        manifest,
        manifest_url,
        builder,
    });

    let view_model = create_memo(move |_| {
        let current = state.get();
        session.with_value(|session| {
            session
                .builder
                .build(&session.manifest, &session.manifest_url, &current)
        })
    });

    let dispatch = Callback::new(move |action: PreviewAction| {
        let previous = state.get_untracked();
        let mut next = previous;
        let effects = reduce_preview(&mut next, action);
        if next != previous {
            state.set(next);
        }
        if !effects.is_empty() {
            host.with_value(|host| host.run_effects(&effects));
        }
    });

    let subscription = host.with_value(|host| host.install_fullscreen_listener(dispatch));
    let runtime = PreviewRuntimeContext {
        host,
        state,
        view_model,
        dispatch,
        session,
        fullscreen_subscription: store_value(Some(subscription)),
    };

    on_cleanup(move || runtime.detach_host());

    runtime
}

#[component]
/// Provides [`PreviewRuntimeContext`] to descendant components.
pub fn PreviewProvider(
    /// Manifest to preview, decoded or raw JSON.
    #[prop(into)]
    manifest: ManifestSource,
    /// URL the manifest was served from.
    #[prop(into)]
    manifest_url: String,
    /// Session configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<PreviewConfig>,
    /// Host fullscreen service; fullscreen is unavailable when omitted.
    #[prop(optional)]
    fullscreen: Option<Rc<dyn FullscreenService>>,
    /// DOM id of the element to enlarge; defaults to [`PREVIEW_FRAME_DOM_ID`].
    #[prop(optional, into)]
    target_dom_id: Option<String>,
    children: Children,
) -> impl IntoView {
    let mut inputs = PreviewInputs::new(manifest, manifest_url);
    if let Some(config) = config {
        inputs.config = config;
    }
    if let Some(fullscreen) = fullscreen {
        inputs.fullscreen = fullscreen;
    }
    if let Some(target_dom_id) = target_dom_id {
        inputs.target_dom_id = target_dom_id;
    }

    let runtime = create_preview_runtime(inputs);
    provide_context(runtime.clone());

    children().into_view()
}

/// Returns the current [`PreviewRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PreviewProvider`].
pub fn use_preview_runtime() -> PreviewRuntimeContext {
    use_context::<PreviewRuntimeContext>().expect("PreviewRuntimeContext not provided")
}
