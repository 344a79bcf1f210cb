//! Leptos runtime for manifest previews.
//!
//! [`PreviewProvider`] owns the reactive [`preview_core::PreviewState`], routes every
//! [`preview_core::PreviewAction`] through [`preview_core::reduce_preview`], executes the emitted
//! effects against the injected [`preview_host::FullscreenService`], and exposes a memoized
//! [`preview_core::ViewModel`] to descendant renderers.

pub mod components;
mod host;
pub mod runtime_context;

pub use components::{preview_frame_label, PreviewFrame};
pub use host::PreviewHostContext;
pub use runtime_context::{
    create_preview_runtime, use_preview_runtime, ManifestSource, PreviewInputs, PreviewProvider,
    PreviewRuntimeContext, PREVIEW_FRAME_DOM_ID,
};
