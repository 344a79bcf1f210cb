//! Typed host-service contracts consumed by the preview runtime.
//!
//! The runtime never talks to the browser directly. It receives a [`FullscreenService`] chosen by
//! the embedding application, so concrete `web-sys` wiring stays in `preview_host_web` and tests
//! can drive fullscreen transitions through [`MemoryFullscreenService`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fullscreen;

pub use fullscreen::{
    FullscreenListener, FullscreenService, FullscreenSubscription, MemoryFullscreenService,
    NoopFullscreenService,
};
