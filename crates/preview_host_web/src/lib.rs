//! Browser (`wasm32`) implementations of [`preview_host`] service contracts.
//!
//! Native builds compile the same adapters with a fallback that reports the browser API as
//! unavailable, so headless tests can link against this crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod fullscreen;

pub use adapters::{
    fullscreen_service, host_strategy_name, selected_host_strategy, shared_fullscreen_service,
    FullscreenServiceAdapter, HostStrategy,
};
pub use fullscreen::{WebFullscreenService, FULLSCREEN_CHANGE_EVENT};
