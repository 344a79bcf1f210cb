use std::rc::Rc;

use preview_host::{
    FullscreenListener, FullscreenService, FullscreenSubscription, NoopFullscreenService,
};

use crate::WebFullscreenService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `preview_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from this crate.
    Browser,
    /// No-op adapters for embeddings that must not touch the document fullscreen state.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "fullscreen-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "fullscreen-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete fullscreen backend behind [`FullscreenService`].
#[derive(Debug, Clone, Copy)]
pub enum FullscreenServiceAdapter {
    /// Document Fullscreen API.
    Browser(WebFullscreenService),
    /// Never fullscreen.
    Stub(NoopFullscreenService),
}

impl FullscreenService for FullscreenServiceAdapter {
    fn is_fullscreen(&self) -> bool {
        match self {
            Self::Browser(service) => service.is_fullscreen(),
            Self::Stub(service) => service.is_fullscreen(),
        }
    }

    fn request_fullscreen(&self, target_dom_id: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.request_fullscreen(target_dom_id),
            Self::Stub(service) => service.request_fullscreen(target_dom_id),
        }
    }

    fn exit_fullscreen(&self) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.exit_fullscreen(),
            Self::Stub(service) => service.exit_fullscreen(),
        }
    }

    fn subscribe(&self, listener: FullscreenListener) -> FullscreenSubscription {
        match self {
            Self::Browser(service) => service.subscribe(listener),
            Self::Stub(service) => service.subscribe(listener),
        }
    }
}

/// Builds the fullscreen adapter for the compile-time selected host strategy.
pub fn fullscreen_service() -> FullscreenServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => FullscreenServiceAdapter::Browser(WebFullscreenService),
        HostStrategy::Stub => FullscreenServiceAdapter::Stub(NoopFullscreenService),
    }
}

/// Same as [`fullscreen_service`], boxed for injection into the preview runtime.
pub fn shared_fullscreen_service() -> Rc<dyn FullscreenService> {
    Rc::new(fullscreen_service())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strategy_name_matches_selected_adapter() {
        let adapter = fullscreen_service();
        match (selected_host_strategy(), adapter) {
            (HostStrategy::Browser, FullscreenServiceAdapter::Browser(_)) => {
                assert_eq!(host_strategy_name(), "browser")
            }
            (HostStrategy::Stub, FullscreenServiceAdapter::Stub(_)) => {
                assert_eq!(host_strategy_name(), "stub")
            }
            (strategy, adapter) => panic!("{strategy:?} built mismatched adapter {adapter:?}"),
        }
    }

    #[test]
    fn stub_adapter_accepts_requests_without_entering_fullscreen() {
        let adapter = FullscreenServiceAdapter::Stub(NoopFullscreenService);
        assert_eq!(adapter.request_fullscreen("preview-frame"), Ok(()));
        assert!(!adapter.is_fullscreen());
    }
}
