//! Host bridge that executes reducer effects and forwards fullscreen changes.

use std::rc::Rc;

use leptos::{logging, Callable, Callback};
use preview_core::{PreviewAction, PreviewEffect};
use preview_host::{FullscreenService, FullscreenSubscription};

#[derive(Clone)]
/// Fullscreen service plus the DOM element it should enlarge.
pub struct PreviewHostContext {
    fullscreen: Rc<dyn FullscreenService>,
    target_dom_id: String,
}

impl PreviewHostContext {
    /// Binds `fullscreen` to the element with `target_dom_id`.
    pub fn new(fullscreen: Rc<dyn FullscreenService>, target_dom_id: impl Into<String>) -> Self {
        Self {
            fullscreen,
            target_dom_id: target_dom_id.into(),
        }
    }

    /// DOM id of the element put into fullscreen.
    pub fn target_dom_id(&self) -> &str {
        &self.target_dom_id
    }

    /// Current host fullscreen flag.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Executes reducer effects in order. Failures are logged; the state is left as-is because
    /// only the host's change notification moves the fullscreen flag.
    pub fn run_effects(&self, effects: &[PreviewEffect]) {
        for effect in effects {
            let result = match effect {
                PreviewEffect::RequestFullscreen => {
                    self.fullscreen.request_fullscreen(&self.target_dom_id)
                }
                PreviewEffect::ExitFullscreen => self.fullscreen.exit_fullscreen(),
            };
            if let Err(err) = result {
                logging::warn!("preview fullscreen effect {effect:?} failed: {err}");
            }
        }
    }

    /// Subscribes `dispatch` to host fullscreen changes.
    pub fn install_fullscreen_listener(
        &self,
        dispatch: Callback<PreviewAction>,
    ) -> FullscreenSubscription {
        self.fullscreen.subscribe(Rc::new(move |is_full_screen| {
            dispatch.call(PreviewAction::FullscreenChanged { is_full_screen });
        }))
    }
}
