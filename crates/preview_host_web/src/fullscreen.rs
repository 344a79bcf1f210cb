//! Fullscreen adapter backed by `document.fullscreenElement` and the `fullscreenchange` event.

use preview_host::{FullscreenListener, FullscreenService, FullscreenSubscription};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// DOM event fired on `document` whenever an element enters or leaves fullscreen.
pub const FULLSCREEN_CHANGE_EVENT: &str = "fullscreenchange";

#[cfg(not(target_arch = "wasm32"))]
const UNAVAILABLE: &str = "fullscreen is only available when compiled for wasm32";

#[derive(Debug, Clone, Copy, Default)]
/// Browser fullscreen service using the document Fullscreen API.
pub struct WebFullscreenService;

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .ok_or_else(|| "window unavailable".to_string())?
        .document()
        .ok_or_else(|| "document unavailable".to_string())
}

impl FullscreenService for WebFullscreenService {
    fn is_fullscreen(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            document()
                .map(|document| document.fullscreen_element().is_some())
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn request_fullscreen(&self, target_dom_id: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let target = document()?
                .get_element_by_id(target_dom_id)
                .ok_or_else(|| format!("fullscreen target `#{target_dom_id}` not found"))?;
            target
                .request_fullscreen()
                .map_err(|err| format!("fullscreen request failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = target_dom_id;
            Err(UNAVAILABLE.to_string())
        }
    }

    fn exit_fullscreen(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = document()?;
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(UNAVAILABLE.to_string())
        }
    }

    fn subscribe(&self, listener: FullscreenListener) -> FullscreenSubscription {
        #[cfg(target_arch = "wasm32")]
        {
            let Ok(document) = document() else {
                return FullscreenSubscription::detached();
            };

            let document_for_event = document.clone();
            let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
                listener(document_for_event.fullscreen_element().is_some());
            }));
            if document
                .add_event_listener_with_callback(
                    FULLSCREEN_CHANGE_EVENT,
                    on_change.as_ref().unchecked_ref(),
                )
                .is_err()
            {
                return FullscreenSubscription::detached();
            }

            FullscreenSubscription::new(move || {
                let _ = document.remove_event_listener_with_callback(
                    FULLSCREEN_CHANGE_EVENT,
                    on_change.as_ref().unchecked_ref(),
                );
                drop(on_change);
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            FullscreenSubscription::detached()
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_builds_report_the_api_as_unavailable() {
        let service = WebFullscreenService;
        assert!(!service.is_fullscreen());
        assert_eq!(
            service.request_fullscreen("preview-frame"),
            Err(UNAVAILABLE.to_string())
        );
        assert_eq!(service.exit_fullscreen(), Err(UNAVAILABLE.to_string()));
        assert!(!service.subscribe(Rc::new(|_| {})).is_active());
    }
}
