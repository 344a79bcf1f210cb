//! Fullscreen host-service contracts and lightweight adapters.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
    rc::Rc,
};

/// Callback invoked with the new fullscreen flag whenever the host reports a change.
pub type FullscreenListener = Rc<dyn Fn(bool)>;

/// Host service that owns the document-level fullscreen state.
pub trait FullscreenService {
    /// Returns whether any element is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Asks the host to make the element with `target_dom_id` fullscreen.
    ///
    /// Success only means the request was accepted; the state change is reported later through
    /// [`FullscreenService::subscribe`].
    ///
    /// # Errors
    ///
    /// Returns an error when the target is missing or the host refuses the request.
    fn request_fullscreen(&self, target_dom_id: &str) -> Result<(), String>;

    /// Asks the host to leave fullscreen.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot leave fullscreen.
    fn exit_fullscreen(&self) -> Result<(), String>;

    /// Registers `listener` for fullscreen changes until the returned handle is dropped.
    fn subscribe(&self, listener: FullscreenListener) -> FullscreenSubscription;
}

/// Handle returned by [`FullscreenService::subscribe`].
///
/// Dropping the handle (or calling [`FullscreenSubscription::unsubscribe`]) detaches the
/// listener exactly once.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct FullscreenSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl FullscreenSubscription {
    /// Creates a subscription that runs `detach` when released.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Creates a subscription with nothing to detach.
    pub fn detached() -> Self {
        Self { detach: None }
    }

    /// Returns whether the listener is still attached.
    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detaches the listener now instead of on drop.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for FullscreenSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for FullscreenSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullscreenSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op fullscreen service for hosts without a fullscreen API. Never reports fullscreen.
pub struct NoopFullscreenService;

impl FullscreenService for NoopFullscreenService {
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request_fullscreen(&self, _target_dom_id: &str) -> Result<(), String> {
        Ok(())
    }

    fn exit_fullscreen(&self) -> Result<(), String> {
        Ok(())
    }

    fn subscribe(&self, _listener: FullscreenListener) -> FullscreenSubscription {
        FullscreenSubscription::detached()
    }
}

#[derive(Default)]
struct MemoryFullscreenInner {
    is_fullscreen: Cell<bool>,
    next_listener_id: Cell<u64>,
    listeners: RefCell<BTreeMap<u64, FullscreenListener>>,
    requests: RefCell<Vec<String>>,
    exits: Cell<usize>,
    refusal: RefCell<Option<String>>,
}

#[derive(Clone, Default)]
/// In-memory fullscreen service for tests and non-browser hosts.
///
/// Requests are recorded but never change state on their own; call
/// [`MemoryFullscreenService::set_fullscreen`] to simulate the host's change notification.
pub struct MemoryFullscreenService {
    inner: Rc<MemoryFullscreenInner>,
}

impl MemoryFullscreenService {
    /// Sets the fullscreen flag and notifies listeners when it changed.
    pub fn set_fullscreen(&self, value: bool) {
        if self.inner.is_fullscreen.replace(value) == value {
            return;
        }
        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<FullscreenListener> =
            self.inner.listeners.borrow().values().cloned().collect();
        for listener in listeners {
            listener(value);
        }
    }

    /// Makes subsequent requests fail with `reason`, or succeed again with `None`.
    pub fn refuse_requests(&self, reason: Option<&str>) {
        *self.inner.refusal.borrow_mut() = reason.map(str::to_string);
    }

    /// DOM ids passed to [`FullscreenService::request_fullscreen`], in call order.
    pub fn requested_targets(&self) -> Vec<String> {
        self.inner.requests.borrow().clone()
    }

    /// Number of accepted [`FullscreenService::exit_fullscreen`] calls.
    pub fn exit_requests(&self) -> usize {
        self.inner.exits.get()
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn check_refusal(&self) -> Result<(), String> {
        match self.inner.refusal.borrow().as_ref() {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for MemoryFullscreenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFullscreenService")
            .field("is_fullscreen", &self.inner.is_fullscreen.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl FullscreenService for MemoryFullscreenService {
    fn is_fullscreen(&self) -> bool {
        self.inner.is_fullscreen.get()
    }

    fn request_fullscreen(&self, target_dom_id: &str) -> Result<(), String> {
        self.check_refusal()?;
        self.inner
            .requests
            .borrow_mut()
            .push(target_dom_id.to_string());
        Ok(())
    }

    fn exit_fullscreen(&self) -> Result<(), String> {
        self.check_refusal()?;
        self.inner.exits.set(self.inner.exits.get() + 1);
        Ok(())
    }

    fn subscribe(&self, listener: FullscreenListener) -> FullscreenSubscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().insert(id, listener);

        let inner = Rc::downgrade(&self.inner);
        FullscreenSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().remove(&id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn recording_listener() -> (Rc<RefCell<Vec<bool>>>, FullscreenListener) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn memory_service_notifies_only_on_change() {
        let service = MemoryFullscreenService::default();
        let (seen, listener) = recording_listener();
        let _subscription = service.subscribe(listener);

        service.set_fullscreen(true);
        service.set_fullscreen(true);
        service.set_fullscreen(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!service.is_fullscreen());
    }

    #[test]
    fn dropping_subscription_detaches_listener() {
        let service = MemoryFullscreenService::default();
        let (seen, listener) = recording_listener();
        let subscription = service.subscribe(listener);
        assert_eq!(service.listener_count(), 1);

        drop(subscription);
        service.set_fullscreen(true);

        assert_eq!(service.listener_count(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn explicit_unsubscribe_leaves_other_listeners_attached() {
        let service = MemoryFullscreenService::default();
        let (first_seen, first) = recording_listener();
        let (second_seen, second) = recording_listener();
        let first_subscription = service.subscribe(first);
        let _second_subscription = service.subscribe(second);

        first_subscription.unsubscribe();
        service.set_fullscreen(true);

        assert!(first_seen.borrow().is_empty());
        assert_eq!(*second_seen.borrow(), vec![true]);
    }

    #[test]
    fn requests_are_recorded_without_changing_state() {
        let service = MemoryFullscreenService::default();
        let service_obj: &dyn FullscreenService = &service;

        service_obj.request_fullscreen("preview-frame").expect("request");
        service_obj.exit_fullscreen().expect("exit");

        assert!(!service_obj.is_fullscreen());
        assert_eq!(service.requested_targets(), vec!["preview-frame".to_string()]);
        assert_eq!(service.exit_requests(), 1);
    }

    #[test]
    fn refused_requests_surface_the_reason() {
        let service = MemoryFullscreenService::default();
        service.refuse_requests(Some("permission denied"));

        assert_eq!(
            service.request_fullscreen("preview-frame"),
            Err("permission denied".to_string())
        );
        assert!(service.requested_targets().is_empty());

        service.refuse_requests(None);
        assert_eq!(service.request_fullscreen("preview-frame"), Ok(()));
    }

    #[test]
    fn noop_service_is_never_fullscreen() {
        let service = NoopFullscreenService;
        let subscription = service.subscribe(Rc::new(|_| {}));
        assert!(!subscription.is_active());
        assert!(service.request_fullscreen("anything").is_ok());
        assert!(!service.is_fullscreen());
    }
}
