//! Modal lifecycle controller
//!
//! A [`ModalProvider`] owns a single modal slot. Components that trigger
//! modals receive a [`ModalHandle`] and drive the slot through it. While the
//! modal is open the provider holds a body scroll lock and, when enabled, an
//! Escape key listener on the document. Both are scoped guards, so every
//! exit path (close, option change, provider teardown) releases them.

use crate::document::{Document, KeyListenerGuard, ScrollLock};
use crate::events::Key;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Backdrop classes applied before any caller-supplied class
pub const BACKDROP_BASE_CLASSES: &str =
    "fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50";

/// Container classes applied before any caller-supplied class
pub const CONTAINER_BASE_CLASSES: &str = "relative bg-white rounded-lg shadow-xl";

/// Modal errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// The handle is not attached to a live provider
    #[error("modal API used outside of a ModalProvider")]
    OutsideProvider,
}

/// Result type for modal operations
pub type Result<T> = std::result::Result<T, ModalError>;

// =============================================================================
// Options
// =============================================================================

fn default_true() -> bool {
    true
}

/// Per-open modal behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalOptions {
    /// Close when the backdrop itself is clicked
    #[serde(default = "default_true")]
    pub close_on_backdrop_click: bool,
    /// Close when Escape is pressed
    #[serde(default = "default_true")]
    pub close_on_escape: bool,
    /// Extra backdrop classes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub backdrop_class_name: String,
    /// Extra container classes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub container_class_name: String,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            close_on_backdrop_click: true,
            close_on_escape: true,
            backdrop_class_name: String::new(),
            container_class_name: String::new(),
        }
    }
}

impl ModalOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set backdrop-click closing
    pub fn with_close_on_backdrop_click(mut self, enabled: bool) -> Self {
        self.close_on_backdrop_click = enabled;
        self
    }

    /// Set Escape closing
    pub fn with_close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }

    /// Add backdrop classes
    pub fn with_backdrop_class(mut self, class_name: impl Into<String>) -> Self {
        self.backdrop_class_name = class_name.into();
        self
    }

    /// Add container classes
    pub fn with_container_class(mut self, class_name: impl Into<String>) -> Self {
        self.container_class_name = class_name.into();
        self
    }
}

// =============================================================================
// Render Model
// =============================================================================

/// Where a click on the modal overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop element itself
    Backdrop,
    /// Anything inside the container
    Content,
}

/// Rendered modal overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView<C> {
    /// Backdrop class string
    pub backdrop_class_name: String,
    /// Container class string
    pub container_class_name: String,
    /// Modal body
    pub content: C,
}

fn join_classes(base: &str, extra: &str) -> String {
    if extra.trim().is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra.trim())
    }
}

// =============================================================================
// Provider
// =============================================================================

struct ModalSlot<C> {
    is_open: bool,
    content: Option<C>,
    options: ModalOptions,
}

#[derive(Default)]
struct Effects {
    scroll_lock: Option<ScrollLock>,
    escape_listener: Option<KeyListenerGuard>,
}

struct Shared<C> {
    slot: Mutex<ModalSlot<C>>,
    effects: Mutex<Effects>,
    document: Option<Arc<dyn Document>>,
}

impl<C: Send + 'static> Shared<C> {
    fn open(self: &Arc<Self>, content: C, options: ModalOptions) {
        {
            let mut slot = self.slot.lock();
            let replaced = slot.is_open;
            slot.is_open = true;
            slot.content = Some(content);
            slot.options = options;
            tracing::debug!(replaced, "modal opened");
        }
        self.sync_effects();
    }

    fn close(self: &Arc<Self>) {
        {
            let mut slot = self.slot.lock();
            if !slot.is_open {
                return;
            }
            slot.is_open = false;
            tracing::debug!("modal closed");
        }
        self.sync_effects();
    }

    fn is_open(&self) -> bool {
        self.slot.lock().is_open
    }

    /// Bring the document effects in line with the slot state.
    ///
    /// The slot lock is held for the whole update, so concurrent
    /// transitions apply their effects in the order they change the slot.
    /// Lock order is slot, then effects.
    fn sync_effects(self: &Arc<Self>) {
        let Some(document) = &self.document else {
            return;
        };

        let slot = self.slot.lock();
        let mut effects = self.effects.lock();

        if !slot.is_open {
            effects.escape_listener = None;
            effects.scroll_lock = None;
            return;
        }

        if effects.scroll_lock.is_none() {
            effects.scroll_lock = Some(ScrollLock::acquire(Arc::clone(document)));
        }

        if !slot.options.close_on_escape {
            effects.escape_listener = None;
        } else if effects.escape_listener.is_none() {
            let weak = Arc::downgrade(self);
            effects.escape_listener = Some(KeyListenerGuard::register(
                Arc::clone(document),
                Arc::new(move |key: &Key| {
                    if *key != Key::Escape {
                        return;
                    }
                    if let Some(shared) = weak.upgrade() {
                        tracing::debug!("escape pressed");
                        shared.close();
                    }
                }),
            ));
        }
    }
}

/// Owner of the modal slot
pub struct ModalProvider<C> {
    shared: Arc<Shared<C>>,
}

impl<C: Send + 'static> ModalProvider<C> {
    /// Create a provider bound to a document
    pub fn new(document: Arc<dyn Document>) -> Self {
        Self::build(Some(document))
    }

    /// Create a provider without a document (server rendering).
    ///
    /// The slot state still works, but no effects are applied and nothing
    /// renders.
    pub fn headless() -> Self {
        Self::build(None)
    }

    fn build(document: Option<Arc<dyn Document>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(ModalSlot {
                    is_open: false,
                    content: None,
                    options: ModalOptions::default(),
                }),
                effects: Mutex::new(Effects::default()),
                document,
            }),
        }
    }

    /// Controller handle for components under this provider
    pub fn handle(&self) -> ModalHandle<C> {
        ModalHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Open the modal, replacing any current content
    pub fn open(&self, content: C, options: ModalOptions) {
        self.shared.open(content, options);
    }

    /// Close the modal, keeping its last content
    pub fn close(&self) {
        self.shared.close();
    }

    /// Whether the modal is open
    pub fn is_open(&self) -> bool {
        self.shared.is_open()
    }

    /// Options of the current or last open
    pub fn options(&self) -> ModalOptions {
        self.shared.slot.lock().options.clone()
    }

    /// Handle a click on the overlay. Returns whether the modal closed.
    pub fn handle_backdrop_click(&self, target: ClickTarget) -> bool {
        let should_close = {
            let slot = self.shared.slot.lock();
            slot.is_open && target == ClickTarget::Backdrop && slot.options.close_on_backdrop_click
        };
        if should_close {
            self.shared.close();
        }
        should_close
    }

    /// Handle a keydown routed directly to the provider
    pub fn handle_key(&self, key: &Key) -> bool {
        let should_close = *key == Key::Escape && {
            let slot = self.shared.slot.lock();
            slot.is_open && slot.options.close_on_escape
        };
        if should_close {
            self.shared.close();
        }
        should_close
    }
}

impl<C: Clone + Send + 'static> ModalProvider<C> {
    /// Content of the current or last open
    pub fn content(&self) -> Option<C> {
        self.shared.slot.lock().content.clone()
    }

    /// Render the overlay; `None` when closed or without a document
    pub fn render(&self) -> Option<ModalView<C>> {
        self.shared.document.as_ref()?;

        let slot = self.shared.slot.lock();
        if !slot.is_open {
            return None;
        }
        let content = slot.content.clone()?;

        Some(ModalView {
            backdrop_class_name: join_classes(
                BACKDROP_BASE_CLASSES,
                &slot.options.backdrop_class_name,
            ),
            container_class_name: join_classes(
                CONTAINER_BASE_CLASSES,
                &slot.options.container_class_name,
            ),
            content,
        })
    }
}

impl<C> Drop for ModalProvider<C> {
    fn drop(&mut self) {
        self.shared.release_effects();
        tracing::debug!("modal provider dropped");
    }
}

impl<C> Shared<C> {
    fn release_effects(&self) {
        let effects = std::mem::take(&mut *self.effects.lock());
        drop(effects);
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Cloneable controller for a provider's modal slot
pub struct ModalHandle<C> {
    shared: Weak<Shared<C>>,
}

impl<C> Clone for ModalHandle<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<C> std::fmt::Debug for ModalHandle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalHandle")
            .field("attached", &(self.shared.strong_count() > 0))
            .finish()
    }
}

impl<C: Send + 'static> ModalHandle<C> {
    /// Handle not attached to any provider
    pub fn detached() -> Self {
        Self { shared: Weak::new() }
    }

    fn shared(&self) -> Result<Arc<Shared<C>>> {
        self.shared.upgrade().ok_or(ModalError::OutsideProvider)
    }

    /// Open the modal, replacing any current content
    pub fn open(&self, content: C, options: ModalOptions) -> Result<()> {
        self.shared()?.open(content, options);
        Ok(())
    }

    /// Close the modal
    pub fn close(&self) -> Result<()> {
        self.shared()?.close();
        Ok(())
    }

    /// Whether the modal is open
    pub fn is_open(&self) -> Result<bool> {
        Ok(self.shared()?.is_open())
    }
}

/// Resolve the modal controller from a component's context
pub fn use_modal<C: Send + 'static>(context: Option<&ModalHandle<C>>) -> Result<ModalHandle<C>> {
    match context {
        Some(handle) if handle.shared.strong_count() > 0 => Ok(handle.clone()),
        _ => Err(ModalError::OutsideProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{HeadlessDocument, MockDocument, Overflow};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn provider() -> (Arc<HeadlessDocument>, ModalProvider<String>) {
        let document = Arc::new(HeadlessDocument::new());
        let provider = ModalProvider::new(document.clone() as Arc<dyn Document>);
        (document, provider)
    }

    #[test]
    fn test_open_and_close() {
        let (document, provider) = provider();
        let handle = provider.handle();

        handle.open("A".to_string(), ModalOptions::default()).unwrap();
        assert!(provider.is_open());
        assert!(document.is_scroll_locked());
        assert_eq!(document.listener_count(), 1);

        handle.close().unwrap();
        assert!(!provider.is_open());
        assert_eq!(document.body_overflow(), Some(Overflow::Unset));
        assert_eq!(document.listener_count(), 0);
        assert_eq!(provider.content(), Some("A".to_string()));
    }

    #[test]
    fn test_second_open_replaces() {
        let (document, provider) = provider();
        provider.open("A".to_string(), ModalOptions::default());
        provider.open("B".to_string(), ModalOptions::default());

        assert_eq!(provider.content(), Some("B".to_string()));
        assert_eq!(document.listener_count(), 1);

        provider.close();
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn test_escape_closes() {
        let (document, provider) = provider();
        provider.open("A".to_string(), ModalOptions::default());

        document.dispatch_key(&Key::Enter);
        assert!(provider.is_open());

        document.dispatch_key(&Key::Escape);
        assert!(!provider.is_open());
        assert_eq!(document.listener_count(), 0);
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn test_escape_disabled() {
        let (document, provider) = provider();
        provider.open(
            "A".to_string(),
            ModalOptions::new().with_close_on_escape(false),
        );

        assert_eq!(document.listener_count(), 0);
        document.dispatch_key(&Key::Escape);
        assert!(provider.is_open());
        assert!(!provider.handle_key(&Key::Escape));
    }

    #[test]
    fn test_option_change_removes_listener() {
        let (document, provider) = provider();
        provider.open("A".to_string(), ModalOptions::default());
        assert_eq!(document.listener_count(), 1);

        provider.open(
            "B".to_string(),
            ModalOptions::new().with_close_on_escape(false),
        );
        assert_eq!(document.listener_count(), 0);
        assert!(document.is_scroll_locked());
    }

    #[test]
    fn test_concurrent_transitions_leave_effects_consistent() {
        let (document, provider) = provider();

        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let handle = provider.handle();
                std::thread::spawn(move || {
                    for round in 0..200 {
                        if (worker + round) % 2 == 0 {
                            handle
                                .open(format!("{}-{}", worker, round), ModalOptions::default())
                                .unwrap();
                        } else {
                            handle.close().unwrap();
                        }
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let open = provider.is_open();
        assert_eq!(document.is_scroll_locked(), open);
        assert_eq!(document.listener_count(), usize::from(open));

        provider.close();
        assert!(!document.is_scroll_locked());
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_backdrop_click() {
        let (_document, provider) = provider();
        provider.open("A".to_string(), ModalOptions::default());

        assert!(!provider.handle_backdrop_click(ClickTarget::Content));
        assert!(provider.is_open());

        assert!(provider.handle_backdrop_click(ClickTarget::Backdrop));
        assert!(!provider.is_open());
    }

    #[test]
    fn test_backdrop_click_disabled() {
        let (_document, provider) = provider();
        provider.open(
            "A".to_string(),
            ModalOptions::new().with_close_on_backdrop_click(false),
        );
        assert!(!provider.handle_backdrop_click(ClickTarget::Backdrop));
        assert!(provider.is_open());
    }

    #[test]
    fn test_provider_drop_releases_effects() {
        let (document, provider) = provider();
        let handle = provider.handle();
        handle.open("A".to_string(), ModalOptions::default()).unwrap();

        drop(provider);

        assert!(!document.is_scroll_locked());
        assert_eq!(document.listener_count(), 0);
        assert_eq!(
            handle.open("B".to_string(), ModalOptions::default()),
            Err(ModalError::OutsideProvider)
        );
        assert_eq!(handle.is_open(), Err(ModalError::OutsideProvider));
    }

    #[test]
    fn test_detached_handle() {
        let handle: ModalHandle<String> = ModalHandle::detached();
        let err = handle.close().unwrap_err();
        assert_eq!(err.to_string(), "modal API used outside of a ModalProvider");
    }

    #[test]
    fn test_use_modal() {
        let (_document, provider) = provider();
        let handle = provider.handle();

        assert!(use_modal(Some(&handle)).is_ok());
        assert_eq!(use_modal::<String>(None).unwrap_err(), ModalError::OutsideProvider);

        drop(provider);
        assert!(use_modal(Some(&handle)).is_err());
    }

    #[test]
    fn test_render() {
        let (_document, provider) = provider();
        assert!(provider.render().is_none());

        provider.open(
            "body".to_string(),
            ModalOptions::new()
                .with_backdrop_class("p-4")
                .with_container_class("w-96"),
        );
        let view = provider.render().unwrap();
        assert_eq!(
            view.backdrop_class_name,
            "fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50 p-4"
        );
        assert_eq!(view.container_class_name, "relative bg-white rounded-lg shadow-xl w-96");
        assert_eq!(view.content, "body");

        provider.close();
        assert!(provider.render().is_none());
    }

    #[test]
    fn test_headless_provider() {
        let provider: ModalProvider<String> = ModalProvider::headless();
        provider.open("A".to_string(), ModalOptions::default());
        assert!(provider.is_open());
        assert!(provider.render().is_none());
    }

    #[test]
    fn test_options_deserialize_defaults() {
        let options: ModalOptions = serde_json::from_str(r#"{"closeOnEscape": false}"#).unwrap();
        assert!(!options.close_on_escape);
        assert!(options.close_on_backdrop_click);
        assert!(options.backdrop_class_name.is_empty());
    }

    #[test]
    fn test_mock_document_effects() {
        let mut mock = MockDocument::new();
        let next = AtomicU64::new(0);
        mock.expect_set_body_overflow()
            .with(mockall::predicate::eq(Overflow::Hidden))
            .times(1)
            .return_const(());
        mock.expect_set_body_overflow()
            .with(mockall::predicate::eq(Overflow::Unset))
            .times(1)
            .return_const(());
        mock.expect_add_key_listener()
            .times(1)
            .returning(move |_| next.fetch_add(1, Ordering::SeqCst) + 7);
        mock.expect_remove_key_listener()
            .with(mockall::predicate::eq(7))
            .times(1)
            .return_const(());

        let provider: ModalProvider<String> = ModalProvider::new(Arc::new(mock));
        provider.open("A".to_string(), ModalOptions::default());
        provider.close();
        provider.close();
    }
}
