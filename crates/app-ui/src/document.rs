//! Document host abstraction
//!
//! The rendering host owns the real document. Components that need
//! document-wide side effects (body scroll locking, global key listeners)
//! go through the [`Document`] trait and hold the effect as a guard that
//! undoes it when dropped.

use crate::events::Key;
use parking_lot::Mutex;
use std::sync::Arc;

/// Registration id of a key listener
pub type ListenerId = u64;

/// Document-level key listener
pub type KeyListener = Arc<dyn Fn(&Key) + Send + Sync>;

/// Body `overflow` style values used for scroll locking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// `overflow: hidden`
    Hidden,
    /// `overflow: unset`
    Unset,
}

impl Overflow {
    /// CSS value
    pub fn as_css(&self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Unset => "unset",
        }
    }
}

/// Document-wide operations provided by the rendering host.
///
/// Callers may hold their own locks while calling these methods, so an
/// implementation must not invoke key listeners from inside them.
#[cfg_attr(test, mockall::automock)]
pub trait Document: Send + Sync {
    /// Set the body `overflow` style
    fn set_body_overflow(&self, overflow: Overflow);

    /// Register a keydown listener on the document
    fn add_key_listener(&self, listener: KeyListener) -> ListenerId;

    /// Remove a previously registered listener
    fn remove_key_listener(&self, id: ListenerId);
}

// =============================================================================
// Scoped Effects
// =============================================================================

/// Body scroll lock, released when dropped
pub struct ScrollLock {
    document: Arc<dyn Document>,
}

impl ScrollLock {
    /// Lock body scrolling
    pub fn acquire(document: Arc<dyn Document>) -> Self {
        document.set_body_overflow(Overflow::Hidden);
        tracing::trace!("body scroll locked");
        Self { document }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.set_body_overflow(Overflow::Unset);
        tracing::trace!("body scroll unlocked");
    }
}

/// Registered key listener, removed when dropped
pub struct KeyListenerGuard {
    document: Arc<dyn Document>,
    id: ListenerId,
}

impl KeyListenerGuard {
    /// Register `listener` on the document
    pub fn register(document: Arc<dyn Document>, listener: KeyListener) -> Self {
        let id = document.add_key_listener(listener);
        Self { document, id }
    }

    /// Registration id
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        self.document.remove_key_listener(self.id);
    }
}

// =============================================================================
// Headless Document
// =============================================================================

#[derive(Default)]
struct HeadlessState {
    body_overflow: Option<Overflow>,
    listeners: Vec<(ListenerId, KeyListener)>,
    next_id: ListenerId,
}

/// In-memory document for server rendering and tests
#[derive(Default)]
pub struct HeadlessDocument {
    state: Mutex<HeadlessState>,
}

impl HeadlessDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Current body `overflow` style, if one was ever set
    pub fn body_overflow(&self) -> Option<Overflow> {
        self.state.lock().body_overflow
    }

    /// Whether body scrolling is currently locked
    pub fn is_scroll_locked(&self) -> bool {
        self.body_overflow() == Some(Overflow::Hidden)
    }

    /// Number of registered key listeners
    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }

    /// Deliver a keydown event to every registered listener.
    ///
    /// Listeners run without the document lock held, so they may add or
    /// remove listeners.
    pub fn dispatch_key(&self, key: &Key) {
        let listeners: Vec<KeyListener> = self
            .state
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(key);
        }
    }
}

impl Document for HeadlessDocument {
    fn set_body_overflow(&self, overflow: Overflow) {
        self.state.lock().body_overflow = Some(overflow);
    }

    fn add_key_listener(&self, listener: KeyListener) -> ListenerId {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.push((id, listener));
        id
    }

    fn remove_key_listener(&self, id: ListenerId) {
        self.state.lock().listeners.retain(|(existing, _)| *existing != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_scroll_lock_released_on_drop() {
        let document = Arc::new(HeadlessDocument::new());
        {
            let _lock = ScrollLock::acquire(document.clone());
            assert!(document.is_scroll_locked());
        }
        assert_eq!(document.body_overflow(), Some(Overflow::Unset));
    }

    #[test]
    fn test_listener_guard() {
        let document = Arc::new(HeadlessDocument::new());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let guard = KeyListenerGuard::register(
            document.clone(),
            Arc::new(move |_key: &Key| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert_eq!(document.listener_count(), 1);

        document.dispatch_key(&Key::Escape);
        drop(guard);
        document.dispatch_key(&Key::Escape);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_remove_itself() {
        let document = Arc::new(HeadlessDocument::new());
        let slot: Arc<Mutex<Option<KeyListenerGuard>>> = Arc::new(Mutex::new(None));
        let slot_in_listener = Arc::clone(&slot);

        let guard = KeyListenerGuard::register(
            document.clone(),
            Arc::new(move |_key: &Key| {
                slot_in_listener.lock().take();
            }),
        );
        *slot.lock() = Some(guard);

        document.dispatch_key(&Key::Enter);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_mock_document_scroll_lock_sequence() {
        let mut mock = MockDocument::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_set_body_overflow()
            .with(mockall::predicate::eq(Overflow::Hidden))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock.expect_set_body_overflow()
            .with(mockall::predicate::eq(Overflow::Unset))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let document: Arc<dyn Document> = Arc::new(mock);
        drop(ScrollLock::acquire(document));
    }

    #[test]
    fn test_overflow_css() {
        assert_eq!(Overflow::Hidden.as_css(), "hidden");
        assert_eq!(Overflow::Unset.as_css(), "unset");
    }
}
