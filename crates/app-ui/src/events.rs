//! Event plumbing shared by components
//!
//! Components expose callbacks as [`Callback`] values and receive keyboard
//! input as [`Key`] values translated from the host's DOM-like events.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A shareable event callback
pub struct Callback<T>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Callback<T> {
    /// Wrap a closure
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback
    pub fn emit(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Two callbacks are equal when they share the same closure
impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T, F> From<F> for Callback<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Keyboard keys the components react to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// `Escape`
    Escape,
    /// `Enter`
    Enter,
    /// Any other key, by its DOM `key` name
    Other(String),
}

impl Key {
    /// Translate a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_callback_emit() {
        let total = Arc::new(AtomicU32::new(0));
        let sink = Arc::clone(&total);
        let callback = Callback::new(move |n: u32| {
            sink.fetch_add(n, Ordering::SeqCst);
        });

        callback.emit(2);
        callback.clone().emit(3);
        assert_eq!(total.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_callback_equality() {
        let a: Callback<u32> = Callback::new(|_| {});
        let b = a.clone();
        let c: Callback<u32> = Callback::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("a"), Key::Other("a".to_string()));
    }
}
