//! Shared reactive store primitive
//!
//! A [`Store`] is an explicitly constructed, clonable handle over a single
//! value. Mutations go through [`Store::update`] and notify every subscriber;
//! reads are always against the latest committed value, so derived views
//! (such as the root router) never observe a stale snapshot.

use std::sync::Arc;
use tokio::sync::watch;

/// A clonable reactive state container.
///
/// Internally this is a `tokio::sync::watch` channel: the store owns the
/// sender, and [`Store::subscribe`] hands out receivers that wake whenever
/// the value changes. Cloning the store clones the handle, not the state.
#[derive(Debug)]
pub struct Store<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { tx: Arc::clone(&self.tx) }
    }
}

impl<T: Clone> Store<T> {
    /// Create a new store holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Get a snapshot of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Mutate the value in place and notify all subscribers.
    ///
    /// The new value is visible to every reader by the time this returns.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Conditionally mutate the value.
    ///
    /// Subscribers are notified only when `f` returns true; a false return
    /// means nothing changed and no wake-up is delivered. Returns `f`'s
    /// verdict.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Subscribe to change notifications.
    ///
    /// The receiver initially marks the current value as seen; awaiting
    /// `changed()` resolves on the next mutation.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_is_visible_immediately() {
        let store = Store::new(0u32);
        store.update(|v| *v += 1);
        assert_eq!(store.get(), 1);
    }

    #[tokio::test]
    async fn subscribers_are_notified() {
        let store = Store::new("initial".to_string());
        let mut rx = store.subscribe();

        store.update(|v| *v = "changed".to_string());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "changed");
    }

    #[tokio::test]
    async fn update_if_skips_notification_when_unchanged() {
        let store = Store::new(5u32);
        let mut rx = store.subscribe();

        assert!(!store.update_if(|_| false));
        assert!(!rx.has_changed().unwrap());

        assert!(store.update_if(|v| {
            *v = 6;
            true
        }));
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = Store::new(vec![1, 2]);
        let other = store.clone();

        other.update(|v| v.push(3));
        assert_eq!(store.get(), vec![1, 2, 3]);
    }
}
