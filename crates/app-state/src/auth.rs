//! Auth store
//!
//! Holds the signed-in identity (if any) for the lifetime of the process.
//! There is no persistence: the identity is created by a sign-in call and
//! destroyed by sign-out or process exit.
//!
//! The store itself is total — sign-in unconditionally records the identity
//! it is given. Credential verification (and its failure modes) lives in the
//! service layer above this store, so the container never rejects.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::store::Store;

/// The authenticated user's minimal profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Opaque user id
    pub id: String,
    /// Email address used to sign in
    pub email: String,
    /// Display name
    pub name: String,
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Current authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// The signed-in identity, or `None` when signed out
    pub identity: Option<Identity>,
    /// True only during initial resolution at startup
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Whether an identity is currently signed in.
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

/// Reactive container for [`AuthState`].
///
/// Startup resolution is a one-way gate: `loading` starts `true`, flips to
/// `false` on [`AuthStore::resolve`], and never goes back. No caller can
/// sign in before resolution completes, since no screen is mounted until the
/// router observes the resolved state.
#[derive(Debug, Clone)]
pub struct AuthStore {
    inner: Store<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    /// Create a store in the unresolved (loading) state.
    pub fn new() -> Self {
        Self {
            inner: Store::new(AuthState::default()),
        }
    }

    /// Get a snapshot of the current auth state.
    pub fn state(&self) -> AuthState {
        self.inner.get()
    }

    /// Get the signed-in identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.inner.with(|s| s.identity.clone())
    }

    /// Whether an identity is currently signed in.
    pub fn is_signed_in(&self) -> bool {
        self.inner.with(|s| s.identity.is_some())
    }

    /// Whether startup resolution has completed.
    pub fn is_resolved(&self) -> bool {
        self.inner.with(|s| !s.loading)
    }

    /// Complete the one-time startup resolution.
    ///
    /// Idempotent: calling again after the first resolution is a no-op.
    pub fn resolve(&self) {
        let resolved = self.inner.update_if(|s| {
            if s.loading {
                s.loading = false;
                true
            } else {
                false
            }
        });
        if resolved {
            tracing::debug!("auth store resolved");
        }
    }

    /// Record a signed-in identity.
    ///
    /// Asynchronous because it models a suspension point (a real deployment
    /// verifies credentials over the network before reaching this store).
    /// `loading` is unaffected.
    pub async fn sign_in(&self, identity: Identity) {
        tracing::info!(email = %identity.email, "signing in");
        self.inner.update(|s| s.identity = Some(identity));
    }

    /// Clear the signed-in identity. A no-op when already signed out.
    pub fn sign_out(&self) {
        self.inner.update_if(|s| match s.identity.take() {
            Some(identity) => {
                tracing::info!(email = %identity.email, "signed out");
                true
            }
            None => false,
        });
    }

    /// Subscribe to auth state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> Identity {
        Identity::new("1", "a@b.com", "Test User")
    }

    #[tokio::test]
    async fn starts_loading_and_signed_out() {
        let store = AuthStore::new();
        let state = store.state();
        assert!(state.loading);
        assert!(state.identity.is_none());
    }

    #[tokio::test]
    async fn resolve_completes_once() {
        let store = AuthStore::new();
        store.resolve();
        assert!(store.is_resolved());

        // Second resolve is a no-op, not a state change.
        let mut rx = store.subscribe();
        store.resolve();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn sign_in_sets_identity_without_touching_loading() {
        let store = AuthStore::new();
        store.resolve();

        store.sign_in(test_identity()).await;

        let state = store.state();
        assert_eq!(state.identity, Some(test_identity()));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn sign_out_clears_identity() {
        let store = AuthStore::new();
        store.resolve();
        store.sign_in(test_identity()).await;

        store.sign_out();
        assert!(!store.is_signed_in());

        // Signing out again changes nothing and wakes nobody.
        let mut rx = store.subscribe();
        store.sign_out();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscribers_observe_sign_in() {
        let store = AuthStore::new();
        store.resolve();
        let mut rx = store.subscribe();

        store.sign_in(test_identity()).await;

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_signed_in());
    }

    #[tokio::test]
    async fn state_serializes_camel_case() {
        let state = AuthState {
            identity: Some(test_identity()),
            loading: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"identity\""));
        assert!(json.contains("\"loading\":false"));

        let parsed: AuthState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
