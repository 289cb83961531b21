//! Authentication service for Z-Bazzar
//!
//! This module provides the sign-in/sign-out flow between the screens and
//! the auth store. Credential verification is behind the
//! [`CredentialVerifier`] trait; this build ships [`StubVerifier`], which
//! accepts any credentials and fabricates a fixed identity. A real
//! deployment swaps the verifier for a network client without touching the
//! store or the screens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use app_state::{AuthStore, Identity};

/// Authentication service error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Invalid credentials
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Network error
    #[error("Network error: {0}")]
    Network(String),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Sign-in parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInParams {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl SignInParams {
    /// Create sign-in parameters.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Verifies credentials and produces the signed-in identity.
///
/// This is the seam where a real deployment performs its network call; the
/// contract is asynchronous and fallible even though the shipped
/// implementation resolves immediately.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify the credentials, returning the identity on success.
    async fn verify(&self, params: SignInParams) -> Result<Identity>;
}

/// Verifier that accepts any credentials.
///
/// Produces `Identity { id: "1", email, name: "Test User" }` — the simulated
/// sign-in of this build. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubVerifier;

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify(&self, params: SignInParams) -> Result<Identity> {
        Ok(Identity::new("1", params.email, "Test User"))
    }
}

/// Authentication service
///
/// Bridges credential verification and the auth store. Screens call
/// [`AuthService::sign_in`] and surface its error; on success the store is
/// already updated by the time the call returns.
///
/// # Example
///
/// ```rust
/// use app_core::auth::{AuthService, SignInParams};
/// use app_state::AuthStore;
///
/// #[tokio::main]
/// async fn main() {
///     let store = AuthStore::new();
///     let auth = AuthService::new(store.clone());
///
///     auth.resolve_startup();
///     let identity = auth
///         .sign_in(SignInParams::new("alice@example.com", "secret"))
///         .await
///         .unwrap();
///
///     assert_eq!(store.identity(), Some(identity));
/// }
/// ```
#[derive(Clone)]
pub struct AuthService {
    store: AuthStore,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthService {
    /// Create a service over `store` with the stub verifier.
    pub fn new(store: AuthStore) -> Self {
        Self::with_verifier(store, Arc::new(StubVerifier))
    }

    /// Create a service with a custom credential verifier.
    pub fn with_verifier(store: AuthStore, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { store, verifier }
    }

    /// Complete the store's startup resolution.
    ///
    /// Immediate in this build: there is no persisted session to restore,
    /// so resolution amounts to flipping the loading gate.
    pub fn resolve_startup(&self) {
        self.store.resolve();
    }

    /// Sign in with the given credentials.
    ///
    /// Verifies through the configured [`CredentialVerifier`], then records
    /// the identity in the auth store. On failure the store is untouched.
    pub async fn sign_in(&self, params: SignInParams) -> Result<Identity> {
        let email = params.email.clone();
        match self.verifier.verify(params).await {
            Ok(identity) => {
                self.store.sign_in(identity.clone()).await;
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "sign-in failed");
                Err(e)
            }
        }
    }

    /// Sign out the current identity, if any.
    pub fn sign_out(&self) {
        self.store.sign_out();
    }

    /// Get the currently signed-in identity.
    pub fn current_identity(&self) -> Option<Identity> {
        self.store.identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_sign_in_always_succeeds() {
        let store = AuthStore::new();
        let auth = AuthService::new(store.clone());
        auth.resolve_startup();

        let identity = auth
            .sign_in(SignInParams::new("a@b.com", "x"))
            .await
            .unwrap();

        assert_eq!(identity, Identity::new("1", "a@b.com", "Test User"));
        assert_eq!(store.identity(), Some(identity));
    }

    #[tokio::test]
    async fn sign_in_failure_leaves_store_untouched() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .returning(|_| Err(AuthError::InvalidCredentials));

        let store = AuthStore::new();
        let auth = AuthService::with_verifier(store.clone(), Arc::new(verifier));
        auth.resolve_startup();

        let err = auth
            .sign_in(SignInParams::new("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(store.identity().is_none());
    }

    #[tokio::test]
    async fn custom_verifier_identity_is_recorded() {
        let mut verifier = MockCredentialVerifier::new();
        verifier
            .expect_verify()
            .returning(|params| Ok(Identity::new("42", params.email, "Alice")));

        let store = AuthStore::new();
        let auth = AuthService::with_verifier(store.clone(), Arc::new(verifier));
        auth.resolve_startup();

        let identity = auth
            .sign_in(SignInParams::new("alice@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(identity.id, "42");
        assert_eq!(store.identity(), Some(identity));
    }

    #[tokio::test]
    async fn sign_out_clears_current_identity() {
        let store = AuthStore::new();
        let auth = AuthService::new(store);
        auth.resolve_startup();

        auth.sign_in(SignInParams::new("a@b.com", "x")).await.unwrap();
        assert!(auth.current_identity().is_some());

        auth.sign_out();
        assert!(auth.current_identity().is_none());
    }
}
