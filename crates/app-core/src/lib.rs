//! Core application logic for Z-Bazzar
//!
//! This crate contains the application services behind the UI layer: the
//! authentication flow (with its pluggable credential-verification seam)
//! and the one-shot bootstrap sequencer that gates startup.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod bootstrap;

pub use auth::{AuthError, AuthService, CredentialVerifier, SignInParams, StubVerifier};
pub use bootstrap::{
    BootstrapConfig, BootstrapError, BootstrapPhase, BootstrapSequencer, BootstrapState,
};
