//! Z-Bazzar storefront client shell
//!
//! A mobile-storefront front-end shell: sign-in/sign-up screens, a product
//! detail screen, a settings screen, and a light/dark theme, composed behind
//! a one-shot bootstrap sequence and an auth-gated root router.
//!
//! The workspace splits into three crates, re-exported here:
//!
//! - [`app_state`] — reactive state containers (auth, theme)
//! - [`app_core`] — auth service and bootstrap sequencer
//! - [`app_ui`] — themes, navigation, screens, root router
//!
//! # Example
//!
//! ```rust
//! use zbazzar::{AuthService, AuthStore, RootRouter, ScreenGroup, SignInParams, ThemeStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let auth_store = AuthStore::new();
//!     let theme = ThemeStore::new();
//!     let auth = AuthService::new(auth_store.clone());
//!     let mut router = RootRouter::new(theme);
//!
//!     router.sync(&auth_store.state());
//!     assert_eq!(router.group(), ScreenGroup::Loading);
//!
//!     auth.resolve_startup();
//!     router.sync(&auth_store.state());
//!     assert_eq!(router.group(), ScreenGroup::Unauthenticated);
//!
//!     auth.sign_in(SignInParams::new("a@b.com", "x")).await.unwrap();
//!     router.sync(&auth_store.state());
//!     assert_eq!(router.group(), ScreenGroup::Authenticated);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core::{
    AuthError, AuthService, BootstrapConfig, BootstrapError, BootstrapPhase,
    BootstrapSequencer, BootstrapState, CredentialVerifier, SignInParams, StubVerifier,
};
pub use app_state::{
    AuthState, AuthStore, Identity, ThemeConfig, ThemeMode, ThemeState, ThemeStore,
};
pub use app_ui::{
    get_theme, NavEffect, RootRouter, Route, ScreenGroup, SettingsScreen, SignInScreen,
    SignUpScreen, SplashOverlay, Theme, ValidationError,
};
