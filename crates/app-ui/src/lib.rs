//! User interface for Z-Bazzar
//!
//! This crate provides the UI layer of the storefront shell: design tokens
//! and themes, typed routes with a keyed navigation stack, the screen
//! models, and the auth-gated root router.
//!
//! # Modules
//!
//! - [`theme`] - Color palette and the light/dark token sets
//! - [`navigation`] - Typed routes, navigation stack, URL router
//! - [`screens`] - Screen models and the splash overlay
//! - [`router`] - Auth-gated root router
//!
//! # Example
//!
//! ```rust
//! use app_state::ThemeMode;
//! use app_ui::theme::get_theme;
//! use app_ui::navigation::Route;
//!
//! let theme = get_theme(ThemeMode::Dark);
//! assert!(theme.is_dark());
//!
//! let route = Route::ProductDetail { id: "sku-1".into() };
//! assert_eq!(route.to_path(), "/product/sku-1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod router;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use navigation::{NavigationStack, Route, RouteParams, Router, StackEntry};
pub use router::{
    AuthenticatedScreens, Mounted, RootRouter, ScreenGroup, UnauthenticatedScreens,
};
pub use screens::{
    NavEffect, ProductDetailScreen, SettingsControl, SettingsItem, SettingsScreen,
    SettingsSection, SignInError, SignInScreen, SignUpScreen, SplashOverlay, ValidationError,
};
pub use theme::{dark_theme, get_theme, light_theme, Color, Theme, TokenSet};
