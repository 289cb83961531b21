//! Application state management for Z-Bazzar
//!
//! This crate provides the reactive state containers backing the app shell:
//! the auth store (current identity and startup resolution) and the theme
//! store (appearance mode), both built on a shared watch-channel primitive
//! with a subscription contract for re-render triggers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod store;
pub mod theme;

pub use auth::{AuthState, AuthStore, Identity};
pub use store::Store;
pub use theme::{ThemeConfig, ThemeMode, ThemeState, ThemeStore};
