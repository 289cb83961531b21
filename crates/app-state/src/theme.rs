//! Theme store
//!
//! Holds the current appearance mode. The derived color token set is a pure
//! function of the mode and lives in the UI crate; this container only owns
//! the mode and its toggle.
//!
//! The initial mode is always light. Following the host device's appearance
//! is supported but off by default ([`ThemeConfig::follow_system_appearance`])
//! — an explicit configuration choice rather than commented-out logic.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::store::Store;

/// Appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Whether this is the dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

/// Theme store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Derive the initial mode from the host device's appearance.
    ///
    /// Off by default: the app always starts light regardless of the device
    /// preference.
    #[serde(default)]
    pub follow_system_appearance: bool,
}

/// Current theme state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    /// Current appearance mode
    pub mode: ThemeMode,
}

impl ThemeState {
    /// Whether the current mode is dark.
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }
}

/// Reactive container for [`ThemeState`].
#[derive(Debug, Clone)]
pub struct ThemeStore {
    inner: Store<ThemeState>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore {
    /// Create a store starting in light mode.
    pub fn new() -> Self {
        Self::with_config(ThemeConfig::default(), None)
    }

    /// Create a store with explicit configuration.
    ///
    /// `system_appearance` is the host device's reported mode, consulted
    /// only when [`ThemeConfig::follow_system_appearance`] is set.
    pub fn with_config(config: ThemeConfig, system_appearance: Option<ThemeMode>) -> Self {
        let mode = if config.follow_system_appearance {
            system_appearance.unwrap_or_default()
        } else {
            ThemeMode::Light
        };
        Self {
            inner: Store::new(ThemeState { mode }),
        }
    }

    /// Get a snapshot of the current theme state.
    pub fn state(&self) -> ThemeState {
        self.inner.get()
    }

    /// Get the current mode.
    pub fn mode(&self) -> ThemeMode {
        self.inner.with(|s| s.mode)
    }

    /// Whether the current mode is dark.
    pub fn is_dark(&self) -> bool {
        self.inner.with(|s| s.mode.is_dark())
    }

    /// Flip between light and dark. Total; returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mut new_mode = ThemeMode::Light;
        self.inner.update(|s| {
            s.mode = s.mode.toggled();
            new_mode = s.mode;
        });
        tracing::debug!(mode = %new_mode, "theme toggled");
        new_mode
    }

    /// Subscribe to theme state changes.
    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.inner.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_light() {
        let store = ThemeStore::new();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(!store.is_dark());
    }

    #[tokio::test]
    async fn ignores_system_appearance_by_default() {
        let store = ThemeStore::with_config(ThemeConfig::default(), Some(ThemeMode::Dark));
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn follows_system_appearance_when_configured() {
        let config = ThemeConfig {
            follow_system_appearance: true,
        };
        let store = ThemeStore::with_config(config, Some(ThemeMode::Dark));
        assert_eq!(store.mode(), ThemeMode::Dark);

        // No reported appearance still falls back to light.
        let store = ThemeStore::with_config(config, None);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn toggle_twice_is_identity() {
        let store = ThemeStore::new();
        let original = store.state();

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.state(), original);
    }

    #[tokio::test]
    async fn subscribers_observe_toggle() {
        let store = ThemeStore::new();
        let mut rx = store.subscribe();

        store.toggle();

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_dark());
    }

    #[test]
    fn mode_round_trips_through_strings() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("dim".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}
