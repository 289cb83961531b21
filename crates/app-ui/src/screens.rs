//! Application screens for Z-Bazzar
//!
//! Screens are presentational models: they own local form state only, read
//! the stores, invoke store operations on user action, and hand navigation
//! back to the host stack as a [`NavEffect`]. Switching screen groups drops
//! these models entirely — nothing here survives the auth boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use app_core::auth::{AuthError, AuthService, SignInParams};
use app_core::bootstrap::{BootstrapPhase, BootstrapState};
use app_state::ThemeStore;

use crate::navigation::Route;
use crate::theme::palette;

// =============================================================================
// Navigation Effects
// =============================================================================

/// A navigation request produced by a screen for the host stack to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", content = "route")]
pub enum NavEffect {
    /// Push a route; back returns to the current screen
    Push(Route),
    /// Reset to a route, clearing the back-stack (used after sign-in/sign-up)
    ResetTo(Route),
    /// Pop back to the prior screen
    Back,
}

// =============================================================================
// Errors
// =============================================================================

/// Client-side form validation failure. Never reaches the stores; recovered
/// locally by showing inline text and refusing to proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("Please fill in all fields")]
    MissingFields,
}

/// Everything the sign-in screen can display in its error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    /// Local validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Service-level failure (reachable only with a non-stub verifier)
    #[error(transparent)]
    Auth(#[from] AuthError),
}

// =============================================================================
// Sign-In Screen
// =============================================================================

/// Sign-in form.
#[derive(Debug, Clone, Default)]
pub struct SignInScreen {
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
    /// Whether the password is shown in clear text
    pub show_password: bool,
    /// True while a sign-in call is in flight
    pub submitting: bool,
    /// Inline error, if any
    pub error: Option<SignInError>,
}

impl SignInScreen {
    /// Create an empty sign-in form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Set the password field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Toggle password visibility.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Inline error text, if an error is showing.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// Submit the form.
    ///
    /// Both fields must be non-empty or a [`ValidationError`] is shown and
    /// nothing else happens — no service call, no navigation. Otherwise the
    /// auth service is invoked; success resets navigation to the
    /// authenticated group entry, failure lands in the error slot.
    pub async fn submit(&mut self, auth: &AuthService) -> Option<NavEffect> {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(ValidationError::MissingFields.into());
            return None;
        }

        self.submitting = true;
        self.error = None;
        let result = auth
            .sign_in(SignInParams::new(self.email.clone(), self.password.clone()))
            .await;
        self.submitting = false;

        match result {
            Ok(_) => Some(NavEffect::ResetTo(Route::Home)),
            Err(e) => {
                self.error = Some(e.into());
                None
            }
        }
    }

    /// Navigate to the sign-up screen.
    pub fn go_to_sign_up(&self) -> NavEffect {
        NavEffect::Push(Route::SignUp)
    }
}

// =============================================================================
// Sign-Up Screen
// =============================================================================

/// Sign-up form.
#[derive(Debug, Clone, Default)]
pub struct SignUpScreen {
    /// Full name field
    pub name: String,
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
    /// Whether the password is shown in clear text
    pub show_password: bool,
}

impl SignUpScreen {
    /// Create an empty sign-up form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the email field.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Set the password field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Toggle password visibility.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Submit the form.
    ///
    /// Performs no validation and touches no store — submitting with any
    /// field values (including all empty) navigates straight to the
    /// authenticated group entry. This mirrors the shipped behavior.
    pub fn submit(&mut self) -> NavEffect {
        tracing::debug!("sign-up submitted");
        NavEffect::ResetTo(Route::Home)
    }

    /// Navigate back to the sign-in screen.
    pub fn go_to_sign_in(&self) -> NavEffect {
        NavEffect::Push(Route::SignIn)
    }
}

// =============================================================================
// Product Detail Screen
// =============================================================================

/// Product detail view for one opaque product identifier.
///
/// Catalog data is the fixed placeholder set of this build; a real
/// deployment would load it per id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailScreen {
    /// Opaque product identifier
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Price in cents
    pub price_cents: u64,
    /// Star rating out of five
    pub rating: f32,
    /// Gallery image URLs
    pub gallery: Vec<String>,
    /// Available sizes
    pub sizes: Vec<String>,
    /// Currently selected size, if any
    pub selected_size: Option<String>,
    /// Whether the product is favorited
    pub favorited: bool,
}

impl ProductDetailScreen {
    /// Create the detail screen for a product id.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            name: "Premium Product Name".to_string(),
            price_cents: 29_999,
            rating: 4.5,
            gallery: vec![
                "https://via.placeholder.com/400".to_string(),
                "https://via.placeholder.com/400".to_string(),
                "https://via.placeholder.com/400".to_string(),
            ],
            sizes: ["S", "M", "L", "XL"].map(String::from).to_vec(),
            selected_size: None,
            favorited: false,
        }
    }

    /// Price formatted for display, e.g. "$299.99".
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Select a size. Returns false (and leaves the selection) for a size
    /// not offered.
    pub fn select_size(&mut self, size: &str) -> bool {
        if self.sizes.iter().any(|s| s == size) {
            self.selected_size = Some(size.to_string());
            true
        } else {
            false
        }
    }

    /// Toggle the favorite marker.
    pub fn toggle_favorite(&mut self) {
        self.favorited = !self.favorited;
    }

    /// Navigate back to the prior screen.
    pub fn back(&self) -> NavEffect {
        NavEffect::Back
    }
}

// =============================================================================
// Settings Screen
// =============================================================================

/// A rendered settings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsItem {
    /// Icon name
    pub icon: String,
    /// Row label
    pub label: String,
    /// Row control
    pub control: SettingsControl,
}

/// The control rendered at the end of a settings row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SettingsControl {
    /// An on/off switch
    Toggle {
        /// Current switch position
        enabled: bool,
    },
    /// A chevron leading to a sub-page
    Disclosure,
}

/// A titled group of settings rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSection {
    /// Section title
    pub title: String,
    /// Rows in order
    pub items: Vec<SettingsItem>,
}

/// Settings screen.
///
/// The dark-mode switch is wired to the theme store; the notifications
/// switch is screen-local in this build.
#[derive(Debug, Clone)]
pub struct SettingsScreen {
    /// Mirrors the theme store's mode
    pub dark_mode: bool,
    /// Local push-notifications preference
    pub notifications_enabled: bool,
}

impl SettingsScreen {
    /// App version shown at the bottom of the screen.
    pub const VERSION: &'static str = "1.0.0";

    /// Create the settings screen, reading the current theme mode.
    pub fn new(theme: &ThemeStore) -> Self {
        Self {
            dark_mode: theme.is_dark(),
            notifications_enabled: true,
        }
    }

    /// Flip the dark-mode switch: toggles the theme store and mirrors the
    /// resulting mode.
    pub fn toggle_dark_mode(&mut self, theme: &ThemeStore) {
        self.dark_mode = theme.toggle().is_dark();
    }

    /// Flip the local notifications switch.
    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    /// The rendered sections, top to bottom.
    pub fn sections(&self) -> Vec<SettingsSection> {
        vec![
            SettingsSection {
                title: "Appearance".to_string(),
                items: vec![SettingsItem {
                    icon: "moon-outline".to_string(),
                    label: "Dark Mode".to_string(),
                    control: SettingsControl::Toggle {
                        enabled: self.dark_mode,
                    },
                }],
            },
            SettingsSection {
                title: "Notifications".to_string(),
                items: vec![SettingsItem {
                    icon: "notifications-outline".to_string(),
                    label: "Push Notifications".to_string(),
                    control: SettingsControl::Toggle {
                        enabled: self.notifications_enabled,
                    },
                }],
            },
            SettingsSection {
                title: "Account".to_string(),
                items: vec![
                    SettingsItem {
                        icon: "person-outline".to_string(),
                        label: "Edit Profile".to_string(),
                        control: SettingsControl::Disclosure,
                    },
                    SettingsItem {
                        icon: "lock-closed-outline".to_string(),
                        label: "Change Password".to_string(),
                        control: SettingsControl::Disclosure,
                    },
                ],
            },
            SettingsSection {
                title: "About".to_string(),
                items: vec![
                    SettingsItem {
                        icon: "information-circle-outline".to_string(),
                        label: "About Z-BAZZAR".to_string(),
                        control: SettingsControl::Disclosure,
                    },
                    SettingsItem {
                        icon: "document-text-outline".to_string(),
                        label: "Privacy Policy".to_string(),
                        control: SettingsControl::Disclosure,
                    },
                    SettingsItem {
                        icon: "help-circle-outline".to_string(),
                        label: "Help & Support".to_string(),
                        control: SettingsControl::Disclosure,
                    },
                ],
            },
        ]
    }

    /// Navigate back to the prior screen.
    pub fn back(&self) -> NavEffect {
        NavEffect::Back
    }
}

// =============================================================================
// Splash Overlay
// =============================================================================

/// The splash overlay rendered above the app during bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashOverlay {
    /// Title text
    pub title: String,
    /// Tagline text
    pub tagline: String,
    /// Overlay background color
    pub background: String,
    /// Current opacity in `[0, 1]`
    pub opacity: f32,
}

impl SplashOverlay {
    /// Build the overlay for a bootstrap state, or `None` once the splash
    /// has been dismissed.
    pub fn from_state(state: &BootstrapState) -> Option<Self> {
        if state.phase == BootstrapPhase::Hidden {
            return None;
        }
        Some(Self {
            title: "Z-BAZZAR".to_string(),
            tagline: "Your Ultimate Shopping Destination".to_string(),
            background: palette::SPLASH_BACKGROUND.to_string(),
            opacity: state.splash_opacity,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
