//! Design tokens and themes for Z-Bazzar
//!
//! Two fixed token sets exist — light and dark — selected purely by the
//! current [`ThemeMode`]. The palette is the storefront's blue system:
//! a vibrant medium blue for primary actions over a near-white surface in
//! light mode, and the same hues brightened over pure black in dark mode.
//!
//! # Usage
//!
//! ```rust
//! use app_state::ThemeMode;
//! use app_ui::theme::get_theme;
//!
//! let theme = get_theme(ThemeMode::Dark);
//! assert!(theme.is_dark());
//! let bg = &theme.colors.background;
//! ```

use app_state::ThemeMode;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Palette (Blue system)
// =============================================================================

/// Z-Bazzar palette constants
pub mod palette {
    /// Primary brand color (vibrant medium blue)
    pub const PRIMARY: &str = "#3b82f6";

    /// Secondary brand color (soft light blue)
    pub const SECONDARY: &str = "#93c5fd";

    /// Accent color (rich dark blue)
    pub const ACCENT: &str = "#1e40af";

    /// Barely-there blue
    pub const BLUE_50: &str = "#eff6ff";
    /// Very light blue
    pub const BLUE_100: &str = "#dbeafe";
    /// Light blue
    pub const BLUE_200: &str = "#bfdbfe";
    /// Soft blue
    pub const BLUE_300: &str = "#93c5fd";
    /// Medium-light blue
    pub const BLUE_400: &str = "#60a5fa";
    /// Medium blue
    pub const BLUE_500: &str = "#3b82f6";
    /// Medium-dark blue
    pub const BLUE_600: &str = "#2563eb";
    /// Dark blue
    pub const BLUE_700: &str = "#1d4ed8";
    /// Very dark blue
    pub const BLUE_800: &str = "#1e40af";
    /// Deep blue
    pub const BLUE_900: &str = "#1e3a8a";

    /// Subtle borders and separators
    pub const COOL_GRAY: &str = "#e2e8f0";
    /// Highlights and accents
    pub const INDIGO: &str = "#6366f1";
    /// Secondary actions
    pub const SKY_BLUE: &str = "#0ea5e9";

    /// Error red
    pub const ERROR: &str = "#ef4444";

    /// Splash overlay background
    pub const SPLASH_BACKGROUND: &str = "#333333";
}

// =============================================================================
// Token Set
// =============================================================================

/// The resolved set of visual values for one theme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    /// Primary action color
    pub primary: Color,
    /// Content on primary surfaces
    pub on_primary: Color,
    /// Filled container tinted with primary
    pub primary_container: Color,
    /// Content on the primary container
    pub on_primary_container: Color,
    /// Secondary color
    pub secondary: Color,
    /// Content on secondary surfaces
    pub on_secondary: Color,
    /// Filled container tinted with secondary
    pub secondary_container: Color,
    /// Content on the secondary container
    pub on_secondary_container: Color,
    /// Tertiary/highlight color
    pub tertiary: Color,
    /// Main background color
    pub background: Color,
    /// Card and sheet surfaces
    pub surface: Color,
    /// Elevated surface variant
    pub surface_variant: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub subtext: Color,
    /// Error color
    pub error: Color,
    /// Disabled element color
    pub disabled: Color,
    /// Placeholder text color
    pub placeholder: Color,
    /// Modal backdrop color
    pub backdrop: Color,
    /// Notification badge color
    pub notification: Color,
    /// Border and separator color
    pub border: Color,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Mode this theme resolves
    pub mode: ThemeMode,
    /// Resolved color tokens
    pub colors: TokenSet,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        colors: TokenSet {
            primary: palette::PRIMARY.to_string(),
            on_primary: "#FFFFFF".to_string(),
            primary_container: palette::BLUE_100.to_string(),
            on_primary_container: palette::BLUE_900.to_string(),
            secondary: palette::SECONDARY.to_string(),
            on_secondary: palette::BLUE_900.to_string(),
            secondary_container: palette::BLUE_50.to_string(),
            on_secondary_container: palette::BLUE_800.to_string(),
            tertiary: palette::INDIGO.to_string(),
            background: "#FFFFFF".to_string(),
            surface: "#F8FAFF".to_string(),
            surface_variant: palette::COOL_GRAY.to_string(),
            text: "#1e293b".to_string(),
            subtext: "#64748b".to_string(),
            error: palette::ERROR.to_string(),
            disabled: "#cbd5e1".to_string(),
            placeholder: "#94a3b8".to_string(),
            backdrop: "#0F172A4D".to_string(),
            notification: palette::BLUE_600.to_string(),
            border: palette::COOL_GRAY.to_string(),
        },
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme (pure black surfaces, brightened blues)
pub fn dark_theme() -> Theme {
    Theme {
        mode: ThemeMode::Dark,
        colors: TokenSet {
            primary: palette::BLUE_400.to_string(),
            on_primary: "#000000".to_string(),
            primary_container: "#222222".to_string(),
            on_primary_container: "#FFFFFF".to_string(),
            secondary: palette::BLUE_200.to_string(),
            on_secondary: "#000000".to_string(),
            secondary_container: "#222222".to_string(),
            on_secondary_container: "#FFFFFF".to_string(),
            tertiary: "#a5b4fc".to_string(),
            background: "#000000".to_string(),
            surface: "#000000".to_string(),
            surface_variant: "#121212".to_string(),
            text: "#FFFFFF".to_string(),
            subtext: "#AAAAAA".to_string(),
            error: palette::ERROR.to_string(),
            disabled: "#666666".to_string(),
            placeholder: "#888888".to_string(),
            backdrop: "#00000080".to_string(),
            notification: palette::BLUE_300.to_string(),
            border: "#222222".to_string(),
        },
    }
}

// =============================================================================
// Theme Resolution
// =============================================================================

/// Get the theme for a mode.
///
/// Pure: the same mode always yields the same token set.
pub fn get_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => light_theme(),
        ThemeMode::Dark => dark_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#3b82f6"), Some((59, 130, 246)));
        assert_eq!(parse_hex_color("3b82f6"), Some((59, 130, 246)));
        // Hex8 colors parse their RGB portion
        assert_eq!(parse_hex_color("#00000080"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#FF"), None); // Too short
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(59, 130, 246), "#3B82F6");
    }

    #[test]
    fn test_light_theme_basics() {
        let theme = light_theme();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.primary, "#3b82f6");
        assert_eq!(theme.colors.background, "#FFFFFF");
        assert_eq!(theme.colors.surface, "#F8FAFF");
    }

    #[test]
    fn test_dark_theme_basics() {
        let theme = dark_theme();
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert!(theme.is_dark());
        // Brighter primary over pure black
        assert_eq!(theme.colors.primary, "#60a5fa");
        assert_eq!(theme.colors.background, "#000000");
        assert_eq!(theme.colors.text, "#FFFFFF");
    }

    #[test]
    fn test_get_theme_is_pure() {
        assert_eq!(get_theme(ThemeMode::Light), light_theme());
        assert_eq!(get_theme(ThemeMode::Dark), dark_theme());
    }

    #[test]
    fn test_error_color_shared_across_modes() {
        assert_eq!(light_theme().colors.error, dark_theme().colors.error);
    }

    #[test]
    fn test_all_colors_are_valid_hex() {
        for theme in [light_theme(), dark_theme()] {
            let colors = &theme.colors;
            for color in [
                &colors.primary,
                &colors.on_primary,
                &colors.primary_container,
                &colors.on_primary_container,
                &colors.secondary,
                &colors.on_secondary,
                &colors.secondary_container,
                &colors.on_secondary_container,
                &colors.tertiary,
                &colors.background,
                &colors.surface,
                &colors.surface_variant,
                &colors.text,
                &colors.subtext,
                &colors.error,
                &colors.disabled,
                &colors.placeholder,
                &colors.backdrop,
                &colors.notification,
                &colors.border,
            ] {
                assert!(
                    parse_hex_color(color).is_some(),
                    "invalid color {} in {:?} theme",
                    color,
                    theme.mode
                );
            }
        }
    }

    #[test]
    fn test_text_background_contrast() {
        for theme in [light_theme(), dark_theme()] {
            let bg = parse_hex_color(&theme.colors.background).unwrap();
            let text = parse_hex_color(&theme.colors.text).unwrap();

            let bg_lum = (bg.0 as u32 + bg.1 as u32 + bg.2 as u32) / 3;
            let text_lum = (text.0 as u32 + text.1 as u32 + text.2 as u32) / 3;
            let diff = bg_lum.abs_diff(text_lum);

            assert!(
                diff > 100,
                "{:?} theme has insufficient text contrast: {}",
                theme.mode,
                diff
            );
        }
    }

    #[test]
    fn test_theme_serialization() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
        assert!(json.contains("\"mode\":\"dark\""));
    }
}
