//! Color design tokens for Diary Commons
//!
//! This module provides the foundation color palettes from the Figma
//! foundation file, the semantic light/dark color sets built on top of them,
//! and the CSS custom property tables consumed by the global stylesheet.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{blue, get_theme, ThemeMode};
//!
//! let theme = get_theme(ThemeMode::Dark);
//! assert_eq!(theme.colors.interactive.primary, blue::S50);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF") or a CSS gradient
pub type Color = String;

// =============================================================================
// Foundation Palettes
// =============================================================================

/// Blue palette (system and interactive colors)
pub mod blue {
    /// Blue 5
    pub const S5: &str = "#F0F7FF";
    /// Blue 10
    pub const S10: &str = "#DBEEFF";
    /// Blue 20
    pub const S20: &str = "#BDDBFF";
    /// Blue 30
    pub const S30: &str = "#93BEFF";
    /// System color
    pub const S40: &str = "#6DA5FA";
    /// Blue 50
    pub const S50: &str = "#497CFF";
    /// System color
    pub const S60: &str = "#3A5CF3";
    /// Blue 70
    pub const S70: &str = "#274AE1";
    /// Blue 80
    pub const S80: &str = "#1530A6";
    /// Blue 90
    pub const S90: &str = "#0B2184";

    /// Get a blue color by its numeric stop
    pub fn get(stop: u16) -> Option<&'static str> {
        match stop {
            5 => Some(S5),
            10 => Some(S10),
            20 => Some(S20),
            30 => Some(S30),
            40 => Some(S40),
            50 => Some(S50),
            60 => Some(S60),
            70 => Some(S70),
            80 => Some(S80),
            90 => Some(S90),
            _ => None,
        }
    }
}

/// Gray palette (neutrals, including pure white and black)
pub mod gray {
    /// White
    pub const WHITE: &str = "#FFFFFF";
    /// Gray 5
    pub const S5: &str = "#F2F2F2";
    /// Gray 10
    pub const S10: &str = "#E4E4E4";
    /// Gray 20
    pub const S20: &str = "#D4D3D3";
    /// Gray 30
    pub const S30: &str = "#C7C7C7";
    /// Gray 40
    pub const S40: &str = "#ABABAB";
    /// Gray 50
    pub const S50: &str = "#919191";
    /// Gray 60
    pub const S60: &str = "#777777";
    /// Gray 70
    pub const S70: &str = "#5F5F5F";
    /// Gray 80
    pub const S80: &str = "#333333";
    /// Gray 90
    pub const S90: &str = "#1C1C1C";
    /// Black
    pub const BLACK: &str = "#000000";

    /// Get a gray color by its numeric stop
    pub fn get(stop: u16) -> Option<&'static str> {
        match stop {
            5 => Some(S5),
            10 => Some(S10),
            20 => Some(S20),
            30 => Some(S30),
            40 => Some(S40),
            50 => Some(S50),
            60 => Some(S60),
            70 => Some(S70),
            80 => Some(S80),
            90 => Some(S90),
            _ => None,
        }
    }
}

/// Red palette
pub mod red {
    /// Red 5
    pub const S5: &str = "#FDD7DC";
    /// Red 10
    pub const S10: &str = "#F797A4";
    /// Red 20
    pub const S20: &str = "#F4677A";
    /// Error color
    pub const S30: &str = "#F03851";
    /// Red 40
    pub const S40: &str = "#E4112E";
    /// Red 50
    pub const S50: &str = "#B40E24";
    /// Red 60
    pub const S60: &str = "#850A1B";

    /// Get a red color by its numeric stop
    pub fn get(stop: u16) -> Option<&'static str> {
        match stop {
            5 => Some(S5),
            10 => Some(S10),
            20 => Some(S20),
            30 => Some(S30),
            40 => Some(S40),
            50 => Some(S50),
            60 => Some(S60),
            _ => None,
        }
    }
}

/// Green palette
pub mod green {
    /// Green 5
    pub const S5: &str = "#D3F3E0";
    /// Green 10
    pub const S10: &str = "#92E6B9";
    /// Green 20
    pub const S20: &str = "#15D66F";
    /// Success color
    pub const S30: &str = "#12B75F";
    /// Green 40
    pub const S40: &str = "#109C51";
    /// Green 50
    pub const S50: &str = "#0E723C";
    /// Green 60
    pub const S60: &str = "#084424";

    /// Get a green color by its numeric stop
    pub fn get(stop: u16) -> Option<&'static str> {
        match stop {
            5 => Some(S5),
            10 => Some(S10),
            20 => Some(S20),
            30 => Some(S30),
            40 => Some(S40),
            50 => Some(S50),
            60 => Some(S60),
            _ => None,
        }
    }
}

/// Yellow palette
pub mod yellow {
    /// Yellow 5
    pub const S5: &str = "#FFE499";
    /// Yellow 10
    pub const S10: &str = "#FFD666";
    /// Yellow 20
    pub const S20: &str = "#FFC933";
    /// Yellow 30
    pub const S30: &str = "#FFB300";
    /// Yellow 40
    pub const S40: &str = "#EBA500";
    /// Yellow 50
    pub const S50: &str = "#D69600";
    /// Yellow 60
    pub const S60: &str = "#B27D00";

    /// Get a yellow color by its numeric stop
    pub fn get(stop: u16) -> Option<&'static str> {
        match stop {
            5 => Some(S5),
            10 => Some(S10),
            20 => Some(S20),
            30 => Some(S30),
            40 => Some(S40),
            50 => Some(S50),
            60 => Some(S60),
            _ => None,
        }
    }
}

/// Cool gray palette
pub mod cool_gray {
    /// Cool gray 1
    pub const S1: &str = "#F8F8FA";
    /// Cool gray 5
    pub const S5: &str = "#F6F6F9";
    /// Cool gray 10
    pub const S10: &str = "#EDEEF2";
    /// Cool gray 20
    pub const S20: &str = "#DDDFE5";
    /// Cool gray 30
    pub const S30: &str = "#D2D4DD";
    /// Cool gray 40
    pub const S40: &str = "#C7C9D5";
    /// Cool gray 50
    pub const S50: &str = "#BBBECD";
    /// Cool gray 60
    pub const S60: &str = "#B0B3C4";

    /// Get a cool gray color by its numeric stop
    pub fn get(stop: u16) -> Option<&'static str> {
        match stop {
            1 => Some(S1),
            5 => Some(S5),
            10 => Some(S10),
            20 => Some(S20),
            30 => Some(S30),
            40 => Some(S40),
            50 => Some(S50),
            60 => Some(S60),
            _ => None,
        }
    }
}

/// Gradient definitions
pub mod gradients {
    /// Primary brand gradient
    pub const PRIMARY: &str = "linear-gradient(135deg, #6DA5FA 0%, #92EAF5 100%)";
    /// Shimmer used by skeleton placeholders
    pub const SKELETON: &str =
        "linear-gradient(90deg, transparent 0%, rgba(255, 255, 255, 0.6) 48.5%, transparent 100%)";
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Background colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Page background
    pub primary: Color,
    /// Raised surfaces
    pub secondary: Color,
    /// Subtle fills
    pub tertiary: Color,
    /// Inverted surfaces
    pub inverse: Color,
}

/// Text colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    /// Body text
    pub primary: Color,
    /// Secondary text
    pub secondary: Color,
    /// Hints and captions
    pub tertiary: Color,
    /// Text on inverted surfaces
    pub inverse: Color,
    /// Disabled text
    pub disabled: Color,
}

/// Border colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderColors {
    /// Default border
    pub primary: Color,
    /// Subtle border
    pub secondary: Color,
    /// Focus ring
    pub focus: Color,
    /// Error border
    pub error: Color,
    /// Success border
    pub success: Color,
}

/// Status colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColors {
    /// Error
    pub error: Color,
    /// Success
    pub success: Color,
    /// Warning
    pub warning: Color,
    /// Information
    pub info: Color,
}

/// Interactive element colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveColors {
    /// Primary action
    pub primary: Color,
    /// Primary action, hovered
    pub primary_hover: Color,
    /// Primary action, pressed
    pub primary_active: Color,
    /// Secondary action
    pub secondary: Color,
    /// Secondary action, hovered
    pub secondary_hover: Color,
    /// Secondary action, pressed
    pub secondary_active: Color,
}

/// Complete semantic color token set for one theme mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    /// Background colors
    pub background: BackgroundColors,
    /// Text colors
    pub text: TextColors,
    /// Border colors
    pub border: BorderColors,
    /// Status colors
    pub status: StatusColors,
    /// Interactive colors
    pub interactive: InteractiveColors,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Available theme modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// Class-name suffix used by component style tables
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Whether this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
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

/// A complete theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme mode
    pub mode: ThemeMode,
    /// Semantic color tokens
    pub colors: ColorTokens,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// CSS custom properties for this theme, in stylesheet order
    pub fn css_variables(&self) -> Vec<(&'static str, Color)> {
        let c = &self.colors;
        vec![
            ("--color-bg-primary", c.background.primary.clone()),
            ("--color-bg-secondary", c.background.secondary.clone()),
            ("--color-bg-tertiary", c.background.tertiary.clone()),
            ("--color-bg-inverse", c.background.inverse.clone()),
            ("--color-text-primary", c.text.primary.clone()),
            ("--color-text-secondary", c.text.secondary.clone()),
            ("--color-text-tertiary", c.text.tertiary.clone()),
            ("--color-text-inverse", c.text.inverse.clone()),
            ("--color-text-disabled", c.text.disabled.clone()),
            ("--color-border-primary", c.border.primary.clone()),
            ("--color-border-secondary", c.border.secondary.clone()),
            ("--color-border-focus", c.border.focus.clone()),
            ("--color-border-error", c.border.error.clone()),
            ("--color-border-success", c.border.success.clone()),
            ("--color-status-error", c.status.error.clone()),
            ("--color-status-success", c.status.success.clone()),
            ("--color-status-warning", c.status.warning.clone()),
            ("--color-status-info", c.status.info.clone()),
            ("--color-interactive-primary", c.interactive.primary.clone()),
            ("--color-interactive-primary-hover", c.interactive.primary_hover.clone()),
            ("--color-interactive-primary-active", c.interactive.primary_active.clone()),
            ("--color-interactive-secondary", c.interactive.secondary.clone()),
            ("--color-interactive-secondary-hover", c.interactive.secondary_hover.clone()),
            ("--color-interactive-secondary-active", c.interactive.secondary_active.clone()),
            ("--color-gradient-primary", gradients::PRIMARY.to_string()),
            ("--color-gradient-skeleton", gradients::SKELETON.to_string()),
        ]
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        colors: ColorTokens {
            background: BackgroundColors {
                primary: gray::WHITE.to_string(),
                secondary: gray::S5.to_string(),
                tertiary: gray::S10.to_string(),
                inverse: gray::BLACK.to_string(),
            },
            text: TextColors {
                primary: gray::BLACK.to_string(),
                secondary: gray::S70.to_string(),
                tertiary: gray::S50.to_string(),
                inverse: gray::WHITE.to_string(),
                disabled: gray::S40.to_string(),
            },
            border: BorderColors {
                primary: gray::S20.to_string(),
                secondary: gray::S10.to_string(),
                focus: blue::S40.to_string(),
                error: red::S30.to_string(),
                success: green::S30.to_string(),
            },
            status: StatusColors {
                error: red::S30.to_string(),
                success: green::S30.to_string(),
                warning: yellow::S30.to_string(),
                info: blue::S40.to_string(),
            },
            interactive: InteractiveColors {
                primary: blue::S40.to_string(),
                primary_hover: blue::S50.to_string(),
                primary_active: blue::S60.to_string(),
                secondary: gray::S20.to_string(),
                secondary_hover: gray::S30.to_string(),
                secondary_active: gray::S40.to_string(),
            },
        },
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        mode: ThemeMode::Dark,
        colors: ColorTokens {
            background: BackgroundColors {
                primary: gray::BLACK.to_string(),
                secondary: gray::S90.to_string(),
                tertiary: gray::S80.to_string(),
                inverse: gray::WHITE.to_string(),
            },
            text: TextColors {
                primary: gray::WHITE.to_string(),
                secondary: gray::S30.to_string(),
                tertiary: gray::S50.to_string(),
                inverse: gray::BLACK.to_string(),
                disabled: gray::S60.to_string(),
            },
            border: BorderColors {
                primary: gray::S70.to_string(),
                secondary: gray::S80.to_string(),
                focus: blue::S50.to_string(),
                error: red::S40.to_string(),
                success: green::S40.to_string(),
            },
            status: StatusColors {
                error: red::S40.to_string(),
                success: green::S40.to_string(),
                warning: yellow::S40.to_string(),
                info: blue::S50.to_string(),
            },
            interactive: InteractiveColors {
                primary: blue::S50.to_string(),
                primary_hover: blue::S40.to_string(),
                primary_active: blue::S30.to_string(),
                secondary: gray::S70.to_string(),
                secondary_hover: gray::S60.to_string(),
                secondary_active: gray::S50.to_string(),
            },
        },
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get a theme by mode
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
    fn test_palette_lookup() {
        assert_eq!(blue::get(40), Some("#6DA5FA"));
        assert_eq!(gray::get(90), Some("#1C1C1C"));
        assert_eq!(red::get(30), Some("#F03851"));
        assert_eq!(cool_gray::get(1), Some("#F8F8FA"));
        assert_eq!(green::get(70), None);
        assert_eq!(yellow::get(0), None);
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("dim".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_light_theme_colors() {
        let theme = light_theme();
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.background.primary, "#FFFFFF");
        assert_eq!(theme.colors.text.secondary, gray::S70);
        assert_eq!(theme.colors.border.focus, blue::S40);
        assert_eq!(theme.colors.interactive.primary_active, blue::S60);
    }

    #[test]
    fn test_dark_theme_colors() {
        let theme = get_theme(ThemeMode::Dark);
        assert!(theme.is_dark());
        assert_eq!(theme.colors.background.primary, "#000000");
        assert_eq!(theme.colors.status.warning, yellow::S40);
        assert_eq!(theme.colors.interactive.primary_hover, blue::S40);
    }

    #[test]
    fn test_css_variables() {
        let vars = dark_theme().css_variables();
        assert_eq!(vars.len(), 26);
        assert_eq!(vars[0], ("--color-bg-primary", "#000000".to_string()));
        let skeleton = vars
            .iter()
            .find(|(name, _)| *name == "--color-gradient-skeleton")
            .map(|(_, value)| value.as_str());
        assert_eq!(skeleton, Some(gradients::SKELETON));
    }

    #[test]
    fn test_interactive_serializes_camel_case() {
        let json = serde_json::to_value(&light_theme().colors.interactive).unwrap();
        assert_eq!(json["primaryHover"], "#497CFF");
    }
}
