//! Design system and theme provider for DuitKu
//!
//! The theme is a pure function of the ambient color scheme: given
//! `light` or `dark`, [`get_theme`] returns the corresponding immutable
//! palette and gradient set. There is no mutable theme state; shells
//! re-resolve the theme whenever the observed scheme signal changes.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ColorScheme};
//!
//! let theme = get_theme(ColorScheme::Dark);
//! assert_eq!(theme.palette.primary, "#6366F1");
//! let bg = &theme.palette.bg_base;
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (`#RRGGBB`) or an `rgba(r, g, b, a)`
/// functional string
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

/// Parse an `rgba(r, g, b, a)` functional color string
pub fn parse_rgba(value: &str) -> Option<(u8, u8, u8, f32)> {
    let inner = value.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let a: f32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some((r, g, b, a))
}

/// Parse either color form to RGBA components
pub fn parse_color(value: &str) -> Option<(u8, u8, u8, f32)> {
    if value.starts_with('#') {
        parse_hex_color(value).map(|(r, g, b)| (r, g, b, 1.0))
    } else {
        parse_rgba(value)
    }
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Ambient color scheme, as observed from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light scheme
    #[default]
    Light,
    /// Dark scheme
    Dark,
}

impl ColorScheme {
    /// Check if this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Complete semantic color palette for one scheme
///
/// A flat mapping from color-role name to color value. Two fixed instances
/// exist (light, dark); both are immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Base screen background
    pub bg_base: Color,
    /// Elevated background (sheets, dialogs)
    pub bg_elevated: Color,
    /// Surface background (cards, rows)
    pub bg_surface: Color,
    /// Translucent glass fill
    pub glass_bg: Color,
    /// Heavier translucent glass fill
    pub glass_bg_heavy: Color,
    /// Glass border
    pub glass_border: Color,
    /// Primary text
    pub text_primary: Color,
    /// Secondary/muted text
    pub text_secondary: Color,
    /// Tertiary/faint text
    pub text_tertiary: Color,
    /// Primary brand color (indigo)
    pub primary: Color,
    /// Darker primary (pressed states)
    pub primary_dark: Color,
    /// Lighter primary (purple)
    pub primary_light: Color,
    /// Primary gradient start stop
    pub primary_gradient_start: Color,
    /// Primary gradient end stop
    pub primary_gradient_end: Color,
    /// Content color on primary fills
    pub on_primary: Color,
    /// Accent color
    pub accent: Color,
    /// Secondary accent color
    pub accent_secondary: Color,
    /// Positive/income green
    pub system_green: Color,
    /// Negative/expense red
    pub system_red: Color,
    /// Warning orange
    pub system_orange: Color,
    /// Highlight yellow
    pub system_yellow: Color,
    /// Informational blue
    pub system_blue: Color,
    /// Hairline separator
    pub separator: Color,
    /// Input/control outline
    pub outline: Color,
    /// Press ripple overlay
    pub ripple: Color,
}

impl Palette {
    /// Get a color by its role name
    pub fn get(&self, role: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == role)
            .map(|(_, color)| color.as_str())
    }

    /// All (role name, color) pairs in this palette
    pub fn entries(&self) -> [(&'static str, &Color); 25] {
        [
            ("bg_base", &self.bg_base),
            ("bg_elevated", &self.bg_elevated),
            ("bg_surface", &self.bg_surface),
            ("glass_bg", &self.glass_bg),
            ("glass_bg_heavy", &self.glass_bg_heavy),
            ("glass_border", &self.glass_border),
            ("text_primary", &self.text_primary),
            ("text_secondary", &self.text_secondary),
            ("text_tertiary", &self.text_tertiary),
            ("primary", &self.primary),
            ("primary_dark", &self.primary_dark),
            ("primary_light", &self.primary_light),
            ("primary_gradient_start", &self.primary_gradient_start),
            ("primary_gradient_end", &self.primary_gradient_end),
            ("on_primary", &self.on_primary),
            ("accent", &self.accent),
            ("accent_secondary", &self.accent_secondary),
            ("system_green", &self.system_green),
            ("system_red", &self.system_red),
            ("system_orange", &self.system_orange),
            ("system_yellow", &self.system_yellow),
            ("system_blue", &self.system_blue),
            ("separator", &self.separator),
            ("outline", &self.outline),
            ("ripple", &self.ripple),
        ]
    }
}

/// Create the dark palette
fn dark_palette() -> Palette {
    Palette {
        bg_base: "#000000".to_string(),
        bg_elevated: "#0A0A0A".to_string(),
        bg_surface: "#1A1A1A".to_string(),
        glass_bg: "rgba(255, 255, 255, 0.05)".to_string(),
        glass_bg_heavy: "rgba(255, 255, 255, 0.1)".to_string(),
        glass_border: "rgba(255, 255, 255, 0.15)".to_string(),
        text_primary: "#FFFFFF".to_string(),
        text_secondary: "rgba(255, 255, 255, 0.7)".to_string(),
        text_tertiary: "rgba(255, 255, 255, 0.5)".to_string(),
        primary: "#6366F1".to_string(),
        primary_dark: "#4F46E5".to_string(),
        primary_light: "#8B5CF6".to_string(),
        primary_gradient_start: "#6366F1".to_string(),
        primary_gradient_end: "#8B5CF6".to_string(),
        on_primary: "#FFFFFF".to_string(),
        accent: "#6366F1".to_string(),
        accent_secondary: "#8B5CF6".to_string(),
        system_green: "#10B981".to_string(),
        system_red: "#EF4444".to_string(),
        system_orange: "#F59E0B".to_string(),
        system_yellow: "#FBBF24".to_string(),
        system_blue: "#3B82F6".to_string(),
        separator: "rgba(255, 255, 255, 0.1)".to_string(),
        outline: "rgba(255, 255, 255, 0.2)".to_string(),
        ripple: "rgba(255, 255, 255, 0.15)".to_string(),
    }
}

/// Create the light palette
fn light_palette() -> Palette {
    Palette {
        bg_base: "#FAFAFA".to_string(),
        bg_elevated: "#FFFFFF".to_string(),
        bg_surface: "#F5F5F5".to_string(),
        glass_bg: "rgba(255, 255, 255, 0.7)".to_string(),
        glass_bg_heavy: "rgba(255, 255, 255, 0.85)".to_string(),
        glass_border: "rgba(0, 0, 0, 0.08)".to_string(),
        text_primary: "#0A0A0A".to_string(),
        text_secondary: "rgba(0, 0, 0, 0.6)".to_string(),
        text_tertiary: "rgba(0, 0, 0, 0.4)".to_string(),
        primary: "#6366F1".to_string(),
        primary_dark: "#4F46E5".to_string(),
        primary_light: "#8B5CF6".to_string(),
        primary_gradient_start: "#6366F1".to_string(),
        primary_gradient_end: "#8B5CF6".to_string(),
        on_primary: "#FFFFFF".to_string(),
        accent: "#6366F1".to_string(),
        accent_secondary: "#8B5CF6".to_string(),
        system_green: "#10B981".to_string(),
        system_red: "#EF4444".to_string(),
        system_orange: "#F59E0B".to_string(),
        system_yellow: "#FBBF24".to_string(),
        system_blue: "#3B82F6".to_string(),
        separator: "rgba(0, 0, 0, 0.08)".to_string(),
        outline: "rgba(0, 0, 0, 0.15)".to_string(),
        ripple: "rgba(0, 0, 0, 0.1)".to_string(),
    }
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A point in the gradient's unit coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientPoint {
    /// Horizontal position (0.0 = left, 1.0 = right)
    pub x: f32,
    /// Vertical position (0.0 = top, 1.0 = bottom)
    pub y: f32,
}

/// A linear gradient definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
    /// Start point
    pub start: GradientPoint,
    /// End point
    pub end: GradientPoint,
}

impl Gradient {
    /// Create a vertical (top-to-bottom) gradient with evenly interpreted
    /// stop positions
    pub fn vertical(stops: Vec<(f32, &str)>) -> Self {
        Self::new(
            stops,
            GradientPoint { x: 0.5, y: 0.0 },
            GradientPoint { x: 0.5, y: 1.0 },
        )
    }

    /// Create a gradient with explicit start and end points
    pub fn new(stops: Vec<(f32, &str)>, start: GradientPoint, end: GradientPoint) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(pos, color)| GradientStop {
                    position: pos,
                    color: color.to_string(),
                })
                .collect(),
            start,
            end,
        }
    }

    /// The stop colors in order
    pub fn colors(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.color.as_str()).collect()
    }
}

/// Gradient presets for one scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    /// Primary brand gradient (indigo to purple, diagonal)
    pub primary: Gradient,
    /// Full splash-screen background (4 stops, vertical)
    pub splash: Gradient,
    /// Auth-screen background (3 stops, vertical)
    pub auth: Gradient,
}

impl Gradients {
    /// Create the gradient presets for a scheme
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let primary = Gradient::new(
            vec![(0.0, "#6366F1"), (1.0, "#8B5CF6")],
            GradientPoint { x: 0.0, y: 0.0 },
            GradientPoint { x: 1.0, y: 1.0 },
        );

        let (splash, auth) = match scheme {
            ColorScheme::Dark => (
                Gradient::vertical(vec![
                    (0.0, "#000000"),
                    (1.0 / 3.0, "#1A1A2E"),
                    (2.0 / 3.0, "#16213E"),
                    (1.0, "#0F3460"),
                ]),
                Gradient::vertical(vec![
                    (0.0, "#000000"),
                    (0.5, "#1A1A2E"),
                    (1.0, "#16213E"),
                ]),
            ),
            ColorScheme::Light => (
                Gradient::vertical(vec![
                    (0.0, "#F8F9FA"),
                    (1.0 / 3.0, "#E9ECEF"),
                    (2.0 / 3.0, "#DEE2E6"),
                    (1.0, "#CED4DA"),
                ]),
                Gradient::vertical(vec![
                    (0.0, "#F8F9FA"),
                    (0.5, "#E9ECEF"),
                    (1.0, "#DEE2E6"),
                ]),
            ),
        };

        Self {
            primary,
            splash,
            auth,
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Complete theme definition for one scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// The scheme this theme resolves
    pub scheme: ColorScheme,
    /// Color palette
    pub palette: Palette,
    /// Gradient presets
    pub gradients: Gradients,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Get a palette color by role name
    pub fn color(&self, role: &str) -> Option<&str> {
        self.palette.get(role)
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        scheme: ColorScheme::Light,
        palette: light_palette(),
        gradients: Gradients::for_scheme(ColorScheme::Light),
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        scheme: ColorScheme::Dark,
        palette: dark_palette(),
        gradients: Gradients::for_scheme(ColorScheme::Dark),
    }
}

/// Resolve the theme for a scheme
///
/// Pure: same scheme in, same theme out, no side effects.
pub fn get_theme(scheme: ColorScheme) -> Theme {
    match scheme {
        ColorScheme::Light => light_theme(),
        ColorScheme::Dark => dark_theme(),
    }
}

/// All themes keyed by scheme
pub fn all_themes() -> HashMap<ColorScheme, Theme> {
    let mut themes = HashMap::new();
    themes.insert(ColorScheme::Light, light_theme());
    themes.insert(ColorScheme::Dark, dark_theme());
    themes
}
