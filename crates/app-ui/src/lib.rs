//! User interface for DuitKu
//!
//! This crate provides the UI layer, including components,
//! screens, navigation, theming, and design system primitives.
//!
//! # Design System
//!
//! The design system is built around an indigo-to-violet brand:
//! - Primary: Indigo (#6366F1)
//! - Primary dark: Deep indigo (#4F46E5)
//! - Primary light: Violet (#8B5CF6)
//!
//! Two schemes are supported:
//! - [`theme::ColorScheme::Light`] - Bright theme with off-white background
//! - [`theme::ColorScheme::Dark`] - Dark theme with black background
//!
//! # Modules
//!
//! - [`theme`] - Color schemes, palettes, and gradients
//! - [`tokens`] - Design tokens (spacing, radii, shadows, etc.)
//! - [`typography`] - Type scale and text styles
//! - [`components`] - UI component library
//! - [`screens`] - Application screens and their drivers
//! - [`navigation`] - Navigation stack and the navigator contract
//! - [`test_utils`] - Recording test doubles for the navigator contract
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{get_theme, ColorScheme};
//! use app_ui::tokens::spacing;
//! use app_ui::typography::TypeScale;
//!
//! // Resolve a theme
//! let theme = get_theme(ColorScheme::Dark);
//! assert!(theme.is_dark());
//!
//! // Use design tokens
//! let padding = spacing::MD;
//! assert_eq!(padding, 16.0);
//!
//! // Get text styles off the type scale
//! let title_style = TypeScale::HeadlineLarge.style();
//! assert_eq!(title_style.font_size, 32.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod test_utils;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    all_themes, dark_theme, get_theme, light_theme, Color, ColorScheme, Gradient, GradientPoint,
    GradientStop, Gradients, Palette, Theme,
};

pub use tokens::{border_radius, elevation, font_weight, spacing, status_bar, Shadow};

pub use typography::{TextStyle, TypeScale};

pub use components::{
    AppLogo, BlurTint, Button, ButtonStyles, ButtonVariant, GlassCard, GlassCardStyles, Input,
    InputStyles, InputType, LogoPreset, LogoStyles, StyleOverrides, Text, TextAlign, TextRole,
};

pub use navigation::{
    NavigationAnimation, NavigationStack, NavigationState, Navigator, PendingNavigation, Route,
    StackEntry,
};

pub use screens::{
    Alert, LoginScreen, RegisterScreen, SplashFrame, SplashPhase, SplashScreen, SubmitOutcome,
};
