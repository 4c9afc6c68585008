//! DuitKu branding
//!
//! Product identity constants shared by the splash and auth screens.

/// Application name
pub const APP_NAME: &str = "DuitKu";

/// Application tagline
pub const APP_TAGLINE: &str = "Kelola Keuangan dengan Mudah";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Glyph rendered on the gradient logo badge
pub const LOGO_GLYPH: &str = "💰";

/// Credit line pinned to the bottom of the splash screen
pub const SPLASH_CREDIT: &str = "Powered by Modern AI Design";

/// Brand colors (the indigo/purple gradient family)
pub mod colors {
    /// Primary brand color (indigo)
    pub const PRIMARY: &str = "#6366F1";

    /// Darker primary used for emphasis
    pub const PRIMARY_DARK: &str = "#4F46E5";

    /// Secondary brand color (purple)
    pub const SECONDARY: &str = "#8B5CF6";

    /// Gradient start (indigo)
    pub const GRADIENT_START: &str = "#6366F1";

    /// Gradient end (purple)
    pub const GRADIENT_END: &str = "#8B5CF6";
}

/// Copyright information
pub mod copyright {
    /// Copyright year
    pub const YEAR: &str = "2025";

    /// Copyright holder
    pub const HOLDER: &str = "DuitKu Team";

    /// License
    pub const LICENSE: &str = "MIT";

    /// Full copyright notice
    pub fn notice() -> String {
        format!("© {} {}. Licensed under {}.", YEAR, HOLDER, LICENSE)
    }
}

/// About information for the app
pub mod about {
    use super::*;

    /// Full about text
    pub fn text() -> String {
        format!(
            "{} v{}\n\n{}\n\n{}\n\n{}",
            APP_NAME,
            APP_VERSION,
            APP_TAGLINE,
            SPLASH_CREDIT,
            copyright::notice()
        )
    }
}
