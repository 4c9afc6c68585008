//! Design tokens for DuitKu
//!
//! This module provides the primitive design tokens: spacing, border radius,
//! elevation shadows, status-bar metrics, and font weights. Token values are
//! contractual; the render shell consumes them verbatim.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in density-independent pixels
pub mod spacing {
    /// 4dp - Extra small
    pub const XS: f32 = 4.0;
    /// 8dp - Small
    pub const SM: f32 = 8.0;
    /// 16dp - Medium
    pub const MD: f32 = 16.0;
    /// 24dp - Large
    pub const LG: f32 = 24.0;
    /// 32dp - Extra large
    pub const XL: f32 = 32.0;
    /// 48dp - 2x large
    pub const XXL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod border_radius {
    /// No radius (0dp)
    pub const NONE: f32 = 0.0;
    /// Extra small radius (4dp)
    pub const XS: f32 = 4.0;
    /// Small radius (8dp)
    pub const SM: f32 = 8.0;
    /// Medium radius (12dp)
    pub const MD: f32 = 12.0;
    /// Large radius (16dp)
    pub const LG: f32 = 16.0;
    /// Extra large radius (20dp)
    pub const XL: f32 = 20.0;
    /// 2x large radius (28dp)
    pub const XXL: f32 = 28.0;
    /// Full/round radius (9999dp)
    pub const FULL: f32 = 9999.0;

    /// Get radius value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "none" => Some(NONE),
            "xs" => Some(XS),
            "sm" => Some(SM),
            "md" => Some(MD),
            "lg" => Some(LG),
            "xl" => Some(XL),
            "xxl" => Some(XXL),
            "full" => Some(FULL),
            _ => None,
        }
    }
}

// =============================================================================
// Status Bar Tokens
// =============================================================================

/// Status-bar heights per platform
pub mod status_bar {
    /// Android status bar (24dp)
    pub const ANDROID: f32 = 24.0;
    /// iOS status bar (44dp)
    pub const IOS: f32 = 44.0;
    /// Fallback for other platforms (24dp)
    pub const DEFAULT: f32 = 24.0;

    /// Get the status-bar height for a platform identifier
    pub fn for_platform(platform: &str) -> f32 {
        match platform {
            "android" => ANDROID,
            "ios" => IOS,
            _ => DEFAULT,
        }
    }
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// A platform shadow definition
///
/// Combines the iOS shadow quadruple (color, offset, opacity, radius) with
/// the Android elevation level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: String,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android elevation level
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(
        color: &str,
        offset_x: f32,
        offset_y: f32,
        opacity: f32,
        radius: f32,
        elevation: f32,
    ) -> Self {
        Self {
            color: color.to_string(),
            offset_x,
            offset_y,
            opacity,
            radius,
            elevation,
        }
    }
}

/// Material elevation presets
pub mod elevation {
    use super::Shadow;

    /// No elevation
    pub fn level0() -> Shadow {
        Shadow::new("#000", 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Elevation level 1
    pub fn level1() -> Shadow {
        Shadow::new("#000", 0.0, 1.0, 0.18, 1.0, 1.0)
    }

    /// Elevation level 2
    pub fn level2() -> Shadow {
        Shadow::new("#000", 0.0, 1.0, 0.20, 1.41, 2.0)
    }

    /// Elevation level 3
    pub fn level3() -> Shadow {
        Shadow::new("#000", 0.0, 1.0, 0.22, 2.22, 3.0)
    }

    /// Elevation level 4
    pub fn level4() -> Shadow {
        Shadow::new("#000", 0.0, 2.0, 0.23, 2.62, 4.0)
    }

    /// Elevation level 5
    pub fn level5() -> Shadow {
        Shadow::new("#000", 0.0, 2.0, 0.25, 3.84, 5.0)
    }

    /// Get a preset by numeric level, clamped to the defined range
    pub fn by_level(level: u8) -> Shadow {
        match level {
            0 => level0(),
            1 => level1(),
            2 => level2(),
            3 => level3(),
            4 => level4(),
            _ => level5(),
        }
    }
}

// =============================================================================
// Font Weight Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
    /// Heavy/Black (800)
    pub const HEAVY: u16 = 800;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Spacing Tests
    // ==========================================================================

    #[test]
    fn test_spacing_values() {
        assert_eq!(spacing::XS, 4.0);
        assert_eq!(spacing::SM, 8.0);
        assert_eq!(spacing::MD, 16.0);
        assert_eq!(spacing::LG, 24.0);
        assert_eq!(spacing::XL, 32.0);
        assert_eq!(spacing::XXL, 48.0);
    }

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("xs"), Some(4.0));
        assert_eq!(spacing::get("lg"), Some(24.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    // ==========================================================================
    // Border Radius Tests
    // ==========================================================================

    #[test]
    fn test_radius_values() {
        assert_eq!(border_radius::NONE, 0.0);
        assert_eq!(border_radius::XS, 4.0);
        assert_eq!(border_radius::SM, 8.0);
        assert_eq!(border_radius::MD, 12.0);
        assert_eq!(border_radius::LG, 16.0);
        assert_eq!(border_radius::XL, 20.0);
        assert_eq!(border_radius::XXL, 28.0);
        assert_eq!(border_radius::FULL, 9999.0);
    }

    #[test]
    fn test_radius_get() {
        assert_eq!(border_radius::get("xl"), Some(20.0));
        assert_eq!(border_radius::get("full"), Some(9999.0));
        assert_eq!(border_radius::get("huge"), None);
    }

    // ==========================================================================
    // Status Bar Tests
    // ==========================================================================

    #[test]
    fn test_status_bar_heights() {
        assert_eq!(status_bar::ANDROID, 24.0);
        assert_eq!(status_bar::IOS, 44.0);
        assert_eq!(status_bar::for_platform("ios"), 44.0);
        assert_eq!(status_bar::for_platform("android"), 24.0);
        assert_eq!(status_bar::for_platform("web"), status_bar::DEFAULT);
    }

    // ==========================================================================
    // Elevation Tests
    // ==========================================================================

    #[test]
    fn test_elevation_level0_is_flat() {
        let shadow = elevation::level0();
        assert_eq!(shadow.opacity, 0.0);
        assert_eq!(shadow.radius, 0.0);
        assert_eq!(shadow.elevation, 0.0);
    }

    #[test]
    fn test_elevation_values() {
        let l2 = elevation::level2();
        assert_eq!(l2.offset_y, 1.0);
        assert_eq!(l2.opacity, 0.20);
        assert_eq!(l2.radius, 1.41);
        assert_eq!(l2.elevation, 2.0);

        let l5 = elevation::level5();
        assert_eq!(l5.offset_y, 2.0);
        assert_eq!(l5.opacity, 0.25);
        assert_eq!(l5.radius, 3.84);
    }

    #[test]
    fn test_elevation_monotonic() {
        let levels = [
            elevation::level0(),
            elevation::level1(),
            elevation::level2(),
            elevation::level3(),
            elevation::level4(),
            elevation::level5(),
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].opacity <= pair[1].opacity);
            assert!(pair[0].radius <= pair[1].radius);
            assert!(pair[0].elevation < pair[1].elevation);
        }
    }

    #[test]
    fn test_elevation_by_level() {
        assert_eq!(elevation::by_level(0), elevation::level0());
        assert_eq!(elevation::by_level(3), elevation::level3());
        // Out of range clamps to the highest preset
        assert_eq!(elevation::by_level(9), elevation::level5());
    }

    // ==========================================================================
    // Font Weight Tests
    // ==========================================================================

    #[test]
    fn test_font_weights() {
        assert_eq!(font_weight::NORMAL, 400);
        assert!(font_weight::MEDIUM > font_weight::NORMAL);
        assert!(font_weight::SEMI_BOLD > font_weight::MEDIUM);
        assert!(font_weight::BOLD > font_weight::SEMI_BOLD);
        assert!(font_weight::HEAVY > font_weight::BOLD);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_shadow_serialization() {
        let shadow = elevation::level3();
        let json = serde_json::to_string(&shadow).unwrap();
        let deserialized: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shadow);
    }
}
