//! Typography system for DuitKu
//!
//! Material Design 3 type scale (display/headline/title/body/label in three
//! sizes each) with the exact size, weight, tracking, and line-height values
//! the app ships.

use crate::tokens::font_weight;
use serde::{Deserialize, Serialize};

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
///
/// Line height and letter spacing are absolute dp values, matching how the
/// native shell consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in dp
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700, 800)
    pub font_weight: u16,
    /// Letter spacing in dp
    pub letter_spacing: f32,
    /// Line height in dp
    pub line_height: f32,
}

impl TextStyle {
    /// Create a new text style with default tracking and a line height of
    /// 1.5x the font size
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            letter_spacing: 0.0,
            line_height: font_size * 1.5,
        }
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, ls: f32) -> Self {
        self.letter_spacing = ls;
        self
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set font weight
    pub fn with_font_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    /// Scale font size and line height by a multiplier (for accessibility)
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            font_weight: self.font_weight,
            letter_spacing: self.letter_spacing,
            line_height: self.line_height * multiplier,
        }
    }
}

// =============================================================================
// Type Scale
// =============================================================================

/// Material type scale variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypeScale {
    /// Display large (57dp)
    DisplayLarge,
    /// Display medium (45dp)
    DisplayMedium,
    /// Display small (36dp)
    DisplaySmall,
    /// Headline large (32dp)
    HeadlineLarge,
    /// Headline medium (28dp)
    HeadlineMedium,
    /// Headline small (24dp)
    HeadlineSmall,
    /// Title large (22dp)
    TitleLarge,
    /// Title medium (16dp)
    TitleMedium,
    /// Title small (14dp)
    TitleSmall,
    /// Body large (16dp)
    BodyLarge,
    /// Body medium (14dp) - the base reading size
    #[default]
    BodyMedium,
    /// Body small (12dp)
    BodySmall,
    /// Label large (14dp)
    LabelLarge,
    /// Label medium (12dp)
    LabelMedium,
    /// Label small (11dp)
    LabelSmall,
}

impl TypeScale {
    /// Get the text style for this scale variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::DisplayLarge => TextStyle::new(57.0, font_weight::NORMAL)
                .with_letter_spacing(-0.25)
                .with_line_height(64.0),
            Self::DisplayMedium => TextStyle::new(45.0, font_weight::NORMAL)
                .with_letter_spacing(0.0)
                .with_line_height(52.0),
            Self::DisplaySmall => TextStyle::new(36.0, font_weight::NORMAL)
                .with_letter_spacing(0.0)
                .with_line_height(44.0),
            Self::HeadlineLarge => TextStyle::new(32.0, font_weight::NORMAL)
                .with_letter_spacing(0.0)
                .with_line_height(40.0),
            Self::HeadlineMedium => TextStyle::new(28.0, font_weight::NORMAL)
                .with_letter_spacing(0.0)
                .with_line_height(36.0),
            Self::HeadlineSmall => TextStyle::new(24.0, font_weight::NORMAL)
                .with_letter_spacing(0.0)
                .with_line_height(32.0),
            Self::TitleLarge => TextStyle::new(22.0, font_weight::MEDIUM)
                .with_letter_spacing(0.0)
                .with_line_height(28.0),
            Self::TitleMedium => TextStyle::new(16.0, font_weight::MEDIUM)
                .with_letter_spacing(0.15)
                .with_line_height(24.0),
            Self::TitleSmall => TextStyle::new(14.0, font_weight::MEDIUM)
                .with_letter_spacing(0.1)
                .with_line_height(20.0),
            Self::BodyLarge => TextStyle::new(16.0, font_weight::NORMAL)
                .with_letter_spacing(0.5)
                .with_line_height(24.0),
            Self::BodyMedium => TextStyle::new(14.0, font_weight::NORMAL)
                .with_letter_spacing(0.25)
                .with_line_height(20.0),
            Self::BodySmall => TextStyle::new(12.0, font_weight::NORMAL)
                .with_letter_spacing(0.4)
                .with_line_height(16.0),
            Self::LabelLarge => TextStyle::new(14.0, font_weight::MEDIUM)
                .with_letter_spacing(0.1)
                .with_line_height(20.0),
            Self::LabelMedium => TextStyle::new(12.0, font_weight::MEDIUM)
                .with_letter_spacing(0.5)
                .with_line_height(16.0),
            Self::LabelSmall => TextStyle::new(11.0, font_weight::MEDIUM)
                .with_letter_spacing(0.5)
                .with_line_height(16.0),
        }
    }

    /// All scale variants, grouped by category from display down to label
    pub fn all() -> [TypeScale; 15] {
        [
            Self::DisplayLarge,
            Self::DisplayMedium,
            Self::DisplaySmall,
            Self::HeadlineLarge,
            Self::HeadlineMedium,
            Self::HeadlineSmall,
            Self::TitleLarge,
            Self::TitleMedium,
            Self::TitleSmall,
            Self::BodyLarge,
            Self::BodyMedium,
            Self::BodySmall,
            Self::LabelLarge,
            Self::LabelMedium,
            Self::LabelSmall,
        ]
    }
}

// =============================================================================
// Font Families
// =============================================================================

/// Platform font families
pub mod font_family {
    /// iOS system font
    pub const IOS: &str = "System";
    /// Android system font
    pub const ANDROID: &str = "Roboto";
    /// Fallback for other platforms
    pub const DEFAULT: &str = "System";

    /// Get the font family for a platform identifier
    pub fn for_platform(platform: &str) -> &'static str {
        match platform {
            "ios" => IOS,
            "android" => ANDROID,
            _ => DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // TextStyle Tests
    // ==========================================================================

    #[test]
    fn test_text_style_new() {
        let style = TextStyle::new(16.0, 400);
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.font_weight, 400);
        assert_eq!(style.letter_spacing, 0.0);
        assert_eq!(style.line_height, 24.0);
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new(36.0, 400)
            .with_letter_spacing(-1.0)
            .with_line_height(44.0)
            .with_font_weight(800);

        assert_eq!(style.letter_spacing, -1.0);
        assert_eq!(style.line_height, 44.0);
        assert_eq!(style.font_weight, 800);
    }

    #[test]
    fn test_text_style_scale() {
        let style = TypeScale::BodyLarge.style().scale(1.25);
        assert_eq!(style.font_size, 20.0);
        assert_eq!(style.line_height, 30.0);
        assert_eq!(style.font_weight, 400); // Weight unchanged
        assert_eq!(style.letter_spacing, 0.5); // Tracking unchanged
    }

    // ==========================================================================
    // Type Scale Tests
    // ==========================================================================

    #[test]
    fn test_display_styles() {
        let large = TypeScale::DisplayLarge.style();
        assert_eq!(large.font_size, 57.0);
        assert_eq!(large.font_weight, 400);
        assert_eq!(large.letter_spacing, -0.25);
        assert_eq!(large.line_height, 64.0);

        let small = TypeScale::DisplaySmall.style();
        assert_eq!(small.font_size, 36.0);
        assert_eq!(small.line_height, 44.0);
    }

    #[test]
    fn test_headline_styles() {
        assert_eq!(TypeScale::HeadlineLarge.style().font_size, 32.0);
        assert_eq!(TypeScale::HeadlineMedium.style().font_size, 28.0);
        assert_eq!(TypeScale::HeadlineSmall.style().font_size, 24.0);
        // Headlines are regular weight in the Material scale
        assert_eq!(TypeScale::HeadlineLarge.style().font_weight, 400);
    }

    #[test]
    fn test_title_styles_are_medium_weight() {
        for variant in [
            TypeScale::TitleLarge,
            TypeScale::TitleMedium,
            TypeScale::TitleSmall,
        ] {
            assert_eq!(variant.style().font_weight, 500);
        }
        assert_eq!(TypeScale::TitleMedium.style().letter_spacing, 0.15);
    }

    #[test]
    fn test_body_styles() {
        let large = TypeScale::BodyLarge.style();
        assert_eq!(large.font_size, 16.0);
        assert_eq!(large.letter_spacing, 0.5);
        assert_eq!(large.line_height, 24.0);

        let small = TypeScale::BodySmall.style();
        assert_eq!(small.font_size, 12.0);
        assert_eq!(small.letter_spacing, 0.4);
    }

    #[test]
    fn test_label_styles() {
        let large = TypeScale::LabelLarge.style();
        assert_eq!(large.font_size, 14.0);
        assert_eq!(large.font_weight, 500);
        assert_eq!(large.letter_spacing, 0.1);

        let small = TypeScale::LabelSmall.style();
        assert_eq!(small.font_size, 11.0);
        assert_eq!(small.line_height, 16.0);
    }

    #[test]
    fn test_all_variants_listed() {
        let all = TypeScale::all();
        assert_eq!(all.len(), 15);
        // Sizes descend within each category of three
        for group in all.chunks(3) {
            for pair in group.windows(2) {
                assert!(pair[0].style().font_size > pair[1].style().font_size);
            }
        }
    }

    #[test]
    fn test_line_height_exceeds_font_size() {
        for variant in TypeScale::all() {
            let style = variant.style();
            assert!(
                style.line_height > style.font_size,
                "line height should clear the glyph box for {:?}",
                variant
            );
        }
    }

    // ==========================================================================
    // Font Family Tests
    // ==========================================================================

    #[test]
    fn test_font_families() {
        assert_eq!(font_family::for_platform("ios"), "System");
        assert_eq!(font_family::for_platform("android"), "Roboto");
        assert_eq!(font_family::for_platform("windows"), "System");
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_type_scale_serialization() {
        let variant = TypeScale::HeadlineLarge;
        let json = serde_json::to_string(&variant).unwrap();
        assert_eq!(json, "\"headline-large\"");

        let deserialized: TypeScale = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TypeScale::HeadlineLarge);
    }

    #[test]
    fn test_text_style_serialization() {
        let style = TypeScale::LabelLarge.style();
        let json = serde_json::to_string(&style).unwrap();
        let deserialized: TextStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, style);
    }
}
