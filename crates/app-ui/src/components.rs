//! UI component library for DuitKu
//!
//! Components are defined as Rust structs with serializable properties
//! that can be rendered by a host shell. Each component provides:
//!
//! - Type-safe props with builder patterns
//! - Theme-aware styling through [`computed_styles`](Button::computed_styles)
//! - Press/change event hooks as handler identifiers
//!
//! # Available Components
//!
//! - [`Button`] - Pressable with filled/outlined/text variants
//! - [`GlassCard`] - Frosted-glass container with blur
//! - [`Input`] - Labeled text field on glass styling
//! - [`Text`] - Typographic block with semantic color roles
//! - [`AppLogo`] - The shared gradient logo badge

use crate::theme::{Color, Gradient, Theme};
use crate::tokens::{border_radius, elevation, font_weight, spacing, Shadow};
use crate::typography::{TextStyle, TypeScale};
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Layout overrides a screen applies on top of a component's computed styles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverrides {
    /// Top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Horizontal margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<f32>,
    /// Maximum width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    /// Opacity override (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl StyleOverrides {
    /// Overrides with only a top margin set
    pub fn margin_top(value: f32) -> Self {
        Self {
            margin_top: Some(value),
            ..Default::default()
        }
    }
}

fn is_default_overrides(overrides: &StyleOverrides) -> bool {
    overrides == &StyleOverrides::default()
}

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned (default)
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Gradient-filled pressable
    #[default]
    Filled,
    /// Bordered translucent pressable
    Outlined,
    /// Borderless pressable
    Text,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Label content
    pub label: String,
    /// Style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the button shows a progress indicator instead of its label
    #[serde(default)]
    pub loading: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Layout overrides
    #[serde(default, skip_serializing_if = "is_default_overrides")]
    pub overrides: StyleOverrides,
}

impl Button {
    /// Create a new filled button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            loading: false,
            on_press: None,
            overrides: StyleOverrides::default(),
        }
    }

    /// Create an outlined button
    pub fn outlined(label: impl Into<String>) -> Self {
        Self {
            variant: ButtonVariant::Outlined,
            ..Self::new(label)
        }
    }

    /// Create a text button
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            variant: ButtonVariant::Text,
            ..Self::new(label)
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set loading state
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set layout overrides
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Whether a press may fire the handler
    ///
    /// Loading implicitly disables press.
    pub fn can_press(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Whether the label is replaced by a progress indicator
    pub fn shows_spinner(&self) -> bool {
        self.loading
    }

    /// Get the computed styles for this button based on theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let (background, gradient, label_color, label_shadow, border) = match self.variant {
            ButtonVariant::Filled => (
                "transparent".to_string(),
                Some(theme.gradients.primary.clone()),
                theme.palette.on_primary.clone(),
                Some(TextShadow {
                    color: "rgba(0, 0, 0, 0.25)".to_string(),
                    offset_x: 0.0,
                    offset_y: 1.0,
                    radius: 2.0,
                }),
                None,
            ),
            ButtonVariant::Outlined => (
                theme.palette.glass_bg.clone(),
                None,
                theme.palette.primary.clone(),
                None,
                Some((theme.palette.glass_border.clone(), 1.5)),
            ),
            ButtonVariant::Text => (
                "transparent".to_string(),
                None,
                theme.palette.primary.clone(),
                None,
                None,
            ),
        };

        // The filled gradient carries its own intrinsic padding; outlined and
        // text buttons are padded by the caller's layout.
        let is_filled = self.variant == ButtonVariant::Filled;
        let (padding_vertical, padding_horizontal, min_height) = if is_filled {
            (14.0, 24.0, Some(48.0))
        } else {
            (0.0, 0.0, None)
        };

        let ripple = if is_filled {
            "rgba(255, 255, 255, 0.3)".to_string()
        } else {
            theme.palette.ripple.clone()
        };

        let spinner_color = if is_filled {
            theme.palette.on_primary.clone()
        } else {
            theme.palette.primary.clone()
        };

        let (border_color, border_width) = match border {
            Some((color, width)) => (Some(color), width),
            None => (None, 0.0),
        };

        ButtonStyles {
            background,
            gradient,
            label_color,
            label_style: TypeScale::LabelLarge
                .style()
                .with_font_weight(font_weight::SEMI_BOLD),
            label_shadow,
            spinner_color,
            border_color,
            border_width,
            padding_vertical,
            padding_horizontal,
            min_height,
            border_radius: border_radius::XL,
            shadow: is_filled.then(elevation::level2),
            ripple,
            opacity: if self.disabled || self.loading { 0.5 } else { 1.0 },
            pressed_opacity: 0.8,
        }
    }
}

/// A text drop shadow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub radius: f32,
}

/// Computed button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Background color (painted when no gradient is present)
    pub background: Color,
    /// Gradient fill (filled variant only)
    pub gradient: Option<Gradient>,
    /// Label color
    pub label_color: Color,
    /// Label typography
    pub label_style: TextStyle,
    /// Label drop shadow (filled variant only)
    pub label_shadow: Option<TextShadow>,
    /// Progress indicator color while loading
    pub spinner_color: Color,
    /// Border color
    pub border_color: Option<Color>,
    /// Border width
    pub border_width: f32,
    /// Vertical padding
    pub padding_vertical: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Minimum height constraint
    pub min_height: Option<f32>,
    /// Corner radius (content is clipped)
    pub border_radius: f32,
    /// Elevation shadow (filled variant only)
    pub shadow: Option<Shadow>,
    /// Android press ripple color
    pub ripple: Color,
    /// Container opacity
    pub opacity: f32,
    /// iOS pressed-state opacity
    pub pressed_opacity: f32,
}

// =============================================================================
// Glass Card Component
// =============================================================================

/// Blur tint following the active color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurTint {
    /// Light tint
    Light,
    /// Dark tint
    Dark,
}

/// Frosted-glass container with blur
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassCard {
    /// Blur intensity
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    /// Inner padding
    #[serde(default = "default_card_padding")]
    pub padding: f32,
    /// Layout overrides
    #[serde(default, skip_serializing_if = "is_default_overrides")]
    pub overrides: StyleOverrides,
}

fn default_intensity() -> f32 {
    90.0
}

fn default_card_padding() -> f32 {
    16.0
}

impl Default for GlassCard {
    fn default() -> Self {
        Self::new()
    }
}

impl GlassCard {
    /// Create a card with default intensity and padding
    pub fn new() -> Self {
        Self {
            intensity: default_intensity(),
            padding: default_card_padding(),
            overrides: StyleOverrides::default(),
        }
    }

    /// Set blur intensity
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set inner padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set layout overrides
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Get the computed styles for this card based on theme
    pub fn computed_styles(&self, theme: &Theme) -> GlassCardStyles {
        GlassCardStyles {
            intensity: self.intensity,
            tint: if theme.is_dark() {
                BlurTint::Dark
            } else {
                BlurTint::Light
            },
            background: theme.palette.glass_bg_heavy.clone(),
            border_color: theme.palette.glass_border.clone(),
            border_width: 1.0,
            border_radius: border_radius::LG,
            padding: self.padding,
            shadow: elevation::level2(),
        }
    }
}

/// Computed glass card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassCardStyles {
    /// Blur intensity
    pub intensity: f32,
    /// Blur tint
    pub tint: BlurTint,
    /// Background color over the blur layer
    pub background: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Corner radius (content is clipped by the outer container)
    pub border_radius: f32,
    /// Inner padding
    pub padding: f32,
    /// Elevation shadow
    pub shadow: Shadow,
}

// =============================================================================
// Input Component
// =============================================================================

/// Input content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text input
    #[default]
    Text,
    /// Email input (email keyboard, no autocapitalize)
    Email,
    /// Password input (masked)
    Password,
}

/// Labeled text field on glass styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Content type
    #[serde(default)]
    pub input_type: InputType,
    /// Label shown above the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Auto-complete hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    /// On change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
}

impl Input {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            input_type: InputType::Text,
            label: None,
            placeholder: None,
            value: String::new(),
            autocomplete: None,
            on_change: None,
        }
    }

    /// Create an email input
    pub fn email() -> Self {
        Self {
            input_type: InputType::Email,
            autocomplete: Some("email".to_string()),
            ..Self::new()
        }
    }

    /// Create a password input
    pub fn password() -> Self {
        Self {
            input_type: InputType::Password,
            autocomplete: Some("password".to_string()),
            ..Self::new()
        }
    }

    /// Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set auto-complete hint
    pub fn with_autocomplete(mut self, hint: impl Into<String>) -> Self {
        self.autocomplete = Some(hint.into());
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Whether the value is masked
    pub fn is_secure(&self) -> bool {
        self.input_type == InputType::Password
    }

    /// Whether the shell should suppress auto-capitalization
    pub fn autocapitalize(&self) -> bool {
        self.input_type == InputType::Text
    }

    /// Get the computed styles for this input based on theme
    pub fn computed_styles(&self, theme: &Theme) -> InputStyles {
        InputStyles {
            background: theme.palette.glass_bg.clone(),
            border_color: theme.palette.glass_border.clone(),
            border_width: 1.0,
            border_radius: border_radius::MD,
            padding: spacing::MD,
            text_color: theme.palette.text_primary.clone(),
            text_style: TypeScale::BodyLarge.style(),
            placeholder_color: theme.palette.text_tertiary.clone(),
            label_color: theme.palette.text_secondary.clone(),
            label_style: TypeScale::LabelLarge.style(),
            label_margin_bottom: spacing::XS,
            margin_bottom: spacing::MD,
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

/// Computed input styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStyles {
    /// Field background
    pub background: Color,
    /// Field border color
    pub border_color: Color,
    /// Field border width
    pub border_width: f32,
    /// Field corner radius
    pub border_radius: f32,
    /// Field inner padding
    pub padding: f32,
    /// Value text color
    pub text_color: Color,
    /// Value typography
    pub text_style: TextStyle,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Label color
    pub label_color: Color,
    /// Label typography
    pub label_style: TextStyle,
    /// Space between label and field
    pub label_margin_bottom: f32,
    /// Space below the whole input
    pub margin_bottom: f32,
}

// =============================================================================
// Text Component
// =============================================================================

/// Semantic color roles for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Primary text color
    #[default]
    Primary,
    /// Secondary/muted text color
    Secondary,
    /// Tertiary/faint text color
    Tertiary,
}

/// Typographic block with a scale variant and semantic color role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Type scale variant
    #[serde(default)]
    pub variant: TypeScale,
    /// Color role
    #[serde(default)]
    pub role: TextRole,
    /// Alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Font weight override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Letter spacing override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Layout overrides
    #[serde(default, skip_serializing_if = "is_default_overrides")]
    pub overrides: StyleOverrides,
}

impl Text {
    /// Create new text content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TypeScale::default(),
            role: TextRole::default(),
            align: TextAlign::default(),
            font_weight: None,
            letter_spacing: None,
            overrides: StyleOverrides::default(),
        }
    }

    /// Set type scale variant
    pub fn with_variant(mut self, variant: TypeScale) -> Self {
        self.variant = variant;
        self
    }

    /// Set color role
    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    /// Set alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Override font weight
    pub fn with_font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Override letter spacing
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Set layout overrides
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// The variant style with overrides applied
    pub fn resolved_style(&self) -> TextStyle {
        let mut style = self.variant.style();
        if let Some(weight) = self.font_weight {
            style = style.with_font_weight(weight);
        }
        if let Some(spacing) = self.letter_spacing {
            style = style.with_letter_spacing(spacing);
        }
        style
    }

    /// The color this text resolves to under a theme
    pub fn color(&self, theme: &Theme) -> Color {
        match self.role {
            TextRole::Primary => theme.palette.text_primary.clone(),
            TextRole::Secondary => theme.palette.text_secondary.clone(),
            TextRole::Tertiary => theme.palette.text_tertiary.clone(),
        }
    }
}

// =============================================================================
// App Logo Component
// =============================================================================

/// Logo badge size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPreset {
    /// Hero badge on the splash screen
    #[default]
    Splash,
    /// Login header badge
    Login,
    /// Register header badge
    Register,
}

/// The shared gradient logo badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppLogo {
    /// Size preset
    #[serde(default)]
    pub preset: LogoPreset,
}

impl AppLogo {
    /// The splash hero badge
    pub fn splash() -> Self {
        Self {
            preset: LogoPreset::Splash,
        }
    }

    /// The login header badge
    pub fn login() -> Self {
        Self {
            preset: LogoPreset::Login,
        }
    }

    /// The register header badge
    pub fn register() -> Self {
        Self {
            preset: LogoPreset::Register,
        }
    }

    /// The logo glyph
    pub fn glyph(&self) -> &'static str {
        app_core::branding::LOGO_GLYPH
    }

    /// Get the computed styles for this badge based on theme
    pub fn computed_styles(&self, theme: &Theme) -> LogoStyles {
        let (size, corner_radius, glyph_size, shadow) = match self.preset {
            LogoPreset::Splash => (140.0, 40.0, 72.0, Shadow::new("#6366F1", 0.0, 12.0, 0.4, 24.0, 12.0)),
            LogoPreset::Login => (100.0, 28.0, 56.0, Shadow::new("#6366F1", 0.0, 8.0, 0.3, 16.0, 8.0)),
            LogoPreset::Register => (80.0, 24.0, 48.0, Shadow::new("#6366F1", 0.0, 8.0, 0.3, 16.0, 8.0)),
        };

        LogoStyles {
            size,
            corner_radius,
            glyph: self.glyph().to_string(),
            glyph_size,
            gradient: theme.gradients.primary.clone(),
            shadow,
        }
    }
}

/// Computed logo badge styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoStyles {
    /// Badge width and height
    pub size: f32,
    /// Corner radius
    pub corner_radius: f32,
    /// Glyph content
    pub glyph: String,
    /// Glyph font size
    pub glyph_size: f32,
    /// Badge gradient fill
    pub gradient: Gradient,
    /// Indigo drop shadow
    pub shadow: Shadow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme};

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_builder() {
        let button = Button::new("Masuk")
            .loading(true)
            .on_press("handle_login")
            .with_overrides(StyleOverrides::margin_top(spacing::LG));

        assert_eq!(button.label, "Masuk");
        assert_eq!(button.variant, ButtonVariant::Filled);
        assert!(button.loading);
        assert_eq!(button.on_press, Some("handle_login".to_string()));
        assert_eq!(button.overrides.margin_top, Some(24.0));
    }

    #[test]
    fn test_button_press_gating() {
        let button = Button::new("Masuk");
        assert!(button.can_press());

        // Loading implicitly disables press
        let loading = Button::new("Masuk").loading(true);
        assert!(!loading.can_press());
        assert!(loading.shows_spinner());

        let disabled = Button::new("Masuk").disabled(true);
        assert!(!disabled.can_press());
        assert!(!disabled.shows_spinner());
    }

    #[test]
    fn test_filled_button_styles() {
        let theme = dark_theme();
        let styles = Button::new("Masuk").computed_styles(&theme);

        let gradient = styles.gradient.unwrap();
        assert_eq!(gradient.stops[0].color, "#6366F1");
        assert_eq!(gradient.stops[1].color, "#8B5CF6");
        assert_eq!(styles.label_color, "#FFFFFF");
        assert_eq!(styles.padding_vertical, 14.0);
        assert_eq!(styles.padding_horizontal, 24.0);
        assert_eq!(styles.min_height, Some(48.0));
        assert_eq!(styles.border_radius, 20.0);
        assert_eq!(styles.ripple, "rgba(255, 255, 255, 0.3)");
        assert_eq!(styles.opacity, 1.0);

        let shadow = styles.shadow.unwrap();
        assert_eq!(shadow.elevation, 2.0);

        let text_shadow = styles.label_shadow.unwrap();
        assert_eq!(text_shadow.color, "rgba(0, 0, 0, 0.25)");
        assert_eq!(text_shadow.offset_y, 1.0);
        assert_eq!(text_shadow.radius, 2.0);
    }

    #[test]
    fn test_outlined_button_styles() {
        let theme = dark_theme();
        let styles = Button::outlined("Daftar").computed_styles(&theme);

        assert_eq!(styles.background, theme.palette.glass_bg);
        assert_eq!(styles.border_color, Some(theme.palette.glass_border.clone()));
        assert_eq!(styles.border_width, 1.5);
        assert_eq!(styles.label_color, theme.palette.primary);
        assert_eq!(styles.ripple, theme.palette.ripple);
        assert!(styles.gradient.is_none());
        assert!(styles.shadow.is_none());
        assert!(styles.label_shadow.is_none());

        // No intrinsic padding; callers pad via layout
        assert_eq!(styles.padding_vertical, 0.0);
        assert_eq!(styles.padding_horizontal, 0.0);
        assert_eq!(styles.min_height, None);
    }

    #[test]
    fn test_text_button_styles() {
        let theme = light_theme();
        let styles = Button::text("Lewati").computed_styles(&theme);

        assert_eq!(styles.background, "transparent");
        assert!(styles.border_color.is_none());
        assert_eq!(styles.border_width, 0.0);
        assert_eq!(styles.label_color, theme.palette.primary);
        assert_eq!(styles.spinner_color, theme.palette.primary);
    }

    #[test]
    fn test_button_label_typography() {
        let theme = dark_theme();
        let styles = Button::new("Masuk").computed_styles(&theme);

        assert_eq!(styles.label_style.font_size, 14.0);
        assert_eq!(styles.label_style.font_weight, font_weight::SEMI_BOLD);
    }

    #[test]
    fn test_button_disabled_opacity() {
        let theme = dark_theme();

        let disabled = Button::new("Masuk").disabled(true).computed_styles(&theme);
        assert_eq!(disabled.opacity, 0.5);

        let loading = Button::new("Masuk").loading(true).computed_styles(&theme);
        assert_eq!(loading.opacity, 0.5);
        assert_eq!(loading.pressed_opacity, 0.8);
    }

    // ==========================================================================
    // Glass Card Tests
    // ==========================================================================

    #[test]
    fn test_glass_card_defaults() {
        let card = GlassCard::new();
        assert_eq!(card.intensity, 90.0);
        assert_eq!(card.padding, 16.0);
    }

    #[test]
    fn test_glass_card_styles_by_scheme() {
        let card = GlassCard::new().with_intensity(100.0).with_padding(24.0);

        let dark = card.computed_styles(&dark_theme());
        assert_eq!(dark.tint, BlurTint::Dark);
        assert_eq!(dark.intensity, 100.0);
        assert_eq!(dark.padding, 24.0);
        assert_eq!(dark.background, "rgba(255, 255, 255, 0.1)");
        assert_eq!(dark.border_width, 1.0);
        assert_eq!(dark.border_radius, 16.0);
        assert_eq!(dark.shadow.elevation, 2.0);

        let light = card.computed_styles(&light_theme());
        assert_eq!(light.tint, BlurTint::Light);
        assert_eq!(light.background, "rgba(255, 255, 255, 0.85)");
    }

    // ==========================================================================
    // Input Tests
    // ==========================================================================

    #[test]
    fn test_input_shortcuts() {
        let email = Input::email().with_placeholder("nama@email.com");
        assert_eq!(email.input_type, InputType::Email);
        assert_eq!(email.autocomplete, Some("email".to_string()));
        assert!(!email.is_secure());
        assert!(!email.autocapitalize());

        let password = Input::password().with_label("Password");
        assert!(password.is_secure());
        assert_eq!(password.label, Some("Password".to_string()));
    }

    #[test]
    fn test_input_styles() {
        let theme = dark_theme();
        let styles = Input::email().computed_styles(&theme);

        assert_eq!(styles.background, theme.palette.glass_bg);
        assert_eq!(styles.border_color, theme.palette.glass_border);
        assert_eq!(styles.border_radius, 12.0);
        assert_eq!(styles.padding, 16.0);
        assert_eq!(styles.text_style.font_size, 16.0);
        assert_eq!(styles.placeholder_color, theme.palette.text_tertiary);
    }

    // ==========================================================================
    // Text Tests
    // ==========================================================================

    #[test]
    fn test_text_resolved_style() {
        let app_name = Text::new("DuitKu")
            .with_variant(TypeScale::DisplaySmall)
            .with_font_weight(font_weight::HEAVY)
            .with_letter_spacing(-1.0);

        let style = app_name.resolved_style();
        assert_eq!(style.font_size, 36.0);
        assert_eq!(style.font_weight, 800);
        assert_eq!(style.letter_spacing, -1.0);
    }

    #[test]
    fn test_text_color_roles() {
        let theme = dark_theme();

        let title = Text::new("Selamat Datang");
        assert_eq!(title.color(&theme), theme.palette.text_primary);

        let subtitle = Text::new("Masuk untuk mengelola keuangan Anda").with_role(TextRole::Secondary);
        assert_eq!(subtitle.color(&theme), theme.palette.text_secondary);

        let footer = Text::new("Kelola keuangan dengan mudah dan aman").with_role(TextRole::Tertiary);
        assert_eq!(footer.color(&theme), theme.palette.text_tertiary);
    }

    // ==========================================================================
    // App Logo Tests
    // ==========================================================================

    #[test]
    fn test_logo_presets() {
        let theme = dark_theme();

        let splash = AppLogo::splash().computed_styles(&theme);
        assert_eq!(splash.size, 140.0);
        assert_eq!(splash.corner_radius, 40.0);
        assert_eq!(splash.glyph_size, 72.0);
        assert_eq!(splash.shadow.color, "#6366F1");
        assert_eq!(splash.shadow.offset_y, 12.0);
        assert_eq!(splash.shadow.elevation, 12.0);

        let login = AppLogo::login().computed_styles(&theme);
        assert_eq!(login.size, 100.0);
        assert_eq!(login.corner_radius, 28.0);
        assert_eq!(login.glyph_size, 56.0);
        assert_eq!(login.shadow.elevation, 8.0);

        let register = AppLogo::register().computed_styles(&theme);
        assert_eq!(register.size, 80.0);
        assert_eq!(register.corner_radius, 24.0);
        assert_eq!(register.glyph_size, 48.0);
    }

    #[test]
    fn test_logo_gradient_matches_primary() {
        let theme = light_theme();
        let styles = AppLogo::splash().computed_styles(&theme);
        assert_eq!(styles.gradient, theme.gradients.primary);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_button_serialization() {
        let button = Button::outlined("Belum punya akun? Daftar");
        let json = serde_json::to_string(&button).unwrap();
        assert!(json.contains("\"outlined\""));

        let deserialized: Button = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, button);
    }

    #[test]
    fn test_glass_card_serialization_defaults() {
        let card: GlassCard = serde_json::from_str("{}").unwrap();
        assert_eq!(card.intensity, 90.0);
        assert_eq!(card.padding, 16.0);
    }

    #[test]
    fn test_default_overrides_skipped() {
        let json = serde_json::to_string(&Button::new("Masuk")).unwrap();
        assert!(!json.contains("overrides"));
    }
}
