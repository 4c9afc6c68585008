//! Animated splash sequence
//!
//! A tick-based driver for the launch animation: the logo fades and springs
//! in, a glow reveals behind it, the text block fades in, then after a short
//! hold the screen replace-navigates to login. Stages are strictly
//! sequential; within the first stage the opacity ramp and the scale spring
//! run concurrently and both must finish before the stage advances.
//!
//! The owning view holds a clone of the driver's [`CancellationToken`] and
//! cancels it on unmount. The driver honors the token at every stage
//! boundary and before the navigation side effect; once cancelled it freezes
//! and never navigates.

use crate::components::{AppLogo, Text, TextAlign, TextRole};
use crate::navigation::{Navigator, Route};
use crate::theme::{Gradient, Theme};
use crate::tokens::{font_weight, spacing};
use crate::typography::TypeScale;
use animation::cancel::CancellationToken;
use animation::easing::Easing;
use animation::spring::{Spring, SpringConfig};
use animation::timing::Timing;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Sequence Constants
// =============================================================================

/// Logo opacity ramp duration
const LOGO_FADE_MS: f32 = 600.0;
/// Glow opacity ramp duration
const GLOW_FADE_MS: f32 = 400.0;
/// Text block opacity ramp duration
const TEXT_FADE_MS: f32 = 500.0;
/// Hold after the sequence completes before navigating
const NAVIGATION_DELAY_MS: f32 = 800.0;
/// Logo scale start value
const LOGO_SCALE_FROM: f32 = 0.3;
/// Logo scale spring tension
const SPRING_TENSION: f32 = 50.0;
/// Logo scale spring friction
const SPRING_FRICTION: f32 = 7.0;

/// Glow disc dimensions
pub mod glow {
    /// Disc width and height
    pub const SIZE: f32 = 200.0;
    /// Corner radius (a full circle)
    pub const RADIUS: f32 = 100.0;
    /// Gradient opacity
    pub const OPACITY: f32 = 0.3;
}

// =============================================================================
// Phases
// =============================================================================

/// The stages of the splash sequence, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplashPhase {
    /// Not started
    #[default]
    Idle,
    /// Logo opacity and scale animating in
    LogoAppearing,
    /// Glow fading in behind the logo
    GlowRevealing,
    /// App name, tagline and footer fading in
    TextRevealing,
    /// Sequence finished; holding before navigation
    Complete,
}

/// A render snapshot of the animated values
///
/// The glow layer reuses `logo_scale` for its own transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplashFrame {
    /// Logo opacity (0.0 - 1.0)
    pub logo_opacity: f32,
    /// Logo scale (0.3 - ~1.0, overshoots briefly)
    pub logo_scale: f32,
    /// Glow opacity (0.0 - 1.0)
    pub glow_opacity: f32,
    /// Text block opacity (0.0 - 1.0)
    pub text_opacity: f32,
}

// =============================================================================
// Driver
// =============================================================================

/// The splash screen animation driver
pub struct SplashScreen {
    phase: SplashPhase,
    logo_opacity: Timing,
    logo_scale: Spring,
    glow_opacity: Timing,
    text_opacity: Timing,
    hold_ms: f32,
    navigated: bool,
    token: CancellationToken,
    navigator: Arc<dyn Navigator>,
}

impl SplashScreen {
    /// Create an idle driver; call [`start`](Self::start) on mount
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            phase: SplashPhase::Idle,
            logo_opacity: Timing::new(0.0, 1.0, LOGO_FADE_MS, Easing::EaseOutCubic),
            logo_scale: Spring::new(
                LOGO_SCALE_FROM,
                1.0,
                SpringConfig::from_tension_friction(SPRING_TENSION, SPRING_FRICTION),
            ),
            glow_opacity: Timing::new(0.0, 1.0, GLOW_FADE_MS, Easing::Linear),
            text_opacity: Timing::new(0.0, 1.0, TEXT_FADE_MS, Easing::EaseOut),
            hold_ms: 0.0,
            navigated: false,
            token: CancellationToken::new(),
            navigator,
        }
    }

    /// A clone of the cancellation token for the owning view
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Begin the sequence
    ///
    /// No-op if already started or cancelled.
    pub fn start(&mut self) {
        if self.phase == SplashPhase::Idle && !self.token.is_cancelled() {
            self.phase = SplashPhase::LogoAppearing;
            tracing::debug!("splash sequence started");
        }
    }

    /// Advance the sequence by a frame delta in milliseconds
    ///
    /// Steps the active stage's interpolators and performs at most one stage
    /// transition per call. After cancellation this is a no-op; the frame
    /// freezes at its last values.
    pub fn advance(&mut self, dt_ms: f32) -> SplashPhase {
        if self.token.is_cancelled() {
            return self.phase;
        }

        match self.phase {
            SplashPhase::Idle => {}
            SplashPhase::LogoAppearing => {
                self.logo_opacity.tick(dt_ms);
                self.logo_scale.tick(dt_ms);
                // Both must finish before the stage advances
                if self.logo_opacity.is_finished() && self.logo_scale.is_settled() {
                    self.enter(SplashPhase::GlowRevealing);
                }
            }
            SplashPhase::GlowRevealing => {
                self.glow_opacity.tick(dt_ms);
                if self.glow_opacity.is_finished() {
                    self.enter(SplashPhase::TextRevealing);
                }
            }
            SplashPhase::TextRevealing => {
                self.text_opacity.tick(dt_ms);
                if self.text_opacity.is_finished() {
                    self.enter(SplashPhase::Complete);
                }
            }
            SplashPhase::Complete => {
                if !self.navigated && dt_ms > 0.0 {
                    self.hold_ms += dt_ms;
                    if self.hold_ms >= NAVIGATION_DELAY_MS {
                        // Cancellation may land between the top-of-call check
                        // and here; re-check before the side effect.
                        if self.token.is_cancelled() {
                            return self.phase;
                        }
                        self.navigated = true;
                        tracing::debug!(route = %Route::Login.to_path(), "splash handing off");
                        self.navigator.replace(Route::Login);
                    }
                }
            }
        }

        self.phase
    }

    fn enter(&mut self, phase: SplashPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "splash stage transition");
        self.phase = phase;
    }

    /// The current stage
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Whether the sequence has finished animating
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }

    /// Whether the navigation side effect has fired
    pub fn has_navigated(&self) -> bool {
        self.navigated
    }

    /// Current values for the render layer
    pub fn frame(&self) -> SplashFrame {
        SplashFrame {
            logo_opacity: self.logo_opacity.value(),
            logo_scale: self.logo_scale.value(),
            glow_opacity: self.glow_opacity.value(),
            text_opacity: self.text_opacity.value(),
        }
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Full-screen background gradient
    pub fn background(theme: &Theme) -> Gradient {
        theme.gradients.splash.clone()
    }

    /// The hero logo badge
    pub fn logo() -> AppLogo {
        AppLogo::splash()
    }

    /// The glow gradient behind the logo, rendered at [`glow::OPACITY`]
    pub fn glow_gradient(theme: &Theme) -> Gradient {
        theme.gradients.primary.clone()
    }

    /// The app name block
    pub fn app_name() -> Text {
        Text::new(app_core::branding::APP_NAME)
            .with_variant(TypeScale::DisplaySmall)
            .with_font_weight(font_weight::HEAVY)
            .with_letter_spacing(-1.0)
            .with_align(TextAlign::Center)
    }

    /// The tagline under the app name
    pub fn tagline() -> Text {
        Text::new(app_core::branding::APP_TAGLINE)
            .with_variant(TypeScale::BodyLarge)
            .with_role(TextRole::Secondary)
            .with_align(TextAlign::Center)
    }

    /// The credit line pinned at the bottom inset
    pub fn footer() -> Text {
        Text::new(app_core::branding::SPLASH_CREDIT)
            .with_variant(TypeScale::BodySmall)
            .with_role(TextRole::Tertiary)
            .with_letter_spacing(0.5)
            .with_align(TextAlign::Center)
    }

    /// Bottom inset of the footer
    pub fn footer_inset() -> f32 {
        spacing::XXL
    }
}
