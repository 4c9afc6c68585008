//! Login screen
//!
//! Holds the email/password form, validates locally, and drives the
//! authentication call. A successful login replace-navigates to home so
//! back can never return to the form; a failed one surfaces an alert with
//! the error's user message. An atomic latch guarantees at most one
//! submission is in flight no matter how quickly the button fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use app_core::auth::{Authenticator, LoginParams};

use crate::components::{
    AppLogo, Button, GlassCard, Input, StyleOverrides, Text, TextAlign, TextRole,
};
use crate::navigation::{Navigator, Route};
use crate::screens::{Alert, SubmitOutcome};
use crate::theme::{Gradient, Theme};
use crate::tokens::{font_weight, spacing};
use crate::typography::TypeScale;

/// Alert copy for missing fields
const VALIDATION_MESSAGE: &str = "Mohon isi email dan password";
/// Alert title for a rejected login
const FAILURE_TITLE: &str = "Login Gagal";

#[derive(Default)]
struct LoginForm {
    email: String,
    password: String,
}

/// The login screen
///
/// Shared behind `Arc`; every method takes `&self` so the shell and an
/// in-flight submission can hold the screen concurrently.
pub struct LoginScreen {
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
    form: Mutex<LoginForm>,
    loading: AtomicBool,
    alert: Mutex<Option<Alert>>,
}

impl LoginScreen {
    /// Create a screen with an empty form
    pub fn new(authenticator: Arc<dyn Authenticator>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            authenticator,
            navigator,
            form: Mutex::new(LoginForm::default()),
            loading: AtomicBool::new(false),
            alert: Mutex::new(None),
        }
    }

    // =========================================================================
    // Form State
    // =========================================================================

    /// Update the email field
    pub fn set_email(&self, email: impl Into<String>) {
        self.form.lock().email = email.into();
    }

    /// Update the password field
    pub fn set_password(&self, password: impl Into<String>) {
        self.form.lock().password = password.into();
    }

    /// Current email value
    pub fn email(&self) -> String {
        self.form.lock().email.clone()
    }

    /// Current password value
    pub fn password(&self) -> String {
        self.form.lock().password.clone()
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Take the pending alert for display, leaving none behind
    pub fn take_alert(&self) -> Option<Alert> {
        self.alert.lock().take()
    }

    fn surface_alert(&self, title: &str, message: impl Into<String>) {
        *self.alert.lock() = Some(Alert::new(title, message));
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Validate the form and run the login call
    ///
    /// Validation failures never touch the loading latch. The latch commits
    /// before the first await, so a second call observing it returns
    /// [`SubmitOutcome::AlreadyInFlight`] without reaching the
    /// authenticator. The latch clears on every exit path past it.
    pub async fn submit(&self) -> SubmitOutcome {
        let params = {
            let form = self.form.lock();
            if form.email.is_empty() || form.password.is_empty() {
                drop(form);
                self.surface_alert(Alert::ERROR_TITLE, VALIDATION_MESSAGE);
                return SubmitOutcome::Blocked;
            }
            LoginParams {
                email: form.email.clone(),
                password: form.password.clone(),
            }
        };

        if self.loading.swap(true, Ordering::SeqCst) {
            tracing::debug!("login already in flight, ignoring submit");
            return SubmitOutcome::AlreadyInFlight;
        }

        tracing::debug!("login submitted");
        let outcome = match self.authenticator.login(params).await {
            Ok(session) => {
                tracing::debug!(account = %session.account.email, "login succeeded");
                self.navigator.replace(Route::Home);
                SubmitOutcome::Authenticated
            }
            Err(error) => {
                tracing::warn!(%error, "login failed");
                self.surface_alert(FAILURE_TITLE, error.user_message());
                SubmitOutcome::Failed
            }
        };
        self.loading.store(false, Ordering::SeqCst);
        outcome
    }

    /// Navigate to the registration screen
    pub fn go_to_register(&self) {
        self.navigator.push(Route::Register);
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Full-screen background gradient
    pub fn background(theme: &Theme) -> Gradient {
        theme.gradients.auth.clone()
    }

    /// The logo badge above the heading
    pub fn logo() -> AppLogo {
        AppLogo::login()
    }

    /// "Selamat Datang" heading
    pub fn title() -> Text {
        Text::new("Selamat Datang")
            .with_variant(TypeScale::HeadlineLarge)
            .with_font_weight(font_weight::BOLD)
            .with_align(TextAlign::Center)
            .with_overrides(StyleOverrides {
                margin_bottom: Some(spacing::XS),
                ..Default::default()
            })
    }

    /// Subheading under the title
    pub fn subtitle() -> Text {
        Text::new("Masuk untuk mengelola keuangan Anda")
            .with_variant(TypeScale::BodyLarge)
            .with_role(TextRole::Secondary)
            .with_align(TextAlign::Center)
            .with_overrides(StyleOverrides {
                max_width: Some(280.0),
                ..Default::default()
            })
    }

    /// The frosted card wrapping the form
    pub fn card() -> GlassCard {
        GlassCard::new()
            .with_intensity(100.0)
            .with_padding(spacing::LG)
    }

    /// Email field bound to the form state
    pub fn email_input(&self) -> Input {
        Input::email()
            .with_label("Email")
            .with_placeholder("nama@email.com")
            .with_value(self.email())
    }

    /// Password field bound to the form state
    pub fn password_input(&self) -> Input {
        Input::password()
            .with_label("Password")
            .with_placeholder("Masukkan password")
            .with_value(self.password())
    }

    /// Primary submit button; shows a spinner while loading
    pub fn submit_button(&self) -> Button {
        Button::new("Masuk")
            .loading(self.is_loading())
            .with_overrides(StyleOverrides::margin_top(spacing::LG))
    }

    /// Secondary button linking to registration
    pub fn register_button() -> Button {
        Button::outlined("Belum punya akun? Daftar")
            .with_overrides(StyleOverrides::margin_top(spacing::MD))
    }

    /// Footer line under the card
    pub fn footer() -> Text {
        Text::new("Kelola keuangan dengan mudah dan aman")
            .with_variant(TypeScale::BodySmall)
            .with_role(TextRole::Tertiary)
            .with_align(TextAlign::Center)
            .with_overrides(StyleOverrides::margin_top(spacing::XL))
    }
}
