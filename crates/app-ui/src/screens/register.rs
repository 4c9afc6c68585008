//! Registration screen
//!
//! Mirrors the login screen's concurrency contract with a larger form and
//! a three-rule validation chain. Rules run in order and the first failure
//! wins: missing fields, then password mismatch, then password length.
//! Success replace-navigates to home; the back affordance pops to login
//! rather than pushing a fresh copy of it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use app_core::auth::{Authenticator, RegisterParams};

use crate::components::{
    AppLogo, Button, GlassCard, Input, StyleOverrides, Text, TextAlign, TextRole,
};
use crate::navigation::{Navigator, Route};
use crate::screens::{Alert, SubmitOutcome};
use crate::theme::{Gradient, Theme};
use crate::tokens::{font_weight, spacing};
use crate::typography::TypeScale;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Alert copy for missing fields
const MISSING_FIELDS_MESSAGE: &str = "Mohon isi semua field";
/// Alert copy for a confirmation mismatch
const MISMATCH_MESSAGE: &str = "Password tidak cocok";
/// Alert copy for a short password
const SHORT_PASSWORD_MESSAGE: &str = "Password minimal 6 karakter";
/// Alert title for a rejected registration
const FAILURE_TITLE: &str = "Registrasi Gagal";

#[derive(Default)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl RegisterForm {
    /// First validation failure, in rule order
    fn validate(&self) -> Option<&'static str> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Some(MISSING_FIELDS_MESSAGE);
        }
        if self.password != self.confirm_password {
            return Some(MISMATCH_MESSAGE);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Some(SHORT_PASSWORD_MESSAGE);
        }
        None
    }
}

/// The registration screen
///
/// Shared behind `Arc`; every method takes `&self` so the shell and an
/// in-flight submission can hold the screen concurrently.
pub struct RegisterScreen {
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
    form: Mutex<RegisterForm>,
    loading: AtomicBool,
    alert: Mutex<Option<Alert>>,
}

impl RegisterScreen {
    /// Create a screen with an empty form
    pub fn new(authenticator: Arc<dyn Authenticator>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            authenticator,
            navigator,
            form: Mutex::new(RegisterForm::default()),
            loading: AtomicBool::new(false),
            alert: Mutex::new(None),
        }
    }

    // =========================================================================
    // Form State
    // =========================================================================

    /// Update the full-name field
    pub fn set_name(&self, name: impl Into<String>) {
        self.form.lock().name = name.into();
    }

    /// Update the email field
    pub fn set_email(&self, email: impl Into<String>) {
        self.form.lock().email = email.into();
    }

    /// Update the password field
    pub fn set_password(&self, password: impl Into<String>) {
        self.form.lock().password = password.into();
    }

    /// Update the confirmation field
    pub fn set_confirm_password(&self, confirm: impl Into<String>) {
        self.form.lock().confirm_password = confirm.into();
    }

    /// Current full-name value
    pub fn name(&self) -> String {
        self.form.lock().name.clone()
    }

    /// Current email value
    pub fn email(&self) -> String {
        self.form.lock().email.clone()
    }

    /// Current password value
    pub fn password(&self) -> String {
        self.form.lock().password.clone()
    }

    /// Current confirmation value
    pub fn confirm_password(&self) -> String {
        self.form.lock().confirm_password.clone()
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

    /// Validate the form and run the registration call
    ///
    /// Same contract as the login screen: validation failures never touch
    /// the loading latch, the latch commits before the first await, and it
    /// clears on every exit path past it.
    pub async fn submit(&self) -> SubmitOutcome {
        let params = {
            let form = self.form.lock();
            if let Some(message) = form.validate() {
                drop(form);
                self.surface_alert(Alert::ERROR_TITLE, message);
                return SubmitOutcome::Blocked;
            }
            RegisterParams {
                name: form.name.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
            }
        };

        if self.loading.swap(true, Ordering::SeqCst) {
            tracing::debug!("registration already in flight, ignoring submit");
            return SubmitOutcome::AlreadyInFlight;
        }

        tracing::debug!("registration submitted");
        let outcome = match self.authenticator.register(params).await {
            Ok(session) => {
                tracing::debug!(account = %session.account.email, "registration succeeded");
                self.navigator.replace(Route::Home);
                SubmitOutcome::Authenticated
            }
            Err(error) => {
                tracing::warn!(%error, "registration failed");
                self.surface_alert(FAILURE_TITLE, error.user_message());
                SubmitOutcome::Failed
            }
        };
        self.loading.store(false, Ordering::SeqCst);
        outcome
    }

    /// Return to the login screen
    pub fn go_to_login(&self) {
        self.navigator.back();
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
        AppLogo::register()
    }

    /// "Buat Akun Baru" heading
    pub fn title() -> Text {
        Text::new("Buat Akun Baru")
            .with_variant(TypeScale::HeadlineMedium)
            .with_font_weight(font_weight::BOLD)
            .with_align(TextAlign::Center)
            .with_overrides(StyleOverrides {
                margin_bottom: Some(spacing::XS),
                ..Default::default()
            })
    }

    /// Subheading under the title
    pub fn subtitle() -> Text {
        Text::new("Mulai kelola keuangan Anda dengan mudah")
            .with_variant(TypeScale::BodyMedium)
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

    /// Full-name field bound to the form state
    pub fn name_input(&self) -> Input {
        Input::new()
            .with_label("Nama Lengkap")
            .with_placeholder("Masukkan nama lengkap")
            .with_autocomplete("name")
            .with_value(self.name())
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
            .with_placeholder("Minimal 6 karakter")
            .with_autocomplete("new-password")
            .with_value(self.password())
    }

    /// Confirmation field bound to the form state
    pub fn confirm_password_input(&self) -> Input {
        Input::password()
            .with_label("Konfirmasi Password")
            .with_placeholder("Masukkan ulang password")
            .with_autocomplete("new-password")
            .with_value(self.confirm_password())
    }

    /// Primary submit button; shows a spinner while loading
    pub fn submit_button(&self) -> Button {
        Button::new("Daftar")
            .loading(self.is_loading())
            .with_overrides(StyleOverrides::margin_top(spacing::LG))
    }

    /// Secondary button returning to login
    pub fn login_button() -> Button {
        Button::outlined("Sudah punya akun? Masuk")
            .with_overrides(StyleOverrides::margin_top(spacing::MD))
    }

    /// Footer line under the card
    pub fn footer() -> Text {
        Text::new("Dengan mendaftar, Anda menyetujui syarat & ketentuan")
            .with_variant(TypeScale::BodySmall)
            .with_role(TextRole::Tertiary)
            .with_align(TextAlign::Center)
            .with_overrides(StyleOverrides::margin_top(spacing::XL))
    }
}
