//! Screen state machines for DuitKu
//!
//! Each screen owns its form/animation state and emits side effects through
//! the collaborators it is constructed with: the [`Authenticator`] for
//! credential calls and the [`Navigator`] for route changes. Shells render
//! from the component props the screens expose and feed events back in.
//!
//! [`Authenticator`]: app_core::Authenticator
//! [`Navigator`]: crate::navigation::Navigator

use serde::{Deserialize, Serialize};

pub mod login;
pub mod register;
pub mod splash;

pub use login::LoginScreen;
pub use register::RegisterScreen;
pub use splash::{SplashFrame, SplashPhase, SplashScreen};

/// A user-visible alert surfaced by a screen
///
/// A screen retains at most one alert at a time; a newer alert replaces an
/// unshown older one. The shell takes it for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert title
    pub title: String,
    /// Alert body
    pub message: String,
}

impl Alert {
    /// Title shared by local validation alerts
    pub const ERROR_TITLE: &'static str = "Error";

    /// Create a new alert
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Outcome of one submit call on an auth screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; the collaborator was not called
    Blocked,
    /// Another submission holds the loading latch; the collaborator was not
    /// called
    AlreadyInFlight,
    /// A session was established and navigation was issued
    Authenticated,
    /// The collaborator rejected the submission; an alert was surfaced
    Failed,
}
