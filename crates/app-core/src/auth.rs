//! Authentication collaborator contract
//!
//! DuitKu never implements authentication itself; screens consume this
//! interface and a shell wires in the real service. Scripted doubles for
//! tests live in [`crate::test_utils`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic failure copy shown when the service provides no message of its
/// own.
pub const GENERIC_ERROR: &str = "Terjadi kesalahan";

/// Authentication error types
///
/// The display text is the user-facing message; screens surface it verbatim
/// in alerts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials were rejected
    #[error("Email atau password salah")]
    InvalidCredentials,

    /// An account already exists for the email being registered
    #[error("Email sudah terdaftar")]
    EmailTaken,

    /// The service could not be reached
    #[error("Tidak dapat terhubung ke server: {0}")]
    Network(String),

    /// The service rejected the request with its own message
    #[error("{0}")]
    Rejected(String),
}

impl AuthError {
    /// Message to surface in an alert, falling back to [`GENERIC_ERROR`]
    /// when the service supplied no text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Login parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginParams {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Registration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterParams {
    /// Full display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Identity attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// An authenticated session returned by the collaborator
///
/// Token custody stays with the collaborator; screens only observe that a
/// session was produced and navigate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque access token
    pub access_token: String,
    /// Opaque refresh token
    pub refresh_token: String,
    /// The signed-in account
    pub account: Account,
}

/// Authentication collaborator interface
///
/// All operations are fallible with a user-presentable [`AuthError`]; none
/// of them retry on their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange email and password for a session.
    ///
    /// # Arguments
    ///
    /// * `params` - Email address and password
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidCredentials` - credentials rejected
    /// - `AuthError::Network` - service unreachable
    /// - `AuthError::Rejected` - service refused with its own message
    async fn login(&self, params: LoginParams) -> Result<Session>;

    /// Create an account and return its first session.
    ///
    /// # Arguments
    ///
    /// * `params` - Display name, email address, and password
    ///
    /// # Errors
    ///
    /// - `AuthError::EmailTaken` - email already registered
    /// - `AuthError::Network` - service unreachable
    /// - `AuthError::Rejected` - service refused with its own message
    async fn register(&self, params: RegisterParams) -> Result<Session>;

    /// Terminate the current session.
    async fn logout(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_error_display_is_user_copy() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Email atau password salah"
        );
        assert_eq!(AuthError::EmailTaken.to_string(), "Email sudah terdaftar");
        assert_eq!(
            AuthError::Rejected("Akun dibekukan".to_string()).to_string(),
            "Akun dibekukan"
        );
        assert!(AuthError::Network("timeout".to_string())
            .to_string()
            .starts_with("Tidak dapat terhubung"));
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        assert_eq!(
            AuthError::Rejected(String::new()).user_message(),
            GENERIC_ERROR
        );
        assert_eq!(
            AuthError::Rejected("   ".to_string()).user_message(),
            GENERIC_ERROR
        );
        assert_eq!(
            AuthError::Rejected("Akun dibekukan".to_string()).user_message(),
            "Akun dibekukan"
        );
    }

    #[test]
    fn test_session_serializes_account_fields() {
        let session = Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            account: Account {
                name: "Budi Santoso".to_string(),
                email: "budi@email.com".to_string(),
            },
        };

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["access_token"], "at");
        assert_eq!(json["account"]["email"], "budi@email.com");
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let mut mock = MockAuthenticator::new();
        mock.expect_login()
            .withf(|params| params.email == "budi@email.com")
            .times(1)
            .returning(|_| {
                Ok(Session {
                    access_token: "at".to_string(),
                    refresh_token: "rt".to_string(),
                    account: Account {
                        name: "Budi Santoso".to_string(),
                        email: "budi@email.com".to_string(),
                    },
                })
            });

        let auth: Arc<dyn Authenticator> = Arc::new(mock);
        let session = auth
            .login(LoginParams {
                email: "budi@email.com".to_string(),
                password: "rahasia1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.account.name, "Budi Santoso");
    }
}
