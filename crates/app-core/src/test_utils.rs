//! Test doubles and fixtures for the authentication contract
//!
//! Scripted [`Authenticator`] implementations shared by unit and
//! integration tests: immediate success, immediate failure, and a gated
//! variant that parks in-flight calls until the test releases them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::auth::{Authenticator, LoginParams, RegisterParams, Result, Session};

/// Session fixtures
pub mod sessions {
    use crate::auth::{Account, Session};

    /// Session for the demo account
    pub fn budi() -> Session {
        Session {
            access_token: "access-budi".to_string(),
            refresh_token: "refresh-budi".to_string(),
            account: Account {
                name: "Budi Santoso".to_string(),
                email: "budi@email.com".to_string(),
            },
        }
    }
}

/// Parameter fixtures
pub mod params {
    use crate::auth::{LoginParams, RegisterParams};

    /// Valid login parameters for the demo account
    pub fn login() -> LoginParams {
        LoginParams {
            email: "budi@email.com".to_string(),
            password: "rahasia1".to_string(),
        }
    }

    /// Valid registration parameters for the demo account
    pub fn register() -> RegisterParams {
        RegisterParams {
            name: "Budi Santoso".to_string(),
            email: "budi@email.com".to_string(),
            password: "rahasia1".to_string(),
        }
    }
}

/// A scripted authenticator that records call counts.
///
/// Every login/register call resolves to a clone of the configured outcome.
/// When gated, calls park on the gate semaphore first; each permit admits
/// one call through.
pub struct StubAuthenticator {
    outcome: Result<Session>,
    gate: Option<Arc<Semaphore>>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    logout_calls: AtomicUsize,
}

impl StubAuthenticator {
    /// Authenticator whose calls all succeed with the demo session.
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(sessions::budi()))
    }

    /// Authenticator whose calls all fail with the given error.
    pub fn failing(error: crate::auth::AuthError) -> Self {
        Self::with_outcome(Err(error))
    }

    /// Authenticator with an explicit scripted outcome.
    pub fn with_outcome(outcome: Result<Session>) -> Self {
        Self {
            outcome,
            gate: None,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }

    /// Park calls behind a zero-permit semaphore. The returned handle
    /// releases one call per added permit.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Number of login calls observed.
    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    /// Number of register calls observed.
    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    /// Number of logout calls observed.
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("stub gate closed");
            permit.forget();
        }
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn login(&self, _params: LoginParams) -> Result<Session> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.outcome.clone()
    }

    async fn register(&self, _params: RegisterParams) -> Result<Session> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        self.outcome.clone()
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
