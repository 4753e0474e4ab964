//! Auth store: the bearer credential and login/logout actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential is read by the route guard and by every authenticated
//! diary action; only the actions in this module mutate it. The token is
//! mirrored to localStorage so a reload stays logged in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api;
use crate::util::token_persistence;

/// Surfaced when the token endpoint rejects a login attempt.
pub const LOGIN_FAILED_MESSAGE: &str = "Email or password is incorrect.";

/// Authentication state: the current bearer token and the last login error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Opaque bearer token; `None` (or empty) means unauthenticated.
    pub token: Option<String>,
    /// Human-readable message from the last failed login attempt.
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state: the token persisted by a previous session, if any.
    pub fn restore() -> Self {
        Self {
            token: token_persistence::load(),
            error: None,
        }
    }

    /// Whether a usable credential is present. An empty string is treated
    /// as absent since it can never authenticate a request.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Log in by exchanging credentials for a token via `issue_token`.
///
/// On success the token is stored in memory and persisted, and any prior
/// error is cleared. On failure the credential is left unchanged and the
/// failure is both logged and surfaced as [`LOGIN_FAILED_MESSAGE`].
pub async fn login_with<F, Fut>(auth: RwSignal<AuthState>, issue_token: F, email: String, password: String)
where
    F: FnOnce(String, String) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    auth.update(|state| state.error = None);
    match issue_token(email, password).await {
        Ok(token) => {
            token_persistence::save(&token);
            auth.update(|state| {
                state.token = Some(token);
                state.error = None;
            });
        }
        Err(err) => {
            log::error!("login failed: {err}");
            auth.update(|state| state.error = Some(LOGIN_FAILED_MESSAGE.to_owned()));
        }
    }
}

/// Log in against the diary API's token endpoint.
pub async fn login(auth: RwSignal<AuthState>, email: String, password: String) {
    login_with(auth, api::request_token, email, password).await;
}

/// Clear the credential from memory and from localStorage.
///
/// Idempotent: logging out while already logged out is a no-op.
pub fn logout(auth: RwSignal<AuthState>) {
    token_persistence::clear();
    auth.update(|state| {
        state.token = None;
        state.error = None;
    });
}
