//! Shared auth guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components apply identical unauthenticated redirect
//! behavior. The decision itself is a pure synchronous check over the auth
//! store, re-evaluated on every auth-state change and never cached.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a protected route must bounce to `/login`.
pub fn requires_login_redirect(auth: &AuthState) -> bool {
    !auth.is_authenticated()
}

/// Redirect to `/login` whenever no usable credential is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if requires_login_redirect(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
