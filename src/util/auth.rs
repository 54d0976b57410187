//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::AppSession;
use crate::state::session::SessionStore;

/// Route that collects credentials.
pub const LOGIN_PATH: &str = "/login";

/// Whether a protected route should bounce to [`LOGIN_PATH`].
///
/// A pending login keeps the visitor in place until it settles.
pub fn should_redirect_unauth<U, S>(session: &SessionStore<U, S>) -> bool {
    !session.is_loading() && !session.is_authenticated()
}

/// Redirect to `/login` whenever no login is pending and nobody is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<AppSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
