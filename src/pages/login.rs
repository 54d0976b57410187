//! Login page: email + password exchanged for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the only producer of the login event. It raises the session
//! loading flag while the request is in flight and hands the returned token
//! and user to `SessionStore::login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::SessionConfig;
use crate::net::types::LoginRequest;
use crate::state::use_session;

/// Where a successful login lands.
pub const AFTER_LOGIN_PATH: &str = "/account";

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<SessionConfig>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Covers both a fresh login and a session restored from storage.
    Effect::new(move || {
        if session.with(|s| s.is_authenticated()) {
            navigate(AFTER_LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.is_loading()) {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        session.update(|s| s.set_loading(true));
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &request).await {
                    Ok(resp) => {
                        let mut outcome = Ok(());
                        session.update(|s| outcome = s.login(resp.token, resp.user));
                        match outcome {
                            Ok(()) => {
                                password.set(String::new());
                                info.set(String::new());
                            }
                            Err(e) => {
                                leptos::logging::warn!("login response rejected: {e}");
                                session.update(|s| s.set_loading(false));
                                info.set("Sign-in failed. Please try again.".to_owned());
                            }
                        }
                    }
                    Err(e) => {
                        session.update(|s| s.set_loading(false));
                        info.set(e);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, request);
        }
    };

    let busy = move || session.with(|s| s.is_loading());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Student sign in"</h1>
                <p class="login-card__subtitle">"Book lessons and track your road-test progress."</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
