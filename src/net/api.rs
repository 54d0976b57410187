//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed login
//! or profile refresh degrades the page without crashing hydration. None of
//! these calls touch the session store; pages feed the results into it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, User};
use crate::config::SessionConfig;

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        400 | 401 | 403 => "Email or password is incorrect.".to_owned(),
        429 => "Too many attempts. Try again in a minute.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Exchange credentials for a token and user via `POST {api_base}/auth/login`.
///
/// # Errors
///
/// Returns a user-facing error string if the request fails, the server rejects
/// the credentials, or the response body does not parse.
pub async fn login(config: &SessionConfig, request: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint("auth/login"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err("not available on server".to_owned())
    }
}

/// Fetch the user behind `token` from `GET {api_base}/auth/me`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_current_user(config: &SessionConfig, token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint("auth/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        None
    }
}
