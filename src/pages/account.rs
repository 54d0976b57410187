//! Student account page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. It refreshes the stored profile with `set_user` (token
//! and authenticated flag stay as they are) and offers sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::SessionConfig;
use crate::state::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = use_session();
    let config = expect_context::<SessionConfig>();
    let navigate = use_navigate();
    let info = RwSignal::new(String::new());

    install_unauth_redirect(session, navigate);

    let display_name = move || {
        session.with(|s| s.user().map(|u| u.display_name().to_owned()).unwrap_or_default())
    };
    let email = move || session.with(|s| s.user().and_then(|u| u.email.clone()).unwrap_or_default());

    let on_refresh = move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        info.set("Refreshing profile...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user(&config, &token).await {
                    Some(user) => {
                        session.update(|s| s.set_user(user));
                        info.set("Profile up to date.".to_owned());
                    }
                    None => info.set("Could not refresh your profile.".to_owned()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, token);
        }
    };

    // The redirect guard takes the visitor to the login page afterwards.
    let on_logout = move |_| session.update(|s| s.logout());

    view! {
        <div class="account-page">
            <h1>"Your account"</h1>
            <dl class="account-details">
                <dt>"Name"</dt>
                <dd>{display_name}</dd>
                <Show when=move || !email().is_empty()>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                </Show>
            </dl>
            <div class="account-actions">
                <button class="btn" on:click=on_refresh>"Refresh profile"</button>
                <button class="btn btn--secondary" on:click=on_logout>"Sign out"</button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="account-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
