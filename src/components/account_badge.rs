//! Header widget showing who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Reads the session only; sign-out goes through the
//! store's `logout` transition.

use leptos::prelude::*;

use crate::state::use_session;

#[component]
pub fn AccountBadge() -> impl IntoView {
    let session = use_session();
    let signed_in = move || session.with(|s| s.is_authenticated());
    let name = move || session.with(|s| s.user().map(|u| u.display_name().to_owned()).unwrap_or_default());

    view! {
        <div class="account-badge">
            <Show
                when=signed_in
                fallback=|| view! { <a href="/login" class="account-badge__signin">"Sign in"</a> }
            >
                <a href="/account" class="account-badge__name">{name}</a>
                <button
                    class="btn account-badge__signout"
                    on:click=move |_| session.update(|s| s.logout())
                >
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
