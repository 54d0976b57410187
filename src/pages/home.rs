//! Landing route.
//!
//! The marketing sections are rendered by the content layer; this page only
//! carries the session-aware call to action.

use leptos::prelude::*;

use crate::state::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let signed_in = move || session.with(|s| s.is_authenticated());

    view! {
        <section class="hero">
            <h1>"Car and motorcycle training, start to licence"</h1>
            <p>"Certified instructors, flexible lesson times, road-test preparation."</p>
            <Show
                when=signed_in
                fallback=|| view! { <a href="/login" class="btn hero__cta">"Sign in to book"</a> }
            >
                <a href="/account" class="btn hero__cta">"Go to your account"</a>
            </Show>
        </section>
    }
}
