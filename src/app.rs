//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::account_badge::AccountBadge;
use crate::config::SessionConfig;
use crate::pages::{account::AccountPage, home::HomePage, login::LoginPage};
use crate::state::AppSession;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and client config to the tree, then restores
/// the stored session once the page is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SessionConfig::from_build_env();
    // Server and client both render this pending, signed-out state so the
    // hydrated DOM matches. Effects only run in the browser, where the
    // stored session is restored and the loading flag cleared.
    let mut initial = AppSession::new(BrowserStorage, &config);
    initial.set_loading(true);
    let session = RwSignal::new(initial);
    Effect::new(move || session.update(AppSession::restore));

    provide_context(config);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/roadready.css"/>
        <Title text="RoadReady Driving & Motorcycle School"/>

        <Router>
            <header class="site-header">
                <a href="/" class="site-header__brand">"RoadReady"</a>
                <AccountBadge/>
            </header>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                </Routes>
            </main>
        </Router>
    }
}
