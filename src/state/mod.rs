//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is created once by the root component and handed to
//! the tree as an `RwSignal` context. Its fields are private, so holders of
//! the signal can observe it freely but only mutate it through the store's
//! transitions.

pub mod session;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage::BrowserStorage;

/// Session store as used by the running site.
pub type AppSession = session::SessionStore<User, BrowserStorage>;

/// Session store provided by [`crate::app::App`].
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_session() -> RwSignal<AppSession> {
    expect_context::<RwSignal<AppSession>>()
}
