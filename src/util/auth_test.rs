use super::*;
use crate::config::SessionConfig;
use crate::util::storage::MemoryStorage;

fn store() -> SessionStore<String, MemoryStorage> {
    SessionStore::hydrate(MemoryStorage::new(), &SessionConfig::default())
}

#[test]
fn should_redirect_unauth_when_not_loading_and_signed_out() {
    assert!(should_redirect_unauth(&store()));
}

#[test]
fn should_not_redirect_while_loading() {
    let mut session = store();
    session.set_loading(true);
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let mut session = store();
    session.login("tok", "u-1".to_owned()).unwrap();
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_redirect_again_after_logout() {
    let mut session = store();
    session.login("tok", "u-1".to_owned()).unwrap();
    session.logout();
    assert!(should_redirect_unauth(&session));
}
