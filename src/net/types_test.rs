use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ann".to_owned(),
        email: Some("ann@example.com".to_owned()),
        avatar_url: None,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_str(r#"{"id":1,"name":"Ann"}"#).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, None);
}

#[test]
fn user_accepts_string_id() {
    let user: User = serde_json::from_str(r#"{"id":"u-9"}"#).unwrap();
    assert_eq!(user.id, "u-9");
    assert_eq!(user.name, "");
}

#[test]
fn user_rejects_object_id() {
    assert!(serde_json::from_str::<User>(r#"{"id":{"x":1}}"#).is_err());
}

#[test]
fn user_rejects_missing_id() {
    assert!(serde_json::from_str::<User>(r#"{"name":"Ann"}"#).is_err());
}

#[test]
fn user_serde_round_trip() {
    let user = make_user();
    let json = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&json).unwrap(), user);
}

#[test]
fn display_name_prefers_name() {
    assert_eq!(make_user().display_name(), "Ann");
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut user = make_user();
    user.name = "  ".to_owned();
    assert_eq!(user.display_name(), "ann@example.com");
    user.email = None;
    assert_eq!(user.display_name(), "u-1");
}

// =============================================================
// Login payloads
// =============================================================

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest { email: "ann@example.com".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({"email": "ann@example.com", "password": "pw"}));
}

#[test]
fn login_response_parses_token_and_user() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"tok123","user":{"id":1,"name":"Ann"}}"#).unwrap();
    assert_eq!(resp.token, "tok123");
    assert_eq!(resp.user.id, "1");
}
