use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ann@example.com ", "pw"),
        Ok(LoginRequest { email: "ann@example.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("ann@example.com", " spaced pw ").unwrap();
    assert_eq!(request.password, " spaced pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("ann@example.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("ann.example.com", "pw"), Err("Enter a valid email address."));
}
