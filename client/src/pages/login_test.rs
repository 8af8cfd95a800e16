use super::*;

#[test]
fn mode_toggles_and_labels() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    assert_eq!(AuthMode::Register.submit_label(), "Register");
}

#[test]
fn login_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_credentials(AuthMode::Login, "", "  a@b.com ", " pw "),
        Ok(Credentials::Login { email: "a@b.com".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn login_requires_email_and_password() {
    assert_eq!(validate_credentials(AuthMode::Login, "", "   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_credentials(AuthMode::Login, "", "a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn login_does_not_enforce_minimum_length() {
    assert!(validate_credentials(AuthMode::Login, "", "a@b.com", "abc").is_ok());
}

#[test]
fn register_requires_name_and_six_character_password() {
    assert_eq!(validate_credentials(AuthMode::Register, " ", "a@b.com", "secret"), Err("Enter your full name."));
    assert_eq!(
        validate_credentials(AuthMode::Register, "Asha", "a@b.com", "12345"),
        Err("Password must be at least 6 characters.")
    );
    assert_eq!(
        validate_credentials(AuthMode::Register, " Asha ", "a@b.com", "123456"),
        Ok(Credentials::Register {
            name: "Asha".to_owned(),
            email: "a@b.com".to_owned(),
            password: "123456".to_owned(),
        })
    );
}
