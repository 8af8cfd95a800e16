use super::*;

#[test]
fn user_message_prefers_server_text() {
    let err = GatewayError::Rejected { status: 401, message: Some("Bad credentials".to_owned()) };
    assert_eq!(err.user_message("Login failed"), "Bad credentials");
}

#[test]
fn user_message_falls_back_when_server_text_missing_or_blank() {
    let missing = GatewayError::Rejected { status: 500, message: None };
    let blank = GatewayError::Rejected { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(missing.user_message("Login failed"), "Login failed");
    assert_eq!(blank.user_message("Login failed"), "Login failed");
}

#[test]
fn network_errors_never_leak_transport_detail() {
    let err = GatewayError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Registration failed"), "Registration failed");
}

#[test]
fn rate_limited_is_distinguished() {
    assert!(GatewayError::RateLimited { message: None }.is_rate_limited());
    assert!(!GatewayError::Rejected { status: 429, message: None }.is_rate_limited());
    assert!(!GatewayError::Unavailable.is_rate_limited());
}

#[test]
fn display_formats_status() {
    let err = GatewayError::Rejected { status: 403, message: None };
    assert_eq!(err.to_string(), "request rejected: status 403");
    assert_eq!(StorageError::Access("quota".to_owned()).to_string(), "storage access failed: quota");
}
