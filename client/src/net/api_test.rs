use super::*;
use crate::net::types::{PaymentMethod, PaymentMode};

fn config() -> ClientConfig {
    ClientConfig::from_base_url(Some("http://backend.test"))
}

// =============================================================
// URLs
// =============================================================

#[test]
fn oauth_authorization_url_targets_backend_origin_without_api_prefix() {
    assert_eq!(
        oauth_authorization_url(&config(), OAuthProvider::Google),
        "http://backend.test/oauth2/authorization/google"
    );
    assert_eq!(
        oauth_authorization_url(&config(), OAuthProvider::GitHub),
        "http://backend.test/oauth2/authorization/github"
    );
}

#[test]
fn login_call_posts_credentials_without_bearer() {
    let call = login_call(&config(), "a@b.com", "secret1").unwrap();
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.url, "http://backend.test/api/auth/login");
    assert_eq!(call.authorization(), None);
    assert_eq!(call.body, Some(serde_json::json!({ "email": "a@b.com", "password": "secret1" })));
}

#[test]
fn register_call_includes_name() {
    let call = register_call(&config(), "Asha", "a@b.com", "secret1").unwrap();
    assert_eq!(call.url, "http://backend.test/api/auth/register");
    assert_eq!(
        call.body,
        Some(serde_json::json!({ "name": "Asha", "email": "a@b.com", "password": "secret1" }))
    );
}

#[test]
fn authenticated_calls_carry_bearer_token() {
    let call = list_transactions_call(&config(), "tok");
    assert_eq!(call.method, Method::Get);
    assert_eq!(call.url, "http://backend.test/api/transactions/all");
    assert_eq!(call.authorization().as_deref(), Some("Bearer tok"));
    assert_eq!(call.body, None);
}

#[test]
fn delete_transaction_call_embeds_id() {
    let call = delete_transaction_call(&config(), "tok", 42);
    assert_eq!(call.method, Method::Delete);
    assert_eq!(call.url, "http://backend.test/api/transactions/42");
}

#[test]
fn add_transaction_call_serializes_payload() {
    let tx = NewTransaction {
        description: "Groceries".to_owned(),
        amount: 540.5,
        category: Some("Groceries".to_owned()),
        date: "2024-10-02".to_owned(),
        payment_mode: PaymentMode::Card,
    };
    let call = add_transaction_call(&config(), "tok", &tx).unwrap();
    assert_eq!(call.url, "http://backend.test/api/transactions/add");
    assert_eq!(call.body.as_ref().and_then(|b| b.get("paymentMode")), Some(&serde_json::json!("Card")));
}

#[test]
fn ai_and_payment_paths() {
    let cfg = config();
    assert_eq!(insights_call(&cfg, "t").url, "http://backend.test/api/ai/insights");
    assert_eq!(
        chat_call(&cfg, "t", "How much on food?").unwrap().body,
        Some(serde_json::json!({ "query": "How much on food?" }))
    );
    assert_eq!(plans_call(&cfg, "t").url, "http://backend.test/api/payments/plans");
    assert_eq!(payment_history_call(&cfg, "t").url, "http://backend.test/api/payments/history");

    let order = OrderRequest {
        amount: 99.0,
        payment_method: PaymentMethod::Upi,
        subscription_tier: "PREMIUM".to_owned(),
        duration_months: 1,
    };
    assert_eq!(
        create_order_call(&cfg, "t", &order).unwrap().url,
        "http://backend.test/api/payments/create-order"
    );
    let verification = PaymentVerification {
        order_id: "o".to_owned(),
        payment_id: "p".to_owned(),
        signature: "s".to_owned(),
    };
    let call = verify_payment_call(&cfg, "t", &verification).unwrap();
    assert_eq!(call.url, "http://backend.test/api/payments/verify");
    assert_eq!(
        call.body,
        Some(serde_json::json!({ "orderId": "o", "paymentId": "p", "signature": "s" }))
    );
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn decode_success_unwraps_data() {
    let body = r#"{"success":true,"message":"ok","data":"Spending is up 12%"}"#;
    assert_eq!(decode_response::<String>(200, body), Ok("Spending is up 12%".to_owned()));
}

#[test]
fn decode_success_with_missing_data_reads_as_none() {
    assert_eq!(decode_response::<Option<String>>(200, r#"{"message":"deleted"}"#), Ok(None));
}

#[test]
fn decode_success_with_wrong_shape_is_decode_error() {
    let result = decode_response::<Vec<Transaction>>(200, r#"{"data":"nope"}"#);
    assert!(matches!(result, Err(GatewayError::Decode(_))));
}

#[test]
fn decode_429_is_rate_limited_with_message() {
    let result = decode_response::<ChatReply>(429, r#"{"message":"Daily AI chat limit reached"}"#);
    assert_eq!(
        result,
        Err(GatewayError::RateLimited { message: Some("Daily AI chat limit reached".to_owned()) })
    );
}

#[test]
fn decode_failure_envelope_keeps_message() {
    let result = decode_response::<AuthPayload>(401, r#"{"success":false,"message":"Invalid email or password"}"#);
    assert_eq!(
        result,
        Err(GatewayError::Rejected { status: 401, message: Some("Invalid email or password".to_owned()) })
    );
}

#[test]
fn decode_failure_with_non_json_body_has_no_message() {
    let result = decode_response::<AuthPayload>(502, "<html>Bad Gateway</html>");
    assert_eq!(result, Err(GatewayError::Rejected { status: 502, message: None }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn endpoints_are_unavailable_outside_the_browser() {
    let cfg = config();
    let result = block_on(login(&cfg, "a@b.com", "secret1"));
    assert_eq!(result, Err(GatewayError::Unavailable));
}

/// Polls a future that completes without awaiting I/O.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future was not immediately ready"),
    }
}
