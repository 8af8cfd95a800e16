//! Typed envelopes for browser return trips (OAuth2 and payment redirects).
//!
//! DESIGN
//! ======
//! Query parameters are parsed once at the route boundary into a
//! [`CallbackEnvelope`]; handler views match on the variant and never re-read
//! raw parameters. Empty parameter values count as absent.

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use crate::route_guard::{DASHBOARD_PATH, LOGIN_PATH, UPGRADE_PATH};

pub const OAUTH_FAILURE_MESSAGE: &str = "Authentication failed. Please try again.";
pub const PAYMENT_SUCCESS_STATUS: &str = "success";

/// Result of a browser return trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackEnvelope<T> {
    /// The provider reported success and every required parameter is present.
    Success(T),
    /// The provider reported failure; the reason is the raw provider value.
    Failure(String),
    /// Neither a failure nor a complete success payload.
    Malformed,
}

/// Token pair issued by the backend at the end of the OAuth2 handshake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Identification of a payment the provider redirected back about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub order_id: Option<String>,
}

/// Parse `/oauth2/redirect` parameters: `error` wins over tokens, and both
/// `token` and `refreshToken` are required for success.
pub fn parse_oauth<F>(lookup: F) -> CallbackEnvelope<OAuthTokens>
where
    F: Fn(&str) -> Option<String>,
{
    let param = |key: &str| non_empty(lookup(key));
    if let Some(error) = param("error") {
        return CallbackEnvelope::Failure(error);
    }
    match (param("token"), param("refreshToken")) {
        (Some(access_token), Some(refresh_token)) => {
            CallbackEnvelope::Success(OAuthTokens { access_token, refresh_token })
        }
        _ => CallbackEnvelope::Malformed,
    }
}

/// Parse `/payment/callback` parameters. Only `status=success` is a success;
/// a present non-success status is a failure and an absent one is malformed.
pub fn parse_payment<F>(lookup: F) -> CallbackEnvelope<PaymentReceipt>
where
    F: Fn(&str) -> Option<String>,
{
    let order_id = non_empty(lookup("orderId"));
    match non_empty(lookup("status")) {
        Some(status) if status == PAYMENT_SUCCESS_STATUS => {
            CallbackEnvelope::Success(PaymentReceipt { order_id })
        }
        Some(status) => CallbackEnvelope::Failure(status),
        None => CallbackEnvelope::Malformed,
    }
}

/// Where the OAuth2 handler sends the browser and what it tells the login view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthNavigation {
    pub target: &'static str,
    /// Replace the current history entry so back-navigation skips the
    /// token-bearing URL.
    pub replace: bool,
    /// Message handed to the login view out of band.
    pub notice: Option<&'static str>,
}

/// Where the handler goes next. A tab that is already signed in never
/// reaches the login form, so no notice is left behind for it.
pub fn oauth_navigation(envelope: &CallbackEnvelope<OAuthTokens>, signed_in: bool) -> OAuthNavigation {
    match envelope {
        CallbackEnvelope::Success(_) => OAuthNavigation { target: DASHBOARD_PATH, replace: true, notice: None },
        CallbackEnvelope::Failure(_) => OAuthNavigation {
            target: LOGIN_PATH,
            replace: false,
            notice: (!signed_in).then_some(OAUTH_FAILURE_MESSAGE),
        },
        CallbackEnvelope::Malformed => OAuthNavigation { target: LOGIN_PATH, replace: false, notice: None },
    }
}

/// Post-delay destination of the payment callback view.
pub fn payment_navigation(envelope: &CallbackEnvelope<PaymentReceipt>) -> &'static str {
    match envelope {
        CallbackEnvelope::Success(_) => DASHBOARD_PATH,
        CallbackEnvelope::Failure(_) | CallbackEnvelope::Malformed => UPGRADE_PATH,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
