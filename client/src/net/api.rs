//! Backend Gateway: one function per REST endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`GatewayError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Each endpoint first builds a [`Call`] (method, URL, bearer, JSON body),
//! which is plain data and unit-tested, then hands it to `execute`. Response
//! handling is centralized in [`decode_response`] so status classification
//! (success envelope, 429 quota, failure envelope) is identical everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, GatewayError>` instead of panics; the session and
//! the views convert errors into user-visible text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AuthPayload, ChatReply, ChatRequest, Envelope, ErrorEnvelope, LoginRequest, NewTransaction, OrderRequest,
    PaymentOrder, PaymentRecord, PaymentVerification, RegisterRequest, SubscriptionPlan, Transaction,
};
use crate::config::ClientConfig;
use crate::error::GatewayError;

pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Identity providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }
}

/// Browser URL that starts the OAuth2 handshake on the backend.
pub fn oauth_authorization_url(config: &ClientConfig, provider: OAuthProvider) -> String {
    format!("{}/oauth2/authorization/{}", config.api_base_url, provider.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described request, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Call {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl Call {
    fn new(method: Method, config: &ClientConfig, path: &str) -> Self {
        Self { method, url: config.endpoint(path), bearer: None, body: None }
    }

    fn get(config: &ClientConfig, path: &str) -> Self {
        Self::new(Method::Get, config, path)
    }

    fn delete(config: &ClientConfig, path: &str) -> Self {
        Self::new(Method::Delete, config, path)
    }

    fn post<B: Serialize>(config: &ClientConfig, path: &str, body: &B) -> Result<Self, GatewayError> {
        let value = serde_json::to_value(body).map_err(|e| GatewayError::Encode(e.to_string()))?;
        Ok(Self { body: Some(value), ..Self::new(Method::Post, config, path) })
    }

    fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// `Authorization` header value, if the call is authenticated.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Classify an HTTP response.
///
/// 2xx bodies must be `{ "data": T }`; 429 is a quota refusal; anything else
/// is a rejection carrying the envelope's `message` when one parses.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GatewayError> {
    if (200..300).contains(&status) {
        let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))?;
        return Ok(envelope.data);
    }
    let message = serde_json::from_str::<ErrorEnvelope>(body).ok().and_then(|e| e.message);
    if status == STATUS_TOO_MANY_REQUESTS {
        Err(GatewayError::RateLimited { message })
    } else {
        Err(GatewayError::Rejected { status, message })
    }
}

// =============================================================================
// CALL BUILDERS
// =============================================================================

pub(crate) fn login_call(config: &ClientConfig, email: &str, password: &str) -> Result<Call, GatewayError> {
    Call::post(config, "/auth/login", &LoginRequest { email, password })
}

pub(crate) fn register_call(
    config: &ClientConfig,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Call, GatewayError> {
    Call::post(config, "/auth/register", &RegisterRequest { name, email, password })
}

pub(crate) fn list_transactions_call(config: &ClientConfig, token: &str) -> Call {
    Call::get(config, "/transactions/all").bearer(token)
}

pub(crate) fn add_transaction_call(
    config: &ClientConfig,
    token: &str,
    transaction: &NewTransaction,
) -> Result<Call, GatewayError> {
    Ok(Call::post(config, "/transactions/add", transaction)?.bearer(token))
}

pub(crate) fn delete_transaction_call(config: &ClientConfig, token: &str, id: i64) -> Call {
    Call::delete(config, &format!("/transactions/{id}")).bearer(token)
}

pub(crate) fn insights_call(config: &ClientConfig, token: &str) -> Call {
    Call::get(config, "/ai/insights").bearer(token)
}

pub(crate) fn chat_call(config: &ClientConfig, token: &str, query: &str) -> Result<Call, GatewayError> {
    Ok(Call::post(config, "/ai/chatbot", &ChatRequest { query })?.bearer(token))
}

pub(crate) fn plans_call(config: &ClientConfig, token: &str) -> Call {
    Call::get(config, "/payments/plans").bearer(token)
}

pub(crate) fn create_order_call(config: &ClientConfig, token: &str, order: &OrderRequest) -> Result<Call, GatewayError> {
    Ok(Call::post(config, "/payments/create-order", order)?.bearer(token))
}

pub(crate) fn verify_payment_call(
    config: &ClientConfig,
    token: &str,
    verification: &PaymentVerification,
) -> Result<Call, GatewayError> {
    Ok(Call::post(config, "/payments/verify", verification)?.bearer(token))
}

pub(crate) fn payment_history_call(config: &ClientConfig, token: &str) -> Call {
    Call::get(config, "/payments/history").bearer(token)
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the classified gateway failure; credential rejection carries the
/// backend's message.
pub async fn login(config: &ClientConfig, email: &str, password: &str) -> Result<AuthPayload, GatewayError> {
    execute(login_call(config, email, password)?).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the classified gateway failure (e.g. email already registered).
pub async fn register(
    config: &ClientConfig,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthPayload, GatewayError> {
    execute(register_call(config, name, email, password)?).await
}

/// `GET /transactions/all`. A `null` list is treated as empty.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn list_transactions(config: &ClientConfig, token: &str) -> Result<Vec<Transaction>, GatewayError> {
    let items: Option<Vec<Transaction>> = execute(list_transactions_call(config, token)).await?;
    Ok(items.unwrap_or_default())
}

/// `POST /transactions/add`. The backend assigns id and category.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn add_transaction(
    config: &ClientConfig,
    token: &str,
    transaction: &NewTransaction,
) -> Result<Transaction, GatewayError> {
    execute(add_transaction_call(config, token, transaction)?).await
}

/// `DELETE /transactions/{id}`.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn delete_transaction(config: &ClientConfig, token: &str, id: i64) -> Result<(), GatewayError> {
    let _: Option<serde_json::Value> = execute(delete_transaction_call(config, token, id)).await?;
    Ok(())
}

/// `GET /ai/insights`. A missing insight is returned as an empty string.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn fetch_insights(config: &ClientConfig, token: &str) -> Result<String, GatewayError> {
    let insight: Option<String> = execute(insights_call(config, token)).await?;
    Ok(insight.unwrap_or_default())
}

/// `POST /ai/chatbot`. A 429 comes back as [`GatewayError::RateLimited`].
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn chat(config: &ClientConfig, token: &str, query: &str) -> Result<ChatReply, GatewayError> {
    execute(chat_call(config, token, query)?).await
}

/// `GET /payments/plans`.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn fetch_plans(config: &ClientConfig, token: &str) -> Result<Vec<SubscriptionPlan>, GatewayError> {
    let plans: Option<Vec<SubscriptionPlan>> = execute(plans_call(config, token)).await?;
    Ok(plans.unwrap_or_default())
}

/// `POST /payments/create-order`.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn create_order(
    config: &ClientConfig,
    token: &str,
    order: &OrderRequest,
) -> Result<PaymentOrder, GatewayError> {
    execute(create_order_call(config, token, order)?).await
}

/// `POST /payments/verify`, called after the checkout widget completes.
///
/// # Errors
///
/// Returns the classified gateway failure; a failed signature check is a
/// rejection with the backend's message.
pub async fn verify_payment(
    config: &ClientConfig,
    token: &str,
    verification: &PaymentVerification,
) -> Result<PaymentOrder, GatewayError> {
    execute(verify_payment_call(config, token, verification)?).await
}

/// `GET /payments/history`.
///
/// # Errors
///
/// Returns the classified gateway failure.
pub async fn payment_history(config: &ClientConfig, token: &str) -> Result<Vec<PaymentRecord>, GatewayError> {
    let records: Option<Vec<PaymentRecord>> = execute(payment_history_call(config, token)).await?;
    Ok(records.unwrap_or_default())
}

async fn execute<T: DeserializeOwned>(call: Call) -> Result<T, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let result = send(&call).await;
        if let Err(err) = &result {
            log::warn!("gateway: {} {} failed: {err}", call.method.as_str(), call.url);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("gateway: {} {} skipped outside the browser", call.method.as_str(), call.url);
        Err(GatewayError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(call: &Call) -> Result<T, GatewayError> {
    use gloo_net::http::{Request, RequestBuilder};

    let mut builder: RequestBuilder = match call.method {
        Method::Get => Request::get(&call.url),
        Method::Post => Request::post(&call.url),
        Method::Delete => Request::delete(&call.url),
    };
    if let Some(value) = call.authorization() {
        builder = builder.header("Authorization", &value);
    }
    let request = match &call.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| GatewayError::Encode(e.to_string()))?;

    let resp = request.send().await.map_err(|e| GatewayError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| GatewayError::Network(e.to_string()))?;
    decode_response(status, &body)
}
