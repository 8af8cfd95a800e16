//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Every success body is
//! wrapped in `{ "data": ... }` and every failure in `{ "message": ... }`;
//! [`Envelope`] and [`ErrorEnvelope`] model those wrappers so endpoint
//! functions only name their payload type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success wrapper: `{ "data": T, "message": ... }`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Failure wrapper: `{ "message": ... }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// User profile as cached in the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user id; absent for profiles derived from OAuth2 tokens.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "premium")]
    pub is_premium: bool,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Name shown in the navbar: the profile name, else the email's local
    /// part, else `"User"`.
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.to_owned();
        }
        match self.email.split('@').next().map(str::trim) {
            Some(local) if !local.is_empty() => local.to_owned(),
            _ => "User".to_owned(),
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// A transaction as returned by `/transactions/all`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub payment_mode: Option<String>,
}

impl Transaction {
    pub fn category_label(&self) -> &str {
        self.category.as_deref().filter(|c| !c.trim().is_empty()).unwrap_or("Uncategorized")
    }
}

/// Body of `POST /transactions/add`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub date: String,
    pub payment_mode: PaymentMode,
}

/// How an expense was paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[default]
    #[serde(rename = "UPI")]
    Upi,
    Card,
    Cash,
    Bank,
}

impl PaymentMode {
    pub const ALL: [Self; 4] = [Self::Upi, Self::Card, Self::Cash, Self::Bank];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Card => "Card",
            Self::Cash => "Cash",
            Self::Bank => "Bank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bank => "Bank Transfer",
            other => other.as_str(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == raw)
    }
}

/// Body of `POST /ai/chatbot`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// `data` of a successful chat call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(alias = "reply")]
    pub response: String,
    #[serde(default)]
    pub remaining_chats: Option<i64>,
    #[serde(default)]
    pub subscription_tier: Option<String>,
}

/// A subscription plan from `/payments/plans`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: String,
    pub monthly_price: f64,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub ai_chats_per_day: i64,
    #[serde(default)]
    pub transactions_limit: i64,
}

impl SubscriptionPlan {
    pub fn is_free(&self) -> bool {
        self.name.eq_ignore_ascii_case("FREE")
    }

    /// Comma-separated feature list, trimmed, blanks dropped.
    pub fn feature_list(&self) -> Vec<String> {
        self.features
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Payment method offered in the upgrade modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Upi,
    DebitCard,
    CreditCard,
    NetBanking,
    Wallet,
}

impl PaymentMethod {
    /// Methods offered in the upgrade modal, in display order.
    pub const OFFERED: [Self; 3] = [Self::Upi, Self::DebitCard, Self::NetBanking];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upi => "UPI Payment",
            Self::DebitCard | Self::CreditCard => "Debit/Credit Card",
            Self::NetBanking => "Net Banking",
            Self::Wallet => "Wallet",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Upi => "PhonePe, GPay, Paytm",
            Self::DebitCard | Self::CreditCard => "Visa, Mastercard, Rupay",
            Self::NetBanking => "All major banks",
            Self::Wallet => "Prepaid wallets",
        }
    }
}

/// Body of `POST /payments/create-order`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub subscription_tier: String,
    pub duration_months: u32,
}

/// `data` of a created order: either a hosted checkout URL or a gateway
/// handle for the embedded checkout widget.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub razorpay_key_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_gateway: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /payments/verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerification {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// One entry of `/payments/history`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub subscription_tier: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
