//! Upgrade page state: plans, the selected plan, checkout hand-off, history.
//!
//! SYSTEM CONTEXT
//! ==============
//! `create-order` answers in one of two shapes: a hosted checkout URL (UPI)
//! that the browser navigates to, or a gateway handle for the embedded
//! checkout widget. [`checkout_action`] picks which; the page performs it.
//! A widget payment is confirmed with `/payments/verify`; a hosted checkout
//! returns through `/payment/callback`, which does not verify.

#[cfg(test)]
#[path = "upgrade_test.rs"]
mod upgrade_test;

use crate::error::GatewayError;
use crate::net::types::{OrderRequest, PaymentMethod, PaymentOrder, PaymentRecord, SubscriptionPlan};

pub const ORDER_FAILURE_MESSAGE: &str = "Payment initiation failed. Please try again.";
pub const VERIFY_FAILURE_MESSAGE: &str = "Payment verification failed.";
pub const UNSUPPORTED_CHECKOUT_MESSAGE: &str = "This payment method is not available right now.";
pub const PLANS_FAILURE_MESSAGE: &str = "Could not load plans. Please try again later.";
pub const HISTORY_FAILURE_MESSAGE: &str = "Could not load payment history.";
pub const DEFAULT_CURRENCY: &str = "INR";
pub const DURATION_MONTHS: u32 = 1;

/// Data the embedded checkout widget needs to open.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetHandle {
    pub key_id: String,
    pub order_id: String,
    /// Amount in the currency's minor unit (paise).
    pub amount_minor: u64,
    pub currency: String,
    pub description: String,
}

/// What the page does with a created order.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutAction {
    /// Navigate the browser to a hosted checkout page.
    Redirect(String),
    /// Open the embedded checkout widget.
    Widget(WidgetHandle),
    /// The order carried neither usable shape.
    Unsupported,
}

/// Decide how to continue a created order.
///
/// UPI orders with a checkout URL redirect; any order carrying a gateway key
/// and order id opens the widget.
pub fn checkout_action(method: PaymentMethod, order: &PaymentOrder, plan: &SubscriptionPlan) -> CheckoutAction {
    let present = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);

    if method == PaymentMethod::Upi {
        if let Some(url) = present(&order.checkout_url) {
            return CheckoutAction::Redirect(url);
        }
    }
    match (present(&order.razorpay_key_id), present(&order.order_id)) {
        (Some(key_id), Some(order_id)) => {
            let amount = order.amount.unwrap_or(plan.monthly_price);
            CheckoutAction::Widget(WidgetHandle {
                key_id,
                order_id,
                amount_minor: to_minor_units(amount),
                currency: present(&order.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
                description: format!("{} Subscription", plan.name),
            })
        }
        _ => CheckoutAction::Unsupported,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_minor_units(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 { (amount * 100.0).round() as u64 } else { 0 }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpgradeState {
    pub plans: Vec<SubscriptionPlan>,
    pub history: Vec<PaymentRecord>,
    pub selected: Option<SubscriptionPlan>,
    /// An order or verification call is in flight.
    pub busy: bool,
    /// Order or verification failure.
    pub error: Option<String>,
    pub plans_loading: bool,
    pub plans_error: Option<String>,
    pub history_loading: bool,
    pub history_error: Option<String>,
}

impl UpgradeState {
    /// Mark both lists in flight.
    pub fn begin_load(&mut self) {
        self.plans_loading = true;
        self.history_loading = true;
    }

    /// Replace the plans on success; keep the previous ones on failure and
    /// report it.
    pub fn set_plans(&mut self, result: Result<Vec<SubscriptionPlan>, GatewayError>) {
        self.plans_loading = false;
        match result {
            Ok(plans) => {
                self.plans = plans;
                self.plans_error = None;
            }
            Err(err) => {
                log::warn!("upgrade: plans failed: {err}");
                self.plans_error = Some(err.user_message(PLANS_FAILURE_MESSAGE));
            }
        }
    }

    pub fn set_history(&mut self, result: Result<Vec<PaymentRecord>, GatewayError>) {
        self.history_loading = false;
        match result {
            Ok(history) => {
                self.history = history;
                self.history_error = None;
            }
            Err(err) => {
                log::warn!("upgrade: payment history failed: {err}");
                self.history_error = Some(err.user_message(HISTORY_FAILURE_MESSAGE));
            }
        }
    }

    /// Open the payment-method modal for `plan`. The free plan is the
    /// current plan and cannot be selected.
    pub fn select(&mut self, plan: &SubscriptionPlan) -> bool {
        if plan.is_free() || self.busy {
            return false;
        }
        self.selected = Some(plan.clone());
        self.error = None;
        true
    }

    pub fn cancel(&mut self) {
        if !self.busy {
            self.selected = None;
        }
    }

    /// Mark an order in flight and build its request body.
    ///
    /// Returns `None` with no plan selected or a call already pending.
    pub fn begin_order(&mut self, method: PaymentMethod) -> Option<OrderRequest> {
        if self.busy {
            return None;
        }
        let plan = self.selected.as_ref()?;
        self.busy = true;
        self.error = None;
        Some(OrderRequest {
            amount: plan.monthly_price,
            payment_method: method,
            subscription_tier: plan.name.clone(),
            duration_months: DURATION_MONTHS,
        })
    }

    /// Settle a `create-order` call into the action to perform.
    ///
    /// A redirect keeps `busy` set because the page is about to unload; the
    /// widget clears it once it reports back.
    pub fn finish_order(&mut self, method: PaymentMethod, result: Result<PaymentOrder, GatewayError>) -> CheckoutAction {
        let Some(plan) = self.selected.clone() else {
            self.busy = false;
            return CheckoutAction::Unsupported;
        };
        let action = match result {
            Ok(order) => checkout_action(method, &order, &plan),
            Err(err) => {
                log::warn!("upgrade: create order failed: {err}");
                self.busy = false;
                self.error = Some(ORDER_FAILURE_MESSAGE.to_owned());
                return CheckoutAction::Unsupported;
            }
        };
        if action == CheckoutAction::Unsupported {
            self.busy = false;
            self.error = Some(UNSUPPORTED_CHECKOUT_MESSAGE.to_owned());
        }
        action
    }

    /// The widget was closed without paying.
    pub fn widget_dismissed(&mut self) {
        self.busy = false;
    }

    /// Settle a verification call. Returns true when the upgrade went through.
    pub fn finish_verification(&mut self, result: Result<PaymentOrder, GatewayError>) -> bool {
        self.busy = false;
        match result {
            Ok(_) => {
                self.selected = None;
                true
            }
            Err(err) => {
                log::warn!("upgrade: verification failed: {err}");
                self.error = Some(VERIFY_FAILURE_MESSAGE.to_owned());
                false
            }
        }
    }
}
