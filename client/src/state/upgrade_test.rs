use super::*;

fn plan(name: &str, price: f64) -> SubscriptionPlan {
    SubscriptionPlan {
        name: name.to_owned(),
        monthly_price: price,
        features: "Unlimited AI chats, Priority support".to_owned(),
        badge: None,
        ai_chats_per_day: 100,
        transactions_limit: -1,
    }
}

fn widget_order() -> PaymentOrder {
    PaymentOrder {
        success: true,
        order_id: Some("order_9".to_owned()),
        razorpay_key_id: Some("rzp_test_key".to_owned()),
        amount: Some(199.0),
        ..PaymentOrder::default()
    }
}

// =============================================================
// checkout_action
// =============================================================

#[test]
fn upi_with_checkout_url_redirects() {
    let order = PaymentOrder { checkout_url: Some("https://pay.example/c/1".to_owned()), ..widget_order() };
    assert_eq!(
        checkout_action(PaymentMethod::Upi, &order, &plan("PREMIUM", 199.0)),
        CheckoutAction::Redirect("https://pay.example/c/1".to_owned())
    );
}

#[test]
fn card_with_gateway_key_opens_widget() {
    let action = checkout_action(PaymentMethod::DebitCard, &widget_order(), &plan("PREMIUM", 199.0));
    assert_eq!(
        action,
        CheckoutAction::Widget(WidgetHandle {
            key_id: "rzp_test_key".to_owned(),
            order_id: "order_9".to_owned(),
            amount_minor: 19_900,
            currency: "INR".to_owned(),
            description: "PREMIUM Subscription".to_owned(),
        })
    );
}

#[test]
fn checkout_url_is_ignored_for_non_upi_methods() {
    let order = PaymentOrder { checkout_url: Some("https://pay.example/c/1".to_owned()), ..widget_order() };
    assert!(matches!(
        checkout_action(PaymentMethod::NetBanking, &order, &plan("PREMIUM", 199.0)),
        CheckoutAction::Widget(_)
    ));
}

#[test]
fn upi_without_url_falls_back_to_widget() {
    let order = PaymentOrder { checkout_url: Some(String::new()), ..widget_order() };
    assert!(matches!(checkout_action(PaymentMethod::Upi, &order, &plan("PREMIUM", 199.0)), CheckoutAction::Widget(_)));
}

#[test]
fn widget_amount_falls_back_to_plan_price() {
    let order = PaymentOrder { amount: None, currency: Some("USD".to_owned()), ..widget_order() };
    let CheckoutAction::Widget(handle) = checkout_action(PaymentMethod::DebitCard, &order, &plan("PRO", 4.99)) else {
        panic!("expected widget");
    };
    assert_eq!(handle.amount_minor, 499);
    assert_eq!(handle.currency, "USD");
}

#[test]
fn order_without_key_or_id_is_unsupported() {
    let no_key = PaymentOrder { razorpay_key_id: None, ..widget_order() };
    let no_id = PaymentOrder { order_id: None, ..widget_order() };
    for order in [no_key, no_id, PaymentOrder::default()] {
        assert_eq!(checkout_action(PaymentMethod::DebitCard, &order, &plan("PREMIUM", 199.0)), CheckoutAction::Unsupported);
    }
}

// =============================================================
// Selection + order lifecycle
// =============================================================

#[test]
fn free_plan_cannot_be_selected() {
    let mut state = UpgradeState::default();
    assert!(!state.select(&plan("FREE", 0.0)));
    assert_eq!(state.selected, None);
}

#[test]
fn begin_order_requires_selection_and_builds_body() {
    let mut state = UpgradeState::default();
    assert_eq!(state.begin_order(PaymentMethod::Upi), None);

    assert!(state.select(&plan("PREMIUM", 199.0)));
    let body = state.begin_order(PaymentMethod::Upi).unwrap();
    assert_eq!(body.subscription_tier, "PREMIUM");
    assert_eq!(body.duration_months, 1);
    assert_eq!(body.payment_method, PaymentMethod::Upi);
    assert!(state.busy);
    assert_eq!(state.begin_order(PaymentMethod::Upi), None);
}

#[test]
fn cancel_is_ignored_while_busy() {
    let mut state = UpgradeState::default();
    state.select(&plan("PREMIUM", 199.0));
    state.begin_order(PaymentMethod::DebitCard);
    state.cancel();
    assert!(state.selected.is_some());
    state.widget_dismissed();
    state.cancel();
    assert_eq!(state.selected, None);
}

#[test]
fn failed_order_reports_and_unlocks() {
    let mut state = UpgradeState::default();
    state.select(&plan("PREMIUM", 199.0));
    state.begin_order(PaymentMethod::DebitCard);
    let action = state.finish_order(PaymentMethod::DebitCard, Err(GatewayError::Network("down".to_owned())));
    assert_eq!(action, CheckoutAction::Unsupported);
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some(ORDER_FAILURE_MESSAGE));
}

#[test]
fn redirect_keeps_busy() {
    let mut state = UpgradeState::default();
    state.select(&plan("PREMIUM", 199.0));
    state.begin_order(PaymentMethod::Upi);
    let order = PaymentOrder { checkout_url: Some("https://pay.example/c/1".to_owned()), ..PaymentOrder::default() };
    assert!(matches!(state.finish_order(PaymentMethod::Upi, Ok(order)), CheckoutAction::Redirect(_)));
    assert!(state.busy);
}

#[test]
fn unusable_order_reports_unsupported() {
    let mut state = UpgradeState::default();
    state.select(&plan("PREMIUM", 199.0));
    state.begin_order(PaymentMethod::NetBanking);
    assert_eq!(state.finish_order(PaymentMethod::NetBanking, Ok(PaymentOrder::default())), CheckoutAction::Unsupported);
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some(UNSUPPORTED_CHECKOUT_MESSAGE));
}

#[test]
fn verification_outcomes() {
    let mut state = UpgradeState::default();
    state.select(&plan("PREMIUM", 199.0));
    state.begin_order(PaymentMethod::DebitCard);
    let rejected = GatewayError::Rejected { status: 400, message: Some("bad signature".to_owned()) };
    assert!(!state.finish_verification(Err(rejected)));
    assert_eq!(state.error.as_deref(), Some(VERIFY_FAILURE_MESSAGE));
    assert!(!state.busy);

    assert!(state.finish_verification(Ok(PaymentOrder::default())));
    assert_eq!(state.selected, None);
}

#[test]
fn failed_plan_fetch_keeps_previous_plans() {
    let mut state = UpgradeState::default();
    state.set_plans(Ok(vec![plan("FREE", 0.0), plan("PREMIUM", 199.0)]));
    state.set_plans(Err(GatewayError::Unavailable));
    assert_eq!(state.plans.len(), 2);
    state.set_history(Err(GatewayError::Unavailable));
    assert!(state.history.is_empty());
}

#[test]
fn list_failures_are_reported_and_stop_loading() {
    let mut state = UpgradeState::default();
    state.begin_load();
    assert!(state.plans_loading && state.history_loading);

    state.set_plans(Err(GatewayError::Network("offline".to_owned())));
    state.set_history(Err(GatewayError::Rejected { status: 500, message: Some("boom".to_owned()) }));

    assert!(!state.plans_loading);
    assert!(!state.history_loading);
    assert_eq!(state.plans_error.as_deref(), Some(PLANS_FAILURE_MESSAGE));
    assert_eq!(state.history_error.as_deref(), Some("boom"));
    assert_eq!(state.error, None);
}

#[test]
fn successful_reload_clears_list_errors() {
    let mut state = UpgradeState {
        plans_error: Some("old".to_owned()),
        history_error: Some("old".to_owned()),
        ..UpgradeState::default()
    };
    state.begin_load();
    state.set_plans(Ok(vec![plan("PREMIUM", 199.0)]));
    state.set_history(Ok(Vec::new()));
    assert_eq!(state.plans_error, None);
    assert_eq!(state.history_error, None);
    assert_eq!(state.plans.len(), 1);
}
