use super::*;
use crate::callback::parse_payment;

fn envelope(pairs: &'static [(&'static str, &'static str)]) -> CallbackEnvelope<PaymentReceipt> {
    parse_payment(|key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned()))
}

#[test]
fn success_status_is_succeeded_phase() {
    let env = envelope(&[("status", "success"), ("orderId", "o1")]);
    assert_eq!(PaymentPhase::from_envelope(&env), PaymentPhase::Succeeded);
    assert_eq!(payment_navigation(&env), "/dashboard");
}

#[test]
fn other_or_missing_status_is_failed_phase() {
    for env in [envelope(&[("status", "failed")]), envelope(&[("orderId", "o1")]), envelope(&[])] {
        assert_eq!(PaymentPhase::from_envelope(&env), PaymentPhase::Failed);
        assert_eq!(payment_navigation(&env), "/upgrade");
    }
}

#[test]
fn phase_text() {
    assert_eq!(PaymentPhase::default(), PaymentPhase::Processing);
    assert_eq!(PaymentPhase::Succeeded.title(), "Payment Successful!");
    assert_eq!(PaymentPhase::Failed.message(), "Payment failed. Please try again.");
}

#[test]
fn countdown_only_after_settling() {
    assert_eq!(countdown_text(PaymentPhase::Processing, 3), None);
    assert_eq!(
        countdown_text(PaymentPhase::Succeeded, 3).as_deref(),
        Some("Redirecting to dashboard in 3 seconds...")
    );
    assert_eq!(countdown_text(PaymentPhase::Failed, 1).as_deref(), Some("Redirecting to plans in 1 second..."));
}
