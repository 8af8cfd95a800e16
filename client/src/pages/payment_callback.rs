//! Hosted-checkout return trip at `/payment/callback`.
//!
//! Renders in either auth state. The outcome comes only from the `status`
//! parameter; nothing is verified here. After the configured delay the view
//! moves on to `/dashboard` or back to `/upgrade`, unless it was unmounted
//! first.

#[cfg(test)]
#[path = "payment_callback_test.rs"]
mod payment_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::callback::{CallbackEnvelope, PaymentReceipt, parse_payment, payment_navigation};
use crate::route_guard::UPGRADE_PATH;
use crate::state::session::SessionContext;
use crate::util::browser;

/// What the card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentPhase {
    /// Before the query has been read on the client.
    #[default]
    Processing,
    Succeeded,
    Failed,
}

impl PaymentPhase {
    pub fn from_envelope(envelope: &CallbackEnvelope<PaymentReceipt>) -> Self {
        match envelope {
            CallbackEnvelope::Success(_) => Self::Succeeded,
            CallbackEnvelope::Failure(_) | CallbackEnvelope::Malformed => Self::Failed,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Processing => "Processing Payment",
            Self::Succeeded => "Payment Successful!",
            Self::Failed => "Payment Failed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Processing => "Processing your payment...",
            Self::Succeeded => "Payment successful! Your subscription has been upgraded.",
            Self::Failed => "Payment failed. Please try again.",
        }
    }
}

/// "Redirecting to dashboard in 3 seconds..." for the settled phases.
pub fn countdown_text(phase: PaymentPhase, secs: u64) -> Option<String> {
    let target = match phase {
        PaymentPhase::Processing => return None,
        PaymentPhase::Succeeded => "dashboard",
        PaymentPhase::Failed => "plans",
    };
    let unit = if secs == 1 { "second" } else { "seconds" };
    Some(format!("Redirecting to {target} in {secs} {unit}..."))
}

#[component]
pub fn PaymentCallbackPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let query = use_query_map();
    let navigate = use_navigate();
    let phase = RwSignal::new(PaymentPhase::Processing);
    let delay = session.config().payment_redirect_delay;

    Effect::new(move || {
        let envelope = query.with_untracked(|params| parse_payment(|key| params.get(key)));
        match &envelope {
            CallbackEnvelope::Success(receipt) => {
                log::info!("payment: callback success for order {:?}", receipt.order_id);
            }
            CallbackEnvelope::Failure(status) => log::warn!("payment: callback status {status}"),
            CallbackEnvelope::Malformed => log::warn!("payment: callback without status"),
        }
        phase.set(PaymentPhase::from_envelope(&envelope));

        let target = payment_navigation(&envelope);
        let navigate = navigate.clone();
        browser::spawn(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(delay).await;
            // The signal is disposed once this view unmounts.
            if phase.try_get_untracked().is_some() {
                navigate(target, NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="callback-page">
            <div
                class="callback-card"
                class:callback-card--success=move || phase.get() == PaymentPhase::Succeeded
                class:callback-card--failed=move || phase.get() == PaymentPhase::Failed
            >
                <Show when=move || phase.get() == PaymentPhase::Processing>
                    <div class="spinner"></div>
                </Show>
                <h2>{move || phase.get().title()}</h2>
                <p>{move || phase.get().message()}</p>
                {move || {
                    countdown_text(phase.get(), delay.as_secs())
                        .map(|text| view! { <p class="callback-card__countdown">{text}</p> })
                }}
                <Show when=move || phase.get() == PaymentPhase::Failed>
                    <A href=UPGRADE_PATH attr:class="btn btn--primary">"Try Again"</A>
                </Show>
            </div>
        </div>
    }
}
