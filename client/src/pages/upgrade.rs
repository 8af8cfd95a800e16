//! Upgrade page: subscription plans, payment method choice, checkout hand-off,
//! and payment history.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::payment_method_modal::PaymentMethodModal;
use crate::components::plan_card::PlanCard;
use crate::net::api;
use crate::net::types::{PaymentMethod, PaymentRecord, PaymentVerification, SubscriptionPlan};
use crate::route_guard::DASHBOARD_PATH;
use crate::state::session::SessionContext;
use crate::state::upgrade::{CheckoutAction, UNSUPPORTED_CHECKOUT_MESSAGE, UpgradeState, WidgetHandle};
use crate::util::format::{date_part, format_amount};
use crate::util::{browser, checkout};

#[component]
pub fn UpgradePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    // Starts in flight so the server render shows the loading text.
    let upgrade = RwSignal::new({
        let mut state = UpgradeState::default();
        state.begin_load();
        state
    });
    let navigate = use_navigate();
    // Set when verification succeeds; the effect below leaves the page.
    let upgraded = RwSignal::new(false);

    Effect::new(move || {
        let config = session.config();
        let token = session.access_token().unwrap_or_default();
        let (plans_config, plans_token) = (config.clone(), token.clone());
        browser::spawn(async move {
            let result = api::fetch_plans(&plans_config, &plans_token).await;
            let _ = upgrade.try_update(|u| u.set_plans(result));
        });
        browser::spawn(async move {
            let result = api::payment_history(&config, &token).await;
            let _ = upgrade.try_update(|u| u.set_history(result));
        });
    });

    Effect::new(move || {
        if upgraded.get() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_select = Callback::new(move |plan: SubscriptionPlan| {
        upgrade.update(|u| {
            u.select(&plan);
        });
    });

    let on_choose = Callback::new(move |method: PaymentMethod| {
        let Some(order) = upgrade.try_update(|u| u.begin_order(method)).flatten() else {
            return;
        };
        let config = session.config();
        let token = session.access_token().unwrap_or_default();
        browser::spawn(async move {
            let result = api::create_order(&config, &token, &order).await;
            let Some(action) = upgrade.try_update(|u| u.finish_order(method, result)) else {
                return;
            };
            match action {
                CheckoutAction::Redirect(url) => browser::navigate_external(&url),
                CheckoutAction::Widget(handle) => open_widget(session, upgrade, upgraded, &handle),
                CheckoutAction::Unsupported => {}
            }
        });
    });

    view! {
        <div class="upgrade-page">
            <A href=DASHBOARD_PATH attr:class="upgrade-page__back">"← Back to Dashboard"</A>
            <header class="upgrade-page__header">
                <h1>"Choose Your Plan"</h1>
                <p>"Upgrade to Premium for unlimited AI insights"</p>
            </header>

            <div class="upgrade-page__plans">
                {move || {
                    let (plans, loading, error) = upgrade.with(|u| (u.plans.clone(), u.plans_loading, u.plans_error.clone()));
                    if plans.is_empty() {
                        return match error {
                            _ if loading => view! { <p class="upgrade-page__empty">"Loading plans..."</p> }.into_any(),
                            Some(e) => view! { <p class="upgrade-page__error">{e}</p> }.into_any(),
                            None => view! { <p class="upgrade-page__empty">"No plans available"</p> }.into_any(),
                        };
                    }
                    plans
                        .into_iter()
                        .map(|plan| {
                            view! { <PlanCard plan=plan on_select=on_select busy=Signal::derive(move || upgrade.with(|u| u.busy))/> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || upgrade.with(|u| u.selected.is_none()) && upgrade.with(|u| u.error.is_some())>
                <p class="upgrade-page__error">{move || upgrade.with(|u| u.error.clone()).unwrap_or_default()}</p>
            </Show>

            <section class="upgrade-page__history">
                <h3>"Payment History"</h3>
                {move || {
                    upgrade.with(|u| u.history_error.clone()).map(|e| view! { <p class="upgrade-page__error">{e}</p> })
                }}
                {move || {
                    let (history, loading, failed) =
                        upgrade.with(|u| (u.history.clone(), u.history_loading, u.history_error.is_some()));
                    if history.is_empty() {
                        if failed && !loading {
                            return ().into_any();
                        }
                        let text = if loading { "Loading payment history..." } else { "No payments yet" };
                        return view! { <p class="upgrade-page__empty">{text}</p> }.into_any();
                    }
                    view! {
                        <table class="history-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Plan"</th>
                                    <th>"Method"</th>
                                    <th>"Status"</th>
                                    <th>"Amount"</th>
                                </tr>
                            </thead>
                            <tbody>{history.into_iter().map(history_row).collect::<Vec<_>>()}</tbody>
                        </table>
                    }
                        .into_any()
                }}
            </section>

            <Show when=move || upgrade.with(|u| u.selected.is_some())>
                <PaymentMethodModal upgrade=upgrade on_choose=on_choose/>
            </Show>
        </div>
    }
}

fn history_row(record: PaymentRecord) -> impl IntoView {
    let date = record.created_at.as_deref().map(date_part).unwrap_or_default().to_owned();
    view! {
        <tr>
            <td>{date}</td>
            <td>{record.subscription_tier.unwrap_or_default()}</td>
            <td>{record.payment_method.unwrap_or_default()}</td>
            <td>{record.status.unwrap_or_default()}</td>
            <td>{format_amount(record.amount)}</td>
        </tr>
    }
}

/// Open the embedded checkout and verify once it reports a payment.
fn open_widget(
    session: SessionContext,
    upgrade: RwSignal<UpgradeState>,
    upgraded: RwSignal<bool>,
    handle: &WidgetHandle,
) {
    let user = session.user();
    let on_paid = move |verification: PaymentVerification| {
        let config = session.config();
        let token = session.access_token().unwrap_or_default();
        browser::spawn(async move {
            let result = api::verify_payment(&config, &token, &verification).await;
            if upgrade.try_update(|u| u.finish_verification(result)) == Some(true) {
                log::info!("upgrade: payment verified");
                let _ = upgraded.try_set(true);
            }
        });
    };
    let on_dismiss = move || {
        let _ = upgrade.try_update(UpgradeState::widget_dismissed);
    };
    if let Err(err) = checkout::open_widget(handle, user.as_ref(), on_paid, on_dismiss) {
        log::warn!("upgrade: {err}");
        let _ = upgrade.try_update(|u| {
            u.widget_dismissed();
            u.error = Some(UNSUPPORTED_CHECKOUT_MESSAGE.to_owned());
        });
    }
}
