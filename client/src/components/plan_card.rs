//! One subscription plan on the upgrade page.

use leptos::prelude::*;

use crate::net::types::SubscriptionPlan;
use crate::util::format::format_amount;

#[component]
pub fn PlanCard(
    plan: SubscriptionPlan,
    on_select: Callback<SubscriptionPlan>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let is_free = plan.is_free();
    let highlighted = plan.badge.is_some();
    let features = plan.feature_list();
    let limits = (plan.ai_chats_per_day > 0).then(|| format!("{} AI chats per day", plan.ai_chats_per_day));
    let price = format_amount(plan.monthly_price);
    let name = plan.name.clone();
    let badge = plan.badge.clone();

    view! {
        <div class="plan-card" class:plan-card--highlighted=highlighted>
            {badge.map(|b| view! { <span class="plan-card__badge">{b}</span> })}
            <h2 class="plan-card__name">{name}</h2>
            <div class="plan-card__price">
                {price}
                <span class="plan-card__period">"/month"</span>
            </div>
            <ul class="plan-card__features">
                {features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}
                {limits.map(|l| view! { <li class="plan-card__limit">{l}</li> })}
            </ul>
            <button
                class="btn plan-card__action"
                class:btn--primary=!is_free
                disabled=move || is_free || busy.get()
                on:click=move |_| on_select.run(plan.clone())
            >
                {if is_free { "Current Plan" } else { "Upgrade Now" }}
            </button>
        </div>
    }
}
