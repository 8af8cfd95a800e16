//! Payment method picker shown after a paid plan is chosen.

use leptos::prelude::*;

use crate::net::types::PaymentMethod;
use crate::state::upgrade::UpgradeState;
use crate::util::format::format_amount;

#[component]
pub fn PaymentMethodModal(
    upgrade: RwSignal<UpgradeState>,
    on_choose: Callback<PaymentMethod>,
) -> impl IntoView {
    let busy = move || upgrade.with(|u| u.busy);
    let summary = move || {
        upgrade.with(|u| {
            u.selected
                .as_ref()
                .map(|p| format!("{} · {}/month", p.name, format_amount(p.monthly_price)))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| upgrade.update(UpgradeState::cancel)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>"Choose Payment Method"</h3>
                <p class="dialog__subtitle">{summary}</p>
                <div class="payment-methods">
                    {PaymentMethod::OFFERED
                        .into_iter()
                        .map(|method| {
                            view! {
                                <button
                                    class="payment-method"
                                    disabled=busy
                                    on:click=move |_| on_choose.run(method)
                                >
                                    <span class="payment-method__label">{method.label()}</span>
                                    <span class="payment-method__hint">{method.hint()}</span>
                                    {(method == PaymentMethod::Upi)
                                        .then(|| view! { <span class="payment-method__tag">"Recommended"</span> })}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {move || upgrade.with(|u| u.error.clone()).map(|e| view! { <p class="dialog__error">{e}</p> })}
                <Show when=busy>
                    <p class="dialog__status">"Redirecting to payment..."</p>
                </Show>
                <button class="btn dialog__cancel" disabled=busy on:click=move |_| upgrade.update(UpgradeState::cancel)>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
