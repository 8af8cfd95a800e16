//! Add-transaction modal form.

use leptos::prelude::*;

use crate::net::types::{NewTransaction, PaymentMode};
use crate::state::transactions::{CATEGORY_GROUPS, NewTransactionForm};
use crate::util::format::today_iso;

/// Modal form. Validates locally, then hands the request body to `on_submit`;
/// the caller performs the call and reports failures through `error`.
#[component]
pub fn TransactionForm(
    on_submit: Callback<NewTransaction>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(NewTransactionForm::new(today_iso()));
    let invalid = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(NewTransactionForm::validate) {
            Ok(body) => {
                invalid.set(None);
                on_submit.run(body);
            }
            Err(err) => invalid.set(Some(err.to_string())),
        }
    };

    let message = move || invalid.get().or_else(|| error.get());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h3>"Add Transaction"</h3>
                    <button class="dialog__close" title="Close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>
                <form class="dialog__form" on:submit=submit>
                    <label class="dialog__label">
                        "Description"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            placeholder="e.g., Uber Ride"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Amount (₹)"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.01"
                            min="0"
                            required
                            placeholder="320"
                            prop:value=move || form.with(|f| f.amount.clone())
                            on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.category.clone())
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        >
                            <option value="">"Select Category"</option>
                            {CATEGORY_GROUPS
                                .iter()
                                .map(|group| {
                                    view! {
                                        <optgroup label=group.label>
                                            {group
                                                .options
                                                .iter()
                                                .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                                .collect::<Vec<_>>()}
                                        </optgroup>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Date"
                        <input
                            class="dialog__input"
                            type="date"
                            required
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Payment Mode"
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.payment_mode.as_str())
                            on:change=move |ev| {
                                if let Some(mode) = PaymentMode::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.payment_mode = mode);
                                }
                            }
                        >
                            {PaymentMode::ALL
                                .into_iter()
                                .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <Show when=move || message().is_some()>
                        <p class="dialog__error">{move || message().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary dialog__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Add Transaction" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
