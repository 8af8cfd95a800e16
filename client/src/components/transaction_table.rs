//! Transaction list with per-row delete.

use leptos::prelude::*;

use crate::net::types::{PaymentMode, Transaction};
use crate::state::transactions::TransactionsState;
use crate::util::format::{date_part, format_amount};

/// Table of cached transactions. `on_delete` receives the row id; the caller
/// confirms and performs the delete.
#[component]
pub fn TransactionTable(
    transactions: RwSignal<TransactionsState>,
    on_delete: Callback<i64>,
    /// A delete is in flight; row buttons are disabled.
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    move || {
        let items = transactions.with(|s| s.items.clone());
        if items.is_empty() {
            return view! { <p class="transaction-table__empty">"No transactions yet"</p> }.into_any();
        }
        view! {
            <table class="transaction-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Description"</th>
                        <th>"Category"</th>
                        <th>"Payment"</th>
                        <th class="transaction-table__amount">"Amount"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {items.into_iter().map(|t| view! { <TransactionRow transaction=t on_delete=on_delete busy=busy/> }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
            .into_any()
    }
}

#[component]
fn TransactionRow(transaction: Transaction, on_delete: Callback<i64>, busy: Signal<bool>) -> impl IntoView {
    let id = transaction.id;
    let category = transaction.category_label().to_owned();
    let date = transaction.date.as_deref().map(date_part).unwrap_or_default().to_owned();
    let payment = transaction
        .payment_mode
        .as_deref()
        .map(|raw| PaymentMode::parse(raw).map_or_else(|| raw.to_owned(), |m| m.label().to_owned()))
        .unwrap_or_default();

    view! {
        <tr>
            <td>{date}</td>
            <td>{transaction.description}</td>
            <td><span class="transaction-table__category">{category}</span></td>
            <td>{payment}</td>
            <td class="transaction-table__amount">{format_amount(transaction.amount)}</td>
            <td>
                <button
                    class="btn btn--danger btn--small"
                    title="Delete transaction"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
