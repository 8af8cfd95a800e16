//! Summary cards and the per-category breakdown.
//!
//! The breakdown is drawn as plain percentage bars; there is no chart library
//! in the bundle.

use leptos::prelude::*;

use crate::state::transactions::SpendingSummary;
use crate::util::format::{format_amount, format_percent};

#[component]
pub fn SummaryCards(#[prop(into)] summary: Signal<SpendingSummary>) -> impl IntoView {
    view! {
        <div class="summary-cards">
            <div class="summary-card">
                <p class="summary-card__label">"Total Spending"</p>
                <p class="summary-card__value">{move || format_amount(summary.with(|s| s.total))}</p>
            </div>
            <div class="summary-card">
                <p class="summary-card__label">"Transactions"</p>
                <p class="summary-card__value">{move || summary.with(|s| s.count)}</p>
            </div>
            <div class="summary-card">
                <p class="summary-card__label">"Categories"</p>
                <p class="summary-card__value">{move || summary.with(SpendingSummary::category_count)}</p>
            </div>
        </div>
    }
}

#[component]
pub fn CategoryBreakdown(#[prop(into)] summary: Signal<SpendingSummary>) -> impl IntoView {
    view! {
        <div class="category-breakdown">
            <h3 class="category-breakdown__title">"Spending by Category"</h3>
            {move || {
                let categories = summary.with(|s| s.categories.clone());
                if categories.is_empty() {
                    return view! { <p class="category-breakdown__empty">"No spending yet"</p> }.into_any();
                }
                categories
                    .into_iter()
                    .map(|share| {
                        let width = format!("width: {:.1}%", share.percent.clamp(0.0, 100.0));
                        view! {
                            <div class="category-breakdown__row">
                                <div class="category-breakdown__label">
                                    <span>{share.name}</span>
                                    <span>{format_amount(share.amount)} " · " {format_percent(share.percent)}</span>
                                </div>
                                <div class="category-breakdown__track">
                                    <div class="category-breakdown__bar" style=width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
