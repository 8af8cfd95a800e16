//! Dashboard: spending overview, transactions, AI insight, and chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Transactions and the insight are fetched on
//! mount and refetched together after every add or delete; the page never
//! edits its cached list locally.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::chat_widget::ChatWidget;
use crate::components::insight_panel::InsightPanel;
use crate::components::spending_summary::{CategoryBreakdown, SummaryCards};
use crate::components::transaction_form::TransactionForm;
use crate::components::transaction_table::TransactionTable;
use crate::net::api;
use crate::net::types::{NewTransaction, User};
use crate::route_guard::{LOGIN_PATH, UPGRADE_PATH};
use crate::state::notice::LoginNotice;
use crate::state::session::SessionContext;
use crate::state::transactions::{
    ADD_FAILURE_MESSAGE, DELETE_CONFIRMATION, DELETE_FAILURE_MESSAGE, InsightState, TransactionsState,
};
use crate::state::ui::{Overlay, UiState};
use crate::util::{browser, dark_mode};

/// Navbar greeting for the cached profile.
pub fn welcome_text(user: Option<&User>) -> String {
    let name = user.map_or_else(|| "User".to_owned(), User::display_name);
    format!("Welcome, {name}")
}

/// Non-premium users get an upgrade button in the navbar.
pub fn offers_upgrade(user: Option<&User>) -> bool {
    !user.is_some_and(|u| u.is_premium)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notice = expect_context::<LoginNotice>();
    let navigate = use_navigate();

    let transactions = RwSignal::new(TransactionsState::default());
    let insight = RwSignal::new(InsightState::default());
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let add_error = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

    Effect::new(move || reload(session, transactions, insight));

    let on_add = Callback::new(move |body: NewTransaction| {
        saving.set(true);
        add_error.set(None);
        let config = session.config();
        let token = session.access_token().unwrap_or_default();
        browser::spawn(async move {
            let result = api::add_transaction(&config, &token, &body).await;
            if saving.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(_) => {
                    ui.update(UiState::close_overlay);
                    reload(session, transactions, insight);
                }
                Err(err) => add_error.set(Some(err.user_message(ADD_FAILURE_MESSAGE))),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if deleting.get_untracked() || !browser::confirm(DELETE_CONFIRMATION) {
            return;
        }
        deleting.set(true);
        action_error.set(None);
        let config = session.config();
        let token = session.access_token().unwrap_or_default();
        browser::spawn(async move {
            let result = api::delete_transaction(&config, &token, id).await;
            if deleting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(()) => reload(session, transactions, insight),
                Err(err) => action_error.set(Some(err.user_message(DELETE_FAILURE_MESSAGE))),
            }
        });
    });

    let on_logout = move |_| {
        session.logout();
        // A notice posted while this tab was signed in is stale now.
        let _ = notice.take();
        ui.update(UiState::close_overlay);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let summary = Memo::new(move |_| transactions.with(TransactionsState::summary));
    let user = move || session.user();

    view! {
        <div class="dashboard-page">
            <nav class="navbar">
                <span class="navbar__brand">"SpendWise"</span>
                <div class="navbar__actions">
                    <Show when=move || offers_upgrade(user().as_ref())>
                        <A href=UPGRADE_PATH attr:class="btn btn--upgrade">"Upgrade to Premium"</A>
                    </Show>
                    <span class="navbar__welcome">{move || welcome_text(user().as_ref())}</span>
                    <button
                        class="btn btn--ghost"
                        title="Toggle dark mode"
                        on:click=move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode))
                    >
                        {move || if ui.with(|u| u.dark_mode) { "Light" } else { "Dark" }}
                    </button>
                    <button class="btn btn--ghost" on:click=on_logout>"Logout"</button>
                </div>
            </nav>

            <main class="dashboard-page__content">
                <InsightPanel insight=insight/>
                <SummaryCards summary=summary/>

                <div class="dashboard-page__grid">
                    <CategoryBreakdown summary=summary/>
                    <section class="dashboard-page__transactions">
                        <header class="dashboard-page__section-header">
                            <h3>"Recent Transactions"</h3>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    add_error.set(None);
                                    ui.update(|u| u.toggle_overlay(Overlay::AddTransaction));
                                }
                            >
                                "+ Add Transaction"
                            </button>
                        </header>
                        {move || action_error.get().map(|e| view! { <p class="dashboard-page__error">{e}</p> })}
                        {move || {
                            transactions.with(|s| s.error.clone()).map(|e| view! { <p class="dashboard-page__error">{e}</p> })
                        }}
                        {move || {
                            if transactions.with(|s| s.loading && s.items.is_empty()) {
                                view! { <p class="dashboard-page__loading">"Loading your dashboard..."</p> }.into_any()
                            } else {
                                view! { <TransactionTable transactions=transactions on_delete=on_delete busy=deleting/> }
                                    .into_any()
                            }
                        }}
                    </section>
                </div>
            </main>

            <Show when=move || ui.with(|u| u.is_open(Overlay::AddTransaction))>
                <TransactionForm
                    on_submit=on_add
                    on_cancel=Callback::new(move |()| ui.update(UiState::close_overlay))
                    busy=saving
                    error=add_error
                />
            </Show>

            <ChatWidget/>
        </div>
    }
}

/// Refetch the transaction list and the insight. Results arriving after the
/// page unmounted are dropped.
fn reload(session: SessionContext, transactions: RwSignal<TransactionsState>, insight: RwSignal<InsightState>) {
    let config = session.config();
    let token = session.access_token().unwrap_or_default();
    transactions.update(TransactionsState::begin_load);
    insight.update(InsightState::begin_load);

    let (list_config, list_token) = (config.clone(), token.clone());
    browser::spawn(async move {
        let result = api::list_transactions(&list_config, &list_token).await;
        let _ = transactions.try_update(|s| s.finish_load(result));
    });
    browser::spawn(async move {
        let result = api::fetch_insights(&config, &token).await;
        let _ = insight.try_update(|s| s.finish_load(result));
    });
}
