//! Floating AI assistant chat on the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toggle button lives on the dashboard for its whole lifetime; the panel
//! and its [`ChatTranscript`] exist only while open. Closing the panel drops
//! the transcript, and a reply that resolves after that is discarded.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::route_guard::UPGRADE_PATH;
use crate::state::chat::{ChatTranscript, Origin};
use crate::state::session::SessionContext;
use crate::state::ui::{Overlay, UiState};
use crate::util::browser;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|u| u.is_open(Overlay::Chat));

    view! {
        <div class="chat-widget">
            <Show when=open>
                <ChatPanel/>
            </Show>
            <button
                class="chat-widget__toggle"
                title=move || if open() { "Close assistant" } else { "Ask the AI assistant" }
                on:click=move |_| ui.update(|u| u.toggle_overlay(Overlay::Chat))
            >
                {move || if open() { "×" } else { "AI" }}
            </button>
        </div>
    }
}

#[component]
fn ChatPanel() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let transcript = RwSignal::new(ChatTranscript::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = transcript.with(|t| t.entries().len());
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move || {
        let Some(query) = transcript.try_update(|t| t.begin(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());
        let config = session.config();
        let token = session.access_token().unwrap_or_default();
        browser::spawn(async move {
            let result = api::chat(&config, &token, &query).await;
            if transcript.try_update(|t| t.settle(result)).is_none() {
                log::debug!("chat: panel closed before reply arrived");
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let pending = move || transcript.with(ChatTranscript::is_pending);
    let can_send = move || !pending() && !input.with(|v| v.trim().is_empty());

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <span>"AI Finance Assistant"</span>
                {move || {
                    transcript
                        .with(ChatTranscript::remaining_chats)
                        .map(|left| view! { <span class="chat-panel__quota">{format!("{left} chats left today")}</span> })
                }}
                <button class="chat-panel__close" title="Close" on:click=move |_| ui.update(UiState::close_overlay)>
                    "×"
                </button>
            </div>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    transcript
                        .with(|t| t.entries().to_vec())
                        .into_iter()
                        .map(|entry| {
                            let is_user = entry.origin == Origin::User;
                            let body = if is_user {
                                view! { <span>{entry.text}</span> }.into_any()
                            } else {
                                let rendered = render_markdown_html(&entry.text);
                                view! { <div class="chat-panel__markdown" inner_html=rendered></div> }.into_any()
                            };
                            view! {
                                <div class="chat-panel__message" class:chat-panel__message--user=is_user>
                                    {body}
                                    {entry.upgrade_prompt.then(|| view! {
                                        <A href=UPGRADE_PATH attr:class="btn btn--upgrade btn--small">"Upgrade"</A>
                                    })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || pending().then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })}
            </div>
            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your expenses..."
                    disabled=pending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || !can_send()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
