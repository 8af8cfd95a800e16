//! AI insight banner at the top of the dashboard.

use leptos::prelude::*;

use crate::state::transactions::InsightState;
use crate::util::markdown::render_markdown_html;

/// Shows a pulsing placeholder while the insight loads, then the rendered
/// text and any load error. Nothing renders when there is neither.
#[component]
pub fn InsightPanel(insight: RwSignal<InsightState>) -> impl IntoView {
    move || {
        let state = insight.get();
        if state.loading {
            return view! {
                <div class="insight-panel insight-panel--loading">
                    <div class="insight-panel__skeleton insight-panel__skeleton--title"></div>
                    <div class="insight-panel__skeleton"></div>
                    <div class="insight-panel__skeleton insight-panel__skeleton--short"></div>
                </div>
            }
                .into_any();
        }
        if state.text.is_none() && state.error.is_none() {
            return ().into_any();
        }
        let rendered = state.text.as_deref().map(render_markdown_html);
        view! {
            <div class="insight-panel">
                <h3 class="insight-panel__title">"AI Financial Insight"</h3>
                {rendered.map(|html| view! { <div class="insight-panel__body" inner_html=html></div> })}
                {state.error.map(|e| view! { <p class="insight-panel__error">{e}</p> })}
            </div>
        }
            .into_any()
    }
}
