//! Reusable UI components composed by the pages.

pub mod chat_widget;
pub mod insight_panel;
pub mod payment_method_modal;
pub mod plan_card;
pub mod spending_summary;
pub mod transaction_form;
pub mod transaction_table;
