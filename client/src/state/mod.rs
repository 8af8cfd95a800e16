//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `transactions`, `upgrade`) so
//! pages and components depend on small focused models. Each model keeps its
//! transitions as plain methods; pages wrap it in an `RwSignal`.

pub mod chat;
#[cfg(test)]
pub(crate) mod memory_storage;
pub mod notice;
pub mod session;
pub mod store;
pub mod transactions;
pub mod ui;
pub mod upgrade;
