//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the Backend Gateway (one async function per endpoint) and `types`
//! defines the JSON wire schema it speaks.

pub mod api;
pub mod types;
