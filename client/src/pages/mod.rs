//! Top-level route views. Each renders behind the route guard in `app`.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod oauth_redirect;
pub mod payment_callback;
pub mod upgrade;
