//! Browser and formatting helpers shared by pages and components.

pub mod browser;
pub mod checkout;
pub mod dark_mode;
pub mod format;
pub mod markdown;
