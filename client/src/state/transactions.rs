//! Dashboard data: the cached transaction list, the insight text, the
//! add-transaction form, and the analytics derived from the list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns transactions; the dashboard keeps a read-only copy and
//! refetches it (and the insight) after every add or delete. Nothing here is
//! persisted.
//!
//! TRADE-OFFS
//! ==========
//! Analytics are recomputed from the whole list on every change. Lists are
//! small and this keeps the summary a pure function of the cache.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use std::collections::BTreeMap;

use crate::error::GatewayError;
use crate::net::types::{NewTransaction, PaymentMode, Transaction};

pub const LOAD_FAILURE_MESSAGE: &str = "Could not load transactions.";
pub const ADD_FAILURE_MESSAGE: &str = "Failed to add transaction";
pub const INSIGHT_FAILURE_MESSAGE: &str = "Could not load your AI insight.";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete transaction";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this transaction?";

/// A labelled group of category options for the add-transaction select.
pub struct CategoryGroup {
    pub label: &'static str,
    /// `(value sent to the backend, option label)`.
    pub options: &'static [(&'static str, &'static str)],
}

pub const CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        label: "Food & Dining",
        options: &[
            ("Groceries", "Groceries"),
            ("Restaurants", "Restaurants"),
            ("Cafes", "Cafes"),
            ("Snacks", "Snacks"),
            ("Delivery", "Food Delivery"),
        ],
    },
    CategoryGroup {
        label: "Travel & Transport",
        options: &[
            ("Fuel", "Fuel"),
            ("Cab", "Cab / Taxi"),
            ("PublicTransport", "Bus / Metro"),
            ("Flights", "Flights"),
            ("HotelStay", "Hotel Stay"),
        ],
    },
    CategoryGroup {
        label: "Shopping & Lifestyle",
        options: &[
            ("Clothing", "Clothing"),
            ("Accessories", "Accessories"),
            ("Electronics", "Electronics"),
            ("HomeDecor", "Home Decor"),
            ("Gadgets", "Gadgets"),
        ],
    },
    CategoryGroup {
        label: "Bills & Utilities",
        options: &[
            ("Electricity", "Electricity"),
            ("Water", "Water"),
            ("Internet", "Internet"),
            ("MobileRecharge", "Mobile Recharge"),
            ("Rent", "Rent"),
        ],
    },
    CategoryGroup {
        label: "Health & Fitness",
        options: &[
            ("Doctor", "Doctor Visits"),
            ("Medicines", "Medicines"),
            ("Gym", "Gym / Fitness"),
            ("Insurance", "Health Insurance"),
        ],
    },
    CategoryGroup {
        label: "Entertainment & Leisure",
        options: &[
            ("Movies", "Movies"),
            ("Subscriptions", "Streaming Subscriptions"),
            ("Games", "Games"),
            ("Events", "Events / Concerts"),
        ],
    },
    CategoryGroup {
        label: "Education & Learning",
        options: &[
            ("Courses", "Online Courses"),
            ("Books", "Books"),
            ("Workshops", "Workshops"),
            ("SchoolFees", "School / College Fees"),
        ],
    },
    CategoryGroup {
        label: "Others",
        options: &[("Donations", "Donations"), ("Gifts", "Gifts"), ("Miscellaneous", "Miscellaneous")],
    },
];

/// Whether `value` is one of the selectable categories.
pub fn is_known_category(value: &str) -> bool {
    CATEGORY_GROUPS.iter().flat_map(|g| g.options).any(|(v, _)| *v == value)
}

/// Cached transaction list plus its load status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionsState {
    pub items: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TransactionsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the cache on success; keep the previous list on failure.
    pub fn finish_load(&mut self, result: Result<Vec<Transaction>, GatewayError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                log::warn!("transactions: load failed: {err}");
                self.error = Some(err.user_message(LOAD_FAILURE_MESSAGE));
            }
        }
    }

    pub fn summary(&self) -> SpendingSummary {
        SpendingSummary::from_transactions(&self.items)
    }
}

/// AI insight banner text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsightState {
    pub text: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InsightState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Blank insight text hides the banner. A failure keeps the last text
    /// and reports the error alongside it.
    pub fn finish_load(&mut self, result: Result<String, GatewayError>) {
        self.loading = false;
        match result {
            Ok(text) => {
                self.text = Some(text).filter(|t| !t.trim().is_empty());
                self.error = None;
            }
            Err(err) => {
                log::warn!("insights: load failed: {err}");
                self.error = Some(err.user_message(INSIGHT_FAILURE_MESSAGE));
            }
        }
    }
}

/// Why the add-transaction form was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Enter an amount greater than zero")]
    InvalidAmount,
    #[error("Date is required")]
    MissingDate,
}

/// Raw add-transaction form fields as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransactionForm {
    pub description: String,
    pub amount: String,
    /// Empty means no category.
    pub category: String,
    pub date: String,
    pub payment_mode: PaymentMode,
}

impl NewTransactionForm {
    /// Empty form dated `today` (`YYYY-MM-DD`) and paid by UPI.
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            date: today.into(),
            payment_mode: PaymentMode::default(),
        }
    }

    /// Check presence and amount, then build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found, in field order.
    pub fn validate(&self) -> Result<NewTransaction, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or(FormError::InvalidAmount)?;
        let date = self.date.trim();
        if date.is_empty() {
            return Err(FormError::MissingDate);
        }
        let category = Some(self.category.trim()).filter(|c| !c.is_empty()).map(str::to_owned);
        Ok(NewTransaction {
            description: description.to_owned(),
            amount,
            category,
            date: date.to_owned(),
            payment_mode: self.payment_mode,
        })
    }
}

/// One category's share of total spending.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub amount: f64,
    /// 0..=100.
    pub percent: f64,
}

/// Figures for the summary cards and the category breakdown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpendingSummary {
    pub total: f64,
    pub count: usize,
    /// Largest first; ties by name.
    pub categories: Vec<CategoryShare>,
}

impl SpendingSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        let mut total = 0.0;
        for t in transactions {
            total += t.amount;
            *by_category.entry(t.category_label()).or_default() += t.amount;
        }

        let mut categories: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(name, amount)| CategoryShare {
                name: name.to_owned(),
                amount,
                percent: if total > 0.0 { amount / total * 100.0 } else { 0.0 },
            })
            .collect();
        categories.sort_by(|a, b| b.amount.total_cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));

        Self { total, count: transactions.len(), categories }
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
