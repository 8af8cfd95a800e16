//! Display formatting for amounts, percentages, and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `₹` amount with two decimals, e.g. `₹320.00`.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 { format!("-₹{:.2}", -amount) } else { format!("₹{amount:.2}") }
}

/// Percentage with one decimal, e.g. `60.0%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Leading `YYYY-MM-DD` of an ISO timestamp; other input is returned trimmed.
pub fn date_part(raw: &str) -> &str {
    let raw = raw.trim();
    match raw.get(..10) {
        Some(date) if is_iso_date(date) => date,
        _ => raw,
    }
}

fn is_iso_date(s: &str) -> bool {
    s.len() == 10
        && s.char_indices().all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() })
}

/// Today's local date as `YYYY-MM-DD`; empty outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
