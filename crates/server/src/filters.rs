//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format a price with the currency symbol, e.g. `₹500.00`.
///
/// Usage in templates: `{{ course.price|price }}`
#[askama::filter_fn]
pub fn price(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("₹{value}"))
}
