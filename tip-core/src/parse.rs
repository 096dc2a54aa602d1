//! Parsing of the free-form cost field.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when the cost field cannot be turned into an amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCostError {
    #[error("cost of service is empty")]
    Empty,

    #[error("invalid cost of service '{input}'")]
    Invalid { input: String },

    #[error("cost of service cannot be negative ({value})")]
    Negative { value: Decimal },
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_cost_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses the cost field into a non-negative [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation (e.g. `"1.5e2"`).
pub fn parse_cost(s: &str) -> Result<Decimal, ParseCostError> {
    let normalized = normalize_cost_input(s);
    if normalized.is_empty() {
        return Err(ParseCostError::Empty);
    }

    let value = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| ParseCostError::Invalid {
            input: s.to_string(),
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseCostError::Negative { value });
    }
    Ok(value)
}

/// Parses the cost field, returning `None` for empty or invalid input.
///
/// Invalid (non-empty) input is logged at warn level; empty input is the
/// normal idle state and is not logged.
pub fn parse_optional_cost(s: &str) -> Option<Decimal> {
    match parse_cost(s) {
        Ok(value) => Some(value),
        Err(ParseCostError::Empty) => None,
        Err(e) => {
            tracing::warn!(input = %s, "ignoring cost of service: {}", e);
            None
        }
    }
}
