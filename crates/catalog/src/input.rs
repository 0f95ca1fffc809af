//! Validation of raw user input (form fields, document values).

use grocer_core::{DomainError, DomainResult};

/// Parse a user-typed quantity.
///
/// Accepts `,` or `.` as decimal separator. The result is finite and `> 0`.
pub fn parse_quantity(text: &str) -> DomainResult<f64> {
    let normalized = text.trim().replace(',', ".");
    let quantity: f64 = normalized
        .parse()
        .map_err(|_| DomainError::validation(format!("quantity '{}' is not a number", text.trim())))?;
    check_quantity(quantity)
}

/// Reject quantities that cannot appear on a shopping list.
pub fn check_quantity(quantity: f64) -> DomainResult<f64> {
    if !quantity.is_finite() {
        return Err(DomainError::validation("quantity must be a finite number"));
    }
    if quantity <= 0.0 {
        return Err(DomainError::validation("quantity must be greater than zero"));
    }
    Ok(quantity)
}

/// Trimmed, non-empty text for a required field.
pub fn required_text(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed text, with blank values treated as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Lookup form of a catalog name (aisle, unit): trimmed and lower-cased.
pub(crate) fn lookup_key(value: &str) -> String {
    value.trim().to_lowercase()
}
