use crate::common::{error::LedgerError, money::Money};

/// Smallest amount a deposit or withdrawal may carry (0.01).
pub const MIN_OPERATION_AMOUNT: Money = Money::new(100);

/// Trims `value` and rejects it if nothing is left.
pub fn validate_name(value: &str, field_name: &str) -> Result<String, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid(format!(
            "{} can not be empty string.",
            capitalize(field_name)
        )));
    }
    Ok(trimmed.to_string())
}

/// Accepts `value` if it is at least `min_value` (when given) and not negative.
pub fn validate_initial_balance(
    value: Money,
    min_value: Option<Money>,
) -> Result<Money, LedgerError> {
    if let Some(min) = min_value {
        if value < min {
            return Err(LedgerError::invalid(format!(
                "The value must be at least {min}."
            )));
        }
    }
    if value.is_negative() {
        return Err(LedgerError::invalid("The value must be a positive number."));
    }
    Ok(value)
}

/// Same as [`validate_initial_balance`], and additionally rejects zero:
/// a zero balance is fine, a zero operation amount is not.
pub fn validate_real_number(value: Money, min_value: Option<Money>) -> Result<Money, LedgerError> {
    let value = validate_initial_balance(value, min_value)?;
    if value.is_zero() {
        return Err(LedgerError::invalid("The value can not be 0."));
    }
    Ok(value)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
