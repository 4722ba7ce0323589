use unicode_segmentation::UnicodeSegmentation;

use crate::domain::RequestError;

/// Exclusive upper bound for every amount the gateway accepts, in cents.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// `[a-zA-Z0-9_-]`
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// `[a-zA-Z0-9_- ]`
pub(crate) fn is_text_char(c: char) -> bool {
    is_identifier_char(c) || c == ' '
}

pub(crate) fn check_text(
    field: &'static str,
    value: &str,
    max_len: usize,
    allowed: fn(char) -> bool,
) -> Result<(), RequestError> {
    let is_too_long = value.graphemes(true).count() > max_len;
    let contains_forbidden_chars = !value.chars().all(allowed);

    if is_too_long {
        Err(RequestError::invalid(
            field,
            format!("must be at most {} characters long", max_len),
        ))
    } else if contains_forbidden_chars {
        Err(RequestError::invalid(field, "contains forbidden characters"))
    } else {
        Ok(())
    }
}

pub(crate) fn check_amount(
    field: &'static str,
    amount: i64,
    allow_zero: bool,
) -> Result<(), RequestError> {
    if amount < 0 || (amount == 0 && !allow_zero) {
        let bound = if allow_zero { "zero or positive" } else { "positive" };
        return Err(RequestError::invalid(field, format!("must be {}", bound)));
    }
    if amount >= MAX_AMOUNT {
        return Err(RequestError::invalid(field, "is too high"));
    }
    Ok(())
}
