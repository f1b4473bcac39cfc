//! Client-side validation gates. These run before any network call; a
//! failure here is the only error category the user sees as a blocking
//! message (transport/status failures are only logged).

use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures with their user-facing messages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name field is empty")]
    EmptyName,
    #[error("No date selected. Enter approximate date if unknown")]
    NoDate,
    #[error("Last contacted must be a real date in DD/MM/YYYY format")]
    InvalidDate,
}

/// Strict DD/MM/YYYY check: two-digit day and month, four-digit year,
/// and a date that actually exists on the calendar ("31/02/2024" fails).
pub fn is_valid_contact_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }
    let digits = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits {
        return false;
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").is_ok()
}

/// Render a picked date in the wire format the service expects.
pub fn format_contact_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Display normalization: the service historically stored dates either as
/// DD/MM/YYYY or YYYY-MM-DD. Show the former; pass anything else through
/// untouched rather than guessing.
pub fn normalize_contact_date(s: &str) -> String {
    if is_valid_contact_date(s) {
        return s.to_string();
    }
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => format_contact_date(d),
        Err(_) => s.to_string(),
    }
}

/// Gate for the add-friend form: name must be non-empty and a date must
/// have been picked, in that order.
pub fn validate_new_friend(name: &str, date: Option<NaiveDate>) -> Result<NaiveDate, FormError> {
    if name.trim().is_empty() {
        return Err(FormError::EmptyName);
    }
    date.ok_or(FormError::NoDate)
}

/// Gate for committing a row edit: the edited LastContacted must be a
/// real DD/MM/YYYY date. Runs before the update request is built.
pub fn validate_row_edit(last_contacted: &str) -> Result<(), FormError> {
    if is_valid_contact_date(last_contacted) {
        Ok(())
    } else {
        Err(FormError::InvalidDate)
    }
}
