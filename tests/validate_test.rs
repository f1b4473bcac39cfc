//! Validation gates: DD/MM/YYYY real-date rule and the form messages.

use chrono::NaiveDate;
use keepintouch_frontend::validate::{
    format_contact_date, is_valid_contact_date, normalize_contact_date, validate_new_friend,
    validate_row_edit, FormError,
};
use pretty_assertions::assert_eq;

#[test]
fn accepts_real_dates() {
    assert!(is_valid_contact_date("01/01/2020"));
    assert!(is_valid_contact_date("31/12/1999"));
    assert!(is_valid_contact_date("29/02/2024")); // leap year
}

#[test]
fn rejects_impossible_calendar_dates() {
    assert!(!is_valid_contact_date("31/02/2024"));
    assert!(!is_valid_contact_date("29/02/2023")); // not a leap year
    assert!(!is_valid_contact_date("00/01/2020"));
    assert!(!is_valid_contact_date("01/13/2020"));
}

#[test]
fn rejects_wrong_shapes() {
    assert!(!is_valid_contact_date(""));
    assert!(!is_valid_contact_date("1/1/2020"));
    assert!(!is_valid_contact_date("2020-01-01"));
    assert!(!is_valid_contact_date("01-01-2020"));
    assert!(!is_valid_contact_date("01/01/20"));
    assert!(!is_valid_contact_date("someday"));
    assert!(!is_valid_contact_date("01/01/2020 "));
}

#[test]
fn row_edit_gate_blocks_invalid_dates() {
    assert_eq!(validate_row_edit("31/02/2024"), Err(FormError::InvalidDate));
    assert_eq!(validate_row_edit("01/01/2020"), Ok(()));
}

#[test]
fn new_friend_gate_checks_name_first() {
    assert_eq!(validate_new_friend("", None), Err(FormError::EmptyName));
    assert_eq!(validate_new_friend("   ", None), Err(FormError::EmptyName));
    assert_eq!(
        validate_new_friend("Jane Doe", None),
        Err(FormError::NoDate)
    );
    let d = NaiveDate::from_ymd_opt(2023, 6, 6).unwrap();
    assert_eq!(validate_new_friend("Jane Doe", Some(d)), Ok(d));
}

#[test]
fn form_errors_carry_the_user_facing_messages() {
    assert_eq!(FormError::EmptyName.to_string(), "Name field is empty");
    assert_eq!(
        FormError::NoDate.to_string(),
        "No date selected. Enter approximate date if unknown"
    );
}

#[test]
fn formats_picked_dates_as_dd_mm_yyyy() {
    let d = NaiveDate::from_ymd_opt(2023, 6, 6).unwrap();
    assert_eq!(format_contact_date(d), "06/06/2023");
}

#[test]
fn normalization_converts_the_alternate_storage_form() {
    assert_eq!(normalize_contact_date("2023-06-06"), "06/06/2023");
    assert_eq!(normalize_contact_date("06/06/2023"), "06/06/2023");
    // Anything unrecognized passes through untouched.
    assert_eq!(normalize_contact_date("someday"), "someday");
}
