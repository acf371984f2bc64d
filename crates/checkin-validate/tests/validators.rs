//! Validator contract tests through the public API.

use checkin_model::{Coded, Validator};
use checkin_standards::Destinations;
use checkin_validate::{
    IdChecksumValidator, NoDigitValidator, RangeValidator, check_digit, is_valid_id,
};

#[test]
fn range_validator_is_inclusive_on_both_ends() {
    let range = RangeValidator::new(10, 20);
    assert!(range.validate(&10));
    assert!(range.validate(&20));
    assert!(!range.validate(&9));
    assert!(!range.validate(&21));
}

#[test]
fn range_validator_orders_coded_values_by_code() {
    let range = RangeValidator::new(Coded::<Destinations>::new(1), Coded::new(5));
    assert!(range.validate(&Coded::new(1)));
    assert!(range.validate(&Coded::new(5)));
    assert!(!range.validate(&Coded::new(0)));
    assert!(!range.validate(&Coded::new(6)));
}

#[test]
fn no_digit_validator_contract() {
    assert!(NoDigitValidator.validate(&"abc".to_string()));
    assert!(!NoDigitValidator.validate(&"a1c".to_string()));
    assert!(NoDigitValidator.validate(&String::new()));
}

#[test]
fn id_checksum_round_trip() {
    // Build an ID from its body and the computed control digit; any other
    // final digit must be rejected.
    let body = 12_345_678;
    let id = body * 10 + check_digit(body);
    assert_eq!(id, 123_456_782);
    assert!(IdChecksumValidator.validate(&id));
    for wrong in (0..10).filter(|digit| *digit != check_digit(body)) {
        assert!(!is_valid_id(body * 10 + wrong));
    }
}

#[test]
fn short_ids_are_zero_padded() {
    assert!(is_valid_id(18));
    assert!(!is_valid_id(19));
}
