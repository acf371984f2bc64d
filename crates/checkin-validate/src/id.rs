//! ID number validation via the control digit.
//!
//! An ID is nine decimal digits, the last of which is a check digit
//! computed from the other eight. The computation: left-pad the leading
//! eight digits to full width, weight them alternately 1,2,1,2,... from
//! the left, replace any two-digit product by the sum of its digits, sum
//! the results, and take the tens' complement of the sum modulo 10. IDs
//! shorter than nine digits are treated as zero-padded on the left.

use checkin_model::Validator;

const ID_MAX: u32 = 999_999_999;

/// Check digit for an eight-digit ID body.
pub fn check_digit(body: u32) -> u32 {
    let mut sum = 0;
    for position in 0..8 {
        let digit = (body / 10_u32.pow(7 - position)) % 10;
        let weighted = digit * if position % 2 == 0 { 1 } else { 2 };
        sum += if weighted > 9 { weighted - 9 } else { weighted };
    }
    (10 - sum % 10) % 10
}

/// True iff the ID's final digit matches the check digit of its body.
/// IDs wider than nine digits are rejected outright.
pub fn is_valid_id(id: u32) -> bool {
    id <= ID_MAX && id % 10 == check_digit(id / 10)
}

pub struct IdChecksumValidator;

impl Validator<u32> for IdChecksumValidator {
    fn validate(&self, value: &u32) -> bool {
        is_valid_id(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_matches_known_vectors() {
        assert_eq!(check_digit(12_345_678), 2);
        assert_eq!(check_digit(1), 8);
        assert_eq!(check_digit(0), 0);
    }

    #[test]
    fn accepts_ids_with_a_correct_control_digit() {
        assert!(is_valid_id(123_456_782));
        assert!(is_valid_id(18));
    }

    #[test]
    fn flipping_the_control_digit_rejects_the_id() {
        assert!(!is_valid_id(123_456_783));
        assert!(!is_valid_id(19));
    }

    #[test]
    fn rejects_ids_wider_than_nine_digits() {
        assert!(!is_valid_id(1_234_567_820));
    }
}
