//! Cross-field rules: relationships between two fields that only make
//! sense once both fields hold individually valid values.

use checkin_model::{FieldId, FormField, IssueSeverity, ValidationIssue};

/// A validator over a pair of fields, addressed by form index.
///
/// Implementations read the fields' current codes through the object-safe
/// seam. A rule's verdict is only authoritative when both referenced
/// fields are individually valid; the form treats it as vacuously failing
/// otherwise and does not evaluate it.
pub trait CrossFieldValidator {
    /// The two fields this rule inspects.
    fn fields(&self) -> (FieldId, FieldId);

    /// True iff the pair of current values is an allowed combination.
    fn validate(&self, fields: &[Box<dyn FormField>]) -> bool;

    /// The issue reported when the rule evaluates false.
    fn issue(&self) -> ValidationIssue;
}

/// Membership check against a compiled-in association list: the left
/// field's code selects the set of right-field codes on offer.
pub struct CombinationRule {
    code: &'static str,
    message: String,
    left: FieldId,
    right: FieldId,
    allowed: &'static [(u32, &'static [u32])],
}

impl CombinationRule {
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        left: FieldId,
        right: FieldId,
        allowed: &'static [(u32, &'static [u32])],
    ) -> Self {
        Self {
            code,
            message: message.into(),
            left,
            right,
            allowed,
        }
    }

    fn code_of(fields: &[Box<dyn FormField>], id: FieldId) -> Option<u32> {
        fields.get(id.index()).and_then(|field| field.code())
    }
}

impl CrossFieldValidator for CombinationRule {
    fn fields(&self) -> (FieldId, FieldId) {
        (self.left, self.right)
    }

    fn validate(&self, fields: &[Box<dyn FormField>]) -> bool {
        let left = Self::code_of(fields, self.left);
        let right = Self::code_of(fields, self.right);
        match (left, right) {
            (Some(left), Some(right)) => self
                .allowed
                .iter()
                .find(|(candidate, _)| *candidate == left)
                .is_some_and(|(_, offers)| offers.contains(&right)),
            // An unset dependency can never certify the pair.
            _ => false,
        }
    }

    fn issue(&self) -> ValidationIssue {
        ValidationIssue {
            code: self.code.to_string(),
            message: self.message.clone(),
            severity: IssueSeverity::Error,
            field: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_model::{Coded, Field, NameTable};

    struct Left;
    impl NameTable for Left {
        fn entries() -> &'static [(u32, &'static str)] {
            &[(1, "near"), (2, "far")]
        }
    }

    struct Right;
    impl NameTable for Right {
        fn entries() -> &'static [(u32, &'static str)] {
            &[(1, "small"), (2, "large")]
        }
    }

    const PAIRS: &[(u32, &[u32])] = &[(1, &[1]), (2, &[1, 2])];

    fn fields_with(left: &str, right: &str) -> Vec<Box<dyn FormField>> {
        let mut a = Field::<Coded<Left>>::new("left", "left?");
        a.assign(left).unwrap();
        let mut b = Field::<Coded<Right>>::new("right", "right?");
        b.assign(right).unwrap();
        vec![Box::new(a), Box::new(b)]
    }

    fn rule() -> CombinationRule {
        CombinationRule::new(
            "TEST_COMBO",
            "pair is not on offer",
            FieldId::new(0),
            FieldId::new(1),
            PAIRS,
        )
    }

    #[test]
    fn allowed_pairs_pass() {
        assert!(rule().validate(&fields_with("1", "1")));
        assert!(rule().validate(&fields_with("2", "2")));
    }

    #[test]
    fn disallowed_pairs_fail() {
        assert!(!rule().validate(&fields_with("1", "2")));
    }

    #[test]
    fn unknown_left_code_fails() {
        assert!(!rule().validate(&fields_with("9", "1")));
    }

    #[test]
    fn unfilled_dependency_fails_instead_of_panicking() {
        let unfilled: Vec<Box<dyn FormField>> = vec![
            Box::new(Field::<Coded<Left>>::new("left", "left?")),
            Box::new(Field::<Coded<Right>>::new("right", "right?")),
        ];
        assert!(!rule().validate(&unfilled));
    }
}
