//! Tests for checkin-model types through the public API.

use checkin_model::{Coded, Field, FormField, NameTable, Validator};

struct Lounges;

impl NameTable for Lounges {
    fn entries() -> &'static [(u32, &'static str)] {
        &[(1, "Quiet lounge"), (2, "Family lounge")]
    }
}

struct CodeAtMost(u32);

impl Validator<Coded<Lounges>> for CodeAtMost {
    fn validate(&self, value: &Coded<Lounges>) -> bool {
        value.code() <= self.0
    }
}

#[test]
fn field_lifecycle_through_object_safe_seam() {
    let mut field: Box<dyn FormField> = Box::new(
        Field::<Coded<Lounges>>::new("lounge", "Which lounge?").with_validator(CodeAtMost(2)),
    );

    // Unfilled: invalid, no value, no code.
    assert!(!field.is_valid());
    assert!(field.render_value().is_none());
    assert!(field.code().is_none());

    // Filled and checked: valid, renders the mapped name.
    field.assign("2").unwrap();
    assert!(field.validate());
    assert_eq!(field.render_value().as_deref(), Some("Family lounge"));
    assert_eq!(field.code(), Some(2));

    // Out-of-table code: rejected by the validator, renders the bare code.
    field.assign("7").unwrap();
    assert!(!field.validate());
    assert_eq!(field.render_value().as_deref(), Some("7"));
    assert_eq!(field.code(), Some(7));
}

#[test]
fn invalidate_forces_a_refill_without_touching_the_value() {
    let mut field: Box<dyn FormField> = Box::new(
        Field::<Coded<Lounges>>::new("lounge", "Which lounge?").with_validator(CodeAtMost(2)),
    );
    field.assign("1").unwrap();
    assert!(field.validate());

    field.invalidate();
    assert!(!field.is_valid());
    assert_eq!(field.code(), Some(1));

    // Re-validation restores the flag from the unchanged value.
    assert!(field.validate());
}

#[test]
fn assign_rejects_non_numeric_input_for_coded_fields() {
    let mut field: Box<dyn FormField> =
        Box::new(Field::<Coded<Lounges>>::new("lounge", "Which lounge?"));
    let err = field.assign("quiet").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("lounge"), "unexpected message: {message}");
    assert!(message.contains("quiet"), "unexpected message: {message}");
}
