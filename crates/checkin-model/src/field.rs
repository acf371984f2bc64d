use std::fmt;
use std::str::FromStr;

use crate::error::{CheckinError, Result};

/// Single-value validation capability.
///
/// Implementations are pure predicates: no I/O, no mutation. A validator
/// judges one candidate value; relationships between fields are covered by
/// cross-field rules at the form level.
pub trait Validator<T> {
    fn validate(&self, value: &T) -> bool;
}

/// A value that can live inside a form field.
///
/// The closed set is small: free text, integer codes, and table-backed
/// coded values. `code` surfaces the numeric code through the object-safe
/// field seam so cross-field rules can compare coded fields without
/// knowing their concrete types.
pub trait FieldValue: fmt::Display + FromStr {
    /// Short description of the expected input, used in parse errors.
    const EXPECTED: &'static str = "a value";

    /// Numeric code for integer-coded values; `None` for free-form values.
    fn code(&self) -> Option<u32> {
        None
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "text";
}

impl FieldValue for u32 {
    const EXPECTED: &'static str = "a non-negative whole number";
}

impl FieldValue for i32 {
    const EXPECTED: &'static str = "a whole number";
}

/// Stable, insertion-ordered handle to a field inside a form.
///
/// Forms own their fields; everything else refers to them by index. This
/// keeps cross-field rules free of references into the field storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(usize);

impl FieldId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// One prompt/value/validity unit of a form.
///
/// A field starts unfilled and invalid. `assign` parses and stores a raw
/// input line; `validate` runs the attached validator (if any) against the
/// current value and records the outcome. The validity flag always
/// reflects the most recent validation of the current value.
pub struct Field<T> {
    label: String,
    prompt: String,
    value: Option<T>,
    valid: bool,
    validator: Option<Box<dyn Validator<T>>>,
}

impl<T: FieldValue> Field<T> {
    pub fn new(label: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            prompt: prompt.into(),
            value: None,
            valid: false,
            validator: None,
        }
    }

    /// Attach a validator, replacing any previous one. The slot holds at
    /// most one validator.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.set_validator(validator);
        self
    }

    pub fn set_validator(&mut self, validator: impl Validator<T> + 'static) {
        self.validator = Some(Box::new(validator));
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: FieldValue> FormField for Field<T> {
    fn label(&self) -> &str {
        &self.label
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn invalidate(&mut self) {
        self.valid = false;
    }

    fn assign(&mut self, raw: &str) -> Result<()> {
        let trimmed = raw.trim();
        match trimmed.parse::<T>() {
            Ok(value) => {
                self.value = Some(value);
                // Filled but unchecked until the next validate pass.
                self.valid = false;
                Ok(())
            }
            Err(_) => {
                self.valid = false;
                Err(CheckinError::Parse {
                    field: self.label.clone(),
                    input: trimmed.to_string(),
                    expected: T::EXPECTED,
                })
            }
        }
    }

    fn validate(&mut self) -> bool {
        self.valid = match (&self.validator, &self.value) {
            (Some(validator), Some(value)) => validator.validate(value),
            // A validator with nothing to judge: the field was never filled.
            (Some(_), None) => false,
            // No validator attached: vacuously valid.
            (None, _) => true,
        };
        self.valid
    }

    fn render_value(&self) -> Option<String> {
        self.value.as_ref().map(ToString::to_string)
    }

    fn code(&self) -> Option<u32> {
        self.value.as_ref().and_then(FieldValue::code)
    }
}

/// Object-safe view of a field, independent of its value type.
///
/// The form stores fields behind this trait and drives the shared
/// fill/validate lifecycle through it.
pub trait FormField {
    fn label(&self) -> &str;
    fn prompt(&self) -> &str;
    fn is_valid(&self) -> bool;
    fn invalidate(&mut self);
    /// Parse a raw input line and store the value. The field stays
    /// unchecked until the next `validate`.
    fn assign(&mut self, raw: &str) -> Result<()>;
    fn validate(&mut self) -> bool;
    /// The current value through its own `Display`, `None` when unfilled.
    fn render_value(&self) -> Option<String>;
    /// Numeric code of the current value, when the value is integer-coded.
    fn code(&self) -> Option<u32>;
}
