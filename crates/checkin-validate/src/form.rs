//! The form engine: an ordered set of fields plus the cross-field rules
//! that tie them together.
//!
//! A field starts unfilled, holds an unchecked value after a read, and is
//! valid or invalid after a check; invalid fields cycle back through a
//! re-fill. The loop driving `fill_form`/`validate_form` terminates only
//! when every field is valid and every cross-field rule passes in the
//! same pass.

use std::fmt;

use tracing::debug;

use checkin_model::{
    FieldId, FormField, IssueSeverity, Result, ValidationIssue, ValidationReport,
};

use crate::console::Console;
use crate::cross::CrossFieldValidator;

/// Display row for one field: label, rendered value, validity.
#[derive(Debug, Clone)]
pub struct FieldRow {
    pub label: String,
    pub value: Option<String>,
    pub valid: bool,
}

#[derive(Default)]
pub struct Form {
    fields: Vec<Box<dyn FormField>>,
    cross: Vec<Box<dyn CrossFieldValidator>>,
    /// Outcome of each cross rule from the last `validate_form` pass;
    /// true means the rule was evaluated and rejected the pair.
    cross_failures: Vec<bool>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; insertion order is prompt and display order.
    pub fn add_field(&mut self, field: impl FormField + 'static) -> FieldId {
        self.fields.push(Box::new(field));
        FieldId::new(self.fields.len() - 1)
    }

    /// Append a cross-field rule.
    pub fn add_validator(&mut self, rule: impl CrossFieldValidator + 'static) {
        self.cross.push(Box::new(rule));
        self.cross_failures.push(false);
    }

    pub fn field(&self, id: FieldId) -> Option<&dyn FormField> {
        self.fields.get(id.index()).map(AsRef::as_ref)
    }

    /// Prompt for every field that is not currently valid, in insertion
    /// order. Fields already valid from a prior pass are never
    /// re-prompted. A line that fails to parse is rejected with a notice
    /// and the same field is prompted again immediately.
    pub fn fill_form(&mut self, console: &mut dyn Console) -> Result<()> {
        for field in &mut self.fields {
            if field.is_valid() {
                continue;
            }
            loop {
                let line = console.prompt_line(field.prompt())?;
                match field.assign(&line) {
                    Ok(()) => break,
                    Err(err) => console.notify(&format!("  {err}"))?,
                }
            }
            let valid = field.validate();
            debug!(field = %field.label(), valid, "field filled");
        }
        Ok(())
    }

    /// Re-validate every field against its current value (no input), then
    /// evaluate the cross-field rules. A rule whose two fields are not
    /// both individually valid counts as failing without being evaluated;
    /// a rule that evaluates false invalidates both its fields so the
    /// next fill pass re-prompts exactly those.
    pub fn validate_form(&mut self) -> bool {
        let mut correct = true;
        for field in &mut self.fields {
            correct &= field.validate();
        }
        for (rule, failed) in self.cross.iter().zip(self.cross_failures.iter_mut()) {
            *failed = false;
            let (left, right) = rule.fields();
            let dependencies_valid = self
                .fields
                .get(left.index())
                .is_some_and(|field| field.is_valid())
                && self
                    .fields
                    .get(right.index())
                    .is_some_and(|field| field.is_valid());
            if !dependencies_valid {
                correct = false;
                continue;
            }
            if !rule.validate(&self.fields) {
                *failed = true;
                correct = false;
                if let Some(field) = self.fields.get_mut(left.index()) {
                    field.invalidate();
                }
                if let Some(field) = self.fields.get_mut(right.index()) {
                    field.invalidate();
                }
                debug!(issue = %rule.issue().code, "cross-field rule rejected the pair");
            }
        }
        correct
    }

    /// Issues from the last validation pass: one per invalid field, one
    /// per cross rule that evaluated false.
    pub fn report(&self) -> ValidationReport {
        let mut issues = Vec::new();
        for field in &self.fields {
            if field.is_valid() {
                continue;
            }
            let message = match field.render_value() {
                Some(_) => format!("{} holds a value that was not accepted", field.label()),
                None => format!("{} has not been filled in", field.label()),
            };
            issues.push(ValidationIssue {
                code: "REG_FIELD".to_string(),
                message,
                severity: IssueSeverity::Error,
                field: Some(field.label().to_string()),
            });
        }
        for (rule, failed) in self.cross.iter().zip(&self.cross_failures) {
            if *failed {
                issues.push(rule.issue());
            }
        }
        ValidationReport { issues }
    }

    /// One row per field, in insertion order.
    pub fn rows(&self) -> Vec<FieldRow> {
        self.fields
            .iter()
            .map(|field| FieldRow {
                label: field.label().to_string(),
                value: field.render_value(),
                valid: field.is_valid(),
            })
            .collect()
    }

    pub(crate) fn fields(&self) -> &[Box<dyn FormField>] {
        &self.fields
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields() {
            let value = field.render_value().unwrap_or_default();
            write!(f, "{}: {}", field.label(), value)?;
            if !field.is_valid() {
                write!(f, "  (needs correction)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
