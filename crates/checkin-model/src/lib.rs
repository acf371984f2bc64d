pub mod coded;
pub mod error;
pub mod field;
pub mod report;

pub use coded::{Coded, NameTable};
pub use error::{CheckinError, Result};
pub use field::{Field, FieldId, FieldValue, FormField, Validator};
pub use report::{IssueSeverity, ValidationIssue, ValidationReport};
