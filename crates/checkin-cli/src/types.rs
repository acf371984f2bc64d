use checkin_validate::FieldRow;

#[derive(Debug)]
pub struct RegistrationResult {
    /// Number of fill/validate passes the form took to become consistent.
    pub passes: usize,
    /// Accepted fields in prompt order.
    pub rows: Vec<FieldRow>,
}
