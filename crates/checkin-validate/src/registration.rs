//! Wiring of the passenger registration form: six fields, their
//! validators, and the two combination rules, all driven by the
//! compiled-in standards tables.

use checkin_model::{Coded, Field, FieldId, NameTable};
use checkin_standards::{
    Destinations, FlightTimes, MAX_AGE, MIN_AGE, WifiBundles, code_range,
    combinations::{DESTINATION_FLIGHT_TIMES, DESTINATION_WIFI_BUNDLES},
};

use crate::cross::CombinationRule;
use crate::form::Form;
use crate::id::IdChecksumValidator;
use crate::range::RangeValidator;
use crate::text::NoDigitValidator;

/// Handles to the registration form's fields, in prompt order.
pub struct RegistrationFields {
    pub name: FieldId,
    pub id: FieldId,
    pub birth_year: FieldId,
    pub destination: FieldId,
    pub flight_time: FieldId,
    pub wifi_bundle: FieldId,
}

/// Build the registration form. The acceptable birth-year window is
/// derived from the given calendar year and the shipped age bounds.
pub fn registration_form(current_year: i32) -> (Form, RegistrationFields) {
    let mut form = Form::new();

    let name = form.add_field(
        Field::<String>::new("name", "What is your name?").with_validator(NoDigitValidator),
    );
    let id = form.add_field(
        Field::<u32>::new("ID", "What is your ID?").with_validator(IdChecksumValidator),
    );
    let birth_year = form.add_field(
        Field::<i32>::new("year of birth", "What is your year of birth?").with_validator(
            RangeValidator::new(current_year - MAX_AGE, current_year - MIN_AGE),
        ),
    );

    let (min, max) = code_range::<Destinations>();
    let destination = form.add_field(
        Field::<Coded<Destinations>>::new(
            "destination",
            format!(
                "What is your flight destination?\n{}",
                Destinations::menu()
            ),
        )
        .with_validator(RangeValidator::new(Coded::new(min), Coded::new(max))),
    );

    let (min, max) = code_range::<FlightTimes>();
    let flight_time = form.add_field(
        Field::<Coded<FlightTimes>>::new(
            "flight time",
            format!(
                "What is your desired flight time range?\n{}",
                FlightTimes::menu()
            ),
        )
        .with_validator(RangeValidator::new(Coded::new(min), Coded::new(max))),
    );

    let (min, max) = code_range::<WifiBundles>();
    let wifi_bundle = form.add_field(
        Field::<Coded<WifiBundles>>::new(
            "wifi bundle",
            format!(
                "What is your desired WIFI bundle?\n{}",
                WifiBundles::menu()
            ),
        )
        .with_validator(RangeValidator::new(Coded::new(min), Coded::new(max))),
    );

    form.add_validator(CombinationRule::new(
        "REG_COMBO_TIME",
        "the selected flight time range is not offered for the selected destination",
        destination,
        flight_time,
        DESTINATION_FLIGHT_TIMES,
    ));
    form.add_validator(CombinationRule::new(
        "REG_COMBO_WIFI",
        "the selected WIFI bundle is not offered for the selected destination",
        destination,
        wifi_bundle,
        DESTINATION_WIFI_BUNDLES,
    ));

    let fields = RegistrationFields {
        name,
        id,
        birth_year,
        destination,
        flight_time,
        wifi_bundle,
    };
    (form, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_fields_in_prompt_order() {
        let (form, fields) = registration_form(2026);
        let rows = form.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[fields.name.index()].label, "name");
        assert_eq!(rows[fields.wifi_bundle.index()].label, "wifi bundle");
        assert!(rows.iter().all(|row| !row.valid));
    }

    #[test]
    fn destination_prompt_lists_the_catalog() {
        let (form, fields) = registration_form(2026);
        let prompt = form.field(fields.destination).unwrap().prompt().to_string();
        assert!(prompt.contains("1. London"));
        assert!(prompt.contains("5. Sydney"));
    }
}
