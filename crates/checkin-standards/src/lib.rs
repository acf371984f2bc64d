#![deny(unsafe_code)]

pub mod catalog;
pub mod combinations;
pub mod doctor;

pub use crate::catalog::{Destinations, FlightTimes, MAX_AGE, MIN_AGE, WifiBundles, code_range};
pub use crate::combinations::{flight_times_for, wifi_bundles_for};
pub use crate::doctor::DoctorReport;
