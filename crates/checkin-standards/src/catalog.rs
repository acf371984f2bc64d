//! Compiled-in name tables for the registration form.
//!
//! Each table is a fixed association of integer codes to display names.
//! Codes are assigned from 1 upward with no gaps; the doctor check
//! verifies this invariant over the shipped tables.

use checkin_model::NameTable;

/// Youngest accepted passenger age, in whole years.
pub const MIN_AGE: i32 = 15;
/// Oldest accepted passenger age, in whole years.
pub const MAX_AGE: i32 = 120;

/// Flight destinations on offer.
pub struct Destinations;

impl NameTable for Destinations {
    fn entries() -> &'static [(u32, &'static str)] {
        &[
            (1, "London"),
            (2, "Paris"),
            (3, "New York"),
            (4, "Tokyo"),
            (5, "Sydney"),
        ]
    }
}

/// Flight-time classes on offer.
pub struct FlightTimes;

impl NameTable for FlightTimes {
    fn entries() -> &'static [(u32, &'static str)] {
        &[
            (1, "Short haul (up to 3 hours)"),
            (2, "Medium haul (3 to 6 hours)"),
            (3, "Long haul (over 6 hours)"),
        ]
    }
}

/// Onboard Wi-Fi bundles on offer.
pub struct WifiBundles;

impl NameTable for WifiBundles {
    fn entries() -> &'static [(u32, &'static str)] {
        &[
            (1, "Basic messaging"),
            (2, "Surf & stream"),
            (3, "Business unlimited"),
        ]
    }
}

/// Inclusive code range of a table, for wiring range validators.
pub fn code_range<T: NameTable>() -> (u32, u32) {
    let entries = T::entries();
    let min = entries.iter().map(|(code, _)| *code).min().unwrap_or(0);
    let max = entries.iter().map(|(code, _)| *code).max().unwrap_or(0);
    (min, max)
}
