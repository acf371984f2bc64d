//! Allowed combinations between destinations and the offers that depend
//! on them.
//!
//! Short routes only offer the shorter flight-time classes and the
//! lighter Wi-Fi bundles; long routes offer the heavier ones. The sets
//! are association lists keyed by destination code, evaluated by the
//! cross-field combination rules.

/// Destination code -> flight-time classes offered on that route.
pub const DESTINATION_FLIGHT_TIMES: &[(u32, &[u32])] = &[
    (1, &[1, 2]),    // London
    (2, &[1, 2]),    // Paris
    (3, &[2, 3]),    // New York
    (4, &[3]),       // Tokyo
    (5, &[3]),       // Sydney
];

/// Destination code -> Wi-Fi bundles offered on that route.
pub const DESTINATION_WIFI_BUNDLES: &[(u32, &[u32])] = &[
    (1, &[1, 2]),    // London
    (2, &[1, 2]),    // Paris
    (3, &[1, 2, 3]), // New York
    (4, &[2, 3]),    // Tokyo
    (5, &[1, 2, 3]), // Sydney
];

/// Flight-time classes offered for a destination; empty for unknown codes.
pub fn flight_times_for(destination: u32) -> &'static [u32] {
    allowed_for(DESTINATION_FLIGHT_TIMES, destination)
}

/// Wi-Fi bundles offered for a destination; empty for unknown codes.
pub fn wifi_bundles_for(destination: u32) -> &'static [u32] {
    allowed_for(DESTINATION_WIFI_BUNDLES, destination)
}

fn allowed_for(table: &'static [(u32, &'static [u32])], key: u32) -> &'static [u32] {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, allowed)| *allowed)
        .unwrap_or(&[])
}
