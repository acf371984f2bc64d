//! Consistency check over the compiled-in tables.
//!
//! The tables ship inside the binary, so a broken edit (duplicate code,
//! a combination set naming a code no table defines) would otherwise
//! surface only as confusing runtime behavior. The doctor walks every
//! table and combination set and reports findings.

use checkin_model::NameTable;

use crate::catalog::{Destinations, FlightTimes, WifiBundles};
use crate::combinations::{DESTINATION_FLIGHT_TIMES, DESTINATION_WIFI_BUNDLES};

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub counts: DoctorCounts,
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub destinations: usize,
    pub flight_times: usize,
    pub wifi_bundles: usize,
    pub flight_time_pairs: usize,
    pub wifi_bundle_pairs: usize,
}

impl DoctorReport {
    pub fn run() -> Self {
        let mut findings = Vec::new();

        check_table::<Destinations>("destinations", &mut findings);
        check_table::<FlightTimes>("flight times", &mut findings);
        check_table::<WifiBundles>("wifi bundles", &mut findings);

        check_combinations::<Destinations, FlightTimes>(
            "destination/flight-time",
            DESTINATION_FLIGHT_TIMES,
            &mut findings,
        );
        check_combinations::<Destinations, WifiBundles>(
            "destination/wifi-bundle",
            DESTINATION_WIFI_BUNDLES,
            &mut findings,
        );

        Self {
            schema: "checkin.standards-doctor".to_string(),
            schema_version: 1,
            counts: DoctorCounts {
                destinations: Destinations::entries().len(),
                flight_times: FlightTimes::entries().len(),
                wifi_bundles: WifiBundles::entries().len(),
                flight_time_pairs: DESTINATION_FLIGHT_TIMES.len(),
                wifi_bundle_pairs: DESTINATION_WIFI_BUNDLES.len(),
            },
            findings,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Codes must be unique, contiguous from 1, and carry non-empty names.
fn check_table<T: NameTable>(table: &str, findings: &mut Vec<String>) {
    let entries = T::entries();
    if entries.is_empty() {
        findings.push(format!("{table}: table is empty"));
        return;
    }
    for (index, (code, name)) in entries.iter().enumerate() {
        let expected = index as u32 + 1;
        if *code != expected {
            findings.push(format!(
                "{table}: code {code} at position {index} breaks the contiguous 1..n numbering"
            ));
        }
        if name.trim().is_empty() {
            findings.push(format!("{table}: code {code} has an empty name"));
        }
    }
}

/// Every pair set must key off a defined left code, reference only
/// defined right codes, cover every left code, and offer at least one
/// right code per entry.
fn check_combinations<L: NameTable, R: NameTable>(
    set: &str,
    pairs: &[(u32, &[u32])],
    findings: &mut Vec<String>,
) {
    for (left, allowed) in pairs {
        if L::name(*left).is_none() {
            findings.push(format!("{set}: pair set references unknown code {left}"));
        }
        if allowed.is_empty() {
            findings.push(format!("{set}: code {left} offers no valid option"));
        }
        for right in *allowed {
            if R::name(*right).is_none() {
                findings.push(format!(
                    "{set}: code {left} allows unknown option code {right}"
                ));
            }
        }
    }
    for (left, _) in L::entries() {
        if !pairs.iter().any(|(candidate, _)| candidate == left) {
            findings.push(format!("{set}: code {left} is missing from the pair set"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_are_healthy() {
        let report = DoctorReport::run();
        assert!(report.is_healthy(), "findings: {:?}", report.findings);
        assert_eq!(report.counts.destinations, 5);
        assert_eq!(report.counts.flight_time_pairs, 5);
    }

    #[test]
    fn report_serializes() {
        let report = DoctorReport::run();
        let json = serde_json::to_string(&report).expect("serialize doctor report");
        assert!(json.contains("checkin.standards-doctor"));
    }
}
