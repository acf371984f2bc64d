//! Tests over the shipped reference tables.

use checkin_model::{Coded, NameTable};
use checkin_standards::{
    Destinations, FlightTimes, WifiBundles, flight_times_for, wifi_bundles_for,
};

#[test]
fn coded_values_render_catalog_names() {
    let destination: Coded<Destinations> = Coded::new(3);
    assert_eq!(destination.to_string(), "New York");

    let class: Coded<FlightTimes> = Coded::new(1);
    assert_eq!(class.to_string(), "Short haul (up to 3 hours)");

    let out_of_table: Coded<WifiBundles> = Coded::new(12);
    assert_eq!(out_of_table.to_string(), "12");
}

#[test]
fn menus_list_every_offer() {
    let menu = Destinations::menu();
    for (_, name) in Destinations::entries() {
        assert!(menu.contains(name), "menu is missing {name}");
    }
}

#[test]
fn combination_sets_cover_every_destination() {
    for (destination, _) in Destinations::entries() {
        assert!(
            !flight_times_for(*destination).is_empty(),
            "destination {destination} offers no flight-time class"
        );
        assert!(
            !wifi_bundles_for(*destination).is_empty(),
            "destination {destination} offers no wifi bundle"
        );
    }
}

#[test]
fn combination_sets_only_reference_defined_codes() {
    for (destination, classes) in checkin_standards::combinations::DESTINATION_FLIGHT_TIMES {
        assert!(Destinations::name(*destination).is_some());
        for class in *classes {
            assert!(FlightTimes::name(*class).is_some());
        }
    }
    for (destination, bundles) in checkin_standards::combinations::DESTINATION_WIFI_BUNDLES {
        assert!(Destinations::name(*destination).is_some());
        for bundle in *bundles {
            assert!(WifiBundles::name(*bundle).is_some());
        }
    }
}
