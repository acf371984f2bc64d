use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{debug, info};

use checkin_standards::DoctorReport;
use checkin_validate::{Console, LineConsole, registration_form};

use crate::cli::RegisterArgs;
use crate::logging::redact_value;
use crate::summary::{render_catalog, render_form_table};
use crate::types::RegistrationResult;

/// ANSI clear-and-home; the terminal-clear collaborator.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Run the interactive registration loop over stdio, bounding the
/// birth-year window with the calendar year from the system clock.
pub fn run_register(args: &RegisterArgs) -> Result<RegistrationResult> {
    let current_year = chrono::Local::now().year();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_register_with(args, current_year, stdin, stdout)
}

/// The registration loop over an arbitrary console, for tests and for
/// `run_register`. Fields that failed the previous pass are re-prompted;
/// fields already accepted are left alone.
pub fn run_register_with<R: BufRead, W: Write>(
    args: &RegisterArgs,
    current_year: i32,
    reader: R,
    writer: W,
) -> Result<RegistrationResult> {
    let (mut form, _fields) = registration_form(current_year);
    let mut console = LineConsole::new(reader, writer);
    let clear = !args.no_clear;

    if clear {
        console.notify(CLEAR_SCREEN)?;
    }
    console.notify(&welcome_banner())?;
    form.fill_form(&mut console).context("fill registration form")?;

    let mut passes = 1usize;
    while !form.validate_form() {
        let report = form.report();
        debug!(
            errors = report.error_count(),
            passes, "form rejected, re-prompting"
        );
        passes += 1;
        if clear {
            console.notify(CLEAR_SCREEN)?;
        }
        console.notify(&error_banner())?;
        console.notify(&render_form_table(&form))?;
        form.fill_form(&mut console).context("fill registration form")?;
    }

    if clear {
        console.notify(CLEAR_SCREEN)?;
    }
    console.notify(&goodbye_banner())?;
    console.notify(&render_form_table(&form))?;

    let rows = form.rows();
    for row in &rows {
        debug!(
            field = %row.label,
            value = %redact_value(row.value.as_deref().unwrap_or_default()),
            "field accepted"
        );
    }
    info!(passes, "registration accepted");
    Ok(RegistrationResult { passes, rows })
}

/// Print the offer catalogs.
pub fn run_catalog() {
    println!("{}", render_catalog());
}

/// Check the compiled-in catalogs and print the outcome.
pub fn run_doctor() -> DoctorReport {
    let report = DoctorReport::run();
    println!(
        "Catalogs: {} destinations, {} flight time ranges, {} WIFI bundles",
        report.counts.destinations, report.counts.flight_times, report.counts.wifi_bundles
    );
    println!(
        "Offer sets: {} flight-time pairs, {} wifi-bundle pairs",
        report.counts.flight_time_pairs, report.counts.wifi_bundle_pairs
    );
    if report.is_healthy() {
        println!("All catalogs are consistent.");
    } else {
        for finding in &report.findings {
            eprintln!("- {finding}");
        }
    }
    report
}

fn welcome_banner() -> String {
    "+----------------------------------------------------------+\n\
     |                  Hello and welcome!                      |\n\
     |  In order to register please fill in the fields below    |\n\
     +----------------------------------------------------------+"
        .to_string()
}

fn error_banner() -> String {
    "+----------------------------------------------------------+\n\
     |     There was an error in at least one of the fields!    |\n\
     |                Please correct the error(s)               |\n\
     +----------------------------------------------------------+"
        .to_string()
}

fn goodbye_banner() -> String {
    "+----------------------------------------------------------+\n\
     |                      Thank you!                          |\n\
     |               This is the data you sent:                 |\n\
     +----------------------------------------------------------+"
        .to_string()
}
