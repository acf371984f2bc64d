//! End-to-end tests for the register command over scripted stdio.

use std::io::Cursor;

use checkin_cli::cli::RegisterArgs;
use checkin_cli::commands::run_register_with;

fn args() -> RegisterArgs {
    RegisterArgs {
        no_clear: true,
        log_data: false,
    }
}

fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut joined = lines.join("\n");
    joined.push('\n');
    Cursor::new(joined.into_bytes())
}

#[test]
fn accepts_a_consistent_form_in_one_pass() {
    let input = script(&["Dana", "123456782", "1980", "3", "2", "1"]);
    let mut output = Vec::new();
    let result = run_register_with(&args(), 2026, input, &mut output).unwrap();

    assert_eq!(result.passes, 1);
    assert!(result.rows.iter().all(|row| row.valid));

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Hello and welcome!"));
    assert!(output.contains("Thank you!"));
    assert!(!output.contains("There was an error"));
    assert!(output.contains("New York"));
}

#[test]
fn reprompts_until_the_form_is_consistent() {
    // First pass: bad ID control digit and a flight time Tokyo does not
    // offer. Second pass corrects exactly those fields.
    let input = script(&[
        "Dana",
        "123456783",
        "1980",
        "4",
        "1",
        "2",
        "123456782",
        "4",
        "3",
    ]);
    let mut output = Vec::new();
    let result = run_register_with(&args(), 2026, input, &mut output).unwrap();

    assert_eq!(result.passes, 2);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("There was an error in at least one of the fields!"));
    assert!(output.contains("Thank you!"));
    // The name was accepted on the first pass and never asked again.
    assert_eq!(output.matches("What is your name?").count(), 1);
    assert_eq!(output.matches("What is your ID?").count(), 2);
}

#[test]
fn closed_input_fails_instead_of_looping() {
    let input = script(&["Dana", "123456782"]);
    let mut output = Vec::new();
    let err = run_register_with(&args(), 2026, input, &mut output).unwrap_err();
    assert!(err.to_string().contains("fill registration form"));
}

#[test]
fn goodbye_screen_renders_names_not_codes() {
    let input = script(&["Ada Lovelace", "123456782", "1990", "5", "3", "3"]);
    let mut output = Vec::new();
    run_register_with(&args(), 2026, input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Sydney"));
    assert!(output.contains("Business unlimited"));
    assert!(output.contains("Long haul (over 6 hours)"));
}
