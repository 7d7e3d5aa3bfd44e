//! Store bootstrap and validation specs
//!
//! Every snippet command validates the store file before running; a missing
//! file is created only after an interactive confirmation.

use crate::prelude::*;

#[test]
fn invalid_store_file_aborts_with_diagnostic() {
    let home = Home::new();
    home.store("blegh");

    home.expanse()
        .args(&["list"])
        .fails()
        .stderr_has("could not access expansion file");

    // Nothing was written
    assert_eq!(home.store_contents(), "blegh");
}

#[test]
fn store_missing_required_field_is_invalid() {
    let home = Home::new();
    home.store(r#"{"snippets": {}}"#);

    home.expanse()
        .args(&["list"])
        .fails()
        .stderr_has("could not access expansion file");
}

#[test]
fn valid_store_passes_without_rewrite() {
    let home = Home::new();
    home.store(r#"{"expansions": {}}"#);

    home.expanse().args(&["list"]).passes().stdout_eq("");

    // Untouched, including formatting
    assert_eq!(home.store_contents(), r#"{"expansions": {}}"#);
}

#[test]
fn missing_store_created_on_confirmation() {
    let home = Home::new();

    home.expanse()
        .args(&["list"])
        .stdin("y\n")
        .passes()
        .stderr_has("Expansion file does not exist. Create?");

    assert_eq!(home.store_contents(), r#"{"expansions":{}}"#);
}

#[test]
fn missing_store_declined_creates_nothing() {
    let home = Home::new();

    home.expanse()
        .args(&["list"])
        .stdin("n\n")
        .fails()
        .stderr_has("aborted");

    assert!(!home.rc_path().exists());
}

#[test]
fn closed_stdin_counts_as_declined() {
    let home = Home::new();

    home.expanse().args(&["list"]).stdin("").fails();

    assert!(!home.rc_path().exists());
}

#[test]
fn custom_store_path_via_flag() {
    let home = Home::new();
    let custom = home.path().join("custom.json");
    std::fs::write(&custom, r#"{"expansions": {"foo": "bar"}}"#).unwrap();

    home.expanse()
        .args(&["-f", custom.to_str().unwrap(), "show", "foo"])
        .passes()
        .stdout_has("bar");

    // The default location was never created
    assert!(!home.rc_path().exists());
}
