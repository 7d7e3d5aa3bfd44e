//! Store persistence specs
//!
//! Mutations rewrite the whole file; reloading yields the same mapping.

use crate::prelude::*;

#[test]
fn add_then_reload_round_trips() {
    let home = Home::new();
    home.store(r#"{"expansions":{}}"#);

    home.expanse()
        .args(&["add", "foo", "-e", "bar"])
        .passes();

    assert_eq!(home.store_contents(), r#"{"expansions":{"foo":"bar"}}"#);

    home.expanse().args(&["show", "foo"]).passes().stdout_has("bar");
}

#[test]
fn delete_then_reload_yields_empty_mapping() {
    let home = Home::new();
    home.store(r#"{"expansions":{"foo":"bar"}}"#);

    home.expanse().args(&["delete", "foo", "--yes"]).passes();

    assert_eq!(home.store_contents(), r#"{"expansions":{}}"#);
}

#[test]
fn key_order_in_file_does_not_matter() {
    let home = Home::new();
    home.store(r#"{"expansions": {"zeta": "z", "alpha": "a"}}"#);

    home.expanse()
        .args(&["list"])
        .passes()
        .stdout_eq("alpha\nzeta\n");
}

#[test]
fn bodies_with_newlines_survive_the_round_trip() {
    let home = Home::new();
    home.store(r#"{"expansions":{}}"#);

    home.expanse()
        .args(&["add", "sig", "-e", "Cheers,\nMe"])
        .passes();

    home.expanse()
        .args(&["show", "sig"])
        .passes()
        .stdout_eq("'sig'\nCheers,\nMe\n");
}

#[test]
fn save_leaves_no_temp_files_in_home() {
    let home = Home::new();
    home.store(r#"{"expansions":{}}"#);

    home.expanse().args(&["add", "foo", "-e", "bar"]).passes();

    let names: Vec<String> = std::fs::read_dir(home.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec![RC]);
}
