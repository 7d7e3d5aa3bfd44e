//! Read-only command specs: list, show, get, dump.

use crate::prelude::*;

#[test]
fn list_prints_names_sorted() {
    let home = Home::new();
    home.store(r#"{"expansions": {"zeta": "z", "alpha": "a", "mid": "m"}}"#);

    home.expanse()
        .args(&["list"])
        .passes()
        .stdout_eq("alpha\nmid\nzeta\n");
}

#[test]
fn show_prints_name_then_body() {
    let home = Home::new();
    home.store(r#"{"expansions": {"sig": "Cheers"}}"#);

    home.expanse()
        .args(&["show", "sig"])
        .passes()
        .stdout_eq("'sig'\nCheers\n");
}

#[test]
fn show_missing_name_fails_visibly() {
    let home = Home::new();
    home.store(r#"{"expansions": {}}"#);

    home.expanse()
        .args(&["show", "missing"])
        .fails()
        .stdout_eq("")
        .stderr_has("no such expansion: missing");
}

#[test]
fn get_prints_bodies_for_known_names() {
    let home = Home::new();
    home.store(r#"{"expansions": {"a": "body-a", "b": "body-b"}}"#);

    home.expanse()
        .args(&["get", "a", "b"])
        .passes()
        .stdout_eq("body-a\nbody-b\n");
}

#[test]
fn get_silently_skips_unknown_names() {
    let home = Home::new();
    home.store(r#"{"expansions": {"a": "body-a"}}"#);

    home.expanse()
        .args(&["get", "a", "missing", "also-missing"])
        .passes()
        .stdout_eq("body-a\n");
}

#[test]
fn dump_flattens_newlines_to_a_visible_marker() {
    let home = Home::new();
    home.store(r#"{"expansions": {"sig": "Cheers,\nMe"}}"#);

    home.expanse()
        .args(&["dump"])
        .passes()
        .stdout_eq("sig\nCheers,\u{21b5}Me\n");
}

#[test]
fn dump_prints_every_pair() {
    let home = Home::new();
    home.store(r#"{"expansions": {"a": "1", "b": "2"}}"#);

    home.expanse()
        .args(&["dump"])
        .passes()
        .stdout_eq("a\n1\nb\n2\n");
}
