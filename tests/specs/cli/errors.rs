//! CLI error surface specs

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    let home = Home::new();
    home.expanse().args(&["frobnicate"]).fails();
}

#[test]
fn add_without_name_fails() {
    let home = Home::new();
    home.store(r#"{"expansions": {}}"#);
    home.expanse().args(&["add"]).fails();
}

#[test]
fn failures_keep_stdout_clean() {
    let home = Home::new();
    home.store(r#"{"expansions": {}}"#);

    home.expanse()
        .args(&["delete", "missing", "--yes"])
        .fails()
        .stdout_eq("");
}
