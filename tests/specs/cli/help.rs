//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_all_commands() {
    let home = Home::new();

    home.expanse()
        .args(&["--help"])
        .passes()
        .stdout_has("add")
        .stdout_has("edit")
        .stdout_has("delete")
        .stdout_has("list")
        .stdout_has("show")
        .stdout_has("get")
        .stdout_has("dump")
        .stdout_has("agent")
        .stdout_has("completions");
}

#[test]
fn snippet_commands_sit_at_the_top_level() {
    let home = Home::new();

    home.expanse()
        .args(&["add", "--help"])
        .passes()
        .stdout_has("--expansion");

    home.expanse()
        .args(&["delete", "--help"])
        .passes()
        .stdout_has("--yes");
}

#[test]
fn version_flag_prints_version() {
    let home = Home::new();

    home.expanse()
        .args(&["--version"])
        .passes()
        .stdout_has("expanse");
}

#[test]
fn completions_emit_a_script() {
    let home = Home::new();

    home.expanse()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("expanse");

    // Completions never touch the store
    assert!(!home.rc_path().exists());
}
