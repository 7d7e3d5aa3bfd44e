//! Agent lifecycle specs
//!
//! Spawn the expansed binary against a temp home, drive it through the CLI,
//! and shut it down over the socket.

use crate::prelude::*;
use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};

fn spawn_agent(home: &Home) -> Child {
    let bin = assert_cmd::cargo::cargo_bin("expansed");
    let mut child = Command::new(bin)
        .arg(home.rc_path())
        .env("HOME", home.path())
        .env("XDG_STATE_HOME", home.path().join("state"))
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn expansed");

    // The agent prints READY once the socket is bound
    let stdout = child.stdout.take().expect("agent stdout");
    let mut line = String::new();
    BufReader::new(stdout)
        .read_line(&mut line)
        .expect("read READY line");
    assert_eq!(line.trim(), "READY");

    child
}

#[test]
fn agent_serves_status_list_and_stops_on_request() {
    let home = Home::new();
    home.store(r#"{"expansions": {"sig": "Cheers"}}"#);

    let mut agent = spawn_agent(&home);

    home.expanse()
        .args(&["agent", "status"])
        .passes()
        .stdout_has("1 expansions");

    home.expanse()
        .args(&["agent", "list"])
        .passes()
        .stdout_eq("sig\n");

    home.expanse()
        .args(&["agent", "stop"])
        .passes()
        .stdout_has("Agent stopping");

    let status = agent.wait().expect("agent exit status");
    assert!(status.success());
}

#[test]
fn agent_creates_missing_store_without_prompting() {
    let home = Home::new();

    let mut agent = spawn_agent(&home);

    assert_eq!(home.store_contents(), r#"{"expansions":{}}"#);

    home.expanse().args(&["agent", "stop"]).passes();
    agent.wait().expect("agent exit status");
}

#[test]
fn agent_commands_fail_when_agent_is_not_running() {
    let home = Home::new();

    home.expanse()
        .args(&["agent", "status"])
        .fails()
        .stderr_has("not running");
}
