//! Shared helpers for CLI specs.
//!
//! Every spec gets an isolated temp home directory; the CLI resolves its
//! store file and agent state inside it via HOME and XDG_STATE_HOME.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Store file name inside the home directory.
pub const RC: &str = ".expanserc";

/// Isolated home directory backing one spec.
pub struct Home {
    temp: TempDir,
}

impl Home {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn rc_path(&self) -> PathBuf {
        self.temp.path().join(RC)
    }

    /// Seed the expansion file with raw contents.
    pub fn store(&self, contents: &str) -> &Self {
        fs::write(self.rc_path(), contents).expect("write store file");
        self
    }

    /// Raw contents of the expansion file.
    pub fn store_contents(&self) -> String {
        fs::read_to_string(self.rc_path()).expect("read store file")
    }

    /// Command builder for the `expanse` binary, pointed at this home.
    pub fn expanse(&self) -> Expanse {
        let mut cmd = assert_cmd::Command::cargo_bin("expanse").expect("expanse binary");
        cmd.env("HOME", self.temp.path());
        cmd.env("XDG_STATE_HOME", self.temp.path().join("state"));
        cmd.env("EDITOR", "true");
        cmd.env_remove("EXPANSE_LOG");
        Expanse { cmd }
    }
}

/// Thin wrapper so specs read as one chain: args -> run -> assert.
pub struct Expanse {
    cmd: assert_cmd::Command,
}

impl Expanse {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and require exit code 0.
    pub fn passes(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().success(),
        }
    }

    /// Run and require a non-zero exit code.
    pub fn fails(mut self) -> Checked {
        Checked {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Checked {
    assert: assert_cmd::assert::Assert,
}

impl Checked {
    pub fn stdout_eq(self, expected: &str) -> Self {
        Checked {
            assert: self.assert.stdout(expected.to_string()),
        }
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stdout(predicates::str::contains(needle)),
        }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Checked {
            assert: self.assert.stderr(predicates::str::contains(needle)),
        }
    }
}
