// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snippet commands: add, edit, delete, list, show, get, dump.
//!
//! Each command loads the full record, applies at most one mutation, and
//! saves the whole record back.

use crate::error;
use anyhow::Result;
use expanse_core::{
    AlwaysYes, Confirm, Editor, Expansions, Store, StoreError, TerminalConfirm,
};
use std::io::Read;

#[derive(clap::Args)]
pub struct AddArgs {
    /// Expansion name
    pub name: String,

    /// Inline expansion body; read from stdin when omitted
    #[arg(short = 'e', long = "expansion")]
    pub expansion: Option<String>,

    /// Overwrite an existing expansion without prompting
    #[arg(long)]
    pub yes: bool,
}

pub fn add(store: &Store, args: AddArgs) -> Result<()> {
    let mut record = store.load();
    let guard: &dyn Confirm = if args.yes { &AlwaysYes } else { &TerminalConfirm };

    match args.expansion {
        Some(body) => record.upsert_guarded(&args.name, body, guard)?,
        None => {
            // Settle the overwrite question before stdin is consumed by the body read
            if record.get(&args.name).is_some()
                && !guard.confirm(&format!(
                    "Expansion '{}' already exists. Overwrite?",
                    args.name
                ))
            {
                return Err(StoreError::Declined.into());
            }
            eprintln!("Enter expansion. Terminate with ctrl-D:");
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            record.upsert(&args.name, body.trim());
        }
    }

    save(store, &record)
}

pub fn edit(store: &Store, name: &str, editor: &dyn Editor) -> Result<()> {
    let mut record = store.load();

    let initial = match record.get(name) {
        Some(body) => body.to_string(),
        None => {
            eprintln!("No such expansion: {}, creating new one", name);
            String::new()
        }
    };

    let Some(body) = editor.edit(&initial)? else {
        anyhow::bail!("edit cancelled, nothing saved");
    };

    record.upsert(name, body);
    save(store, &record)
}

pub fn delete(store: &Store, name: &str, yes: bool) -> Result<()> {
    if !yes && !TerminalConfirm.confirm("Really delete expansion?") {
        return Err(StoreError::Declined.into());
    }

    let mut record = store.load();
    record.remove(name)?;
    save(store, &record)
}

pub fn list(store: &Store) -> Result<()> {
    let record = store.load();
    for name in record.names() {
        println!("{}", name);
    }
    Ok(())
}

pub fn show(store: &Store, name: &str) -> Result<()> {
    let record = store.load();
    match record.get(name) {
        Some(body) => {
            println!("'{}'", name);
            println!("{}", body);
            Ok(())
        }
        None => Err(StoreError::NotFound {
            name: name.to_string(),
        }
        .into()),
    }
}

pub fn get(store: &Store, names: &[String]) -> Result<()> {
    let record = store.load();
    for name in names {
        if let Some(body) = record.get(name) {
            println!("{}", body);
        }
    }
    Ok(())
}

pub fn dump(store: &Store) -> Result<()> {
    let record = store.load();
    for (name, body) in record.dump() {
        println!("{}", name);
        println!("{}", body);
    }
    Ok(())
}

fn save(store: &Store, record: &Expansions) -> Result<()> {
    store
        .save(record)
        .map_err(|e| error::write_failed(store.path(), e).into())
}
