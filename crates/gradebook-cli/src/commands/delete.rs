//! The `gradebook delete` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::error::RosterError;

use crate::session::Session;
use crate::view;

pub fn execute(data: Option<PathBuf>, config: Option<PathBuf>, code: i32, yes: bool) -> Result<()> {
    let mut session = Session::open(data, config)?;

    let record = session
        .roster
        .find_by_code(code)
        .ok_or(RosterError::NotFound(code))?;

    if !yes && !confirm(&format!("Delete {} ({})?", record.name, record.code))? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = session.roster.delete(code)?;
    session.save()?;

    println!("Deleted {} ({}).", removed.name, removed.code);
    view::print_roster(session.roster.records());
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    eprint!("{question} [y/N] ");
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
