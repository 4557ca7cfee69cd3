//! The `gradebook highest` and `gradebook lowest` commands.

use std::path::PathBuf;

use anyhow::Result;

use crate::session::Session;
use crate::view;

#[derive(Debug, Clone, Copy)]
pub enum Rank {
    Highest,
    Lowest,
}

pub fn execute(data: Option<PathBuf>, config: Option<PathBuf>, rank: Rank) -> Result<()> {
    let session = Session::open(data, config)?;

    let (label, found) = match rank {
        Rank::Highest => ("Highest total", session.roster.highest()),
        Rank::Lowest => ("Lowest total", session.roster.lowest()),
    };

    match found {
        Some(record) => {
            println!("{}", view::record_table([record]));
            println!("{label} · {}", view::student_summary(record));
        }
        None => println!("No student records loaded."),
    }

    Ok(())
}
