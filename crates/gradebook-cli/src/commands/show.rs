//! The `gradebook show` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::session::Session;
use crate::view;

pub fn execute(data: Option<PathBuf>, config: Option<PathBuf>, query: String) -> Result<()> {
    let session = Session::open(data, config)?;

    if session.roster.is_empty() {
        println!("No student records loaded.");
        return Ok(());
    }

    let matches = session.roster.lookup(&query);
    match matches.as_slice() {
        [] => anyhow::bail!("no matching student for '{}'", query.trim()),
        [record] => {
            println!("{}", view::record_table([*record]));
            println!("{}", view::student_summary(record));
        }
        many => {
            println!("Multiple students match '{}':", query.trim());
            for record in many {
                println!("  {}", view::candidate_line(record));
            }
            anyhow::bail!(
                "{} students match '{}'; re-run with a student code",
                many.len(),
                query.trim()
            );
        }
    }

    Ok(())
}
