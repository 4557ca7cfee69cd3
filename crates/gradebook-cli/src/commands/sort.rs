//! The `gradebook sort` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::model::SortOrder;

use crate::session::Session;
use crate::view;

pub fn execute(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    ascending: bool,
    descending: bool,
) -> Result<()> {
    let mut session = Session::open(data, config)?;

    if session.roster.is_empty() {
        println!("No student records loaded.");
        return Ok(());
    }

    let order = if ascending {
        SortOrder::Ascending
    } else if descending {
        SortOrder::Descending
    } else {
        session.config.default_sort
    };

    session.roster.sort_by_percent(order);
    session.save()?;

    println!("Sorted by overall % ({order}).");
    view::print_roster(session.roster.records());
    Ok(())
}
