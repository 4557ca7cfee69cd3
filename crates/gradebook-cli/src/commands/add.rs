//! The `gradebook add` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::model::Record;

use crate::session::Session;
use crate::view;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    code: i32,
    name: String,
    cw1: i32,
    cw2: i32,
    cw3: i32,
    exam: i32,
) -> Result<()> {
    let record = Record::new(code, name.trim(), cw1, cw2, cw3, exam);
    record.validate()?;

    let mut session = Session::open(data, config)?;
    session.roster.add(record.clone())?;
    session.save()?;

    println!("Added {} ({}).", record.name, record.code);
    view::print_roster(session.roster.records());
    Ok(())
}
