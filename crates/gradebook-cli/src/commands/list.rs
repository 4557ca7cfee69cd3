//! The `gradebook list` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::session::Session;
use crate::view;

pub fn execute(data: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let session = Session::open(data, config)?;
    view::print_roster(session.roster.records());
    Ok(())
}
