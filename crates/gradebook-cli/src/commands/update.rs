//! The `gradebook update` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::error::RosterError;
use gradebook_core::model::Record;

use crate::session::Session;
use crate::view;

/// Field overrides; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct Changes {
    pub code: Option<i32>,
    pub name: Option<String>,
    pub cw1: Option<i32>,
    pub cw2: Option<i32>,
    pub cw3: Option<i32>,
    pub exam: Option<i32>,
}

impl Changes {
    fn apply(self, current: &Record) -> Record {
        Record {
            code: self.code.unwrap_or(current.code),
            name: self
                .name
                .map(|n| n.trim().to_string())
                .unwrap_or_else(|| current.name.clone()),
            cw1: self.cw1.unwrap_or(current.cw1),
            cw2: self.cw2.unwrap_or(current.cw2),
            cw3: self.cw3.unwrap_or(current.cw3),
            exam: self.exam.unwrap_or(current.exam),
        }
    }
}

pub fn execute(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    target: i32,
    changes: Changes,
) -> Result<()> {
    let mut session = Session::open(data, config)?;

    let current = session
        .roster
        .find_by_code(target)
        .ok_or(RosterError::NotFound(target))?;
    let updated = changes.apply(current);
    updated.validate()?;

    session.roster.update(target, updated.clone())?;
    session.save()?;

    println!("Updated {} ({}).", updated.name, updated.code);
    view::print_roster(session.roster.records());
    Ok(())
}
