//! One command invocation's view of the roster: load once, save after each
//! successful mutation.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::serializer;
use gradebook_core::store::Roster;

pub struct Session {
    pub config: GradebookConfig,
    pub data_file: PathBuf,
    pub roster: Roster,
}

impl Session {
    /// Resolve the data file and load the roster from it.
    ///
    /// A missing data file is reported on stderr and the session carries on
    /// with an empty roster.
    pub fn open(data: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let config = load_config_from(config_path.as_deref())?;
        let data_file = data.unwrap_or_else(|| config.data_file.clone());

        let outcome = serializer::load(&data_file)
            .with_context(|| format!("failed to load roster from {}", data_file.display()))?;

        if outcome.is_missing() {
            eprintln!(
                "Warning: could not find {}; starting with an empty roster.",
                data_file.display()
            );
        }
        if outcome.skipped_lines > 0 {
            tracing::warn!(
                "skipped {} malformed line(s) in {}",
                outcome.skipped_lines,
                data_file.display()
            );
        }

        Ok(Self {
            config,
            data_file,
            roster: outcome.roster,
        })
    }

    pub fn save(&self) -> Result<()> {
        serializer::save(&self.roster, &self.data_file)
            .with_context(|| format!("failed to save roster to {}", self.data_file.display()))
    }
}
