//! The `gradebook init` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::config::{GradebookConfig, CONFIG_FILE_NAME};
use gradebook_core::serializer;
use gradebook_core::store::Roster;

pub fn execute(data: Option<PathBuf>) -> Result<()> {
    let data_path = data.unwrap_or_else(|| GradebookConfig::default().data_file);

    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
    } else {
        std::fs::write(config_path, sample_config(&data_path))?;
        println!("Created {CONFIG_FILE_NAME}");
    }

    if data_path.exists() {
        println!("{} already exists, skipping.", data_path.display());
    } else {
        serializer::save(&Roster::new(), &data_path)?;
        println!("Created {}", data_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Add a student: gradebook add --code 1001 --name \"Ada Lovelace\" --cw1 18 --cw2 19 --cw3 20 --exam 90");
    println!("  2. View the roster: gradebook list");

    Ok(())
}

fn sample_config(data_path: &Path) -> String {
    format!(
        r#"# gradebook configuration

# Roster data file, relative to this config file.
data_file = {}

# Order used by `gradebook sort` when neither --ascending nor --descending is given.
default_sort = "descending"
"#,
        toml::Value::String(data_path.display().to_string())
    )
}
