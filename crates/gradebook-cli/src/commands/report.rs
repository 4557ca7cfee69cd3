//! The `gradebook report` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::model::fmt_percent;
use gradebook_core::report::RosterReport;

use crate::session::Session;

pub fn execute(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
    from: Option<PathBuf>,
) -> Result<()> {
    let report = match from {
        Some(path) => RosterReport::load_json(&path)?,
        None => {
            let session = Session::open(data, config)?;
            RosterReport::build(&session.roster, &session.data_file)
        }
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => print_text(&report),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_text(report: &RosterReport) {
    let summary = &report.summary;
    println!("Data file: {}", report.data_file.display());
    println!(
        "Generated: {}",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Students: {} · Class average: {}",
        summary.student_count,
        fmt_percent(summary.average_percent)
    );
    if let Some(top) = &summary.highest {
        println!(
            "Highest total: {} ({}) {}/160 · {}",
            top.name,
            top.code,
            top.total,
            fmt_percent(top.percent)
        );
    }
    if let Some(bottom) = &summary.lowest {
        println!(
            "Lowest total: {} ({}) {}/160 · {}",
            bottom.name,
            bottom.code,
            bottom.total,
            fmt_percent(bottom.percent)
        );
    }

    let mut table = Table::new();
    table.set_header(vec!["Grade", "Students"]);
    for (grade, count) in &summary.grade_distribution {
        table.add_row(vec![Cell::new(grade), Cell::new(count)]);
    }
    println!("{table}");
}
