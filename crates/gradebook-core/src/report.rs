//! Roster summary report with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Grade, Record};
use crate::statistics::ClassSummary;
use crate::store::Roster;

/// A point-in-time snapshot of the roster and its statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Data file the roster was loaded from.
    pub data_file: PathBuf,
    /// Class-level statistics.
    pub summary: ClassSummary,
    /// One row per student, in roster order.
    pub students: Vec<StudentRow>,
}

/// A student as shown in the roster table, with derived fields filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRow {
    pub code: i32,
    pub name: String,
    pub cw_total: i64,
    pub exam: i32,
    pub total: i64,
    pub percent: f64,
    pub grade: Grade,
}

impl From<&Record> for StudentRow {
    fn from(r: &Record) -> Self {
        Self {
            code: r.code,
            name: r.name.clone(),
            cw_total: r.cw_total(),
            exam: r.exam,
            total: r.total(),
            percent: r.percent(),
            grade: r.grade(),
        }
    }
}

impl RosterReport {
    pub fn build(roster: &Roster, data_file: &Path) -> Self {
        Self {
            created_at: Utc::now(),
            data_file: data_file.to_path_buf(),
            summary: ClassSummary::compute(roster.records()),
            students: roster.iter().map(StudentRow::from).collect(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RosterReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_records(vec![
            Record::new(1001, "Alice", 18, 19, 20, 90),
            Record::new(1002, "Bob", 5, 5, 5, 20),
        ])
    }

    #[test]
    fn build_fills_rows_in_order() {
        let report = RosterReport::build(&roster(), Path::new("studentMarks.txt"));
        assert_eq!(report.students.len(), 2);
        assert_eq!(report.students[0].code, 1001);
        assert_eq!(report.students[0].total, 147);
        assert_eq!(report.students[0].grade, Grade::A);
        assert_eq!(report.students[1].grade, Grade::F);
        assert_eq!(report.summary.student_count, 2);
        assert_eq!(report.data_file, PathBuf::from("studentMarks.txt"));
    }

    #[test]
    fn json_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let report = RosterReport::build(&roster(), Path::new("marks.txt"));
        report.save_json(&path).unwrap();

        let loaded = RosterReport::load_json(&path).unwrap();
        assert_eq!(loaded.students.len(), 2);
        assert_eq!(loaded.summary.grade_distribution[&Grade::A], 1);
        assert_eq!(loaded.created_at, report.created_at);
    }

    #[test]
    fn load_missing_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RosterReport::load_json(&dir.path().join("nope.json")).is_err());
    }
}
