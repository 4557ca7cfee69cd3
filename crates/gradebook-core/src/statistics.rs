//! Class-level aggregate statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Grade, Record};
use crate::store::best_by_total;

/// Mean overall percentage of `records`.
///
/// Defined as 0.0 for an empty slice.
pub fn average(records: &[Record]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(Record::percent).sum::<f64>() / records.len() as f64
}

/// Count of records per letter grade. Every grade is present, even at zero.
pub fn grade_distribution(records: &[Record]) -> BTreeMap<Grade, usize> {
    let mut counts: BTreeMap<Grade, usize> = Grade::ALL.iter().map(|&g| (g, 0)).collect();
    for record in records {
        *counts.entry(record.grade()).or_default() += 1;
    }
    counts
}

/// A student singled out by a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStudent {
    pub code: i32,
    pub name: String,
    pub total: i64,
    pub percent: f64,
}

impl From<&Record> for RankedStudent {
    fn from(record: &Record) -> Self {
        Self {
            code: record.code,
            name: record.name.clone(),
            total: record.total(),
            percent: record.percent(),
        }
    }
}

/// Summary of a whole class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Number of students.
    pub student_count: usize,
    /// Mean overall percentage.
    pub average_percent: f64,
    /// Highest total (first in roster order on a tie).
    pub highest: Option<RankedStudent>,
    /// Lowest total (first in roster order on a tie).
    pub lowest: Option<RankedStudent>,
    /// Students per letter grade.
    pub grade_distribution: BTreeMap<Grade, usize>,
}

impl ClassSummary {
    pub fn compute(records: &[Record]) -> Self {
        Self {
            student_count: records.len(),
            average_percent: average(records),
            highest: best_by_total(records, |c, b| c > b).map(RankedStudent::from),
            lowest: best_by_total(records, |c, b| c < b).map(RankedStudent::from),
            grade_distribution: grade_distribution(records),
        }
    }
}
