//! Core data model types for gradebook.
//!
//! A [`Record`] stores only the raw component scores. Totals, percentages,
//! and grades are derived on demand and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// Maximum combined coursework + exam marks.
pub const MAX_TOTAL: i64 = 160;

/// Valid student code range (inclusive).
pub const CODE_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Valid range for each coursework component (inclusive).
pub const COURSEWORK_RANGE: std::ops::RangeInclusive<i32> = 0..=20;

/// Valid exam range (inclusive).
pub const EXAM_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// One student's performance entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Student code, unique within a roster.
    pub code: i32,
    /// Student name.
    pub name: String,
    /// Coursework 1 (out of 20).
    pub cw1: i32,
    /// Coursework 2 (out of 20).
    pub cw2: i32,
    /// Coursework 3 (out of 20).
    pub cw3: i32,
    /// Exam mark (out of 100).
    pub exam: i32,
}

impl Record {
    pub fn new(
        code: i32,
        name: impl Into<String>,
        cw1: i32,
        cw2: i32,
        cw3: i32,
        exam: i32,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            cw1,
            cw2,
            cw3,
            exam,
        }
    }

    /// Coursework total, out of 60.
    ///
    /// Widened to `i64` so a hand-edited row with extreme values cannot
    /// overflow.
    pub fn cw_total(&self) -> i64 {
        i64::from(self.cw1) + i64::from(self.cw2) + i64::from(self.cw3)
    }

    /// Coursework plus exam, out of 160.
    pub fn total(&self) -> i64 {
        self.cw_total() + i64::from(self.exam)
    }

    /// Overall percentage of [`MAX_TOTAL`].
    pub fn percent(&self) -> f64 {
        self.total() as f64 / MAX_TOTAL as f64 * 100.0
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percent(self.percent())
    }

    /// Check every field against its documented range.
    ///
    /// Reports the first violation in field order. The store never calls
    /// this; it is the edit layer's job before `add` or `update`.
    pub fn validate(&self) -> Result<()> {
        if !CODE_RANGE.contains(&self.code) {
            return Err(invalid("code", "must be 1000-9999"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name", "cannot be empty"));
        }
        if self.name.contains(',') {
            return Err(invalid("name", "cannot contain a comma"));
        }
        if self.name.contains(['\n', '\r']) {
            return Err(invalid("name", "cannot contain a line break"));
        }
        for (field, value) in [("cw1", self.cw1), ("cw2", self.cw2), ("cw3", self.cw3)] {
            if !COURSEWORK_RANGE.contains(&value) {
                return Err(invalid(field, "must be 0-20"));
            }
        }
        if !EXAM_RANGE.contains(&self.exam) {
            return Err(invalid("exam", "must be 0-100"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: &str) -> RosterError {
    RosterError::InvalidField {
        field,
        message: message.to_string(),
    }
}

/// Letter grade derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn from_percent(percent: f64) -> Self {
        if percent >= 70.0 {
            Grade::A
        } else if percent >= 60.0 {
            Grade::B
        } else if percent >= 50.0 {
            Grade::C
        } else if percent >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Direction for [`Roster::sort_by_percent`](crate::store::Roster::sort_by_percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortOrder::Ascending),
            "descending" | "desc" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Format a percentage the way every view shows it: one decimal place.
pub fn fmt_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Record {
        Record::new(1001, "Alice", 18, 19, 20, 90)
    }

    #[test]
    fn derived_scores() {
        let r = alice();
        assert_eq!(r.cw_total(), 57);
        assert_eq!(r.total(), 147);
        assert!((r.percent() - 91.875).abs() < 1e-9);
        assert_eq!(fmt_percent(r.percent()), "91.9%");
        assert_eq!(r.grade(), Grade::A);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_percent(100.0), Grade::A);
        assert_eq!(Grade::from_percent(70.0), Grade::A);
        assert_eq!(Grade::from_percent(69.99), Grade::B);
        assert_eq!(Grade::from_percent(60.0), Grade::B);
        assert_eq!(Grade::from_percent(50.0), Grade::C);
        assert_eq!(Grade::from_percent(40.0), Grade::D);
        assert_eq!(Grade::from_percent(39.9), Grade::F);
        assert_eq!(Grade::from_percent(0.0), Grade::F);
        assert_eq!(Grade::C.to_string(), "C");
    }

    #[test]
    fn exact_boundary_totals() {
        // 112/160 is exactly 70%.
        assert_eq!(Record::new(1000, "Edge", 20, 20, 12, 60).grade(), Grade::A);
        // 64/160 is exactly 40%.
        assert_eq!(Record::new(1000, "Edge", 0, 0, 0, 64).grade(), Grade::D);
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(Record::new(1000, "Min", 0, 0, 0, 0).validate().is_ok());
        assert!(Record::new(9999, "Max", 20, 20, 20, 100).validate().is_ok());
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let field = |r: Record| match r.validate() {
            Err(RosterError::InvalidField { field, .. }) => field,
            other => panic!("expected InvalidField, got {other:?}"),
        };
        assert_eq!(field(Record::new(999, "X", 0, 0, 0, 0)), "code");
        assert_eq!(field(Record::new(10000, "X", 0, 0, 0, 0)), "code");
        assert_eq!(field(Record::new(1000, "   ", 0, 0, 0, 0)), "name");
        assert_eq!(field(Record::new(1000, "Doe, Jane", 0, 0, 0, 0)), "name");
        assert_eq!(field(Record::new(1000, "a\nb", 0, 0, 0, 0)), "name");
        assert_eq!(field(Record::new(1000, "X", 0, 21, 0, 0)), "cw2");
        assert_eq!(field(Record::new(1000, "X", 0, 0, -1, 0)), "cw3");
        assert_eq!(field(Record::new(1000, "X", 0, 0, 0, 101)), "exam");
    }

    #[test]
    fn sort_order_display_and_parse() {
        assert_eq!(SortOrder::Ascending.to_string(), "ascending");
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }

    #[test]
    fn record_serde_roundtrip() {
        let json = serde_json::to_string(&alice()).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alice());
    }
}
