//! Terminal rendering for records and summaries.

use comfy_table::{Cell, CellAlignment, Table};

use gradebook_core::model::{fmt_percent, Record};
use gradebook_core::statistics::average;

/// Roster table: Name, Number, CW Total, Exam, %, Grade.
pub fn record_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Number", "CW Total", "Exam", "%", "Grade"]);

    for r in records {
        table.add_row(vec![
            Cell::new(&r.name),
            Cell::new(r.code).set_alignment(CellAlignment::Center),
            Cell::new(r.cw_total()).set_alignment(CellAlignment::Center),
            Cell::new(r.exam).set_alignment(CellAlignment::Center),
            Cell::new(fmt_percent(r.percent())).set_alignment(CellAlignment::Center),
            Cell::new(r.grade()).set_alignment(CellAlignment::Center),
        ]);
    }

    table
}

/// `Students: N · Class average: X%`
pub fn status_line(records: &[Record]) -> String {
    format!(
        "Students: {} · Class average: {}",
        records.len(),
        fmt_percent(average(records))
    )
}

/// One-line description of a single student.
pub fn student_summary(r: &Record) -> String {
    format!(
        "Name: {} · Number: {} · CW: {}/60 · Exam: {}/100 · Overall: {} · Grade: {}",
        r.name,
        r.code,
        r.cw_total(),
        r.exam,
        fmt_percent(r.percent()),
        r.grade()
    )
}

/// Candidate line used when a query matches several students.
pub fn candidate_line(r: &Record) -> String {
    format!("{}  ({}) — {}", r.name, r.code, fmt_percent(r.percent()))
}

/// Print the full roster followed by its status line.
pub fn print_roster(records: &[Record]) {
    println!("{}", record_table(records));
    println!("{}", status_line(records));
}
