//! The in-memory roster and its CRUD, lookup, ranking, and sort operations.
//!
//! Nothing here touches the filesystem. Callers pair every successful
//! mutation with [`crate::serializer::save`].

use crate::error::{Result, RosterError};
use crate::model::{Record, SortOrder};

/// An ordered, code-unique collection of records.
///
/// Uniqueness is enforced by [`Roster::add`] and [`Roster::update`]. A roster
/// built with [`Roster::from_records`] keeps whatever it was given, so a
/// hand-edited file with duplicate codes still loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records as-is, without checking codes.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_code(&self, code: i32) -> Option<&Record> {
        self.records.iter().find(|r| r.code == code)
    }

    /// Case-insensitive substring match on the name, in roster order.
    pub fn find_by_name_substring(&self, query: &str) -> Vec<&Record> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a free-form query typed by a user.
    ///
    /// An all-digit query that matches a code wins outright; anything else
    /// falls back to the name search.
    pub fn lookup(&self, query: &str) -> Vec<&Record> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        if query.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(record) = query.parse().ok().and_then(|code| self.find_by_code(code)) {
                return vec![record];
            }
        }
        self.find_by_name_substring(query)
    }

    /// Record with the greatest total; the first one wins a tie.
    pub fn highest(&self) -> Option<&Record> {
        best_by_total(&self.records, |candidate, best| candidate > best)
    }

    /// Record with the smallest total; the first one wins a tie.
    pub fn lowest(&self) -> Option<&Record> {
        best_by_total(&self.records, |candidate, best| candidate < best)
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.find_by_code(record.code).is_some() {
            return Err(RosterError::DuplicateCode(record.code));
        }
        tracing::debug!(code = record.code, "adding record");
        self.records.push(record);
        Ok(())
    }

    /// Replace the record holding `old_code`, keeping its position.
    pub fn update(&mut self, old_code: i32, record: Record) -> Result<()> {
        let index = self
            .position(old_code)
            .ok_or(RosterError::NotFound(old_code))?;
        if record.code != old_code && self.find_by_code(record.code).is_some() {
            return Err(RosterError::DuplicateCode(record.code));
        }
        tracing::debug!(old_code, new_code = record.code, "updating record");
        self.records[index] = record;
        Ok(())
    }

    /// Remove the record holding `code` and hand it back.
    pub fn delete(&mut self, code: i32) -> Result<Record> {
        let index = self.position(code).ok_or(RosterError::NotFound(code))?;
        tracing::debug!(code, "deleting record");
        Ok(self.records.remove(index))
    }

    /// Stable sort by overall percentage.
    ///
    /// Records with equal percentages keep their current relative order, so
    /// sorting an already sorted roster leaves it unchanged.
    pub fn sort_by_percent(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self
                .records
                .sort_by(|a, b| a.percent().total_cmp(&b.percent())),
            SortOrder::Descending => self
                .records
                .sort_by(|a, b| b.percent().total_cmp(&a.percent())),
        }
    }

    fn position(&self, code: i32) -> Option<usize> {
        self.records.iter().position(|r| r.code == code)
    }
}

/// Scan once, replacing the current best only on a strict improvement.
pub(crate) fn best_by_total(
    records: &[Record],
    better: impl Fn(i64, i64) -> bool,
) -> Option<&Record> {
    let mut iter = records.iter();
    let mut best = iter.next()?;
    for record in iter {
        if better(record.total(), best.total()) {
            best = record;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Roster {
        Roster::from_records(vec![
            Record::new(1001, "Alice Smith", 18, 19, 20, 90),
            Record::new(1002, "Bob Jones", 10, 10, 10, 40),
            Record::new(1003, "Carol Smithers", 15, 12, 14, 70),
        ])
    }

    fn codes(roster: &Roster) -> Vec<i32> {
        roster.iter().map(|r| r.code).collect()
    }

    #[test]
    fn add_then_find() {
        let mut roster = sample();
        let dave = Record::new(2000, "Dave", 1, 2, 3, 4);
        roster.add(dave.clone()).unwrap();
        assert_eq!(roster.find_by_code(2000), Some(&dave));
        assert_eq!(codes(&roster), vec![1001, 1002, 1003, 2000]);
    }

    #[test]
    fn add_duplicate_leaves_roster_unchanged() {
        let mut roster = sample();
        let before = roster.clone();
        let err = roster
            .add(Record::new(1002, "Impostor", 0, 0, 0, 0))
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateCode(1002)));
        assert_eq!(roster, before);
    }

    #[test]
    fn delete_then_find_none() {
        let mut roster = sample();
        let removed = roster.delete(1002).unwrap();
        assert_eq!(removed.name, "Bob Jones");
        assert!(roster.find_by_code(1002).is_none());
        assert_eq!(codes(&roster), vec![1001, 1003]);
    }

    #[test]
    fn delete_absent_leaves_roster_unchanged() {
        let mut roster = sample();
        let before = roster.clone();
        assert!(matches!(
            roster.delete(4040),
            Err(RosterError::NotFound(4040))
        ));
        assert_eq!(roster, before);
    }

    #[test]
    fn update_in_place_keeps_position() {
        let mut roster = sample();
        roster
            .update(1002, Record::new(1002, "Bob Jones", 20, 20, 20, 100))
            .unwrap();
        assert_eq!(codes(&roster), vec![1001, 1002, 1003]);
        assert_eq!(roster.find_by_code(1002).unwrap().total(), 160);
    }

    #[test]
    fn update_can_change_code() {
        let mut roster = sample();
        roster
            .update(1002, Record::new(5000, "Bob Jones", 10, 10, 10, 40))
            .unwrap();
        assert_eq!(codes(&roster), vec![1001, 5000, 1003]);
    }

    #[test]
    fn update_rejects_collision() {
        let mut roster = sample();
        let before = roster.clone();
        let err = roster
            .update(1002, Record::new(1003, "Bob Jones", 10, 10, 10, 40))
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateCode(1003)));
        assert_eq!(roster, before);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut roster = sample();
        let err = roster
            .update(4040, Record::new(1001, "Ghost", 0, 0, 0, 0))
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound(4040)));
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let roster = sample();
        let hits: Vec<i32> = roster
            .find_by_name_substring("SMITH")
            .iter()
            .map(|r| r.code)
            .collect();
        assert_eq!(hits, vec![1001, 1003]);
        assert!(roster.find_by_name_substring("zed").is_empty());
    }

    #[test]
    fn lookup_prefers_code() {
        let roster = sample();
        let hits = roster.lookup(" 1003 ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Carol Smithers");
        assert_eq!(roster.lookup("bob").len(), 1);
        assert!(roster.lookup("9999").is_empty());
        assert!(roster.lookup("").is_empty());
    }

    #[test]
    fn lookup_digits_fall_back_to_name() {
        let roster = Roster::from_records(vec![Record::new(1001, "Agent 007", 1, 1, 1, 1)]);
        assert_eq!(roster.lookup("007").len(), 1);
    }

    #[test]
    fn highest_and_lowest() {
        let roster = sample();
        assert_eq!(roster.highest().unwrap().code, 1001);
        assert_eq!(roster.lowest().unwrap().code, 1002);
        assert!(Roster::new().highest().is_none());
        assert!(Roster::new().lowest().is_none());
    }

    #[test]
    fn ties_resolve_to_first() {
        let roster = Roster::from_records(vec![
            Record::new(1001, "First", 10, 10, 10, 50),
            Record::new(1002, "Second", 10, 10, 10, 50),
        ]);
        assert_eq!(roster.highest().unwrap().code, 1001);
        assert_eq!(roster.lowest().unwrap().code, 1001);
    }

    #[test]
    fn sort_is_stable_both_ways() {
        let mut roster = Roster::from_records(vec![
            Record::new(1001, "Mid A", 10, 10, 10, 50),
            Record::new(1002, "Low", 0, 0, 0, 10),
            Record::new(1003, "Mid B", 10, 10, 10, 50),
            Record::new(1004, "High", 20, 20, 20, 100),
        ]);
        roster.sort_by_percent(SortOrder::Ascending);
        assert_eq!(codes(&roster), vec![1002, 1001, 1003, 1004]);
        roster.sort_by_percent(SortOrder::Descending);
        assert_eq!(codes(&roster), vec![1004, 1001, 1003, 1002]);
    }

    fn arb_roster() -> impl Strategy<Value = Roster> {
        proptest::collection::vec((0..=20i32, 0..=20i32, 0..=20i32, 0..=100i32), 0..30).prop_map(
            |scores| {
                let records = scores
                    .into_iter()
                    .enumerate()
                    .map(|(i, (cw1, cw2, cw3, exam))| {
                        Record::new(1000 + i as i32, format!("Student {i}"), cw1, cw2, cw3, exam)
                    })
                    .collect();
                Roster::from_records(records)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_ascending_sort_is_non_decreasing(mut roster in arb_roster()) {
            roster.sort_by_percent(SortOrder::Ascending);
            for pair in roster.records().windows(2) {
                prop_assert!(pair[0].percent() <= pair[1].percent());
            }
        }

        #[test]
        fn prop_sort_is_idempotent(mut roster in arb_roster(), ascending in any::<bool>()) {
            let order = if ascending { SortOrder::Ascending } else { SortOrder::Descending };
            roster.sort_by_percent(order);
            let once = roster.clone();
            roster.sort_by_percent(order);
            prop_assert_eq!(roster, once);
        }
    }
}
