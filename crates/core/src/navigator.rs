// SPDX-License-Identifier: MIT

//!
//! The timeline navigator: which year is being shown and which record (if
//! any) is expanded
//!

use crate::{
    Expansion, RecordId, Records, Side, TimelineRecord, YearGroups, YearKey, group_by_year,
    side_for,
};
use log::debug;
use serde::Serialize;

/// Navigation state for one timeline view.
///
/// Created when the view is shown and dropped with it.  The state only ever
/// changes through [`TimelineNavigator::select_year`] and
/// [`TimelineNavigator::toggle_record`], and both leave it untouched when
/// given a year or record that isn't currently available, so:
///
/// - the active year is always one of the years in the data (or `None` when
///   there are no records)
/// - at most one record is expanded, and it's always in the active year
#[derive(Clone, Debug)]
pub struct TimelineNavigator {
    records: Records,
    groups: YearGroups,
    years: Vec<YearKey>,
    active_year: Option<YearKey>,
    expansion: Expansion<RecordId>,
}

/// A record along with where and how the renderer should draw it
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlacedRecord<'a> {
    pub side: Side,
    pub expanded: bool,
    pub record: &'a TimelineRecord,
}

/// Everything a renderer needs to draw the timeline in its current state
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineSnapshot<'a> {
    pub years: Vec<YearKey>,
    pub active_year: Option<YearKey>,
    pub expanded_id: Option<&'a RecordId>,
    pub records: Vec<PlacedRecord<'a>>,
}

impl TimelineNavigator {
    /// Show the most recent year, with nothing expanded
    pub fn new(records: Records) -> Self {
        let groups = group_by_year(&records);
        let years = groups.sorted_years();
        let active_year = years.first().copied();
        debug!(
            "Timeline created ({} records, {} years, active year = {active_year:?})",
            records.len(),
            years.len()
        );
        Self {
            records,
            groups,
            years,
            active_year,
            expansion: Expansion::new(),
        }
    }

    /// Show `default_year` if there are records for it, otherwise the most
    /// recent year
    pub fn with_default_year(records: Records, default_year: YearKey) -> Self {
        let mut navigator = Self::new(records);
        if navigator.groups.contains(default_year) {
            navigator.active_year = Some(default_year);
        } else {
            debug!("Default year {default_year} has no records");
        }
        navigator
    }

    /// Make `year` the active year, collapsing any expanded record.  Returns
    /// `false` (and changes nothing) if there are no records for `year`.
    pub fn select_year(&mut self, year: YearKey) -> bool {
        if !self.groups.contains(year) {
            debug!("Ignoring selection of year {year} (no records)");
            return false;
        }
        self.active_year = Some(year);
        self.expansion.collapse();
        true
    }

    /// Expand the record, or collapse it if it's already expanded.  Returns
    /// `false` (and changes nothing) if the record isn't in the active year.
    pub fn toggle_record(&mut self, id: &RecordId) -> bool {
        if !self
            .records_for_active_year()
            .iter()
            .any(|record| record.id() == id)
        {
            debug!("Ignoring toggle of record {id} (not in the active year)");
            return false;
        }
        self.expansion.toggle(id.clone());
        true
    }

    /// The years, most recent first
    pub fn sorted_years(&self) -> &[YearKey] {
        &self.years
    }

    pub fn active_year(&self) -> Option<YearKey> {
        self.active_year
    }

    pub fn expanded_id(&self) -> Option<&RecordId> {
        self.expansion.expanded()
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expansion.is_expanded(id)
    }

    /// All the records the navigator was created with
    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn groups(&self) -> &YearGroups {
        &self.groups
    }

    pub fn records_for_year(&self, year: YearKey) -> &[TimelineRecord] {
        self.groups.records_for(year)
    }

    pub fn records_for_active_year(&self) -> &[TimelineRecord] {
        match self.active_year {
            Some(year) => self.groups.records_for(year),
            None => &[],
        }
    }

    /// Where the card for the record at `index` (within the active year) goes
    pub fn side_for(&self, index: usize) -> Side {
        side_for(index)
    }

    /// The active year's records, each with its side and whether it's
    /// expanded
    pub fn placed_records(&self) -> Vec<PlacedRecord<'_>> {
        self.records_for_active_year()
            .iter()
            .enumerate()
            .map(|(index, record)| PlacedRecord {
                side: side_for(index),
                expanded: self.is_expanded(record.id()),
                record,
            })
            .collect()
    }

    pub fn snapshot(&self) -> TimelineSnapshot<'_> {
        TimelineSnapshot {
            years: self.years.clone(),
            active_year: self.active_year,
            expanded_id: self.expanded_id(),
            records: self.placed_records(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Title, Year};

    fn record(id: &str, date_text: &str) -> TimelineRecord {
        TimelineRecord::from(RecordId::from(id).unwrap(), Title::from(id).unwrap(), date_text)
    }

    fn id(id: &str) -> RecordId {
        RecordId::from(id).unwrap()
    }

    fn known(year: i64) -> YearKey {
        YearKey::Known(Year::try_from(year).unwrap())
    }

    /// X and Y in 2024, Z in 2023
    fn navigator() -> TimelineNavigator {
        let records = Records::from(vec![
            record("X", "1 Jan 2024"),
            record("Y", "5 Mar 2024"),
            record("Z", "9 Dec 2023"),
        ])
        .unwrap();
        TimelineNavigator::new(records)
    }

    #[test]
    fn initial_state() {
        let navigator = navigator();
        assert_eq!(navigator.sorted_years(), [known(2024), known(2023)]);
        assert_eq!(navigator.active_year(), Some(known(2024)));
        assert_eq!(navigator.expanded_id(), None);
        let ids: Vec<&str> = navigator
            .records_for_active_year()
            .iter()
            .map(|record| record.id().as_str())
            .collect();
        assert_eq!(ids, vec!["X", "Y"]);
    }

    #[test]
    fn default_year() {
        let records = navigator().records().clone();
        let navigator = TimelineNavigator::with_default_year(records.clone(), known(2023));
        assert_eq!(navigator.active_year(), Some(known(2023)));

        // Not in the data, so the most recent year is used
        let navigator = TimelineNavigator::with_default_year(records, known(1999));
        assert_eq!(navigator.active_year(), Some(known(2024)));
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut navigator = navigator();
        assert!(navigator.toggle_record(&id("X")));
        assert_eq!(navigator.expanded_id(), Some(&id("X")));
        assert!(navigator.is_expanded(&id("X")));

        assert!(navigator.toggle_record(&id("X")));
        assert_eq!(navigator.expanded_id(), None);
    }

    #[test]
    fn toggle_replaces_expanded() {
        let mut navigator = navigator();
        navigator.toggle_record(&id("X"));
        navigator.toggle_record(&id("Y"));
        assert!(!navigator.is_expanded(&id("X")));
        assert!(navigator.is_expanded(&id("Y")));
    }

    #[test]
    fn at_most_one_expanded() {
        let mut navigator = navigator();
        for toggle in ["X", "Y", "Y", "X", "Z", "X", "Y", "X"] {
            navigator.toggle_record(&id(toggle));
            let expanded = ["X", "Y", "Z"]
                .iter()
                .filter(|candidate| navigator.is_expanded(&id(candidate)))
                .count();
            assert!(expanded <= 1);
        }
    }

    #[test]
    fn select_year_collapses() {
        let mut navigator = navigator();
        navigator.toggle_record(&id("X"));
        assert!(navigator.select_year(known(2023)));
        assert_eq!(navigator.active_year(), Some(known(2023)));
        assert_eq!(navigator.expanded_id(), None);

        // Reselecting the active year still collapses
        navigator.toggle_record(&id("Z"));
        assert!(navigator.select_year(known(2023)));
        assert_eq!(navigator.expanded_id(), None);
    }

    #[test]
    fn select_missing_year_is_ignored() {
        let mut navigator = navigator();
        navigator.toggle_record(&id("X"));
        assert!(!navigator.select_year(known(2019)));
        assert!(!navigator.select_year(YearKey::Unknown));
        assert_eq!(navigator.active_year(), Some(known(2024)));
        assert_eq!(navigator.expanded_id(), Some(&id("X")));
    }

    #[test]
    fn toggle_outside_active_year_is_ignored() {
        let mut navigator = navigator();
        navigator.toggle_record(&id("X"));

        // Z is in 2023, "nope" doesn't exist
        assert!(!navigator.toggle_record(&id("Z")));
        assert!(!navigator.toggle_record(&id("nope")));
        assert_eq!(navigator.expanded_id(), Some(&id("X")));
    }

    #[test]
    fn empty() {
        let mut navigator = TimelineNavigator::new(Records::default());
        assert!(navigator.sorted_years().is_empty());
        assert_eq!(navigator.active_year(), None);
        assert!(navigator.records_for_active_year().is_empty());
        assert!(!navigator.select_year(known(2024)));
        assert!(!navigator.toggle_record(&id("X")));
        assert!(navigator.snapshot().records.is_empty());
    }

    #[test]
    fn placed_records() {
        let mut navigator = navigator();
        navigator.toggle_record(&id("Y"));
        let placed = navigator.placed_records();
        assert_eq!(placed.len(), 2);
        assert_eq!((placed[0].side, placed[0].expanded), (Side::Left, false));
        assert_eq!((placed[1].side, placed[1].expanded), (Side::Right, true));
        assert_eq!(navigator.side_for(2), Side::Left);
    }

    #[test]
    fn snapshot_json() {
        let mut navigator = navigator();
        navigator.toggle_record(&id("X"));
        let json = serde_json::to_value(navigator.snapshot()).unwrap();
        assert_eq!(json["years"], serde_json::json!(["2024", "2023"]));
        assert_eq!(json["active_year"], "2024");
        assert_eq!(json["expanded_id"], "X");
        assert_eq!(json["records"][0]["side"], "left");
        assert_eq!(json["records"][0]["expanded"], true);
        assert_eq!(json["records"][1]["record"]["title"], "Y");
    }

    #[test]
    fn unknown_year_can_be_selected() {
        let records = Records::from(vec![record("A", "Ongoing"), record("B", "2024")]).unwrap();
        let mut navigator = TimelineNavigator::new(records);
        assert_eq!(navigator.sorted_years(), [known(2024), YearKey::Unknown]);
        assert!(navigator.select_year(YearKey::Unknown));
        assert!(navigator.toggle_record(&id("A")));
    }
}
