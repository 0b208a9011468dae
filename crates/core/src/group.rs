// SPDX-License-Identifier: MIT

//!
//! Grouping records by year
//!

use crate::{TimelineRecord, YearKey};

/// Records grouped by [`YearKey`].
///
/// Groups are kept in the order each key was first seen, and the records in a
/// group are kept in the order they were supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearGroups {
    groups: Vec<(YearKey, Vec<TimelineRecord>)>,
}

/// Group the records by the year at the end of their date text.  Every record
/// ends up in exactly one group.
pub fn group_by_year<'a, I>(records: I) -> YearGroups
where
    I: IntoIterator<Item = &'a TimelineRecord>,
{
    let mut groups: Vec<(YearKey, Vec<TimelineRecord>)> = Vec::new();
    for record in records {
        let year = record.year();
        match groups.iter_mut().find(|(key, _)| *key == year) {
            Some((_, group)) => group.push(record.clone()),
            None => groups.push((year, vec![record.clone()])),
        }
    }
    YearGroups { groups }
}

impl YearGroups {
    /// The years, most recent first (records with no year last)
    pub fn sorted_years(&self) -> Vec<YearKey> {
        let mut years: Vec<YearKey> = self.groups.iter().map(|(year, _)| *year).collect();
        years.sort_by(YearKey::newest_first);
        years
    }

    /// The most recent year, if there are any records at all
    pub fn latest_year(&self) -> Option<YearKey> {
        self.groups
            .iter()
            .map(|(year, _)| *year)
            .min_by(YearKey::newest_first)
    }

    /// The records for the year (empty if there are none)
    pub fn records_for(&self, year: YearKey) -> &[TimelineRecord] {
        self.groups
            .iter()
            .find(|(key, _)| *key == year)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, year: YearKey) -> bool {
        self.groups.iter().any(|(key, _)| *key == year)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Iterate over the groups in first seen order
    pub fn iter(&self) -> impl Iterator<Item = (YearKey, &[TimelineRecord])> {
        self.groups
            .iter()
            .map(|(year, records)| (*year, records.as_slice()))
    }
}
