// SPDX-License-Identifier: MIT

//!
//! The ungrouped timeline used for work experience: every record shown in
//! list order, alternating sides, toggled by position
//!

use crate::{Expansion, PlacedRecord, Records, TimelineRecord, side_for};
use log::debug;

#[derive(Clone, Debug)]
pub struct FlatTimeline {
    records: Records,
    expansion: Expansion<usize>,
}

impl FlatTimeline {
    pub fn new(records: Records) -> Self {
        Self {
            records,
            expansion: Expansion::new(),
        }
    }

    /// Expand the record at `index`, or collapse it if it's already expanded.
    /// Returns `false` (and changes nothing) if there's no record at `index`.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.records.len() {
            debug!("Ignoring toggle of position {index} (only {} records)", self.records.len());
            return false;
        }
        self.expansion.toggle(index);
        true
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expansion.expanded().copied()
    }

    pub fn expanded_record(&self) -> Option<&TimelineRecord> {
        self.expanded_index()
            .and_then(|index| self.records.as_slice().get(index))
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(&index)
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn placed_records(&self) -> Vec<PlacedRecord<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| PlacedRecord {
                side: side_for(index),
                expanded: self.is_expanded(index),
                record,
            })
            .collect()
    }
}
