// SPDX-License-Identifier: MIT

//!
//! A validated, immutable list of records
//!

use crate::{RecordEntry, RecordError, RecordId, TimelineRecord};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can arise in relation to [`Records`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordsError {
    #[error("Record ID `{0}` is used more than once")]
    DuplicateId(RecordId),

    #[error("Record {index} is invalid: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

/// The full list of records a timeline is built from.  Order is kept exactly
/// as supplied and every ID is unique.
#[rustfmt::skip]
#[derive(derive_more::IntoIterator, Serialize, Default, Clone, Debug, PartialEq, Eq)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct Records(Vec<TimelineRecord>);

impl Records {
    /// Create the list if every record ID is unique
    pub fn from(records: Vec<TimelineRecord>) -> Result<Self, RecordsError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(RecordsError::DuplicateId(record.id().clone()));
            }
        }
        Ok(Records(records))
    }

    /// Create the list from data file entries.  Entries without an ID are
    /// given one from their position.
    pub fn from_entries(entries: Vec<RecordEntry>) -> Result<Self, RecordsError> {
        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_record(index)
                    .map_err(|source| RecordsError::Record { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Records::from(records)
    }

    pub fn as_slice(&self) -> &[TimelineRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Find a record by its ID
    pub fn get(&self, id: &RecordId) -> Option<&TimelineRecord> {
        self.0.iter().find(|record| record.id() == id)
    }
}
