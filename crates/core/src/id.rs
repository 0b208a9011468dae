// SPDX-License-Identifier: MIT

//!
//! Record IDs (either given explicitly or derived from a record's position in
//! the full list)
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`RecordId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Record ID cannot be empty")]
    Empty,
}

/// The ID of a [`crate::TimelineRecord`].  Any string apart from one which
/// when trimmed of leading and trailing whitespace is empty.
#[rustfmt::skip]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create an ID from a string if the string is a valid ID
    pub fn from<S: ToString>(string: S) -> Result<Self, IdError> {
        let string = string.to_string();
        let trimmed = string.trim();
        if trimmed.is_empty() {
            Err(IdError::Empty)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Derive an ID from the record's zero-based position in the full list
    pub fn from_position(index: usize) -> Self {
        Self(format!("record-{index}"))
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        RecordId::from(string).map_err(serde::de::Error::custom)
    }
}
