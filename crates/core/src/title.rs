// SPDX-License-Identifier: MIT

//!
//! The record title type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Title`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,
}

/// The display name of a record (the hackathon, or the company for a work
/// experience).  Stored trimmed; a title that trims to nothing is invalid.
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Create and initialise a new title if it will be valid
    pub fn from<S: ToString>(title: S) -> Result<Self, TitleError> {
        let title = title.to_string();
        if title.trim().is_empty() {
            Err(TitleError::Empty)
        } else {
            Ok(Title(title.trim().to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Title::from(string).map_err(serde::de::Error::custom)
    }
}
