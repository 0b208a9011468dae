// SPDX-License-Identifier: MIT

//!
//! The timeline record type (one hackathon or one work experience)
//!

use crate::{IdError, RecordId, Title, TitleError, YearKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can arise in relation to a [`TimelineRecord`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Title(#[from] TitleError),
}

/// Where a record's link points
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    #[display("github")]
    Github,
    #[display("itch")]
    Itch,
    #[display("site")]
    Site,
    #[display("steam")]
    Steam,
}

/// A record's links, at most one per [`LinkKind`]
pub type Links = BTreeMap<LinkKind, String>;

/// One dated entry on a timeline.
///
/// The year is derived from the date text when the record is created (and
/// whenever the date text is changed), so it can never disagree with it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineRecord {
    /// Unique within the full list of records
    id: RecordId,

    /// Display name
    title: Title,

    /// Free-text date range e.g. "28 Dec 2023 - 31 Dec 2023"
    #[serde(rename = "date")]
    date_text: String,

    /// Taken from the end of `date_text`
    year: YearKey,

    /// e.g. the position held at a company
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,

    /// Paragraphs or bullet points
    description: Vec<String>,

    links: Links,

    /// Still going on (e.g. a current position)
    current: bool,
}

impl TimelineRecord {
    /// Create a record with no display payload beyond its title and date
    pub fn from(id: RecordId, title: Title, date_text: impl ToString) -> Self {
        let date_text = date_text.to_string();
        let year = YearKey::from_date_text(&date_text);
        TimelineRecord {
            id,
            title,
            date_text,
            year,
            subtitle: None,
            location: None,
            description: Vec::new(),
            links: Links::new(),
            current: false,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    /// Update the date text (and with it the year)
    pub fn set_date_text(&mut self, date_text: impl ToString) {
        self.date_text = date_text.to_string();
        self.year = YearKey::from_date_text(&self.date_text);
    }

    /// The key this record is grouped under
    pub fn year(&self) -> YearKey {
        self.year
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.subtitle = subtitle;
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn set_description(&mut self, description: Vec<String>) {
        self.description = description;
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Add a link, replacing any existing link of the same kind
    pub fn add_link(&mut self, kind: LinkKind, url: impl ToString) {
        self.links.insert(kind, url.to_string());
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn set_current(&mut self, current: bool) {
        self.current = current;
    }
}

/// A description given either as one paragraph or as a list of bullet points
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
enum RawDescription {
    One(String),
    Many(Vec<String>),
}

impl Default for RawDescription {
    fn default() -> Self {
        RawDescription::Many(Vec::new())
    }
}

impl From<RawDescription> for Vec<String> {
    fn from(value: RawDescription) -> Self {
        match value {
            RawDescription::One(paragraph) => vec![paragraph],
            RawDescription::Many(points) => points,
        }
    }
}

/// A record as written in a JSON data file.  The ID is optional; records
/// without one are given an ID from their position (see [`crate::Records`]).
///
/// Hackathon lists use `name` for the title; experience lists use `company`
/// and `position`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordEntry {
    #[serde(default)]
    id: Option<String>,

    #[serde(alias = "name", alias = "company")]
    title: String,

    #[serde(alias = "dates")]
    date: String,

    #[serde(default, alias = "position")]
    subtitle: Option<String>,

    #[serde(default)]
    location: Option<String>,

    #[serde(default)]
    description: RawDescription,

    #[serde(default)]
    links: Links,

    #[serde(default)]
    current: bool,
}

impl RecordEntry {
    /// Turn the entry into a record, using `index` (the entry's position in
    /// the full list) for the ID if the entry doesn't have one
    pub fn into_record(self, index: usize) -> Result<TimelineRecord, RecordError> {
        let id = match self.id {
            Some(id) => RecordId::from(id)?,
            None => RecordId::from_position(index),
        };
        let mut record = TimelineRecord::from(id, Title::from(self.title)?, self.date);
        record.set_subtitle(self.subtitle);
        record.set_location(self.location);
        record.set_description(self.description.into());
        record.links = self.links;
        record.set_current(self.current);
        Ok(record)
    }
}
