// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Where timeline records come from
//!

use crate::DataError;
use log::info;
use portfolio_timeline_core::{RecordEntry, Records};
use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const HACKATHONS_JSON: &str = include_str!("../data/hackathons.json");
const EXPERIENCE_JSON: &str = include_str!("../data/experience.json");

/// A list of timeline records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// The built-in hackathon list
    Hackathons,

    /// The built-in work experience list
    Experience,

    /// A JSON file of records
    File(PathBuf),
}

impl RecordSource {
    /// Load the records
    pub fn load(&self) -> Result<Records, DataError> {
        match self {
            RecordSource::Hackathons => builtin_hackathons(),
            RecordSource::Experience => builtin_experience(),
            RecordSource::File(path) => load_records_from_path(path),
        }
    }
}

/// `hackathons` & `experience` name the built-in lists, anything else is
/// taken to be a path
impl FromStr for RecordSource {
    type Err = Infallible;
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(match string {
            "hackathons" => RecordSource::Hackathons,
            "experience" => RecordSource::Experience,
            path => RecordSource::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Hackathons => f.write_str("hackathons"),
            RecordSource::Experience => f.write_str("experience"),
            RecordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The built-in hackathon records
pub fn builtin_hackathons() -> Result<Records, DataError> {
    records_from_str(HACKATHONS_JSON)
}

/// The built-in work experience records
pub fn builtin_experience() -> Result<Records, DataError> {
    records_from_str(EXPERIENCE_JSON)
}

/// Parse a JSON array of records
pub fn records_from_str(json: &str) -> Result<Records, DataError> {
    let entries: Vec<RecordEntry> = serde_json::from_str(json)?;
    Ok(Records::from_entries(entries)?)
}

/// Read a JSON file containing an array of records
pub fn load_records_from_path(path: &Path) -> Result<Records, DataError> {
    info!("Loading records from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let entries: Vec<RecordEntry> = serde_json::from_reader(reader)?;
    let records = Records::from_entries(entries)?;
    info!("Loaded {} records", records.len());
    Ok(records)
}

#[cfg(test)]
mod test {
    use super::*;
    use portfolio_timeline_core::{TimelineNavigator, Year, YearKey, group_by_year};

    fn path_to_test_data() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
    }

    fn known(year: i64) -> YearKey {
        YearKey::Known(Year::try_from(year).unwrap())
    }

    #[test]
    fn hackathons() {
        let records = builtin_hackathons().unwrap();
        assert_eq!(records.len(), 11);

        let groups = group_by_year(&records);
        assert_eq!(groups.sorted_years(), vec![known(2024), known(2023)]);
        assert_eq!(groups.records_for(known(2023)).len(), 1);
        assert_eq!(groups.records_for(known(2024)).len(), 10);
        assert_eq!(
            groups.records_for(known(2024))[0].title().as_str(),
            "Karnataka State Police Datathon"
        );
    }

    #[test]
    fn experience() {
        let records = builtin_experience().unwrap();
        assert_eq!(records.len(), 2);
        let first = &records.as_slice()[0];
        assert_eq!(first.subtitle(), Some("Game Development & XR Intern"));
        assert_eq!(first.year(), known(2025));
        assert_eq!(first.description().len(), 3);
    }

    #[test]
    fn from_str() {
        assert_eq!("hackathons".parse(), Ok(RecordSource::Hackathons));
        assert_eq!("experience".parse(), Ok(RecordSource::Experience));
        assert_eq!(
            "records.json".parse(),
            Ok(RecordSource::File(PathBuf::from("records.json")))
        );
    }

    #[test]
    fn load_file() {
        let source = RecordSource::File(path_to_test_data().join("records.json"));
        let records = source.load().unwrap();
        assert_eq!(records.len(), 4);

        let navigator = TimelineNavigator::new(records);
        assert_eq!(
            navigator.sorted_years(),
            [known(2024), known(2023), YearKey::Unknown]
        );
        let ids: Vec<&str> = navigator
            .records_for_active_year()
            .iter()
            .map(|record| record.id().as_str())
            .collect();
        assert_eq!(ids, vec!["code-snip", "record-3"]);
    }

    #[test]
    fn load_file_errors() {
        let duplicate = load_records_from_path(&path_to_test_data().join("duplicate_ids.json"));
        assert!(matches!(duplicate, Err(DataError::Records(_))));

        let missing = load_records_from_path(&path_to_test_data().join("missing.json"));
        assert!(matches!(missing, Err(DataError::StdIo(_))));

        assert!(matches!(records_from_str("{"), Err(DataError::SerdeJson(_))));
    }
}
