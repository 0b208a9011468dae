// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Data errors
//!

use portfolio_timeline_core::RecordsError;
use thiserror::Error;

/// Errors that can occur when loading records, projects or config
#[derive(Debug, Error)]
pub enum DataError {
    /// An error occured when reading a file
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// A JSON error occured (most likely when reading a JSON file)
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// The records were read but aren't valid
    #[error(transparent)]
    Records(#[from] RecordsError),

    /// An error when fetching from a web API
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The platform doesn't have a config directory
    #[error("Unable to determine the config directory")]
    NoConfigDir,
}
