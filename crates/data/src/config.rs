// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Portfolio timeline config
//!

use crate::DataError;
use directories_next::ProjectDirs;
use log::info;
use portfolio_timeline_core::YearKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_QUALIFIER: &str = "com";
const ORG_NAME: &str = "AltF4 Games";
const APPLICATION_NAME: &str = "Portfolio Timeline";
const CONFIG_FILE_NAME: &str = "config.json";

/// Used when the config doesn't name a GitHub user
pub const DEFAULT_GITHUB_USER: &str = "altf4-games";

/// How many projects are shown by default
pub const DEFAULT_PROJECT_COUNT: usize = 6;

/// Where repositories are listed from by default
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// The config that's saved to disk.  Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The year a timeline opens on (the most recent year if unset or if
    /// there are no records for it)
    default_year: Option<YearKey>,

    /// Whose repositories are listed as projects
    github_user: String,

    /// How many repositories are picked for the project listing
    project_count: usize,

    /// The GitHub API to list repositories from
    github_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_year: None,
            github_user: String::from(DEFAULT_GITHUB_USER),
            project_count: DEFAULT_PROJECT_COUNT,
            github_api_base: String::from(DEFAULT_GITHUB_API_BASE),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, falling back to
    /// the default config if there is no config file
    pub fn load() -> Result<Self, DataError> {
        let path = config_file_path()?;
        if !path.exists() {
            info!("No config file found, using the default config");
            return Ok(Config::default());
        }
        Config::load_from_path(&path)
    }

    /// Load the config from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self, DataError> {
        info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Save the config to the platform config directory, returning the path
    pub fn save(&self) -> Result<PathBuf, DataError> {
        let path = config_file_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Save the config to a specific file (creating parent directories)
    pub fn save_to_path(&self, path: &Path) -> Result<(), DataError> {
        info!("Saving config to {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Config saved");
        Ok(())
    }

    pub fn default_year(&self) -> Option<YearKey> {
        self.default_year
    }

    pub fn set_default_year(&mut self, default_year: Option<YearKey>) {
        self.default_year = default_year;
    }

    pub fn github_user(&self) -> &str {
        &self.github_user
    }

    pub fn set_github_user(&mut self, github_user: impl ToString) {
        self.github_user = github_user.to_string();
    }

    pub fn project_count(&self) -> usize {
        self.project_count
    }

    pub fn set_project_count(&mut self, project_count: usize) {
        self.project_count = project_count;
    }

    pub fn github_api_base(&self) -> &str {
        &self.github_api_base
    }

    pub fn set_github_api_base(&mut self, github_api_base: impl ToString) {
        self.github_api_base = github_api_base.to_string();
    }
}

/// Get the project directories (e.g. where the config is stored)
fn project_dirs() -> Result<ProjectDirs, DataError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME).ok_or(DataError::NoConfigDir)
}

/// Get the path to the config file
pub fn config_file_path() -> Result<PathBuf, DataError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    info!("Config file path = {}", config_file.display());
    Ok(config_file)
}

#[cfg(test)]
mod test {
    use super::*;
    use portfolio_timeline_core::Year;

    fn path_to_test_data() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config = Config::load_from_path(&path_to_test_data().join("config.json")).unwrap();
        assert_eq!(
            config.default_year(),
            Some(YearKey::Known(Year::try_from(2023).unwrap()))
        );
        assert_eq!(config.github_user(), "octocat");
        assert_eq!(config.project_count(), DEFAULT_PROJECT_COUNT);
        assert_eq!(config.github_api_base(), DEFAULT_GITHUB_API_BASE);
    }

    #[test]
    fn save_and_load() {
        let dir = std::env::temp_dir().join(format!("portfolio-timeline-config-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.set_default_year(Some(YearKey::Unknown));
        config.set_project_count(3);
        config.save_to_path(&path).unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), config);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn invalid_year() {
        let result: Result<Config, _> = serde_json::from_str(r#"{ "default_year": "Dec 2024" }"#);
        assert!(result.is_err());
    }
}
