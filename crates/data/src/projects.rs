// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The project listing: a random pick of a GitHub user's public repositories,
//! each with its language breakdown.  If anything goes wrong while fetching,
//! the built-in project list is used instead.
//!

use crate::{Config, DataError};
use log::{debug, info, warn};
use portfolio_timeline_core::{LinkKind, Links};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FALLBACK_PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// GitHub rejects requests without a user agent
const USER_AGENT: &str = concat!("portfolio-timeline/", env!("CARGO_PKG_VERSION"));

/// How many repositories are asked for in one listing request
const REPOS_PER_PAGE: usize = 100;

/// One project card
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub date: Option<String>,

    /// Technologies (or, for fetched projects, languages) used
    #[serde(default)]
    pub tech: Vec<String>,

    #[serde(default)]
    pub links: Links,

    /// Share of the code base per language (fetched projects only)
    #[serde(default)]
    pub languages: Vec<LanguageShare>,
}

/// How much of a repository is written in one language
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LanguageShare {
    pub language: String,

    /// Rounded to one decimal place
    pub percent: f64,
}

/// The parts of a GitHub repository listing that are used
#[derive(Deserialize, Debug, Clone)]
struct GitHubRepo {
    name: String,
    description: Option<String>,
    html_url: String,
    homepage: Option<String>,
    languages_url: String,
    #[serde(default)]
    fork: bool,
    pushed_at: Option<String>,
}

/// The built-in project list
pub fn fallback_projects() -> Vec<Project> {
    match serde_json::from_str(FALLBACK_PROJECTS_JSON) {
        Ok(projects) => projects,
        Err(error) => {
            warn!("Built-in project list is invalid: {error}");
            Vec::new()
        }
    }
}

/// Fetch `config.project_count()` random projects, or the built-in list if
/// they can't be fetched
pub async fn fetch_projects(config: &Config) -> Vec<Project> {
    match try_fetch_projects(config).await {
        Ok(projects) => projects,
        Err(error) => {
            warn!("Unable to fetch projects, using the built-in list: {error}");
            fallback_projects()
        }
    }
}

/// Fetch `config.project_count()` random projects
pub async fn try_fetch_projects(config: &Config) -> Result<Vec<Project>, DataError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let repos_url = format!(
        "{}/users/{}/repos?per_page={REPOS_PER_PAGE}",
        config.github_api_base().trim_end_matches('/'),
        config.github_user()
    );
    debug!("repos_url = {repos_url}");
    let repos: Vec<GitHubRepo> = client
        .get(&repos_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    info!("Fetched {} repositories", repos.len());

    let own_repos: Vec<GitHubRepo> = repos.into_iter().filter(|repo| !repo.fork).collect();
    let chosen: Vec<GitHubRepo> = own_repos
        .choose_multiple(&mut thread_rng(), config.project_count())
        .cloned()
        .collect();

    let mut projects = Vec::with_capacity(chosen.len());
    for repo in chosen {
        let bytes: BTreeMap<String, u64> = client
            .get(&repo.languages_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("{} languages = {bytes:?}", repo.name);
        projects.push(project_from_repo(repo, &bytes));
    }
    Ok(projects)
}

fn project_from_repo(repo: GitHubRepo, bytes: &BTreeMap<String, u64>) -> Project {
    let languages = language_percentages(bytes);
    let mut links = Links::new();
    links.insert(LinkKind::Github, repo.html_url);
    if let Some(homepage) = repo.homepage.filter(|homepage| !homepage.trim().is_empty()) {
        links.insert(LinkKind::Site, homepage);
    }
    Project {
        title: repo.name,
        description: repo.description.unwrap_or_default(),
        date: repo.pushed_at.and_then(|pushed_at| pushed_at.get(..4).map(str::to_string)),
        tech: languages.iter().map(|share| share.language.clone()).collect(),
        links,
        languages,
    }
}

/// Turn per-language byte counts into percentages (one decimal place), most
/// used language first.  Empty if there are no bytes at all.
pub fn language_percentages(bytes: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = bytes.values().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut shares: Vec<LanguageShare> = bytes
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(language, count)| LanguageShare {
            language: language.clone(),
            percent: (*count as f64 * 1000.0 / total as f64).round() / 10.0,
        })
        .collect();
    shares.sort_by(|a, b| {
        b.percent
            .total_cmp(&a.percent)
            .then_with(|| a.language.cmp(&b.language))
    });
    shares
}
