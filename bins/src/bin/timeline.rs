// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The portfolio timeline CLI: a plain-text front end for the timeline
//! navigator & the project listing
//!

use clap::{Parser, Subcommand};
use portfolio_timeline_core::{
    FlatTimeline, PlacedRecord, RecordId, Side, TimelineNavigator, YearKey,
};
use portfolio_timeline_data::{Config, Project, RecordSource, config_file_path, fetch_projects};
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("portfolio_timeline")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    // Load the config
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match args.command {
        Command::Show {
            source,
            year,
            toggle,
            json,
        } => show(&config, &source, year, &toggle, json),
        Command::Flat {
            source,
            toggle,
            json,
        } => flat(&source, &toggle, json),
        Command::Projects { user, count, json } => {
            let mut config = config;
            if let Some(user) = user {
                config.set_github_user(user);
            }
            if let Some(count) = count {
                config.set_project_count(count);
            }
            projects(&config, json).await
        }
        Command::Config { init } => show_config(&config, init),
    }
}

/// Print the year-grouped timeline
fn show(
    config: &Config,
    source: &RecordSource,
    year: Option<YearKey>,
    toggles: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = source.load()?;
    let mut navigator = match config.default_year() {
        Some(default_year) => TimelineNavigator::with_default_year(records, default_year),
        None => TimelineNavigator::new(records),
    };

    // Replay the "clicks"
    if let Some(year) = year {
        if !navigator.select_year(year) {
            warn!("There are no records for {year}");
        }
    }
    for id in toggles {
        let id = RecordId::from(id)?;
        if !navigator.toggle_record(&id) {
            warn!("Record `{id}` isn't in the active year");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&navigator.snapshot())?);
        return Ok(());
    }

    let years: Vec<String> = navigator
        .sorted_years()
        .iter()
        .map(|year| {
            if Some(*year) == navigator.active_year() {
                format!("[{year}]")
            } else {
                year.to_string()
            }
        })
        .collect();
    println!("{}", years.join("  "));
    println!();
    print_placed_records(&navigator.placed_records());
    Ok(())
}

/// Print the ungrouped timeline
fn flat(
    source: &RecordSource,
    toggles: &[usize],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut timeline = FlatTimeline::new(source.load()?);
    for index in toggles {
        if !timeline.toggle(*index) {
            warn!("There is no record at position {index}");
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&timeline.placed_records())?);
    } else {
        print_placed_records(&timeline.placed_records());
    }
    Ok(())
}

/// Print a random pick of projects (or the built-in ones)
async fn projects(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let projects = fetch_projects(config).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }
    for project in &projects {
        print_project(project);
    }
    Ok(())
}

/// Print the config (after writing it to disk if `init`)
fn show_config(config: &Config, init: bool) -> Result<(), Box<dyn std::error::Error>> {
    if init {
        let path = config.save()?;
        println!("Config written to {}", path.display());
    } else {
        println!("Config file: {}", config_file_path()?.display());
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn print_placed_records(placed: &[PlacedRecord<'_>]) {
    for PlacedRecord {
        side,
        expanded,
        record,
    } in placed
    {
        let indent = match side {
            Side::Left => "",
            Side::Right => "        ",
        };
        let marker = if *expanded { "v" } else { ">" };
        let mut heading = format!("{indent}{marker} {}", record.title());
        if let Some(subtitle) = record.subtitle() {
            heading.push_str(&format!(" - {subtitle}"));
        }
        if record.is_current() {
            heading.push_str(" (current)");
        }
        println!("{heading}  [{}]  {}", record.id(), record.date_text());

        if *expanded {
            if let Some(location) = record.location() {
                println!("{indent}    @ {location}");
            }
            for paragraph in record.description() {
                println!("{indent}    {paragraph}");
            }
            for (kind, url) in record.links() {
                println!("{indent}    {kind}: {url}");
            }
        }
    }
}

fn print_project(project: &Project) {
    match &project.date {
        Some(date) => println!("{} ({date})", project.title),
        None => println!("{}", project.title),
    }
    if !project.description.is_empty() {
        println!("    {}", project.description);
    }
    if project.languages.is_empty() {
        if !project.tech.is_empty() {
            println!("    {}", project.tech.join(", "));
        }
    } else {
        let languages: Vec<String> = project
            .languages
            .iter()
            .map(|share| format!("{} {:.1}%", share.language, share.percent))
            .collect();
        println!("    {}", languages.join(", "));
    }
    for (kind, url) in &project.links {
        println!("    {kind}: {url}");
    }
    println!();
}

/// Portfolio timeline CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Browse the portfolio timelines & projects from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug messages
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the timeline grouped by year
    Show {
        /// `hackathons`, `experience`, or the path to a JSON file of records
        #[arg(long, default_value = "hackathons")]
        source: RecordSource,

        /// The year to show (e.g. `2024`, or `unknown`)
        #[arg(long)]
        year: Option<YearKey>,

        /// Expand/collapse the record with this ID (repeatable, applied in
        /// order after the year is selected)
        #[arg(long)]
        toggle: Vec<String>,

        /// Print the timeline state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every record in order, alternating sides
    Flat {
        /// `hackathons`, `experience`, or the path to a JSON file of records
        #[arg(long, default_value = "experience")]
        source: RecordSource,

        /// Expand/collapse the record at this position (repeatable)
        #[arg(long)]
        toggle: Vec<usize>,

        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List projects
    Projects {
        /// GitHub user whose repositories are listed
        #[arg(long)]
        user: Option<String>,

        /// How many repositories to pick
        #[arg(long)]
        count: Option<usize>,

        /// Print the projects as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the config
    Config {
        /// Write the current config to the platform config directory
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_show() {
        let cli = Cli::parse_from([
            "timeline", "show", "--year", "2023", "--toggle", "a", "--toggle", "b", "--json",
        ]);
        match cli.command {
            Command::Show {
                source,
                year,
                toggle,
                json,
            } => {
                assert_eq!(source, RecordSource::Hackathons);
                assert_eq!(year, Some("2023".parse().unwrap()));
                assert_eq!(toggle, vec!["a", "b"]);
                assert!(json);
            }
            command => panic!("Unexpected command {command:?}"),
        }
    }

    #[test]
    fn parse_rejects_bad_year() {
        assert!(Cli::try_parse_from(["timeline", "show", "--year", "Dec 2024"]).is_err());
    }
}
