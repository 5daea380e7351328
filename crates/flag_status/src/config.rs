// crates/flag_status/src/config.rs

use anyhow::{bail, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use find_status_line::LineSeparator;
use flag_marker::{DEFAULT_URL, FULL_MARKER, STATUS_MARKER};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_RESOURCES_DIR: &str = "resources/images";

/// Runtime configuration composed from CLI + environment.
///
/// An explicit flag wins over the environment, which wins over the default.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub url: String,
    pub page_file: Option<PathBuf>, // takes precedence over `url`
    pub marker: String,
    pub full_marker: String,
    pub separator: LineSeparator,
    pub resources_dir: PathBuf,
    pub viewer: String,
    pub disable_viewer: bool,
    pub verbose: bool,
}

pub fn command() -> Command {
    Command::new("flag_status")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reports whether the flag is flown at full or half mast")
        .arg(
            Arg::new("url")
                .long("url")
                .num_args(1)
                .help("Page to read the flag status from [env: FLAG_STATUS_URL]"),
        )
        .arg(
            Arg::new("page_file")
                .long("page-file")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Read a saved copy of the page instead of fetching it [env: GET_PAGE_FILE]"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .num_args(1)
                .default_value(STATUS_MARKER)
                .help("Text that identifies the status line"),
        )
        .arg(
            Arg::new("full_marker")
                .long("full-marker")
                .num_args(1)
                .default_value(FULL_MARKER)
                .help("Text on the status line that means full mast"),
        )
        .arg(
            Arg::new("universal_newlines")
                .long("universal-newlines")
                .help("Accept LF line endings instead of requiring CRLF")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("resources")
                .long("resources")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory holding the status images [env: FLAG_STATUS_RESOURCES]"),
        )
        .arg(
            Arg::new("viewer")
                .long("viewer")
                .num_args(1)
                .help("Command used to show the status image [env: FLAG_STATUS_VIEWER]"),
        )
        .arg(
            Arg::new("no_viewer")
                .long("no-viewer")
                .help("Print the result without opening the image [env: DISABLE_VIEWER]")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

impl AppConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Self::from_matches_with_env(matches, |key| env::var(key).ok())
    }

    /// Builds the config with `lookup` standing in for the process environment.
    pub fn from_matches_with_env<F>(matches: &ArgMatches, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let marker = string_arg(matches, "marker").unwrap_or_else(|| STATUS_MARKER.to_string());
        if marker.is_empty() {
            bail!("--marker must not be empty");
        }
        let full_marker =
            string_arg(matches, "full_marker").unwrap_or_else(|| FULL_MARKER.to_string());

        let url = string_arg(matches, "url")
            .or_else(|| lookup("FLAG_STATUS_URL"))
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let page_file = matches
            .get_one::<PathBuf>("page_file")
            .cloned()
            .or_else(|| lookup("GET_PAGE_FILE").map(PathBuf::from));
        let resources_dir = matches
            .get_one::<PathBuf>("resources")
            .cloned()
            .or_else(|| lookup("FLAG_STATUS_RESOURCES").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR));
        let viewer = string_arg(matches, "viewer")
            .or_else(|| lookup("FLAG_STATUS_VIEWER"))
            .unwrap_or_else(|| show_status::default_viewer().to_string());

        let separator = if matches.get_flag("universal_newlines") {
            LineSeparator::Universal
        } else {
            LineSeparator::Crlf
        };

        Ok(Self {
            url,
            page_file,
            marker,
            full_marker,
            separator,
            resources_dir,
            viewer,
            disable_viewer: matches.get_flag("no_viewer") || lookup("DISABLE_VIEWER").is_some(),
            verbose: matches.get_flag("verbose"),
        })
    }
}

fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}
