// crates/flag_status/src/lib.rs

pub mod config;
pub mod logging;

use anyhow::Result;
use chrono::NaiveDate;
use config::AppConfig;
use find_status_line::StatusLineScanner;
use get_page::{fetch_page, FilePage, HttpPage, PageSource};
use get_status::get_status;
use show_status::{show_status, StatusDisplay};

/// Picks where the page is read from.
pub fn page_source(config: &AppConfig) -> Box<dyn PageSource> {
    match &config.page_file {
        Some(path) => Box::new(FilePage::new(path)),
        None => Box::new(HttpPage::new(config.url.as_str())),
    }
}

/// Reads the page from `source` and works out what to show for `today`.
pub fn report_status(
    config: &AppConfig,
    source: &dyn PageSource,
    today: NaiveDate,
) -> Result<StatusDisplay> {
    let document = fetch_page(source)?;

    let status_line = StatusLineScanner::new(&config.marker)
        .separator(config.separator)
        .scan(&document)
        .unwrap_or_default();
    log::debug!("status line: {}", status_line.trim());

    let status = get_status(status_line, &config.full_marker);
    log::info!("flag status: {}", status);

    show_status(status, today, &config.resources_dir)
}

/// Fetches, scans and classifies using the configured page source.
pub fn run(config: &AppConfig, today: NaiveDate) -> Result<StatusDisplay> {
    let source = page_source(config);
    report_status(config, source.as_ref(), today)
}
