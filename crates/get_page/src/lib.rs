// crates/get_page/src/lib.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("flag_status/", env!("CARGO_PKG_VERSION"));

/// Builds the client used by [`get_page`].
pub fn default_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetches the page at `url` and returns its body.
///
/// If the host cannot be reached (connection refused, DNS failure, timeout) the
/// page is treated as empty and `Ok("")` is returned. A non-success HTTP status
/// still yields the body. Anything else, such as a malformed URL, is an error.
pub fn get_page(url: &str) -> Result<String> {
    let client = default_client()?;
    get_page_with(&client, url)
}

/// [`get_page`] with a caller-supplied client.
pub fn get_page_with(client: &Client, url: &str) -> Result<String> {
    log::info!("fetching {}", url);

    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(err) if err.is_connect() || err.is_timeout() => {
            log::warn!("could not reach {}: {}", url, err);
            return Ok(String::new());
        }
        Err(err) => return Err(err).with_context(|| format!("Failed to request {}", url)),
    };

    let status = response.status();
    if !status.is_success() {
        log::warn!("{} answered with {}", url, status);
    }

    match response.text() {
        Ok(body) => {
            log::debug!("read {} bytes from {}", body.len(), url);
            Ok(body)
        }
        Err(err) if err.is_timeout() => {
            log::warn!("timed out reading {}: {}", url, err);
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to read body of {}", url)),
    }
}

/// Something a page can be read from.
pub trait PageSource {
    fn fetch(&self) -> Result<String>;
}

/// A page served over HTTP.
pub struct HttpPage {
    url: String,
    client: Option<Client>,
}

impl HttpPage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: None,
        }
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client: Some(client),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PageSource for HttpPage {
    fn fetch(&self) -> Result<String> {
        match &self.client {
            Some(client) => get_page_with(client, &self.url),
            None => get_page(&self.url),
        }
    }
}

/// A saved copy of a page on disk.
pub struct FilePage {
    path: PathBuf,
}

impl FilePage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageSource for FilePage {
    fn fetch(&self) -> Result<String> {
        log::info!("reading page from {}", self.path.display());
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read page file {}", self.path.display()))
    }
}

/// Reads a page from any [`PageSource`].
pub fn fetch_page(source: &dyn PageSource) -> Result<String> {
    source.fetch()
}
