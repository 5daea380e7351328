// crates/show_status/src/lib.rs

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use get_status::Status;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const UNDETERMINED_MESSAGE: &str = "Unable to determine status.";

/// Image file and title suffix shown for a determined status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusContext {
    pub image: &'static str,
    pub title_suffix: &'static str,
}

/// Returns the display context for `status`, or `None` when it is undetermined.
pub fn status_context(status: Status) -> Option<StatusContext> {
    match status {
        Status::FullMast => Some(StatusContext {
            image: "flag_full.png",
            title_suffix: " - Full Mast",
        }),
        Status::HalfMast => Some(StatusContext {
            image: "flag_half.png",
            title_suffix: " - Half Mast",
        }),
        Status::Undetermined => None,
    }
}

/// "Flag Status 2026-10-16 - Half Mast", without a suffix when undetermined.
pub fn window_title(date: NaiveDate, status: Status) -> String {
    let mut title = format!("Flag Status {}", date.format("%Y-%m-%d"));
    if let Some(context) = status_context(status) {
        title.push_str(context.title_suffix);
    }
    title
}

/// What gets shown for a status: a title and, when determined, an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDisplay {
    pub status: Status,
    pub title: String,
    pub image: Option<PathBuf>,
}

impl fmt::Display for StatusDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        match &self.image {
            Some(image) => write!(f, "{}", image.display()),
            None => write!(f, "{}", UNDETERMINED_MESSAGE),
        }
    }
}

/// Picks the title and image for `status`.
///
/// The image is looked up in `resources_dir` and must exist.
pub fn show_status(status: Status, date: NaiveDate, resources_dir: &Path) -> Result<StatusDisplay> {
    let image = match status_context(status) {
        Some(context) => {
            let path = resources_dir.join(context.image);
            if !path.is_file() {
                bail!("Status image {} not found", path.display());
            }
            Some(path)
        }
        None => None,
    };

    Ok(StatusDisplay {
        status,
        title: window_title(date, status),
        image,
    })
}

/// Platform image viewer used when none is configured.
pub fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Hands `image` to the external `viewer` command and waits for it.
pub fn open_image(image: &Path, viewer: &str) -> Result<()> {
    log::debug!("opening {} with {}", image.display(), viewer);
    let status = Command::new(viewer)
        .arg(image)
        .status()
        .with_context(|| format!("Failed to run image viewer '{}'", viewer))?;
    if !status.success() {
        bail!("Image viewer '{}' exited with {}", viewer, status);
    }
    Ok(())
}
