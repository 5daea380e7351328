// crates/get_status/src/lib.rs

use std::fmt;

/// Hoist status read from the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    FullMast,
    HalfMast,
    Undetermined,
}

impl Status {
    pub fn is_determined(self) -> bool {
        self != Status::Undetermined
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::FullMast => "Full Mast",
            Status::HalfMast => "Half Mast",
            Status::Undetermined => "Undetermined",
        };
        f.write_str(label)
    }
}

/// Classifies a status line.
///
/// An empty line means the marker was never found. Otherwise the flag is at
/// full mast when the line also carries `full_marker`, and at half mast when it
/// does not.
pub fn get_status(status_line: &str, full_marker: &str) -> Status {
    if status_line.is_empty() {
        return Status::Undetermined;
    }
    if status_line.contains(full_marker) {
        return Status::FullMast;
    }
    Status::HalfMast
}

/// [`get_status`] with the site's default full-mast fragment.
pub fn get_default_status(status_line: &str) -> Status {
    get_status(status_line, flag_marker::FULL_MARKER)
}
