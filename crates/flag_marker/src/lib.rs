// crates/flag_marker/src/lib.rs

//! Literal tokens shared by the flag status crates.

/// Page that carries the flag icon.
pub const DEFAULT_URL: &str = "https://www.nh.gov/index.htm";

/// CSS class found on the line that carries the flag status.
pub const STATUS_MARKER: &str = "icon-flag";

/// Fragment present on the status line only when the flag is at full mast.
pub const FULL_MARKER: &str = "full";

pub const HTML_COMMENT_START: &str = "<!--";
pub const HTML_COMMENT_END: &str = "-->";

/// Line terminator used by the site's markup.
pub const CRLF: &str = "\r\n";
