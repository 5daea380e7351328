// crates/find_status_line/src/lib.rs

//! Locates the line of a markup document that carries a status marker,
//! ignoring anything inside HTML comments.
//!
//! ```
//! use find_status_line::find_status_line;
//!
//! let page = "First line\r\n<!-- Comment Line\r\nNext line in comment\r\nLast line in comment-->\r\nLast line of text icon-flag";
//! assert_eq!(find_status_line(page, "icon-flag"), "Last line of text icon-flag");
//! ```

use flag_marker::{CRLF, HTML_COMMENT_END, HTML_COMMENT_START};

/// Tokens that open and close a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentTokens<'a> {
    pub open: &'a str,
    pub close: &'a str,
}

impl CommentTokens<'static> {
    /// `<!--` and `-->`.
    pub const fn html() -> Self {
        Self {
            open: HTML_COMMENT_START,
            close: HTML_COMMENT_END,
        }
    }
}

impl Default for CommentTokens<'static> {
    fn default() -> Self {
        Self::html()
    }
}

/// How a document is broken into lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineSeparator {
    /// Split on `\r\n` only. A bare `\n` stays inside the line.
    #[default]
    Crlf,
    /// Split on `\n`, dropping a trailing `\r` from each line.
    Universal,
}

impl LineSeparator {
    fn split(self, document: &str) -> Lines<'_> {
        match self {
            LineSeparator::Crlf => Lines::Crlf(document.split(CRLF)),
            LineSeparator::Universal => Lines::Universal(document.lines()),
        }
    }
}

enum Lines<'d> {
    Crlf(std::str::Split<'d, &'static str>),
    Universal(std::str::Lines<'d>),
}

impl<'d> Iterator for Lines<'d> {
    type Item = &'d str;

    fn next(&mut self) -> Option<&'d str> {
        match self {
            Lines::Crlf(inner) => inner.next(),
            Lines::Universal(inner) => inner.next(),
        }
    }
}

/// True if the line, ignoring leading whitespace, opens a comment.
pub fn is_comment_start(line: &str, tokens: CommentTokens<'_>) -> bool {
    line.trim_start().starts_with(tokens.open)
}

/// True if the line, ignoring trailing whitespace, closes a comment.
pub fn is_comment_end(line: &str, tokens: CommentTokens<'_>) -> bool {
    line.trim_end().ends_with(tokens.close)
}

/// Scans a document for the first line outside any comment that contains `marker`.
///
/// Comment boundary lines are never inspected: a single-line comment is skipped
/// whole, and a multi-line comment is skipped from its opening line through its
/// closing line. A comment that is never closed runs to the end of the document.
#[derive(Clone, Copy, Debug)]
pub struct StatusLineScanner<'a> {
    marker: &'a str,
    comments: CommentTokens<'a>,
    separator: LineSeparator,
}

impl<'a> StatusLineScanner<'a> {
    pub fn new(marker: &'a str) -> Self {
        Self {
            marker,
            comments: CommentTokens::html(),
            separator: LineSeparator::default(),
        }
    }

    #[must_use]
    pub fn comments(mut self, comments: CommentTokens<'a>) -> Self {
        self.comments = comments;
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: LineSeparator) -> Self {
        self.separator = separator;
        self
    }

    /// Returns the matching line exactly as it appears in `document`, or `None`.
    pub fn scan<'d>(&self, document: &'d str) -> Option<&'d str> {
        let mut lines = self.separator.split(document).enumerate();

        while let Some((index, line)) = lines.next() {
            if is_comment_start(line, self.comments) {
                if !is_comment_end(line, self.comments) {
                    self.skip_comment_span(&mut lines, index);
                }
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            if line.contains(self.marker) {
                log::debug!("marker '{}' found on line {}", self.marker, index + 1);
                return Some(line);
            }
        }

        log::debug!("marker '{}' not found", self.marker);
        None
    }

    // Consumes lines up to and including the one that closes the comment.
    fn skip_comment_span<'d, I>(&self, lines: &mut I, opened_at: usize)
    where
        I: Iterator<Item = (usize, &'d str)>,
    {
        match lines.find(|(_, line)| is_comment_end(line, self.comments)) {
            Some((closed_at, _)) => {
                log::trace!("skipped comment on lines {}..={}", opened_at + 1, closed_at + 1);
            }
            None => {
                log::trace!("comment opened on line {} is never closed", opened_at + 1);
            }
        }
    }
}

/// Returns the first non-comment line of a CRLF document containing `marker`,
/// or an empty string when there is none.
pub fn find_status_line(document: &str, marker: &str) -> String {
    StatusLineScanner::new(marker)
        .scan(document)
        .map(str::to_string)
        .unwrap_or_default()
}
