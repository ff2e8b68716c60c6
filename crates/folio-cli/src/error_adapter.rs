//! Error adapter for converting FolioError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. JSON parse errors
//! point at the offending spot in the content document; everything else is
//! reported with an error code only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use folio::FolioError;

const PARSE_HELP: &str =
    "content must be a JSON array of items, or an object with a `content` array";

/// Adapter for a JSON parse error with its source document.
pub struct ParseAdapter<'a> {
    message: String,
    label: &'static str,
    offset: usize,
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    /// Create a new adapter for an error at `line`/`column` (both one-based,
    /// as reported by the JSON parser).
    pub fn new(
        message: impl Into<String>,
        label: &'static str,
        line: usize,
        column: usize,
        src: &'a str,
    ) -> Self {
        Self {
            message: message.into(),
            label,
            offset: byte_offset(src, line, column),
            src,
        }
    }

    /// Byte offset of the error in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("message", &self.message)
            .field("offset", &self.offset)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("folio::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(PARSE_HELP))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let len = usize::from(self.offset < self.src.len());
        let span = SourceSpan::new(self.offset.into(), len);
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.label.to_string()), span),
        )))
    }
}

/// Adapter for non-parse [`FolioError`] variants.
///
/// This adapter handles errors that don't have source locations, such as
/// I/O, configuration and export errors.
pub struct ErrorAdapter<'a>(pub &'a FolioError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FolioError::Io(_) => "folio::io",
            FolioError::Parse { .. } => "folio::parse",
            FolioError::Config(_) => "folio::config",
            FolioError::Export(_) => "folio::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FolioError::Config(_) => Some(Box::new(
                "check the [layout] and [style] sections of the configuration file",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a located parse error or a plain error, providing
/// a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Converts a one-based line and column into a byte offset, clamped to the
/// end of `src`.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`FolioError`] into a list of reportable errors.
///
/// Parse errors with a known position become a located [`Reportable::Parse`];
/// everything else becomes a single [`Reportable::Error`].
pub fn to_reportables(err: &FolioError) -> Vec<Reportable<'_>> {
    match err {
        FolioError::Parse { err: json_err, src } if json_err.line() > 0 => {
            let label = if json_err.is_eof() {
                "document ends here"
            } else if json_err.is_data() {
                "does not match the content schema"
            } else {
                "invalid JSON"
            };
            vec![Reportable::Parse(ParseAdapter::new(
                json_err.to_string(),
                label,
                json_err.line(),
                json_err.column(),
                src,
            ))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
