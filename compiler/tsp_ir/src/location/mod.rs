//! Resolved source locations.

use std::fmt;
use std::sync::Arc;

use crate::{LineAndCharacter, SourceFile, Span};

/// Placeholder file name for synthetic locations with no better description.
pub const UNKNOWN_LOCATION: &str = "<unknown location>";

/// A span anchored in a concrete file.
///
/// Synthetic locations stand in when no real position exists. They point at
/// an empty placeholder file whose path describes why, with an empty span.
#[derive(Clone)]
pub struct SourceLocation {
    pub file: Arc<SourceFile>,
    pub span: Span,
    pub is_synthetic: bool,
}

impl SourceLocation {
    /// Create a location for `span` within `file`.
    pub fn new(file: Arc<SourceFile>, span: Span) -> Self {
        SourceLocation {
            file,
            span,
            is_synthetic: false,
        }
    }

    /// Create a synthetic location.
    ///
    /// `placeholder` becomes the path of the empty stand-in file; `None` uses
    /// [`UNKNOWN_LOCATION`].
    pub fn synthetic(placeholder: Option<&str>) -> Self {
        let path = placeholder.unwrap_or(UNKNOWN_LOCATION);
        SourceLocation {
            file: Arc::new(SourceFile::new("", path)),
            span: Span::DUMMY,
            is_synthetic: true,
        }
    }

    /// Path of the file this location points into.
    pub fn path(&self) -> &str {
        self.file.path()
    }

    /// Zero-based line and character of the span start.
    pub fn start_position(&self) -> LineAndCharacter {
        self.file.line_and_character_of_position(self.span.start)
    }
}

impl PartialEq for SourceLocation {
    /// Two locations are equal when they cover the same span of the same
    /// file (by identity) and agree on synthesis.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.file, &other.file)
            && self.span == other.span
            && self.is_synthetic == other.is_synthetic
    }
}

impl Eq for SourceLocation {}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.file.path(), self.span)?;
        if self.is_synthetic {
            write!(f, " (synthetic)")?;
        }
        Ok(())
    }
}

impl fmt::Display for SourceLocation {
    /// `path:line:column`, 1-based.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.start_position().one_based();
        write!(f, "{}:{line}:{column}", self.file.path())
    }
}
