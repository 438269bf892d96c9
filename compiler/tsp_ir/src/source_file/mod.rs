//! Source files and the line-start position index.
//!
//! A [`SourceFile`] owns its text and lazily builds a table of line-start
//! byte offsets the first time a position is queried. Lookups are a binary
//! search over that table: O(n) once per file, O(log L) per query.
//!
//! `\n`, `\r\n`, and a lone `\r` each terminate a line. `\r\n` counts as a
//! single break.

use std::fmt;
use std::sync::OnceLock;

/// Zero-based line and character of a byte offset.
///
/// `character` is measured in bytes from the start of the line, the same unit
/// as [`Span`](crate::Span) offsets, so `line_starts()[line] + character`
/// always recovers the original position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LineAndCharacter {
    pub line: u32,
    pub character: u32,
}

impl LineAndCharacter {
    /// 1-based `(line, column)` pair for user-facing output.
    #[inline]
    pub const fn one_based(self) -> (u32, u32) {
        (self.line + 1, self.character + 1)
    }
}

/// Immutable source text with its path.
///
/// The line-start table is a memoized derived value: it is computed at most
/// once and never invalidated, since the text cannot change after
/// construction.
pub struct SourceFile {
    path: String,
    text: String,
    line_starts: OnceLock<Vec<u32>>,
}

impl SourceFile {
    /// Create a source file from its text and path.
    pub fn new(text: impl Into<String>, path: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
            line_starts: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes, saturated to `u32::MAX`.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offsets of every line start.
    ///
    /// Always non-empty and strictly increasing; the first entry is 0. The
    /// last entry is the start of the final line, which may be empty when
    /// the text ends with a terminator.
    pub fn line_starts(&self) -> &[u32] {
        self.line_starts.get_or_init(|| scan_line_starts(&self.text))
    }

    /// Number of lines in the text. Empty text has one line.
    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    /// Zero-based line and character of a byte offset.
    ///
    /// Offsets past the end of the text are attributed to the last line.
    pub fn line_and_character_of_position(&self, position: u32) -> LineAndCharacter {
        let starts = self.line_starts();
        let line = match starts.binary_search(&position) {
            Ok(exact) => exact,
            // `insert` is the index a new line starting at `position` would
            // take, so the containing line is the one before it. `starts[0]`
            // is 0, which keeps `insert` >= 1.
            Err(insert) => insert - 1,
        };
        LineAndCharacter {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            character: position - starts[line],
        }
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

/// Scan `text` once and record the offset following each line terminator.
fn scan_line_starts(text: &str) -> Vec<u32> {
    let bytes = text.as_bytes();
    let mut starts = vec![0u32];
    let mut pos = 0usize;

    while pos < bytes.len() {
        let byte = bytes[pos];
        pos += 1;
        match byte {
            b'\r' => {
                if bytes.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
                starts.push(offset_u32(pos));
            }
            b'\n' => starts.push(offset_u32(pos)),
            _ => {}
        }
    }

    starts
}

#[inline]
fn offset_u32(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}
