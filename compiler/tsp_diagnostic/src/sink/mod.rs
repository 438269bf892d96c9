//! Log sinks and plain-text diagnostic formatting.
//!
//! Diagnostics leave the compiler as [`LogEntry`] values handed to a
//! [`LogSink`]. Entries carry a fully resolved location (or none), so sinks
//! never need access to the semantic model.

use std::fmt::{self, Write as _};
use std::io;

use tsp_ir::{SourceLocation, TargetLookup};

use crate::{get_source_location, Diagnostic, DiagnosticCode, Severity, SourceLocationOptions};

/// Level of a log entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogLevel {
    Trace,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl From<Severity> for LogLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => LogLevel::Error,
            Severity::Warning => LogLevel::Warning,
        }
    }
}

/// One message for a [`LogSink`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub code: Option<DiagnosticCode>,
    pub source_location: Option<SourceLocation>,
}

impl LogEntry {
    /// An entry with no code and no location.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        LogEntry {
            level,
            message: message.into(),
            code: None,
            source_location: None,
        }
    }
}

/// Destination for log entries.
pub trait LogSink {
    fn log(&mut self, entry: LogEntry);
}

/// Captures entries in order.
impl LogSink for Vec<LogEntry> {
    fn log(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

/// Emits one `tracing` event per entry.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&mut self, entry: LogEntry) {
        let code = entry.code.as_ref().map(DiagnosticCode::as_str);
        let location = entry.source_location.as_ref().map(ToString::to_string);
        match entry.level {
            LogLevel::Trace => {
                tracing::trace!(code, location = location.as_deref(), "{}", entry.message);
            }
            LogLevel::Warning => {
                tracing::warn!(code, location = location.as_deref(), "{}", entry.message);
            }
            LogLevel::Error => {
                tracing::error!(code, location = location.as_deref(), "{}", entry.message);
            }
        }
    }
}

/// Options for [`format_log`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FormatOptions {
    /// Append a code frame underlining the located source.
    pub pretty: bool,
}

/// Writes each entry as formatted text, one entry per line.
pub struct WriterSink<W: io::Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: io::Write> WriterSink<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        WriterSink { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr(options: FormatOptions) -> Self {
        WriterSink::new(io::stderr(), options)
    }
}

impl<W: io::Write> LogSink for WriterSink<W> {
    fn log(&mut self, entry: LogEntry) {
        let _ = writeln!(self.writer, "{}", format_log(&entry, self.options));
    }
}

/// Render an entry as `path:line:column - level code: message`.
///
/// Entries without a location render as `level code: message`.
pub fn format_log(entry: &LogEntry, options: FormatOptions) -> String {
    let mut out = String::new();
    if let Some(location) = &entry.source_location {
        let _ = write!(out, "{location} - ");
    }
    let _ = write!(out, "{}", entry.level);
    if let Some(code) = &entry.code {
        let _ = write!(out, " {code}");
    }
    let _ = write!(out, ": {}", entry.message);

    if options.pretty {
        if let Some(location) = entry.source_location.as_ref().filter(|l| !l.is_synthetic) {
            write_code_frame(&mut out, location);
        }
    }
    out
}

/// Append the first line of `location` with its span underlined.
fn write_code_frame(out: &mut String, location: &SourceLocation) {
    let file = &location.file;
    let position = location.start_position();
    let starts = file.line_starts();
    let line_index = position.line as usize;
    let Some(&line_start) = starts.get(line_index) else {
        return;
    };
    let line_end = starts
        .get(line_index + 1)
        .copied()
        .unwrap_or_else(|| file.len());
    let Some(line_text) = file.text().get(line_start as usize..line_end as usize) else {
        return;
    };
    let line_text = line_text.trim_end_matches(['\n', '\r']);
    let text_end = line_start + u32::try_from(line_text.len()).unwrap_or(u32::MAX);

    let marker_len = location.span.end.min(text_end).saturating_sub(location.span.start).max(1);
    let line_number = (position.line + 1).to_string();
    let gutter = " ".repeat(line_number.len());

    let _ = write!(
        out,
        "\n\n{line_number} | {line_text}\n{gutter} | {}{}",
        " ".repeat(position.character as usize),
        "~".repeat(marker_len as usize)
    );
}

/// Resolve each diagnostic's target and log it to `sink`.
///
/// Targets resolve with `locate_id`, so declarations are reported at their
/// name.
pub fn log_diagnostics<M: TargetLookup + ?Sized>(
    diagnostics: &[Diagnostic],
    model: &M,
    sink: &mut dyn LogSink,
) {
    for diagnostic in diagnostics {
        sink.log(to_log_entry(diagnostic, model));
    }
}

/// Render a diagnostic in the single-line plain form.
pub fn format_diagnostic<M: TargetLookup + ?Sized>(diagnostic: &Diagnostic, model: &M) -> String {
    format_log(&to_log_entry(diagnostic, model), FormatOptions::default())
}

fn to_log_entry<M: TargetLookup + ?Sized>(diagnostic: &Diagnostic, model: &M) -> LogEntry {
    LogEntry {
        level: diagnostic.severity.into(),
        message: diagnostic.message.clone(),
        code: Some(diagnostic.code.clone()),
        source_location: get_source_location(
            model,
            diagnostic.target.as_ref(),
            SourceLocationOptions::LOCATE_ID,
        ),
    }
}
