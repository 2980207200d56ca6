//! Diagnostics reported by a syntax backend.

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

/// A problem found in the source, usually by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Byte offset the diagnostic points at, when known
    pub offset: Option<u32>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            offset: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            offset: None,
        }
    }

    /// Attach a source offset.
    pub fn with_offset(mut self, offset: Option<u32>) -> Self {
        self.offset = offset;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// One-based `(line, column)` of the diagnostic within `source`.
    pub fn location(&self, source: &str) -> Option<(usize, usize)> {
        let offset = (self.offset? as usize).min(source.len());
        let before = source.get(..offset)?;
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Some((line, column))
    }
}

/// The backend could not produce a syntax tree at all.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Parse failed with {} diagnostic(s)", .diagnostics.len())]
pub struct ParseFailure {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseFailure {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
