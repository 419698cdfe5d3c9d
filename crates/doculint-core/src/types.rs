//! Core types for diagnostics and results.

use crate::ast::Pos;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as supplied by the front-end.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a location from a node position in `file`.
    #[must_use]
    pub fn at(file: &Path, pos: Pos) -> Self {
        Self::new(file, pos.line, pos.column)
    }
}

/// A documentation-convention violation.
///
/// `location` is `None` for file-scoped and compilation-unit-scoped
/// diagnostics, which have no single node to point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Violation code (e.g., "DL006").
    pub code: String,
    /// Name of the rule set that produced it (e.g., "doculint").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Node location, if the diagnostic is node-scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Option<Location>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = match &self.location {
            Some(loc) => format!(
                "{} {} at {}:{}:{}\n",
                self.code,
                self.rule,
                loc.file.display(),
                loc.line,
                loc.column,
            ),
            None => format!("{} {}\n", self.code, self.rule),
        };
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{}:{}:{}: ", loc.file.display(), loc.line, loc.column)?;
        }
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)
    }
}

/// Receiver of diagnostics as rules produce them.
///
/// Presentation (grouping, sorting, formatting) is the sink's concern.
pub trait DiagnosticSink {
    /// Takes ownership of one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of compilation units checked.
    pub units_checked: usize,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.diagnostics
            .iter()
            .fold((0, 0, 0), |(e, w, i), d| match d.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Diagnostics carrying the given code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.code == code).collect()
    }

    /// Adds diagnostics and counters from another result.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.units_checked += other.units_checked;
        self.files_checked += other.files_checked;
    }

    /// Sorts unit-scoped diagnostics first, then by file, line and column.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| a.location.cmp(&b.location).then(a.code.cmp(&b.code)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity, location: Option<Location>) -> Diagnostic {
        Diagnostic::new(
            "DL006",
            "doculint",
            severity,
            location,
            "function \"Run\" has no comment associated with it",
        )
    }

    #[test]
    fn display_with_location() {
        let d = make_diagnostic(Severity::Error, Some(Location::new("a/run.go", 12, 1)));
        assert_eq!(
            d.to_string(),
            "a/run.go:12:1: error [DL006] function \"Run\" has no comment associated with it"
        );
    }

    #[test]
    fn display_without_location() {
        let d = make_diagnostic(Severity::Warning, None);
        assert_eq!(
            d.to_string(),
            "warning [DL006] function \"Run\" has no comment associated with it"
        );
    }

    #[test]
    fn format_omits_position_for_unit_scope() {
        let formatted = make_diagnostic(Severity::Error, None).format();
        assert!(formatted.starts_with("DL006 doculint\n"));
        assert!(formatted.contains("  error: function"));
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(make_diagnostic(Severity::Error, None));
        sink.report(make_diagnostic(Severity::Info, None));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn count_and_threshold() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Warning, None));
        result.diagnostics.push(make_diagnostic(Severity::Info, None));
        assert_eq!(result.count_by_severity(), (0, 1, 1));
        assert!(!result.has_errors());
        assert!(result.has_violations_at(Severity::Warning));
    }

    #[test]
    fn sort_puts_unit_scope_first() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(
            Severity::Error,
            Some(Location::new("b.go", 1, 1)),
        ));
        result.diagnostics.push(make_diagnostic(
            Severity::Error,
            Some(Location::new("a.go", 9, 1)),
        ));
        result.diagnostics.push(make_diagnostic(Severity::Error, None));
        result.sort();

        let files: Vec<Option<&Path>> = result
            .diagnostics
            .iter()
            .map(|d| d.location.as_ref().map(|l| l.file.as_path()))
            .collect();
        assert_eq!(
            files,
            vec![None, Some(Path::new("a.go")), Some(Path::new("b.go"))]
        );
    }

    #[test]
    fn extend_merges_counters() {
        let mut a = LintResult::new();
        a.units_checked = 1;
        a.files_checked = 2;
        let mut b = LintResult::new();
        b.units_checked = 1;
        b.files_checked = 3;
        b.diagnostics.push(make_diagnostic(Severity::Error, None));
        a.extend(b);
        assert_eq!(a.units_checked, 2);
        assert_eq!(a.files_checked, 5);
        assert!(a.has_errors());
    }
}
