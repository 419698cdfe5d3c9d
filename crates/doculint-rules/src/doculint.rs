//! The `doculint` rule set.
//!
//! # Detected Patterns
//!
//! - Package identifiers with `-`, `_` or uppercase letters
//! - Packages without a file named after them carrying a `Package <name>` comment
//! - Functions, constants and types without a doc comment starting with their name
//! - Const and type blocks without a doc comment
//! - Several constants declared on one line
//! - Literals compared directly in `if` conditions
//!
//! # Good Patterns
//!
//! ```go
//! // Package mypkg parses widgets.
//! package mypkg
//!
//! // Limits for widget sizes.
//! const (
//!     // MinSize is the smallest widget.
//!     MinSize = 1
//!     // MaxSize is the largest widget.
//!     MaxSize = 10
//! )
//!
//! // Parse reads one widget.
//! func Parse(n int) {
//!     if n > MaxSize {
//!         return
//!     }
//! }
//! ```

use crate::auditor::TreeAuditor;
use crate::naming::validate_package_name;
use crate::violation::NAME;
use doculint_core::{CompilationUnit, Diagnostic, DiagnosticSink, Rule, Severity, UnitContext};
use tracing::debug;

/// Checks package, function, type and constant documentation, package
/// naming, and literals in conditionals.
#[derive(Debug, Clone)]
pub struct Doculint {
    /// Default severity.
    pub severity: Severity,
}

impl Default for Doculint {
    fn default() -> Self {
        Self::new()
    }
}

impl Doculint {
    /// Creates the rule set with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for Doculint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        "DL"
    }

    fn description(&self) -> &'static str {
        "checks for proper function, type, package, constant, and string and numeric literal documentation"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &UnitContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        if let Some(violation) = validate_package_name(ctx.package) {
            diagnostics.report(violation.kind().diagnostic(
                ctx.severity,
                None,
                violation.message(ctx.package),
            ));
        }

        let mut auditor = TreeAuditor::new(ctx);
        for file in &unit.files {
            auditor.audit_file(file, &mut diagnostics);
        }
        auditor.finish(&mut diagnostics);

        debug!(
            "Package {}: {} diagnostic(s)",
            ctx.package,
            diagnostics.len()
        );
        diagnostics
    }
}
