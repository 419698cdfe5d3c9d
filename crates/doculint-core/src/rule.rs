//! Rule trait for defining lint rule sets.

use crate::ast::CompilationUnit;
use crate::context::UnitContext;
use crate::types::{Diagnostic, Severity};

/// A named rule set evaluated once per compilation unit.
///
/// Rules receive every file of one package at once, so they can keep
/// cross-file state for the lifetime of a single `check` call. Implementors
/// typically walk each file with a [`Visit`](crate::visit::Visit) visitor.
///
/// # Example
///
/// ```ignore
/// use doculint_core::{CompilationUnit, Diagnostic, Rule, UnitContext};
///
/// pub struct NoEmptyPackages;
///
/// impl Rule for NoEmptyPackages {
///     fn name(&self) -> &'static str { "no-empty-packages" }
///     fn code(&self) -> &'static str { "XX001" }
///
///     fn check(&self, ctx: &UnitContext, unit: &CompilationUnit) -> Vec<Diagnostic> {
///         if unit.files.is_empty() {
///             vec![Diagnostic::new(self.code(), self.name(), ctx.severity, None,
///                 format!("package \"{}\" has no files", ctx.package))]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule set (e.g., "doculint").
    fn name(&self) -> &'static str;

    /// Returns the code prefix of this rule set (e.g., "DL").
    fn code(&self) -> &'static str;

    /// Returns a one-line description of what this rule set checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule set.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one compilation unit and returns the diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the unit being checked
    /// * `unit` - The package identifier and syntax trees of all its files
    fn check(&self, ctx: &UnitContext, unit: &CompilationUnit) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Conventions;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &UnitContext, _unit: &CompilationUnit) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                ctx.severity,
                None,
                format!("checked {}", ctx.package),
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let conventions = Conventions::default();
        let unit = CompilationUnit::new("mypkg");
        let diagnostics = rule.check(&UnitContext::new(&unit, &conventions), &unit);
        assert_eq!(diagnostics[0].message, "checked mypkg");
    }
}
