//! Context types for rule execution.

use crate::ast::CompilationUnit;
use crate::config::Conventions;
use crate::types::Severity;

/// Context provided to rules for one compilation unit.
///
/// Contains the facts about the unit that rules need beyond its files: the
/// package identifier, whether it is the program-entry package, and the
/// naming conventions in effect.
#[derive(Debug, Clone)]
pub struct UnitContext<'a> {
    /// Package identifier.
    pub package: &'a str,
    /// Whether this is the program-entry package.
    pub is_entry: bool,
    /// Conventional names used by exemptions.
    pub conventions: &'a Conventions,
    /// Severity for diagnostics produced in this unit.
    pub severity: Severity,
}

impl<'a> UnitContext<'a> {
    /// Creates a context for `unit`.
    ///
    /// The unit's own entry flag wins; without one, the package is the entry
    /// package when its name equals the configured entry package name.
    #[must_use]
    pub fn new(unit: &'a CompilationUnit, conventions: &'a Conventions) -> Self {
        let is_entry = unit
            .entry
            .unwrap_or_else(|| unit.package == conventions.entry_package);

        Self {
            package: &unit.package,
            is_entry,
            conventions,
            severity: Severity::Error,
        }
    }

    /// Sets the severity for diagnostics produced in this unit.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_derived_from_package_name() {
        let conventions = Conventions::default();
        let main = CompilationUnit::new("main");
        let lib = CompilationUnit::new("mypkg");
        assert!(UnitContext::new(&main, &conventions).is_entry);
        assert!(!UnitContext::new(&lib, &conventions).is_entry);
    }

    #[test]
    fn explicit_entry_flag_wins() {
        let conventions = Conventions::default();
        let unit = CompilationUnit::new("main").with_entry(false);
        assert!(!UnitContext::new(&unit, &conventions).is_entry);

        let unit = CompilationUnit::new("cmd").with_entry(true);
        assert!(UnitContext::new(&unit, &conventions).is_entry);
    }

    #[test]
    fn custom_entry_package_name() {
        let conventions = Conventions {
            entry_package: "app".to_string(),
            ..Conventions::default()
        };
        let unit = CompilationUnit::new("app");
        assert!(UnitContext::new(&unit, &conventions).is_entry);
    }
}
