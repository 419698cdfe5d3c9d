//! Core analyzer for orchestrating lint execution.

use crate::ast::CompilationUnit;
use crate::config::Config;
use crate::context::UnitContext;
use crate::rule::{Rule, RuleBox};
use crate::types::LintResult;

use rayon::prelude::*;
use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
    parallel: bool,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            config: None,
            parallel: true,
        }
    }
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule set to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule set to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether compilation units are audited on the rayon pool
    /// (default: true).
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
            parallel: self.parallel,
        }
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
    parallel: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rule sets.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Audits every compilation unit and returns the merged results.
    ///
    /// Units share no state, so they are audited independently and their
    /// results merged afterwards. Diagnostics come back sorted with
    /// unit-scoped ones first.
    #[must_use]
    pub fn analyze(&self, units: &[CompilationUnit]) -> LintResult {
        info!("Starting analysis of {} compilation unit(s)", units.len());

        let mut result = if self.parallel {
            units
                .par_iter()
                .map(|unit| self.analyze_unit(unit))
                .reduce(LintResult::new, |mut acc, next| {
                    acc.extend(next);
                    acc
                })
        } else {
            units
                .iter()
                .map(|unit| self.analyze_unit(unit))
                .fold(LintResult::new(), |mut acc, next| {
                    acc.extend(next);
                    acc
                })
        };

        result.sort();

        info!(
            "Analysis complete: {} diagnostics in {} files",
            result.diagnostics.len(),
            result.files_checked
        );

        result
    }

    /// Runs every enabled rule set over one compilation unit.
    #[must_use]
    pub fn analyze_unit(&self, unit: &CompilationUnit) -> LintResult {
        debug!(
            "Analyzing package {} ({} files)",
            unit.package,
            unit.files.len()
        );

        let mut result = LintResult::new();
        result.units_checked = 1;
        result.files_checked = unit.files.len();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let severity = self
                .config
                .rule_severity(rule.name())
                .unwrap_or_else(|| rule.default_severity());
            let ctx = UnitContext::new(unit, &self.config.conventions).with_severity(severity);

            result.diagnostics.extend(rule.check(&ctx, unit));
        }

        result
    }
}
