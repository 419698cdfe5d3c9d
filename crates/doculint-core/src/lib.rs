//! # doculint-core
//!
//! Core framework for documentation linting over a Go-style syntax tree.
//!
//! This crate provides the foundational types for building documentation
//! rules. It includes:
//!
//! - [`ast`] with the position-annotated tree supplied by a front-end
//! - [`visit::Visit`] for traversing that tree
//! - [`Rule`] trait for rule sets evaluated once per compilation unit
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Diagnostic`] and [`DiagnosticSink`] for reporting findings
//!
//! ## Example
//!
//! ```ignore
//! use doculint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = analyzer.analyze(&units);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
pub mod visit;

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use ast::CompilationUnit;
pub use config::{Config, ConfigError, Conventions, RuleConfig};
pub use context::UnitContext;
pub use rule::{Rule, RuleBox};
pub use types::{Diagnostic, DiagnosticSink, LintResult, Location, Severity};
