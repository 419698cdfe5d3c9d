//! # doculint-rules
//!
//! Documentation convention rules for Go-style syntax trees.
//!
//! ## Violation Codes
//!
//! | Code | Name | Scope |
//! |------|------|-------|
//! | DL001 | `package-name-separator` | unit |
//! | DL002 | `package-name-casing` | unit |
//! | DL003 | `package-comment-missing` | file |
//! | DL004 | `package-comment-prefix` | file |
//! | DL005 | `package-file-missing` | unit |
//! | DL006 | `function-comment-missing` | node |
//! | DL007 | `function-comment-prefix` | node |
//! | DL008 | `literal-in-conditional` | node |
//! | DL009 | `const-block-comment-missing` | node |
//! | DL010 | `const-multi-name` | node |
//! | DL011 | `const-comment-missing` | node |
//! | DL012 | `const-comment-prefix` | node |
//! | DL013 | `type-block-comment-missing` | node |
//! | DL014 | `type-comment-missing` | node |
//! | DL015 | `type-comment-prefix` | node |
//!
//! ## Usage
//!
//! ```ignore
//! use doculint_core::Analyzer;
//! use doculint_rules::Doculint;
//!
//! let analyzer = Analyzer::builder().rule(Doculint::new()).build();
//! let result = analyzer.analyze(&units);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auditor;
mod doculint;
mod naming;
mod violation;

pub use auditor::{resolve_doc_comment, PackageDocState, TreeAuditor};
pub use doculint::Doculint;
pub use naming::{validate_package_name, NamingViolation};
pub use violation::{ViolationKind, NAME};

/// Re-export core types for convenience.
pub use doculint_core::{Diagnostic, Rule, Severity};

use doculint_core::RuleBox;

/// Returns every available rule set.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(Doculint::new())]
}
