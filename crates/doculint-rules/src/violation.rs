//! Violation kinds reported by the doculint rule set.

use doculint_core::{Diagnostic, Location, Severity};

/// Rule set name carried by every doculint diagnostic.
pub const NAME: &str = "doculint";

/// Every kind of violation doculint reports, each with a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Package identifier contains `-` or `_`.
    PackageNameSeparator,
    /// Package identifier is not all lowercase.
    PackageNameCasing,
    /// The file named after the package has no package comment.
    PackageCommentMissing,
    /// The package comment does not start with `Package <name>`.
    PackageCommentPrefix,
    /// No file is named after the package.
    PackageFileMissing,
    /// Function has no doc comment.
    FunctionCommentMissing,
    /// Function doc comment does not start with its name.
    FunctionCommentPrefix,
    /// Basic literal used as an operand of an `if` condition.
    LiteralInConditional,
    /// Parenthesized const block has no doc comment.
    ConstBlockCommentMissing,
    /// Several constants declared on one spec.
    ConstMultiName,
    /// Constant has no doc comment.
    ConstCommentMissing,
    /// Constant doc comment does not start with its name.
    ConstCommentPrefix,
    /// Parenthesized type block has no doc comment.
    TypeBlockCommentMissing,
    /// Type has no doc comment.
    TypeCommentMissing,
    /// Type doc comment does not start with its name.
    TypeCommentPrefix,
}

impl ViolationKind {
    /// All kinds in code order.
    pub const ALL: [Self; 15] = [
        Self::PackageNameSeparator,
        Self::PackageNameCasing,
        Self::PackageCommentMissing,
        Self::PackageCommentPrefix,
        Self::PackageFileMissing,
        Self::FunctionCommentMissing,
        Self::FunctionCommentPrefix,
        Self::LiteralInConditional,
        Self::ConstBlockCommentMissing,
        Self::ConstMultiName,
        Self::ConstCommentMissing,
        Self::ConstCommentPrefix,
        Self::TypeBlockCommentMissing,
        Self::TypeCommentMissing,
        Self::TypeCommentPrefix,
    ];

    /// Stable diagnostic code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::PackageNameSeparator => "DL001",
            Self::PackageNameCasing => "DL002",
            Self::PackageCommentMissing => "DL003",
            Self::PackageCommentPrefix => "DL004",
            Self::PackageFileMissing => "DL005",
            Self::FunctionCommentMissing => "DL006",
            Self::FunctionCommentPrefix => "DL007",
            Self::LiteralInConditional => "DL008",
            Self::ConstBlockCommentMissing => "DL009",
            Self::ConstMultiName => "DL010",
            Self::ConstCommentMissing => "DL011",
            Self::ConstCommentPrefix => "DL012",
            Self::TypeBlockCommentMissing => "DL013",
            Self::TypeCommentMissing => "DL014",
            Self::TypeCommentPrefix => "DL015",
        }
    }

    /// Kebab-case name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PackageNameSeparator => "package-name-separator",
            Self::PackageNameCasing => "package-name-casing",
            Self::PackageCommentMissing => "package-comment-missing",
            Self::PackageCommentPrefix => "package-comment-prefix",
            Self::PackageFileMissing => "package-file-missing",
            Self::FunctionCommentMissing => "function-comment-missing",
            Self::FunctionCommentPrefix => "function-comment-prefix",
            Self::LiteralInConditional => "literal-in-conditional",
            Self::ConstBlockCommentMissing => "const-block-comment-missing",
            Self::ConstMultiName => "const-multi-name",
            Self::ConstCommentMissing => "const-comment-missing",
            Self::ConstCommentPrefix => "const-comment-prefix",
            Self::TypeBlockCommentMissing => "type-block-comment-missing",
            Self::TypeCommentMissing => "type-comment-missing",
            Self::TypeCommentPrefix => "type-comment-prefix",
        }
    }

    /// Builds a diagnostic of this kind.
    #[must_use]
    pub fn diagnostic(
        self,
        severity: Severity,
        location: Option<Location>,
        message: impl Into<String>,
    ) -> Diagnostic {
        Diagnostic::new(self.code(), NAME, severity, location, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_ordered() {
        let codes: Vec<&str> = ViolationKind::ALL.iter().map(|k| k.code()).collect();
        let unique: HashSet<&&str> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());

        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, codes);
    }

    #[test]
    fn diagnostic_carries_code_and_rule() {
        let d = ViolationKind::LiteralInConditional.diagnostic(
            Severity::Error,
            Some(Location::new("a.go", 3, 10)),
            "literal found in conditional",
        );
        assert_eq!(d.code, "DL008");
        assert_eq!(d.rule, NAME);
    }
}
