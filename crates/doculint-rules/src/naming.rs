//! Package identifier naming conventions.
//!
//! Package names are short, lowercase and have no separators, as described
//! in <https://blog.golang.org/package-names>.

use crate::violation::ViolationKind;

/// A package naming rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingViolation {
    /// The identifier contains `-` or `_`.
    Separator,
    /// The identifier is not all lowercase.
    Casing,
}

impl NamingViolation {
    /// Violation kind reported for this failure.
    #[must_use]
    pub fn kind(self) -> ViolationKind {
        match self {
            Self::Separator => ViolationKind::PackageNameSeparator,
            Self::Casing => ViolationKind::PackageNameCasing,
        }
    }

    /// Diagnostic message for `package`.
    #[must_use]
    pub fn message(self, package: &str) -> String {
        match self {
            Self::Separator => format!("package \"{package}\" should not contain - or _ in name"),
            Self::Casing => format!("package \"{package}\" should be all lowercase"),
        }
    }
}

/// Checks a package identifier against the naming conventions.
///
/// The separator rule is checked before the casing rule, so at most one
/// violation comes back.
#[must_use]
pub fn validate_package_name(package: &str) -> Option<NamingViolation> {
    if package.contains(['-', '_']) {
        return Some(NamingViolation::Separator);
    }

    if package != package.to_lowercase() {
        return Some(NamingViolation::Casing);
    }

    None
}
