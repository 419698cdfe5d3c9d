//! Tree Auditor: per-file documentation checks plus package-level state.
//!
//! One [`TreeAuditor`] lives for exactly one compilation unit. Each file is
//! passed to [`TreeAuditor::audit_file`], which checks the package comment and
//! walks the tree. Whether some file is named after the package is only
//! known once every file has been seen, so [`TreeAuditor::finish`] reports
//! that last.

use crate::violation::ViolationKind;
use doculint_core::ast::{
    CommentGroup, DeclKind, DeclShape, Expr, FuncDecl, GenDecl, IfStmt, Pos, SourceFile, Spec,
};
use doculint_core::visit::{self, Visit};
use doculint_core::{Conventions, DiagnosticSink, Location, Severity, UnitContext};
use std::collections::BTreeMap;
use tracing::debug;

/// Per-package record of whether a file named after the package was seen.
#[derive(Debug, Default)]
pub struct PackageDocState {
    has_named_doc_file: BTreeMap<String, bool>,
}

impl PackageDocState {
    /// Inserts `package` with `false` unless it is already known.
    pub fn observe(&mut self, package: &str) {
        if !self.has_named_doc_file.contains_key(package) {
            self.has_named_doc_file.insert(package.to_string(), false);
        }
    }

    /// Records that a file named after `package` was found.
    ///
    /// Returns `true` only the first time, so per-package checks on that file
    /// run once.
    pub fn mark_named_doc_file(&mut self, package: &str) -> bool {
        let seen = self
            .has_named_doc_file
            .entry(package.to_string())
            .or_insert(false);
        !std::mem::replace(seen, true)
    }

    /// Packages with no file named after them.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.has_named_doc_file
            .iter()
            .filter(|(_, found)| !**found)
            .map(|(package, _)| package.as_str())
    }
}

/// Picks the doc comment that documents a spec of `group`.
///
/// Inside a parenthesized block every spec carries its own comment; a
/// singleton declaration keeps the comment on the declaration itself.
#[must_use]
pub fn resolve_doc_comment<'a>(
    spec_doc: Option<&'a CommentGroup>,
    group: &'a GenDecl,
) -> Option<&'a CommentGroup> {
    match group.shape() {
        DeclShape::ParenthesizedBlock => spec_doc,
        DeclShape::SingletonDecl => group.doc.as_ref(),
    }
}

/// Reports whether the trimmed comment text starts with `prefix`.
fn doc_starts_with(doc: &CommentGroup, prefix: &str) -> bool {
    doc.text().trim().starts_with(prefix)
}

/// Audits the files of one compilation unit.
#[derive(Debug)]
pub struct TreeAuditor<'a> {
    package: &'a str,
    is_entry: bool,
    conventions: &'a Conventions,
    severity: Severity,
    state: PackageDocState,
}

impl<'a> TreeAuditor<'a> {
    /// Creates an auditor for the unit described by `ctx`.
    #[must_use]
    pub fn new(ctx: &UnitContext<'a>) -> Self {
        Self {
            package: ctx.package,
            is_entry: ctx.is_entry,
            conventions: ctx.conventions,
            severity: ctx.severity,
            state: PackageDocState::default(),
        }
    }

    /// Runs the per-file pass: the package comment check and the tree walk.
    pub fn audit_file<S>(&mut self, file: &SourceFile, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        debug!("Auditing {}", file.path.display());

        self.check_package_doc(file, sink);

        let mut walker = FileWalker {
            auditor: &*self,
            file,
            sink,
        };
        walker.visit_file(file);
    }

    /// Reports every package that had no file named after it.
    pub fn finish<S>(self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        for package in self.state.missing() {
            sink.report(ViolationKind::PackageFileMissing.diagnostic(
                self.severity,
                None,
                format!(
                    "package \"{package}\" has no file with the same name containing package comment"
                ),
            ));
        }
    }

    fn check_package_doc<S>(&mut self, file: &SourceFile, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        // The entry package conventionally carries no library documentation.
        if self.is_entry {
            return;
        }

        let package = self.package;
        self.state.observe(package);

        if file.simple_name() != package || !self.state.mark_named_doc_file(package) {
            return;
        }

        match &file.doc {
            None => sink.report(ViolationKind::PackageCommentMissing.diagnostic(
                self.severity,
                None,
                format!(
                    "package \"{package}\" has no comment associated with it in \"{}\"",
                    file.file_name()
                ),
            )),
            Some(doc) => {
                let expected = format!("Package {package}");
                if !doc_starts_with(doc, &expected) {
                    sink.report(ViolationKind::PackageCommentPrefix.diagnostic(
                        self.severity,
                        None,
                        format!(
                            "comment for package \"{package}\" should begin with \"{expected}\""
                        ),
                    ));
                }
            }
        }
    }

    fn is_exempt_function(&self, func: &FuncDecl) -> bool {
        let name = func.name.name.as_str();
        (self.is_entry && name == self.conventions.entry_function)
            || name == self.conventions.initializer_function
    }
}

/// Wording and kinds used by the doc comment check of one declaration kind.
struct DocRule {
    noun: &'static str,
    missing: ViolationKind,
    prefix: ViolationKind,
}

const FUNCTION_DOC: DocRule = DocRule {
    noun: "function",
    missing: ViolationKind::FunctionCommentMissing,
    prefix: ViolationKind::FunctionCommentPrefix,
};

const CONST_DOC: DocRule = DocRule {
    noun: "constant",
    missing: ViolationKind::ConstCommentMissing,
    prefix: ViolationKind::ConstCommentPrefix,
};

const TYPE_DOC: DocRule = DocRule {
    noun: "type",
    missing: ViolationKind::TypeCommentMissing,
    prefix: ViolationKind::TypeCommentPrefix,
};

/// Visitor applying node rules while walking one file.
struct FileWalker<'w, 'a, S: ?Sized> {
    auditor: &'w TreeAuditor<'a>,
    file: &'w SourceFile,
    sink: &'w mut S,
}

impl<S> FileWalker<'_, '_, S>
where
    S: DiagnosticSink + ?Sized,
{
    fn report(&mut self, kind: ViolationKind, pos: Pos, message: String) {
        let location = Location::at(&self.file.path, pos);
        self.sink
            .report(kind.diagnostic(self.auditor.severity, Some(location), message));
    }

    /// Requires `doc` to exist and to start with `name`.
    fn check_named_doc(
        &mut self,
        rule: &DocRule,
        doc: Option<&CommentGroup>,
        name: &str,
        pos: Pos,
    ) {
        match doc {
            None => self.report(
                rule.missing,
                pos,
                format!("{} \"{name}\" has no comment associated with it", rule.noun),
            ),
            Some(doc) if !doc_starts_with(doc, name) => self.report(
                rule.prefix,
                pos,
                format!("comment for {} \"{name}\" should begin with \"{name}\"", rule.noun),
            ),
            Some(_) => {}
        }
    }

    fn check_const_group(&mut self, group: &GenDecl) {
        if group.shape() == DeclShape::ParenthesizedBlock && group.doc.is_none() {
            self.report(
                ViolationKind::ConstBlockCommentMissing,
                group.pos,
                "constant block has no comment associated with it".to_string(),
            );
        }

        for spec in &group.specs {
            let Spec::Value(spec) = spec else {
                continue;
            };

            match spec.names.as_slice() {
                [] => panic!(
                    "malformed tree: constant spec at {}:{}:{} declares no names",
                    self.file.path.display(),
                    spec.pos.line,
                    spec.pos.column
                ),
                [name] => {
                    let doc = resolve_doc_comment(spec.doc.as_ref(), group);
                    self.check_named_doc(&CONST_DOC, doc, &name.name, spec.pos);
                }
                names => {
                    let joined = names
                        .iter()
                        .map(|n| n.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.report(
                        ViolationKind::ConstMultiName,
                        spec.pos,
                        format!(
                            "constants \"{joined}\" should be separated and each have a comment associated with them"
                        ),
                    );
                }
            }
        }
    }

    fn check_type_group(&mut self, group: &GenDecl) {
        if group.shape() == DeclShape::ParenthesizedBlock && group.doc.is_none() {
            self.report(
                ViolationKind::TypeBlockCommentMissing,
                group.pos,
                "type block has no comment associated with it".to_string(),
            );
        }

        for spec in &group.specs {
            if let Spec::Type(spec) = spec {
                let doc = resolve_doc_comment(spec.doc.as_ref(), group);
                self.check_named_doc(&TYPE_DOC, doc, &spec.name.name, spec.pos);
            }
        }
    }
}

impl<'ast, S> Visit<'ast> for FileWalker<'_, '_, S>
where
    S: DiagnosticSink + ?Sized,
{
    fn visit_func_decl(&mut self, node: &'ast FuncDecl) {
        if !self.auditor.is_exempt_function(node) {
            self.check_named_doc(&FUNCTION_DOC, node.doc.as_ref(), &node.name.name, node.pos);
        }

        visit::walk_func_decl(self, node);
    }

    fn visit_if_stmt(&mut self, node: &'ast IfStmt) {
        // Only the operands of the top-level binary expression are inspected.
        if let Expr::Binary { x, y, .. } = &node.cond {
            for operand in [x, y] {
                if let Expr::BasicLit { pos, .. } = **operand {
                    self.report(
                        ViolationKind::LiteralInConditional,
                        pos,
                        "literal found in conditional".to_string(),
                    );
                }
            }
        }

        visit::walk_if_stmt(self, node);
    }

    fn visit_gen_decl(&mut self, node: &'ast GenDecl) {
        match node.kind {
            DeclKind::Const => self.check_const_group(node),
            DeclKind::Type => self.check_type_group(node),
            DeclKind::Import | DeclKind::Var => {}
        }

        visit::walk_gen_decl(self, node);
    }
}
