//! Position-annotated syntax tree handed over by a front-end.
//!
//! The tree mirrors the subset of Go's `go/ast` that documentation rules
//! inspect. It is read-only for rules and is (de)serializable so front-ends
//! written in other languages can hand compilation units over as JSON.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Position of a node in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Pos {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A run of adjacent comments with no blank line or code between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentGroup {
    /// Raw comments including their markers (`// ...` or `/* ... */`).
    pub comments: Vec<String>,
}

impl CommentGroup {
    /// Creates a comment group from raw comments.
    #[must_use]
    pub fn new<I, S>(comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the text of the comment with markers and directives removed.
    ///
    /// Line comments lose `//` and a single following space, block comments
    /// lose `/*` and `*/`. Directive comments such as `//go:generate` are
    /// dropped. Trailing whitespace is removed from every line, leading and
    /// trailing blank lines are removed and runs of blank lines collapse into
    /// one. A non-empty result ends in a newline.
    #[must_use]
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();

        for comment in &self.comments {
            if let Some(rest) = comment.strip_prefix("//") {
                if is_directive(rest) {
                    continue;
                }
                lines.push(rest.strip_prefix(' ').unwrap_or(rest));
            } else if let Some(rest) = comment.strip_prefix("/*") {
                let rest = rest.strip_suffix("*/").unwrap_or(rest);
                lines.extend(rest.split('\n'));
            } else {
                lines.extend(comment.split('\n'));
            }
        }

        let mut out: Vec<&str> = Vec::with_capacity(lines.len());
        for line in lines.iter().map(|l| l.trim_end()) {
            if line.is_empty() && out.last().map_or(true, |prev| prev.is_empty()) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }

        if out.is_empty() {
            return String::new();
        }
        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

/// Reports whether the body of a `//` comment is a tool directive.
///
/// Matches `//line ...`, `//extern ...`, `//export ...` and the
/// `//[a-z0-9]+:[a-z0-9]` form used by `//go:generate` or `//nolint:all`.
fn is_directive(body: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| body.starts_with(prefix))
    {
        return true;
    }

    let Some(colon) = body.find(':') else {
        return false;
    };
    let (head, tail) = body.split_at(colon);
    let is_word = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    !head.is_empty()
        && head.chars().all(is_word)
        && tail[1..].chars().next().is_some_and(is_word)
}

/// An identifier with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    /// Position of the identifier.
    pub pos: Pos,
    /// Identifier text.
    pub name: String,
}

impl Ident {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        Self {
            pos,
            name: name.into(),
        }
    }
}

/// One source file of a compilation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file as reported by the front-end.
    pub path: PathBuf,
    /// File-level (package) doc comment.
    #[serde(default)]
    pub doc: Option<CommentGroup>,
    /// Top-level declarations in source order.
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl SourceFile {
    /// Creates an empty file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            doc: None,
            decls: Vec::new(),
        }
    }

    /// Sets the file-level doc comment.
    #[must_use]
    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Appends a top-level declaration.
    #[must_use]
    pub fn with_decl(mut self, decl: Decl) -> Self {
        self.decls.push(decl);
        self
    }

    /// File name without directories or extension (`mypkg` for `a/mypkg.go`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// File name without directories (`mypkg.go` for `a/mypkg.go`).
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decl {
    /// Function or method declaration.
    Func(FuncDecl),
    /// `import`, `const`, `type` or `var` declaration.
    Gen(GenDecl),
}

/// Function or method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    /// Position of the `func` keyword.
    pub pos: Pos,
    /// Function name.
    pub name: Ident,
    /// Attached doc comment.
    #[serde(default)]
    pub doc: Option<CommentGroup>,
    /// Receiver type name for methods.
    #[serde(default)]
    pub recv: Option<Ident>,
    /// Function body; absent for external (assembly) functions.
    #[serde(default)]
    pub body: Option<Block>,
}

/// Keyword of a general declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    /// `import`
    Import,
    /// `const`
    Const,
    /// `type`
    Type,
    /// `var`
    Var,
}

/// Where the doc comment of a declared name is expected to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclShape {
    /// `const X = 1`: the comment is attached to the declaration.
    SingletonDecl,
    /// `const ( X = 1 )`: the block and every spec carry their own comment.
    ParenthesizedBlock,
}

/// General declaration: a group of imports, constants, types or variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenDecl {
    /// Position of the keyword.
    pub pos: Pos,
    /// Declaration keyword.
    #[serde(rename = "tok")]
    pub kind: DeclKind,
    /// Position of the opening parenthesis, if the declaration is a block.
    #[serde(default)]
    pub lparen: Option<Pos>,
    /// Doc comment attached to the declaration.
    #[serde(default)]
    pub doc: Option<CommentGroup>,
    /// Specs in source order.
    #[serde(default)]
    pub specs: Vec<Spec>,
}

impl GenDecl {
    /// Classifies the declaration as a block or a singleton.
    #[must_use]
    pub fn shape(&self) -> DeclShape {
        if self.lparen.is_some() {
            DeclShape::ParenthesizedBlock
        } else {
            DeclShape::SingletonDecl
        }
    }
}

/// One spec inside a general declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Spec {
    /// Import path.
    Import {
        /// Position of the spec.
        pos: Pos,
        /// Quoted import path.
        path: String,
    },
    /// Constant or variable spec.
    Value(ValueSpec),
    /// Type spec.
    Type(TypeSpec),
}

/// Constant or variable spec (`a, b = 1, 2`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    /// Position of the first name.
    pub pos: Pos,
    /// Declared names.
    pub names: Vec<Ident>,
    /// Doc comment attached to the spec (only set inside blocks).
    #[serde(default)]
    pub doc: Option<CommentGroup>,
    /// Initial values.
    #[serde(default)]
    pub values: Vec<Expr>,
}

/// Type spec (`T struct{}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    /// Position of the type name.
    pub pos: Pos,
    /// Declared type name.
    pub name: Ident,
    /// Doc comment attached to the spec (only set inside blocks).
    #[serde(default)]
    pub doc: Option<CommentGroup>,
}

/// Braced statement list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Statements in source order.
    #[serde(default)]
    pub stmts: Vec<Stmt>,
}

impl Block {
    /// Creates a block from statements.
    #[must_use]
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

/// Statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    /// Expression statement.
    Expr {
        /// The expression.
        expr: Expr,
    },
    /// Assignment or short variable declaration.
    Assign {
        /// Position of the statement.
        pos: Pos,
        /// Left-hand side.
        lhs: Vec<Expr>,
        /// Right-hand side.
        rhs: Vec<Expr>,
    },
    /// `return` statement.
    Return {
        /// Position of the keyword.
        pos: Pos,
        /// Returned values.
        #[serde(default)]
        results: Vec<Expr>,
    },
    /// `if` statement.
    If(IfStmt),
    /// Three-clause or condition-only `for` statement.
    For {
        /// Position of the keyword.
        pos: Pos,
        /// Initialization statement.
        #[serde(default)]
        init: Option<Box<Stmt>>,
        /// Loop condition.
        #[serde(default)]
        cond: Option<Expr>,
        /// Post iteration statement.
        #[serde(default)]
        post: Option<Box<Stmt>>,
        /// Loop body.
        body: Block,
    },
    /// `for ... range` statement.
    Range {
        /// Position of the keyword.
        pos: Pos,
        /// Key variable.
        #[serde(default)]
        key: Option<Expr>,
        /// Value variable.
        #[serde(default)]
        value: Option<Expr>,
        /// Ranged-over expression.
        x: Expr,
        /// Loop body.
        body: Block,
    },
    /// Expression `switch` statement.
    Switch {
        /// Position of the keyword.
        pos: Pos,
        /// Initialization statement.
        #[serde(default)]
        init: Option<Box<Stmt>>,
        /// Switch tag; absent for `switch { ... }`.
        #[serde(default)]
        tag: Option<Expr>,
        /// `case` and `default` clauses.
        #[serde(default)]
        clauses: Vec<CaseClause>,
    },
    /// Type `switch` statement.
    TypeSwitch {
        /// Position of the keyword.
        pos: Pos,
        /// Initialization statement.
        #[serde(default)]
        init: Option<Box<Stmt>>,
        /// `x := y.(type)` or `y.(type)`.
        assign: Box<Stmt>,
        /// `case` and `default` clauses.
        #[serde(default)]
        clauses: Vec<CaseClause>,
    },
    /// `select` statement.
    Select {
        /// Position of the keyword.
        pos: Pos,
        /// Communication clauses.
        #[serde(default)]
        clauses: Vec<CommClause>,
    },
    /// `go` statement.
    Go {
        /// Position of the keyword.
        pos: Pos,
        /// Started call.
        call: Expr,
    },
    /// `defer` statement.
    Defer {
        /// Position of the keyword.
        pos: Pos,
        /// Deferred call.
        call: Expr,
    },
    /// Labeled statement.
    Labeled {
        /// Label.
        label: Ident,
        /// Statement after the label.
        stmt: Box<Stmt>,
    },
    /// `x++` or `x--`.
    IncDec {
        /// Position of the operand.
        pos: Pos,
        /// Operand.
        x: Expr,
        /// `++` or `--`.
        op: String,
    },
    /// Channel send `ch <- v`.
    Send {
        /// Position of the channel operand.
        pos: Pos,
        /// Channel.
        chan: Expr,
        /// Sent value.
        value: Expr,
    },
    /// `break`, `continue`, `goto` or `fallthrough`.
    Branch {
        /// Position of the keyword.
        pos: Pos,
        /// Keyword as written.
        tok: String,
        /// Target label.
        #[serde(default)]
        label: Option<Ident>,
    },
    /// Nested block.
    Block(Block),
    /// Declaration statement inside a function body.
    Decl(GenDecl),
    /// Empty statement.
    Empty,
}

/// `case` or `default` clause of an expression or type switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    /// Position of the keyword.
    pub pos: Pos,
    /// Case expressions or types; empty for `default`.
    #[serde(default)]
    pub list: Vec<Expr>,
    /// Clause body.
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// `case` or `default` clause of a `select`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommClause {
    /// Position of the keyword.
    pub pos: Pos,
    /// Send or receive statement; absent for `default`.
    #[serde(default)]
    pub comm: Option<Box<Stmt>>,
    /// Clause body.
    #[serde(default)]
    pub body: Vec<Stmt>,
}

/// `if` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    /// Position of the keyword.
    pub pos: Pos,
    /// Initialization statement.
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    /// Condition.
    pub cond: Expr,
    /// Then branch.
    pub body: Block,
    /// `else` branch: a block or another `if`.
    #[serde(default, rename = "else")]
    pub else_branch: Option<Box<Stmt>>,
}

/// Kind of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LitKind {
    /// Integer literal.
    Int,
    /// Floating-point literal.
    Float,
    /// Imaginary literal.
    Imag,
    /// Rune literal.
    Char,
    /// String literal.
    String,
}

/// Binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `==`
    #[serde(rename = "==")]
    Eq,
    /// `!=`
    #[serde(rename = "!=")]
    Ne,
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `<=`
    #[serde(rename = "<=")]
    Le,
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `>=`
    #[serde(rename = ">=")]
    Ge,
    /// `&&`
    #[serde(rename = "&&")]
    And,
    /// `||`
    #[serde(rename = "||")]
    Or,
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Sub,
    /// `*`
    #[serde(rename = "*")]
    Mul,
    /// `/`
    #[serde(rename = "/")]
    Div,
    /// `%`
    #[serde(rename = "%")]
    Rem,
}

/// Expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// Named identifier (`x`, `true`, `nil`).
    Ident(Ident),
    /// Literal of a basic type (`5`, `"s"`).
    BasicLit {
        /// Position of the literal.
        pos: Pos,
        /// Literal kind.
        lit: LitKind,
        /// Literal text as written.
        value: String,
    },
    /// Binary expression.
    Binary {
        /// Position of the left operand.
        pos: Pos,
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        x: Box<Expr>,
        /// Right operand.
        y: Box<Expr>,
    },
    /// Unary expression (`!x`, `-x`).
    Unary {
        /// Position of the operator.
        pos: Pos,
        /// Operator as written.
        op: String,
        /// Operand.
        x: Box<Expr>,
    },
    /// Parenthesized expression.
    Paren {
        /// Position of the opening parenthesis.
        pos: Pos,
        /// Inner expression.
        x: Box<Expr>,
    },
    /// Call expression.
    Call {
        /// Callee.
        fun: Box<Expr>,
        /// Arguments.
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// Selector expression (`pkg.Name`).
    Selector {
        /// Operand.
        x: Box<Expr>,
        /// Selected name.
        sel: Ident,
    },
    /// Function literal.
    FuncLit {
        /// Position of the `func` keyword.
        pos: Pos,
        /// Body.
        body: Block,
    },
    /// Composite literal (`T{a, b}`, `[]int{1}`, `{k: v}` nested).
    CompositeLit {
        /// Position of the type, or of the brace when elided.
        pos: Pos,
        /// Literal type.
        #[serde(default, rename = "type")]
        typ: Option<Box<Expr>>,
        /// Elements.
        #[serde(default)]
        elts: Vec<Expr>,
    },
    /// `key: value` element of a composite literal.
    KeyValue {
        /// Key.
        key: Box<Expr>,
        /// Value.
        value: Box<Expr>,
    },
    /// Index expression (`x[i]`, `m[k]`).
    Index {
        /// Operand.
        x: Box<Expr>,
        /// Index.
        index: Box<Expr>,
    },
    /// Slice expression (`x[lo:hi:max]`).
    Slice {
        /// Operand.
        x: Box<Expr>,
        /// Lower bound.
        #[serde(default)]
        low: Option<Box<Expr>>,
        /// Upper bound.
        #[serde(default)]
        high: Option<Box<Expr>>,
        /// Capacity bound.
        #[serde(default)]
        max: Option<Box<Expr>>,
    },
    /// Pointer dereference or pointer type (`*x`).
    Star {
        /// Position of the `*`.
        pos: Pos,
        /// Operand.
        x: Box<Expr>,
    },
    /// Type assertion (`x.(T)`); `typ` is absent in a type switch.
    TypeAssert {
        /// Operand.
        x: Box<Expr>,
        /// Asserted type.
        #[serde(default, rename = "type")]
        typ: Option<Box<Expr>>,
    },
}

impl Expr {
    /// Creates an identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>, pos: Pos) -> Self {
        Self::Ident(Ident::new(name, pos))
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn int(value: impl Into<String>, pos: Pos) -> Self {
        Self::BasicLit {
            pos,
            lit: LitKind::Int,
            value: value.into(),
        }
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>, pos: Pos) -> Self {
        Self::BasicLit {
            pos,
            lit: LitKind::String,
            value: value.into(),
        }
    }

    /// Creates a binary expression positioned at its left operand.
    #[must_use]
    pub fn binary(op: BinaryOp, x: Self, y: Self) -> Self {
        Self::Binary {
            pos: x.pos(),
            op,
            x: Box::new(x),
            y: Box::new(y),
        }
    }

    /// Returns the starting position of the expression.
    #[must_use]
    pub fn pos(&self) -> Pos {
        match self {
            Self::Ident(ident) => ident.pos,
            Self::BasicLit { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Paren { pos, .. }
            | Self::FuncLit { pos, .. }
            | Self::CompositeLit { pos, .. }
            | Self::Star { pos, .. } => *pos,
            Self::Call { fun, .. } => fun.pos(),
            Self::KeyValue { key, .. } => key.pos(),
            Self::Selector { x, .. }
            | Self::Index { x, .. }
            | Self::Slice { x, .. }
            | Self::TypeAssert { x, .. } => x.pos(),
        }
    }
}

/// One package's complete set of files, analyzed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Package identifier.
    pub package: String,
    /// Whether this is the program-entry package. When absent, the analyzer
    /// compares `package` against the configured entry package name.
    #[serde(default)]
    pub entry: Option<bool>,
    /// Files of the package.
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

impl CompilationUnit {
    /// Creates an empty unit for `package`.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            entry: None,
            files: Vec::new(),
        }
    }

    /// Marks the unit as (not) being the entry package.
    #[must_use]
    pub fn with_entry(mut self, entry: bool) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Appends a file.
    #[must_use]
    pub fn with_file(mut self, file: SourceFile) -> Self {
        self.files.push(file);
        self
    }
}
