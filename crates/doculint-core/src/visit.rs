//! Syntax tree traversal.
//!
//! Modeled on `syn::visit`: every method of [`Visit`] defaults to the
//! matching `walk_*` function, which descends into the node's children.
//! Implementors override the node kinds they inspect and call the `walk_*`
//! function themselves to keep descending.

use crate::ast::{
    Block, CaseClause, CommClause, Decl, Expr, FuncDecl, GenDecl, IfStmt, SourceFile, Spec, Stmt,
};

/// Read-only visitor over a [`SourceFile`].
pub trait Visit<'ast> {
    /// Visits a file.
    fn visit_file(&mut self, node: &'ast SourceFile) {
        walk_file(self, node);
    }

    /// Visits a top-level declaration.
    fn visit_decl(&mut self, node: &'ast Decl) {
        walk_decl(self, node);
    }

    /// Visits a function declaration.
    fn visit_func_decl(&mut self, node: &'ast FuncDecl) {
        walk_func_decl(self, node);
    }

    /// Visits a general declaration.
    fn visit_gen_decl(&mut self, node: &'ast GenDecl) {
        walk_gen_decl(self, node);
    }

    /// Visits a spec of a general declaration.
    fn visit_spec(&mut self, node: &'ast Spec) {
        walk_spec(self, node);
    }

    /// Visits a block.
    fn visit_block(&mut self, node: &'ast Block) {
        walk_block(self, node);
    }

    /// Visits a statement.
    fn visit_stmt(&mut self, node: &'ast Stmt) {
        walk_stmt(self, node);
    }

    /// Visits an `if` statement.
    fn visit_if_stmt(&mut self, node: &'ast IfStmt) {
        walk_if_stmt(self, node);
    }

    /// Visits a clause of an expression or type switch.
    fn visit_case_clause(&mut self, node: &'ast CaseClause) {
        walk_case_clause(self, node);
    }

    /// Visits a clause of a `select`.
    fn visit_comm_clause(&mut self, node: &'ast CommClause) {
        walk_comm_clause(self, node);
    }

    /// Visits an expression.
    fn visit_expr(&mut self, node: &'ast Expr) {
        walk_expr(self, node);
    }
}

/// Walks every declaration of a file.
pub fn walk_file<'ast, V>(v: &mut V, node: &'ast SourceFile)
where
    V: Visit<'ast> + ?Sized,
{
    for decl in &node.decls {
        v.visit_decl(decl);
    }
}

/// Dispatches a declaration to its kind-specific method.
pub fn walk_decl<'ast, V>(v: &mut V, node: &'ast Decl)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Decl::Func(func) => v.visit_func_decl(func),
        Decl::Gen(group) => v.visit_gen_decl(group),
    }
}

/// Walks the body of a function.
pub fn walk_func_decl<'ast, V>(v: &mut V, node: &'ast FuncDecl)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(body) = &node.body {
        v.visit_block(body);
    }
}

/// Walks every spec of a general declaration.
pub fn walk_gen_decl<'ast, V>(v: &mut V, node: &'ast GenDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for spec in &node.specs {
        v.visit_spec(spec);
    }
}

/// Walks the initial values of a value spec.
pub fn walk_spec<'ast, V>(v: &mut V, node: &'ast Spec)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Spec::Value(spec) => {
            for value in &spec.values {
                v.visit_expr(value);
            }
        }
        Spec::Import { .. } | Spec::Type(_) => {}
    }
}

/// Walks every statement of a block.
pub fn walk_block<'ast, V>(v: &mut V, node: &'ast Block)
where
    V: Visit<'ast> + ?Sized,
{
    for stmt in &node.stmts {
        v.visit_stmt(stmt);
    }
}

/// Walks the children of a statement.
pub fn walk_stmt<'ast, V>(v: &mut V, node: &'ast Stmt)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Stmt::Expr { expr } => v.visit_expr(expr),
        Stmt::Assign { lhs, rhs, .. } => {
            for expr in lhs.iter().chain(rhs) {
                v.visit_expr(expr);
            }
        }
        Stmt::Return { results, .. } => {
            for expr in results {
                v.visit_expr(expr);
            }
        }
        Stmt::If(stmt) => v.visit_if_stmt(stmt),
        Stmt::For {
            init,
            cond,
            post,
            body,
            ..
        } => {
            if let Some(init) = init {
                v.visit_stmt(init);
            }
            if let Some(cond) = cond {
                v.visit_expr(cond);
            }
            if let Some(post) = post {
                v.visit_stmt(post);
            }
            v.visit_block(body);
        }
        Stmt::Range {
            key,
            value,
            x,
            body,
            ..
        } => {
            for expr in key.iter().chain(value) {
                v.visit_expr(expr);
            }
            v.visit_expr(x);
            v.visit_block(body);
        }
        Stmt::Switch {
            init, tag, clauses, ..
        } => {
            if let Some(init) = init {
                v.visit_stmt(init);
            }
            if let Some(tag) = tag {
                v.visit_expr(tag);
            }
            for clause in clauses {
                v.visit_case_clause(clause);
            }
        }
        Stmt::TypeSwitch {
            init,
            assign,
            clauses,
            ..
        } => {
            if let Some(init) = init {
                v.visit_stmt(init);
            }
            v.visit_stmt(assign);
            for clause in clauses {
                v.visit_case_clause(clause);
            }
        }
        Stmt::Select { clauses, .. } => {
            for clause in clauses {
                v.visit_comm_clause(clause);
            }
        }
        Stmt::Go { call, .. } | Stmt::Defer { call, .. } => v.visit_expr(call),
        Stmt::Labeled { stmt, .. } => v.visit_stmt(stmt),
        Stmt::IncDec { x, .. } => v.visit_expr(x),
        Stmt::Send { chan, value, .. } => {
            v.visit_expr(chan);
            v.visit_expr(value);
        }
        Stmt::Block(block) => v.visit_block(block),
        Stmt::Decl(group) => v.visit_gen_decl(group),
        Stmt::Branch { .. } | Stmt::Empty => {}
    }
}

/// Walks the case expressions and body of a switch clause.
pub fn walk_case_clause<'ast, V>(v: &mut V, node: &'ast CaseClause)
where
    V: Visit<'ast> + ?Sized,
{
    for expr in &node.list {
        v.visit_expr(expr);
    }
    for stmt in &node.body {
        v.visit_stmt(stmt);
    }
}

/// Walks the communication and body of a select clause.
pub fn walk_comm_clause<'ast, V>(v: &mut V, node: &'ast CommClause)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(comm) = &node.comm {
        v.visit_stmt(comm);
    }
    for stmt in &node.body {
        v.visit_stmt(stmt);
    }
}

/// Walks the init statement, condition and both branches of an `if`.
pub fn walk_if_stmt<'ast, V>(v: &mut V, node: &'ast IfStmt)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(init) = &node.init {
        v.visit_stmt(init);
    }
    v.visit_expr(&node.cond);
    v.visit_block(&node.body);
    if let Some(else_branch) = &node.else_branch {
        v.visit_stmt(else_branch);
    }
}

/// Walks the operands of an expression.
pub fn walk_expr<'ast, V>(v: &mut V, node: &'ast Expr)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Expr::Ident(_) | Expr::BasicLit { .. } => {}
        Expr::Binary { x, y, .. } => {
            v.visit_expr(x);
            v.visit_expr(y);
        }
        Expr::Unary { x, .. }
        | Expr::Paren { x, .. }
        | Expr::Selector { x, .. }
        | Expr::Star { x, .. } => {
            v.visit_expr(x);
        }
        Expr::Call { fun, args } => {
            v.visit_expr(fun);
            for arg in args {
                v.visit_expr(arg);
            }
        }
        Expr::FuncLit { body, .. } => v.visit_block(body),
        Expr::CompositeLit { typ, elts, .. } => {
            if let Some(typ) = typ {
                v.visit_expr(typ);
            }
            for elt in elts {
                v.visit_expr(elt);
            }
        }
        Expr::KeyValue { key, value } => {
            v.visit_expr(key);
            v.visit_expr(value);
        }
        Expr::Index { x, index } => {
            v.visit_expr(x);
            v.visit_expr(index);
        }
        Expr::Slice { x, low, high, max } => {
            v.visit_expr(x);
            for bound in [low, high, max].into_iter().flatten() {
                v.visit_expr(bound);
            }
        }
        Expr::TypeAssert { x, typ } => {
            v.visit_expr(x);
            if let Some(typ) = typ {
                v.visit_expr(typ);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Ident, Pos};

    #[derive(Default)]
    struct IfCounter {
        ifs: usize,
        funcs: usize,
    }

    impl<'ast> Visit<'ast> for IfCounter {
        fn visit_func_decl(&mut self, node: &'ast FuncDecl) {
            self.funcs += 1;
            walk_func_decl(self, node);
        }

        fn visit_if_stmt(&mut self, node: &'ast IfStmt) {
            self.ifs += 1;
            walk_if_stmt(self, node);
        }
    }

    fn if_stmt(line: usize, body: Vec<Stmt>, else_branch: Option<Stmt>) -> Stmt {
        Stmt::If(IfStmt {
            pos: Pos::new(line, 2),
            init: None,
            cond: Expr::binary(
                BinaryOp::Eq,
                Expr::ident("a", Pos::new(line, 5)),
                Expr::ident("b", Pos::new(line, 10)),
            ),
            body: Block::new(body),
            else_branch: else_branch.map(Box::new),
        })
    }

    #[test]
    fn reaches_nested_if_statements() {
        let inner = if_stmt(3, vec![], None);
        let else_if = if_stmt(5, vec![], None);
        let outer = if_stmt(2, vec![inner], Some(else_if));
        let closure = Stmt::Expr {
            expr: Expr::FuncLit {
                pos: Pos::new(7, 2),
                body: Block::new(vec![if_stmt(8, vec![], None)]),
            },
        };

        let file = SourceFile::new("a.go").with_decl(Decl::Func(FuncDecl {
            pos: Pos::new(1, 1),
            name: Ident::new("Run", Pos::new(1, 6)),
            doc: None,
            recv: None,
            body: Some(Block::new(vec![outer, closure])),
        }));

        let mut counter = IfCounter::default();
        counter.visit_file(&file);
        assert_eq!(counter.funcs, 1);
        assert_eq!(counter.ifs, 4);
    }

    #[test]
    fn reaches_if_statements_under_switch_select_and_defer() {
        let switch = Stmt::Switch {
            pos: Pos::new(2, 2),
            init: None,
            tag: Some(Expr::ident("mode", Pos::new(2, 9))),
            clauses: vec![CaseClause {
                pos: Pos::new(3, 2),
                list: vec![Expr::ident("fast", Pos::new(3, 7))],
                body: vec![if_stmt(4, vec![], None)],
            }],
        };
        let select = Stmt::Select {
            pos: Pos::new(6, 2),
            clauses: vec![CommClause {
                pos: Pos::new(7, 2),
                comm: None,
                body: vec![if_stmt(8, vec![], None)],
            }],
        };
        let deferred = Stmt::Defer {
            pos: Pos::new(10, 2),
            call: Expr::Call {
                fun: Box::new(Expr::FuncLit {
                    pos: Pos::new(10, 8),
                    body: Block::new(vec![if_stmt(11, vec![], None)]),
                }),
                args: vec![],
            },
        };
        let table = Stmt::Assign {
            pos: Pos::new(13, 2),
            lhs: vec![Expr::ident("handlers", Pos::new(13, 2))],
            rhs: vec![Expr::CompositeLit {
                pos: Pos::new(13, 14),
                typ: None,
                elts: vec![Expr::KeyValue {
                    key: Box::new(Expr::string("\"a\"", Pos::new(14, 3))),
                    value: Box::new(Expr::FuncLit {
                        pos: Pos::new(14, 8),
                        body: Block::new(vec![if_stmt(15, vec![], None)]),
                    }),
                }],
            }],
        };

        let file = SourceFile::new("a.go").with_decl(Decl::Func(FuncDecl {
            pos: Pos::new(1, 1),
            name: Ident::new("Run", Pos::new(1, 6)),
            doc: None,
            recv: None,
            body: Some(Block::new(vec![switch, select, deferred, table])),
        }));

        let mut counter = IfCounter::default();
        counter.visit_file(&file);
        assert_eq!(counter.ifs, 4);
    }
}
