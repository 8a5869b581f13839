use crate::expr::Expr;
use crate::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Break,
    Expression(Expr),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

pub trait StmtVisitor<R> {
    fn visit_block_stmt(&mut self, statements: &[Stmt]) -> R;
    fn visit_break_stmt(&mut self) -> R;
    fn visit_expression_stmt(&mut self, expr: &Expr) -> R;
    fn visit_if_stmt(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> R;
    fn visit_print_stmt(&mut self, expr: &Expr) -> R;
    fn visit_var_stmt(&mut self, name: &Token, initializer: Option<&Expr>) -> R;
    fn visit_while_stmt(&mut self, condition: &Expr, body: &Stmt) -> R;
}

impl Stmt {
    pub fn accept<R>(&self, visitor: &mut impl StmtVisitor<R>) -> R {
        match self {
            Stmt::Block(statements) => visitor.visit_block_stmt(statements),
            Stmt::Break => visitor.visit_break_stmt(),
            Stmt::Expression(expr) => visitor.visit_expression_stmt(expr),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if_stmt(condition, then_branch, else_branch.as_deref()),
            Stmt::Print(expr) => visitor.visit_print_stmt(expr),
            Stmt::Var { name, initializer } => visitor.visit_var_stmt(name, initializer.as_ref()),
            Stmt::While { condition, body } => visitor.visit_while_stmt(condition, body),
        }
    }
}
