//! Unambiguous, if ugly, text rendering of a parsed program.
//!
//! Expressions print in parenthesized prefix form, `(+ 1 (* 2 3))`. Statements
//! print one per line; `if`, `else` and `while` open a `[` line, their bodies
//! indent one level, and a `]` line closes them. A bare block adds a level of
//! indentation and nothing else.

use std::fmt;
use std::io;
use std::io::Write;

use crate::expr::{Expr, Visitor};
use crate::stmt::{Stmt, StmtVisitor};
use crate::token::Token;
use crate::value::Value;
use crate::write_output::{write_lines, write_output};

/// Layout options for [`AstPrinter`].
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Spaces per nesting level. Default: 2.
    pub indent_width: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

/// Renders a single expression. Holds no state.
pub struct ExprPrinter;

impl ExprPrinter {
    pub fn print(expression: &Expr) -> String {
        expression.accept(&mut ExprPrinter)
    }
}

impl Visitor<String> for ExprPrinter {
    fn visit_assign_expr(&mut self, name: &Token, value: &Expr) -> String {
        parenthesize(&format!("{} =", name.lexeme), &[Some(value)])
    }

    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        parenthesize(&operator.lexeme, &[Some(left), Some(right)])
    }

    fn visit_grouping_expr(&mut self, expression: &Expr) -> String {
        parenthesize("group", &[Some(expression)])
    }

    fn visit_literal_expr(&mut self, value: Option<&Value>) -> String {
        match value {
            Some(value) => value.to_string(),
            None => "nil".to_string(),
        }
    }

    fn visit_logical_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        parenthesize(&operator.lexeme, &[Some(left), Some(right)])
    }

    fn visit_unary_expr(&mut self, operator: &Token, right: &Expr) -> String {
        parenthesize(&operator.lexeme, &[Some(right)])
    }

    fn visit_variable_expr(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&ExprPrinter::print(self))
    }
}

/// `(name e1 e2 ...)`, skipping absent expressions.
pub fn parenthesize(name: &str, exprs: &[Option<&Expr>]) -> String {
    let mut result = String::new();
    result.push('(');
    result.push_str(name);
    add_expressions(&mut result, exprs);
    result.push(')');
    result
}

fn add_expressions(builder: &mut String, exprs: &[Option<&Expr>]) {
    for expr in exprs.iter().flatten() {
        builder.push(' ');
        builder.push_str(&ExprPrinter::print(expr));
    }
}

/// Formats a whole program on construction; the lines are then read back or
/// written out.
pub struct AstPrinter {
    config: PrinterConfig,
    depth: usize,
    formatted_statements: Vec<String>,
}

impl AstPrinter {
    pub fn new(statements: &[Stmt]) -> AstPrinter {
        AstPrinter::with_config(statements, PrinterConfig::default())
    }

    pub fn with_config(statements: &[Stmt], config: PrinterConfig) -> AstPrinter {
        let mut printer = AstPrinter {
            config,
            depth: 0,
            formatted_statements: Vec::new(),
        };
        printer.format_all(statements);
        tracing::debug!(
            statements = statements.len(),
            lines = printer.formatted_statements.len(),
            "formatted program"
        );
        printer
    }

    pub fn lines(&self) -> &[String] {
        &self.formatted_statements
    }

    pub fn into_lines(self) -> Vec<String> {
        self.formatted_statements
    }

    /// Writes every line to stdout.
    pub fn print(&self) -> io::Result<()> {
        write_output("", &self.formatted_statements)
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write_lines(out, &self.formatted_statements)
    }

    fn format_all(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.format(statement);
        }
    }

    fn format(&mut self, statement: &Stmt) {
        statement.accept(self)
    }

    fn add_parenthesized(&mut self, name: &str, exprs: &[Option<&Expr>]) {
        let formatted = parenthesize(name, exprs);
        self.add(formatted);
    }

    fn add(&mut self, formatted: String) {
        let mut line = " ".repeat(self.depth * self.config.indent_width);
        line.push_str(&formatted);
        self.formatted_statements.push(line);
    }

    fn indented(&mut self, body: impl FnOnce(&mut AstPrinter)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    // A block body prints its statements at the bracket's inner level rather
    // than indenting a second time.
    fn nested(&mut self, name: &str, condition: Option<&Expr>, body: &Stmt) {
        let mut header = String::from(name);
        add_expressions(&mut header, &[condition]);
        header.push_str(" [");
        self.add(header);
        self.indented(|printer| match body {
            Stmt::Block(statements) => printer.format_all(statements),
            other => printer.format(other),
        });
        self.add("]".to_string());
    }
}

impl StmtVisitor<()> for AstPrinter {
    fn visit_block_stmt(&mut self, statements: &[Stmt]) {
        self.indented(|printer| printer.format_all(statements));
    }

    fn visit_break_stmt(&mut self) {
        self.add("Break".to_string());
    }

    fn visit_expression_stmt(&mut self, expr: &Expr) {
        self.add_parenthesized("Expr", &[Some(expr)]);
    }

    fn visit_if_stmt(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.nested("if", Some(condition), then_branch);
        if let Some(else_branch) = else_branch {
            self.nested("else", None, else_branch);
        }
    }

    fn visit_print_stmt(&mut self, expr: &Expr) {
        self.add_parenthesized("Print", &[Some(expr)]);
    }

    fn visit_var_stmt(&mut self, name: &Token, initializer: Option<&Expr>) {
        let initializer = match initializer {
            Some(expr) => ExprPrinter::print(expr),
            None => "nil".to_string(),
        };
        self.add(format!("(var {} {})", name.lexeme, initializer));
    }

    fn visit_while_stmt(&mut self, condition: &Expr, body: &Stmt) {
        self.nested("while", Some(condition), body);
    }
}

impl fmt::Display for AstPrinter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.formatted_statements {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
