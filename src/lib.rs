pub mod ast_printer;
pub mod expr;
pub mod stmt;
pub mod token;
pub mod token_type;
pub mod value;
pub mod write_output;

pub use ast_printer::{AstPrinter, ExprPrinter, PrinterConfig};
pub use expr::Expr;
pub use stmt::Stmt;
pub use token::Token;
pub use token_type::TokenType;
pub use value::Value;
