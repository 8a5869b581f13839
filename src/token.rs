use crate::token_type::TokenType;
use std::fmt;

#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Token {
    pub type_: TokenType,
    pub lexeme: String,
    pub literal: Option<String>,
    pub line: i32,
}

impl Token {
    pub fn new(type_: TokenType, lexeme: String, literal: Option<String>, line: i32) -> Token {
        Token {
            type_,
            lexeme,
            literal,
            line,
        }
    }

    /// Identifier token with no source position, for trees built outside the parser.
    pub fn identifier(name: &str) -> Token {
        Token::new(TokenType::Identifier, name.to_string(), None, 0)
    }

    pub fn operator(type_: TokenType, lexeme: &str) -> Token {
        Token::new(type_, lexeme.to_string(), None, 0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let literal = match &self.literal {
            Some(lit) => lit.as_str(),
            None => "None",
        };
        write!(f, "{:?} {} {:?}", self.type_, self.lexeme, literal)
    }
}
