pub mod ast;
mod error;
mod lexer;
mod parser;

pub use error::{ModifierError, ParseError};
pub use lexer::{tokenize, WordKind};
pub use parser::Parser;

pub fn parse(body: &str) -> crate::Result<ast::Expression> {
    Parser::new(body).parse()
}
