//! Lexer and parser for the ternlint expression language.
//!
//! The parser produces [`ternlint_ast`] trees with byte-offset ranges.
//! Grouping parentheses are consumed during parsing and never materialize
//! as nodes, so `(x)` and `x` parse to identical trees (the inner range is
//! kept).

pub use error::{LexicalError, LexicalErrorType, ParseError, ParseErrorType};
pub use parser::{parse, parse_expression};
pub use token::{Token, TokenKind};

mod error;
mod lexer;
mod parser;
mod token;
