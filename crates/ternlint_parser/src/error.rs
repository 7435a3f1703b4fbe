//! Errors raised while lexing or parsing.

use std::fmt;

use ternlint_ast::TextRange;

use crate::TokenKind;

/// An error returned by the `parse_*` functions.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub location: TextRange,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte range {:?}", self.error, self.location)
    }
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        ParseError {
            location: error.location,
            error: ParseErrorType::Lexical(error.error),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorType {
    /// A specific token was expected but a different one was found.
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// The start of an expression was expected.
    ExpectedExpression { found: TokenKind },
    /// A member access requires a property name after the `.`.
    ExpectedPropertyName { found: TokenKind },
    /// The source continued past a complete expression.
    UnexpectedTrailingToken { found: TokenKind },
    /// An error that occurred while tokenizing.
    Lexical(LexicalErrorType),
}

impl fmt::Display for ParseErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorType::ExpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorType::ExpectedExpression { found } => {
                write!(f, "expected an expression, found {found}")
            }
            ParseErrorType::ExpectedPropertyName { found } => {
                write!(f, "expected a property name after '.', found {found}")
            }
            ParseErrorType::UnexpectedTrailingToken { found } => {
                write!(f, "unexpected {found} after expression")
            }
            ParseErrorType::Lexical(error) => error.fmt(f),
        }
    }
}

/// An error raised by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: TextRange,
}

impl std::error::Error for LexicalError {}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte range {:?}", self.error, self.location)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LexicalErrorType {
    /// A character the language has no use for.
    UnexpectedCharacter(char),
    /// A string literal with no closing quote.
    UnterminatedString,
    /// A lone `&` or `|`; only the doubled forms are operators.
    UnpairedOperator(char),
}

impl fmt::Display for LexicalErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalErrorType::UnexpectedCharacter(c) => {
                write!(f, "unexpected character {c:?}")
            }
            LexicalErrorType::UnterminatedString => f.write_str("unterminated string literal"),
            LexicalErrorType::UnpairedOperator(c) => {
                write!(f, "'{c}' is not an operator; did you mean '{c}{c}'?")
            }
        }
    }
}
