//! Token kinds produced by the lexer and consumed by the parser.

use std::fmt;

use ternlint_ast::{Ranged, TextRange};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    range: TextRange,
}

impl Token {
    pub(crate) const fn new(kind: TokenKind, range: TextRange) -> Token {
        Token { kind, range }
    }

    #[inline]
    pub const fn kind(self) -> TokenKind {
        self.kind
    }
}

impl Ranged for Token {
    fn range(&self) -> TextRange {
        self.range
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier.
    Name,
    /// A numeric literal.
    Number,
    /// A string literal, including its quotes.
    String,
    /// The `true` keyword.
    True,
    /// The `false` keyword.
    False,
    /// The `null` keyword.
    Null,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `.`
    Dot,
    /// `(`
    Lpar,
    /// `)`
    Rpar,
    /// `[`
    Lsqb,
    /// `]`
    Rsqb,
    /// `!`
    Bang,
    /// `&&`
    DoubleAmpersand,
    /// `||`
    DoubleVbar,
    /// `==`
    EqEqual,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// Marker for the end of the source.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TokenKind::Name => "name",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Question => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Semi => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Lpar => "'('",
            TokenKind::Rpar => "')'",
            TokenKind::Lsqb => "'['",
            TokenKind::Rsqb => "']'",
            TokenKind::Bang => "'!'",
            TokenKind::DoubleAmpersand => "'&&'",
            TokenKind::DoubleVbar => "'||'",
            TokenKind::EqEqual => "'=='",
            TokenKind::NotEqual => "'!='",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::EndOfFile => "end of file",
        };
        f.write_str(value)
    }
}
