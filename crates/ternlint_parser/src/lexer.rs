//! Converts source text into a token stream.

use ternlint_ast::TextRange;

use crate::error::{LexicalError, LexicalErrorType};
use crate::token::{Token, TokenKind};

/// Tokenizes the entire source, ending with an [`TokenKind::EndOfFile`] token.
pub(crate) fn lex(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).lex()
}

struct Lexer<'src> {
    source: &'src str,
    offset: usize,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Lexer { source, offset: 0 }
    }

    fn lex(mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind() == TokenKind::EndOfFile;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_trivia();

        let start = self.offset;
        let Some(first) = self.peek() else {
            return Ok(self.token(TokenKind::EndOfFile, start));
        };

        if first.is_ascii_alphabetic() || first == '_' || first == '$' {
            return Ok(self.lex_name(start));
        }
        if first.is_ascii_digit() {
            return Ok(self.lex_number(start));
        }
        if first == '"' || first == '\'' {
            return self.lex_string(first, start);
        }

        self.bump();
        let kind = match first {
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            '.' => TokenKind::Dot,
            '(' => TokenKind::Lpar,
            ')' => TokenKind::Rpar,
            '[' => TokenKind::Lsqb,
            ']' => TokenKind::Rsqb,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '!' => {
                if self.eat('=') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::Bang
                }
            }
            '<' => {
                if self.eat('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '&' => {
                if self.eat('&') {
                    TokenKind::DoubleAmpersand
                } else {
                    return Err(self.error(LexicalErrorType::UnpairedOperator('&'), start));
                }
            }
            '|' => {
                if self.eat('|') {
                    TokenKind::DoubleVbar
                } else {
                    return Err(self.error(LexicalErrorType::UnpairedOperator('|'), start));
                }
            }
            '=' => {
                if self.eat('=') {
                    TokenKind::EqEqual
                } else {
                    return Err(self.error(LexicalErrorType::UnexpectedCharacter('='), start));
                }
            }
            c => {
                return Err(self.error(LexicalErrorType::UnexpectedCharacter(c), start));
            }
        };
        Ok(self.token(kind, start))
    }

    fn lex_name(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                self.bump();
            } else {
                break;
            }
        }
        let kind = match &self.source[start..self.offset] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Name,
        };
        self.token(kind, start)
    }

    fn lex_number(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        // A fractional part requires a digit after the dot; otherwise the
        // dot is a member access.
        if self.peek() == Some('.')
            && self
                .source[self.offset + 1..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        {
            self.bump();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        self.token(TokenKind::Number, start)
    }

    fn lex_string(&mut self, quote: char, start: usize) -> Result<Token, LexicalError> {
        self.bump();
        while let Some(c) = self.peek() {
            self.bump();
            if c == '\\' {
                // The escaped character is opaque to the linter; skip it.
                self.bump();
            } else if c == quote {
                return Ok(self.token(TokenKind::String, start));
            }
        }
        Err(self.error(LexicalErrorType::UnterminatedString, start))
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => {
                    self.bump();
                }
                Some('/') if self.source[self.offset..].starts_with("//") => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                _ => return,
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.offset += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, TextRange::new(start as u32, self.offset as u32))
    }

    fn error(&self, error: LexicalErrorType, start: usize) -> LexicalError {
        LexicalError {
            error,
            location: TextRange::new(start as u32, self.offset as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source)
            .unwrap()
            .into_iter()
            .map(Token::kind)
            .collect()
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds("a && b || !c == 2"),
            vec![
                TokenKind::Name,
                TokenKind::DoubleAmpersand,
                TokenKind::Name,
                TokenKind::DoubleVbar,
                TokenKind::Bang,
                TokenKind::Name,
                TokenKind::EqEqual,
                TokenKind::Number,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn number_with_fraction_and_member_dot() {
        assert_eq!(
            kinds("2.00"),
            vec![TokenKind::Number, TokenKind::EndOfFile]
        );
        assert_eq!(
            kinds("user.isMember"),
            vec![
                TokenKind::Name,
                TokenKind::Dot,
                TokenKind::Name,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn string_literals() {
        assert_eq!(
            kinds(r#"'!' "it\"s""#),
            vec![TokenKind::String, TokenKind::String, TokenKind::EndOfFile]
        );
    }

    #[test]
    fn comments_are_trivia() {
        assert_eq!(
            kinds("a // the rest\n&& b"),
            vec![
                TokenKind::Name,
                TokenKind::DoubleAmpersand,
                TokenKind::Name,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn unpaired_ampersand() {
        let error = lex("a & b").unwrap_err();
        assert_eq!(error.error, LexicalErrorType::UnpairedOperator('&'));
    }

    #[test]
    fn unterminated_string() {
        let error = lex("'oops").unwrap_err();
        assert_eq!(error.error, LexicalErrorType::UnterminatedString);
    }
}
