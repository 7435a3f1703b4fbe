//! Recursive-descent parser for the expression language.

use ternlint_ast::{
    BinaryOp, Expr, ExprBinary, ExprBooleanLiteral, ExprCall, ExprConditional, ExprLogical,
    ExprMember, ExprName, ExprNullLiteral, ExprNumberLiteral, ExprStringLiteral, ExprUnary,
    Identifier, LogicalOp, MemberProperty, Program, Ranged, TextRange, UnaryOp,
};

use crate::error::{ParseError, ParseErrorType};
use crate::lexer;
use crate::token::{Token, TokenKind};

/// Parses a program: expressions separated by `;`, trailing `;` optional.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lexer::lex(source)?;
    Parser::new(source, tokens).parse_program()
}

/// Parses a single expression spanning the entire source.
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let tokens = lexer::lex(source)?;
    let mut parser = Parser::new(source, tokens);
    let expr = parser.parse_conditional()?;
    parser.expect_eof()?;
    Ok(expr)
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    index: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Parser {
            source,
            tokens,
            index: 0,
        }
    }

    fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while self.current().kind() != TokenKind::EndOfFile {
            body.push(self.parse_conditional()?);
            if !self.eat(TokenKind::Semi) {
                self.expect_eof()?;
                break;
            }
        }
        Ok(Program {
            range: TextRange::new(0, self.source.len() as u32),
            body,
        })
    }

    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        let test = self.parse_or()?;
        if !self.eat(TokenKind::Question) {
            return Ok(test);
        }
        let consequent = self.parse_conditional()?;
        self.expect(TokenKind::Colon)?;
        let alternate = self.parse_conditional()?;
        Ok(ExprConditional {
            range: test.range().cover(alternate.range()),
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
        .into())
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.eat(TokenKind::DoubleVbar) {
            let right = self.parse_and()?;
            left = logical(LogicalOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.eat(TokenKind::DoubleAmpersand) {
            let right = self.parse_equality()?;
            left = logical(LogicalOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.current().kind() {
                TokenKind::EqEqual => BinaryOp::Eq,
                TokenKind::NotEqual => BinaryOp::NotEq,
                _ => return Ok(left),
            };
            self.bump();
            let right = self.parse_relational()?;
            left = binary(op, left, right);
        }
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.current().kind() {
                TokenKind::Less => BinaryOp::Lt,
                TokenKind::LessEqual => BinaryOp::LtE,
                TokenKind::Greater => BinaryOp::Gt,
                TokenKind::GreaterEqual => BinaryOp::GtE,
                _ => return Ok(left),
            };
            self.bump();
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current().kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.bump();
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current().kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => return Ok(left),
            };
            self.bump();
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current().kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Minus,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_postfix(),
        };
        let op_range = self.current().range();
        self.bump();
        let operand = self.parse_unary()?;
        Ok(ExprUnary {
            range: op_range.cover(operand.range()),
            op,
            operand: Box::new(operand),
        }
        .into())
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.eat(TokenKind::Dot) {
                let token = self.current();
                if token.kind() != TokenKind::Name {
                    return Err(ParseError {
                        error: ParseErrorType::ExpectedPropertyName {
                            found: token.kind(),
                        },
                        location: token.range(),
                    });
                }
                self.bump();
                expr = ExprMember {
                    range: expr.range().cover(token.range()),
                    object: Box::new(expr),
                    property: MemberProperty::Static(Identifier {
                        range: token.range(),
                        id: self.slice(token).into(),
                    }),
                }
                .into();
            } else if self.eat(TokenKind::Lsqb) {
                let index = self.parse_conditional()?;
                let close = self.expect(TokenKind::Rsqb)?;
                expr = ExprMember {
                    range: expr.range().cover(close.range()),
                    object: Box::new(expr),
                    property: MemberProperty::Computed(Box::new(index)),
                }
                .into();
            } else if self.eat(TokenKind::Lpar) {
                let mut arguments = Vec::new();
                if self.current().kind() != TokenKind::Rpar {
                    loop {
                        arguments.push(self.parse_conditional()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                let close = self.expect(TokenKind::Rpar)?;
                expr = ExprCall {
                    range: expr.range().cover(close.range()),
                    callee: Box::new(expr),
                    arguments,
                }
                .into();
            } else {
                return Ok(expr);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let range = token.range();
        let expr = match token.kind() {
            TokenKind::Name => ExprName {
                range,
                id: self.slice(token).into(),
            }
            .into(),
            TokenKind::Number => ExprNumberLiteral {
                range,
                raw: self.slice(token).into(),
            }
            .into(),
            TokenKind::String => ExprStringLiteral {
                range,
                raw: self.slice(token).into(),
            }
            .into(),
            TokenKind::True => ExprBooleanLiteral { range, value: true }.into(),
            TokenKind::False => ExprBooleanLiteral {
                range,
                value: false,
            }
            .into(),
            TokenKind::Null => ExprNullLiteral { range }.into(),
            TokenKind::Lpar => {
                self.bump();
                // Grouping parentheses leave no trace in the tree: the
                // inner expression and its range are returned as-is.
                let inner = self.parse_conditional()?;
                self.expect(TokenKind::Rpar)?;
                return Ok(inner);
            }
            kind => {
                return Err(ParseError {
                    error: ParseErrorType::ExpectedExpression { found: kind },
                    location: range,
                });
            }
        };
        self.bump();
        Ok(expr)
    }

    fn current(&self) -> Token {
        self.tokens[self.index]
    }

    fn bump(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current().kind() == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.current();
        if token.kind() == expected {
            self.bump();
            Ok(token)
        } else {
            Err(ParseError {
                error: ParseErrorType::ExpectedToken {
                    expected,
                    found: token.kind(),
                },
                location: token.range(),
            })
        }
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        let token = self.current();
        if token.kind() == TokenKind::EndOfFile {
            Ok(())
        } else {
            Err(ParseError {
                error: ParseErrorType::UnexpectedTrailingToken {
                    found: token.kind(),
                },
                location: token.range(),
            })
        }
    }

    fn slice(&self, token: Token) -> &'src str {
        &self.source[token.range().to_usize()]
    }
}

fn logical(op: LogicalOp, left: Expr, right: Expr) -> Expr {
    ExprLogical {
        range: left.range().cover(right.range()),
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
    .into()
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    ExprBinary {
        range: left.range().cover(right.range()),
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
    .into()
}
