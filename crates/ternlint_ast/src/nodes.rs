//! AST node definitions for the expression language.
//!
//! The node set is a closed sum type: every consumer matches on [`Expr`]
//! exhaustively, so adding a node kind is a compile-time-checked concern
//! for the whole workspace.

use std::fmt;

use crate::text_size::{Ranged, TextRange};

/// A parsed source unit: expressions separated by `;`.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub range: TextRange,
    pub body: Vec<Expr>,
}

impl Ranged for Program {
    fn range(&self) -> TextRange {
        self.range
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Conditional(ExprConditional),
    Logical(ExprLogical),
    Unary(ExprUnary),
    Binary(ExprBinary),
    Call(ExprCall),
    Member(ExprMember),
    Name(ExprName),
    NumberLiteral(ExprNumberLiteral),
    StringLiteral(ExprStringLiteral),
    BooleanLiteral(ExprBooleanLiteral),
    NullLiteral(ExprNullLiteral),
}

impl Expr {
    pub const fn is_conditional(&self) -> bool {
        matches!(self, Expr::Conditional(_))
    }

    pub const fn as_conditional(&self) -> Option<&ExprConditional> {
        match self {
            Expr::Conditional(conditional) => Some(conditional),
            _ => None,
        }
    }

    /// Returns the identifier text if this is a bare name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expr::Name(ExprName { id, .. }) => Some(id),
            _ => None,
        }
    }
}

/// `test ? consequent : alternate`
#[derive(Clone, Debug, PartialEq)]
pub struct ExprConditional {
    pub range: TextRange,
    pub test: Box<Expr>,
    pub consequent: Box<Expr>,
    pub alternate: Box<Expr>,
}

/// `left && right` or `left || right`, left-associated by the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprLogical {
    pub range: TextRange,
    pub op: LogicalOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// `!operand`, `-operand`, or `+operand`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprUnary {
    pub range: TextRange,
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

/// A comparison or arithmetic operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprBinary {
    pub range: TextRange,
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// `callee(arguments...)`
#[derive(Clone, Debug, PartialEq)]
pub struct ExprCall {
    pub range: TextRange,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// `object.name` or `object[index]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprMember {
    pub range: TextRange,
    pub object: Box<Expr>,
    pub property: MemberProperty,
}

/// The property part of a member access.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberProperty {
    /// A static `.name` access.
    Static(Identifier),
    /// A computed `[expr]` access.
    Computed(Box<Expr>),
}

/// A bare identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprName {
    pub range: TextRange,
    pub id: Box<str>,
}

/// A numeric literal. `raw` keeps the source spelling: `2.00` and `2.0`
/// are distinct values to the linter.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprNumberLiteral {
    pub range: TextRange,
    pub raw: Box<str>,
}

/// A string literal, raw spelling including quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprStringLiteral {
    pub range: TextRange,
    pub raw: Box<str>,
}

/// `true` or `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprBooleanLiteral {
    pub range: TextRange,
    pub value: bool,
}

/// `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprNullLiteral {
    pub range: TextRange,
}

/// An identifier together with its range (used for static member names).
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub range: TextRange,
    pub id: Box<str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtE => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtE => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ranged for Expr {
    fn range(&self) -> TextRange {
        match self {
            Expr::Conditional(node) => node.range,
            Expr::Logical(node) => node.range,
            Expr::Unary(node) => node.range,
            Expr::Binary(node) => node.range,
            Expr::Call(node) => node.range,
            Expr::Member(node) => node.range,
            Expr::Name(node) => node.range,
            Expr::NumberLiteral(node) => node.range,
            Expr::StringLiteral(node) => node.range,
            Expr::BooleanLiteral(node) => node.range,
            Expr::NullLiteral(node) => node.range,
        }
    }
}

macro_rules! impl_expr_node {
    ($($node:ident => $variant:ident),+ $(,)?) => {
        $(
            impl Ranged for $node {
                fn range(&self) -> TextRange {
                    self.range
                }
            }

            impl From<$node> for Expr {
                fn from(node: $node) -> Expr {
                    Expr::$variant(node)
                }
            }
        )+
    };
}

impl_expr_node!(
    ExprConditional => Conditional,
    ExprLogical => Logical,
    ExprUnary => Unary,
    ExprBinary => Binary,
    ExprCall => Call,
    ExprMember => Member,
    ExprName => Name,
    ExprNumberLiteral => NumberLiteral,
    ExprStringLiteral => StringLiteral,
    ExprBooleanLiteral => BooleanLiteral,
    ExprNullLiteral => NullLiteral,
);

impl Ranged for Identifier {
    fn range(&self) -> TextRange {
        self.range
    }
}
