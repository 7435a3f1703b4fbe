//! Canonical condition values.
//!
//! A [`CanonicalExpr`] is the normalized, comparable form of an expression:
//! the same shape regardless of grouping parentheses, compared structurally
//! (via [`Eq`] and [`Hash`]) rather than by reconstructed text. Its
//! [`Display`](std::fmt::Display) impl renders the condition text used in
//! diagnostic messages.
//!
//! Canonicalization is deliberately lossy where the linter has nothing to
//! gain from precision:
//!
//! - call arguments keep only their identifier names; any other argument
//!   degrades to an empty slot, so `baz(true)` and `baz(false)` compare
//!   equal;
//! - non-identifier callees and member objects, and non-literal computed
//!   indices, degrade to empty names;
//! - node kinds outside the canonical subset (nested ternaries) collapse
//!   into one opaque value.
//!
//! These degradations are documented limitations, not bugs: tightening them
//! would change which findings are reported.

use std::fmt;

use itertools::Itertools;
use ternlint_ast::{BinaryOp, Expr, ExprLogical, ExprUnary, LogicalOp, MemberProperty, UnaryOp};

/// The canonical, structurally comparable form of an expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanonicalExpr {
    /// A bare identifier.
    Name(String),
    /// A literal, by its raw source spelling (`2.00` and `2.0` differ).
    Literal(String),
    Unary {
        op: UnaryOp,
        operand: Box<CanonicalExpr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<CanonicalExpr>,
        right: Box<CanonicalExpr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<CanonicalExpr>,
        right: Box<CanonicalExpr>,
    },
    Call {
        /// The callee's identifier name, or empty when the callee is not a
        /// bare name.
        callee: String,
        /// One entry per argument: its identifier name, or an empty slot.
        arguments: Vec<String>,
    },
    Member {
        object: String,
        property: MemberKey,
    },
    /// The degraded form of a node kind outside the canonical subset.
    /// Opaque values compare equal to each other.
    Opaque,
}

/// The property part of a canonical member access.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberKey {
    /// A static `.name` access.
    Name(String),
    /// A computed `[literal]` access, by the literal's raw spelling.
    Index(String),
}

/// Converts an expression subtree into its canonical form.
pub fn canonicalize(expr: &Expr) -> CanonicalExpr {
    match expr {
        Expr::Conditional(_) => CanonicalExpr::Opaque,
        Expr::Logical(ExprLogical {
            op, left, right, ..
        }) => CanonicalExpr::Logical {
            op: *op,
            left: Box::new(canonicalize(left)),
            right: Box::new(canonicalize(right)),
        },
        Expr::Unary(ExprUnary { op, operand, .. }) => CanonicalExpr::Unary {
            op: *op,
            operand: Box::new(canonicalize(operand)),
        },
        Expr::Binary(binary) => CanonicalExpr::Binary {
            op: binary.op,
            left: Box::new(canonicalize(&binary.left)),
            right: Box::new(canonicalize(&binary.right)),
        },
        Expr::Call(call) => CanonicalExpr::Call {
            callee: identifier_name(&call.callee),
            arguments: call.arguments.iter().map(identifier_name).collect(),
        },
        Expr::Member(member) => CanonicalExpr::Member {
            object: identifier_name(&member.object),
            property: match &member.property {
                MemberProperty::Static(name) => MemberKey::Name(name.id.to_string()),
                MemberProperty::Computed(index) => {
                    MemberKey::Index(literal_text(index).unwrap_or_default())
                }
            },
        },
        Expr::Name(name) => CanonicalExpr::Name(name.id.to_string()),
        Expr::NumberLiteral(literal) => CanonicalExpr::Literal(literal.raw.to_string()),
        Expr::StringLiteral(literal) => CanonicalExpr::Literal(literal.raw.to_string()),
        Expr::BooleanLiteral(literal) => {
            CanonicalExpr::Literal(if literal.value { "true" } else { "false" }.to_string())
        }
        Expr::NullLiteral(_) => CanonicalExpr::Literal("null".to_string()),
    }
}

impl CanonicalExpr {
    /// Reduces this value to a basic test condition: an even number of
    /// leading negations cancels entirely, an odd number leaves a single
    /// one. `!!!x` compares equal to `!x`, and `!!x` to `x`.
    pub fn into_basic(self) -> CanonicalExpr {
        let mut negations = 0usize;
        let mut inner = self;
        while let CanonicalExpr::Unary {
            op: UnaryOp::Not,
            operand,
        } = inner
        {
            negations += 1;
            inner = *operand;
        }
        if negations % 2 == 1 {
            CanonicalExpr::negated(inner)
        } else {
            inner
        }
    }

    /// The boolean inverse: toggles a single leading negation. For basic
    /// conditions, `c.inverted().inverted() == c`.
    pub fn inverted(&self) -> CanonicalExpr {
        match self {
            CanonicalExpr::Unary {
                op: UnaryOp::Not,
                operand,
            } => (**operand).clone(),
            other => CanonicalExpr::negated(other.clone()),
        }
    }

    fn negated(operand: CanonicalExpr) -> CanonicalExpr {
        CanonicalExpr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
    }

    /// Whether the display form needs parentheses under a unary operator.
    fn is_compound(&self) -> bool {
        matches!(
            self,
            CanonicalExpr::Logical { .. } | CanonicalExpr::Binary { .. }
        )
    }
}

impl fmt::Display for CanonicalExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalExpr::Name(id) => f.write_str(id),
            CanonicalExpr::Literal(raw) => f.write_str(raw),
            CanonicalExpr::Unary { op, operand } => {
                if operand.is_compound() {
                    write!(f, "{op}({operand})")
                } else {
                    write!(f, "{op}{operand}")
                }
            }
            CanonicalExpr::Logical { op, left, right } => write!(f, "{left} {op} {right}"),
            CanonicalExpr::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            CanonicalExpr::Call { callee, arguments } => {
                write!(f, "{callee}({})", arguments.iter().join(", "))
            }
            CanonicalExpr::Member { object, property } => match property {
                MemberKey::Name(name) => write!(f, "{object}.{name}"),
                MemberKey::Index(index) => write!(f, "{object}[{index}]"),
            },
            CanonicalExpr::Opaque => Ok(()),
        }
    }
}

fn identifier_name(expr: &Expr) -> String {
    expr.as_name().unwrap_or_default().to_string()
}

fn literal_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::NumberLiteral(literal) => Some(literal.raw.to_string()),
        Expr::StringLiteral(literal) => Some(literal.raw.to_string()),
        Expr::BooleanLiteral(literal) => {
            Some(if literal.value { "true" } else { "false" }.to_string())
        }
        Expr::NullLiteral(_) => Some("null".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{CanonicalExpr, canonicalize};

    fn canonical(source: &str) -> CanonicalExpr {
        canonicalize(&ternlint_parser::parse_expression(source).expect("source should parse"))
    }

    #[test_case("x", "(x)"; "name")]
    #[test_case("a && b", "((a) && (b))"; "logical")]
    #[test_case("!foo(x, y)", "!(((foo(((x)), y))))"; "unary call")]
    #[test_case("user.isMember", "(user.isMember)"; "member")]
    #[test_case("condition[0] == '!'", "((condition[0]) == ('!'))"; "computed member")]
    fn parentheses_never_change_the_canonical_value(plain: &str, wrapped: &str) {
        assert_eq!(canonical(plain), canonical(wrapped));
    }

    #[test]
    fn canonicalization_is_pure() {
        assert_eq!(canonical("a && b || c"), canonical("a && b || c"));
    }

    #[test]
    fn negations_accumulate_without_simplification() {
        assert_ne!(canonical("!!x"), canonical("x"));
        assert_ne!(canonical("!!!x"), canonical("!x"));
    }

    #[test_case("x", "x"; "bare")]
    #[test_case("!!x", "x"; "double cancels")]
    #[test_case("!!!x", "!x"; "triple keeps one")]
    #[test_case("!(!(!(foo(x, y))))", "!foo(x, y)"; "parenthesized triple")]
    #[test_case("!!!!user.isMember", "user.isMember"; "quadruple cancels")]
    fn basic_test_condition(source: &str, expected: &str) {
        assert_eq!(canonical(source).into_basic(), canonical(expected).into_basic());
        assert_eq!(canonical(source).into_basic().to_string(), expected);
    }

    #[test]
    fn inversion_is_an_involution() {
        for source in ["x", "!x", "user.isMember", "a == b"] {
            let condition = canonical(source).into_basic();
            assert_eq!(condition.inverted().inverted(), condition);
        }
    }

    #[test]
    fn inversion_toggles_a_single_negation() {
        assert_eq!(canonical("!x").inverted(), canonical("x"));
        assert_eq!(canonical("x").inverted(), canonical("!x"));
    }

    #[test]
    fn call_arguments_keep_only_identifier_names() {
        // Documented limitation: non-identifier arguments degrade to an
        // empty slot, so the literal value is invisible.
        assert_eq!(canonical("baz(true)"), canonical("baz(false)"));
        assert_eq!(canonical("baz(1 + 2)"), canonical("baz('x')"));
        // The slot itself is kept: arity still matters.
        assert_ne!(canonical("baz(true)"), canonical("baz()"));
        assert_ne!(canonical("foo(x)"), canonical("foo(y)"));
    }

    #[test]
    fn member_objects_degrade_to_names() {
        // Documented limitation: a nested member object loses its path.
        assert_eq!(canonical("a.b.c"), canonical("x.y.c"));
        assert_ne!(canonical("a.b"), canonical("a.c"));
    }

    #[test]
    fn ternaries_are_opaque() {
        assert_eq!(canonical("a ? 1 : 2"), canonical("b ? 3 : 4"));
        assert_ne!(canonical("a ? 1 : 2"), canonical("a"));
    }

    #[test]
    fn literal_spelling_is_significant() {
        assert_ne!(canonical("2.00"), canonical("2.0"));
        assert_eq!(canonical("2.00"), canonical("(2.00)"));
    }

    #[test_case("foo(x, y)", "foo(x, y)"; "call")]
    #[test_case("!(!(!(foo(x, y))))", "!!!foo(x, y)"; "stacked negations")]
    #[test_case("a && b || c", "a && b || c"; "logical chain")]
    #[test_case("user.isMember", "user.isMember"; "member access")]
    #[test_case("condition[0] == '!'", "condition[0] == '!'"; "computed index")]
    #[test_case("baz(true)", "baz()"; "degraded argument slot")]
    fn display(source: &str, expected: &str) {
        assert_eq!(canonical(source).to_string(), expected);
    }

    #[test]
    fn display_parenthesizes_negated_compounds() {
        let inverted = canonical("a && b").inverted();
        assert_eq!(inverted.to_string(), "!(a && b)");
    }
}
