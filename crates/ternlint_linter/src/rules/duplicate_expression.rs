//! Detection of ternaries whose two branches are the same expression.

use ternlint_ast::{ExprConditional, Ranged};

use crate::canonical::canonicalize;
use crate::checkers::ast::Checker;
use crate::diagnostic::Diagnostic;
use crate::registry::Rule;
use crate::violation::Violation;

/// TER201
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DuplicateExpression {
    expression: String,
}

impl Violation for DuplicateExpression {
    fn rule() -> Rule {
        Rule::DuplicateExpression
    }

    fn message(&self) -> String {
        let DuplicateExpression { expression } = self;
        format!("Duplicate left and right-hand ternary expressions '{expression}'.")
    }
}

/// TER201
pub(crate) fn duplicate_expression(checker: &mut Checker, conditional: &ExprConditional) {
    let consequent = canonicalize(&conditional.consequent);
    if consequent == canonicalize(&conditional.alternate) {
        checker.diagnostics.push(Diagnostic::new(
            DuplicateExpression {
                expression: consequent.to_string(),
            },
            conditional.range(),
        ));
    }
}
