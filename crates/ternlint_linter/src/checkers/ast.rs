//! AST traversal driving the rule set.

use ternlint_ast::visitor::{walk_expr, walk_program, Visitor};
use ternlint_ast::{Expr, ExprConditional, Program, Ranged};

use crate::diagnostic::Diagnostic;
use crate::rules;
use crate::rules::unreachable_condition::ConditionHistory;
use crate::settings::LinterSettings;

/// Walks one compilation unit, dispatching every conditional expression to
/// the rules and collecting their diagnostics.
pub(crate) struct Checker<'a> {
    settings: &'a LinterSettings,
    source: &'a str,
    /// Whether the expression being visited sits in a slot of an enclosing
    /// conditional, i.e. is not a chain root.
    in_conditional_chain: bool,
    pub(crate) history: ConditionHistory,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'a> Checker<'a> {
    fn new(settings: &'a LinterSettings, source: &'a str) -> Self {
        Self {
            settings,
            source,
            in_conditional_chain: false,
            history: ConditionHistory::default(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn settings(&self) -> &'a LinterSettings {
        self.settings
    }

    /// The source text underlying the given node.
    pub(crate) fn slice(&self, ranged: impl Ranged) -> &'a str {
        let range = ranged.range().to_usize();
        &self.source[range]
    }

    fn analyze_conditional(&mut self, conditional: &ExprConditional, in_chain: bool) {
        rules::nesting::nested_position(self, conditional);
        rules::nesting::excessive_nesting_depth(self, conditional, in_chain);
        rules::unreachable_condition::unreachable_condition(self, conditional);
        rules::duplicate_expression::duplicate_expression(self, conditional);
    }
}

impl<'a> Visitor<'a> for Checker<'a> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        let in_chain = std::mem::take(&mut self.in_conditional_chain);
        if let Expr::Conditional(conditional) = expr {
            self.analyze_conditional(conditional, in_chain);
            for slot in [
                &conditional.test,
                &conditional.consequent,
                &conditional.alternate,
            ] {
                self.in_conditional_chain = true;
                self.visit_expr(slot);
            }
            self.in_conditional_chain = false;
        } else {
            walk_expr(self, expr);
        }
    }
}

/// Runs every rule over a parsed compilation unit.
pub(crate) fn check_program(
    program: &Program,
    source: &str,
    settings: &LinterSettings,
) -> Vec<Diagnostic> {
    let mut checker = Checker::new(settings, source);
    walk_program(&mut checker, program);
    let mut diagnostics = checker.diagnostics;
    diagnostics.sort_by_key(|diagnostic| (diagnostic.range.start(), diagnostic.range.end()));
    diagnostics
}
