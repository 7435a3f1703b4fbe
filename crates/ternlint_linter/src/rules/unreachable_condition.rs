//! Detection of ternary conditions that can never be reached because an
//! earlier condition on the same path already covers them.

use ternlint_ast::{ExprConditional, Ranged};

use crate::canonical::{canonicalize, CanonicalExpr};
use crate::checkers::ast::Checker;
use crate::diagnostic::Diagnostic;
use crate::logic::{disjuncts, is_subset_of, shares_any, split_conjuncts};
use crate::registry::Rule;
use crate::violation::Violation;

/// TER001
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DuplicateCondition {
    condition: String,
}

impl Violation for DuplicateCondition {
    fn rule() -> Rule {
        Rule::DuplicateCondition
    }

    fn message(&self) -> String {
        let DuplicateCondition { condition } = self;
        format!("Duplicate ternary conditions '{condition}'.")
    }
}

/// TER002
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DuplicateInvertedCondition {
    condition: String,
}

impl Violation for DuplicateInvertedCondition {
    fn rule() -> Rule {
        Rule::DuplicateInvertedCondition
    }

    fn message(&self) -> String {
        let DuplicateInvertedCondition { condition } = self;
        format!("Duplicate inverted ternary conditions '{condition}'.")
    }
}

/// TER003
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct EquivalentOrCondition {
    condition: String,
}

impl Violation for EquivalentOrCondition {
    fn rule() -> Rule {
        Rule::EquivalentOrCondition
    }

    fn message(&self) -> String {
        let EquivalentOrCondition { condition } = self;
        format!("Equivalent ternary OR conditions '{condition}'.")
    }
}

/// TER004
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DuplicateOrCondition {
    condition: String,
}

impl Violation for DuplicateOrCondition {
    fn rule() -> Rule {
        Rule::DuplicateOrCondition
    }

    fn message(&self) -> String {
        let DuplicateOrCondition { condition } = self;
        format!("Duplicate ternary OR conditions '{condition}'.")
    }
}

/// Conditions observed so far in the current compilation unit, in canonical
/// basic form.
#[derive(Debug, Default)]
pub(crate) struct ConditionHistory {
    seen: Vec<CanonicalExpr>,
    inverted: Vec<CanonicalExpr>,
    or_groups: Vec<Vec<CanonicalExpr>>,
}

impl ConditionHistory {
    fn contains(&self, condition: &CanonicalExpr) -> bool {
        self.seen.contains(condition)
    }

    fn contains_inverted(&self, condition: &CanonicalExpr) -> bool {
        self.inverted.contains(condition)
    }

    /// Whether some earlier OR-combination already covers every disjunct of
    /// the new condition.
    fn subsumes(&self, new_disjuncts: &[CanonicalExpr]) -> bool {
        self.or_groups
            .iter()
            .any(|group| is_subset_of(new_disjuncts, group))
    }

    /// The first disjunct of the new condition that already appears in an
    /// earlier OR-combination. Earlier groups are scanned before later
    /// ones; within a group, the new condition's disjunct order breaks
    /// ties.
    fn first_shared_disjunct<'d>(
        &self,
        new_disjuncts: &'d [CanonicalExpr],
    ) -> Option<&'d CanonicalExpr> {
        self.or_groups
            .iter()
            .find(|group| shares_any(group, new_disjuncts))
            .and_then(|group| {
                new_disjuncts
                    .iter()
                    .find(|disjunct| group.contains(disjunct))
            })
    }

    fn record(
        &mut self,
        condition: CanonicalExpr,
        inverted: CanonicalExpr,
        disjuncts: Vec<CanonicalExpr>,
    ) {
        self.seen.push(condition);
        self.inverted.push(inverted);
        if disjuncts.len() > 1 {
            self.or_groups.push(disjuncts);
        }
    }
}

/// TER001, TER002, TER003, TER004
pub(crate) fn unreachable_condition(checker: &mut Checker, conditional: &ExprConditional) {
    let conjuncts = split_conjuncts(&conditional.test);
    // A conjunct of an AND-combination holds on a narrower path than the
    // test as a whole, so the OR-level checks do not apply to it.
    let is_and_child = conjuncts.len() > 1;
    let allow_duplicate_or = checker
        .settings()
        .unreachable
        .allow_duplicate_or_conditions;

    for conjunct in conjuncts {
        let condition = canonicalize(conjunct).into_basic();
        let inverted = condition.inverted();
        let disjunct_list = disjuncts(&condition);

        if checker.history.contains(&condition) || checker.history.contains_inverted(&inverted) {
            checker.diagnostics.push(Diagnostic::new(
                DuplicateCondition {
                    condition: condition.to_string(),
                },
                conditional.range(),
            ));
        }
        if checker.history.contains_inverted(&condition) || checker.history.contains(&inverted) {
            checker.diagnostics.push(Diagnostic::new(
                DuplicateInvertedCondition {
                    condition: condition.to_string(),
                },
                conditional.range(),
            ));
        }
        if !is_and_child {
            if checker.history.subsumes(&disjunct_list) {
                checker.diagnostics.push(Diagnostic::new(
                    EquivalentOrCondition {
                        condition: condition.to_string(),
                    },
                    conditional.range(),
                ));
            } else if !allow_duplicate_or {
                if let Some(shared) = checker.history.first_shared_disjunct(&disjunct_list) {
                    let shared = shared.to_string();
                    checker.diagnostics.push(Diagnostic::new(
                        DuplicateOrCondition { condition: shared },
                        conditional.range(),
                    ));
                }
            }
        }
        checker.history.record(condition, inverted, disjunct_list);
    }
}
