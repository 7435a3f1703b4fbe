//! Structural checks on where ternaries appear and how deeply they chain.

use bitflags::bitflags;

use ternlint_ast::{Expr, ExprConditional, Ranged};

use crate::checkers::ast::Checker;
use crate::diagnostic::Diagnostic;
use crate::registry::Rule;
use crate::violation::Violation;

bitflags! {
    /// The slots of a ternary in which a nested ternary is permitted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct AllowedPositions: u8 {
        const TEST = 1 << 0;
        const CONSEQUENT = 1 << 1;
        const ALTERNATE = 1 << 2;
    }
}

/// TER101
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NestedInTestPosition {
    operator: String,
}

impl Violation for NestedInTestPosition {
    fn rule() -> Rule {
        Rule::NestedInTestPosition
    }

    fn message(&self) -> String {
        let NestedInTestPosition { operator } = self;
        format!("Ternary '{operator}' cannot be nested in the test position.")
    }
}

/// TER102
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NestedInConsequentPosition {
    operator: String,
}

impl Violation for NestedInConsequentPosition {
    fn rule() -> Rule {
        Rule::NestedInConsequentPosition
    }

    fn message(&self) -> String {
        let NestedInConsequentPosition { operator } = self;
        format!("Ternary '{operator}' cannot be nested in the consequent position.")
    }
}

/// TER103
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NestedInAlternatePosition {
    operator: String,
}

impl Violation for NestedInAlternatePosition {
    fn rule() -> Rule {
        Rule::NestedInAlternatePosition
    }

    fn message(&self) -> String {
        let NestedInAlternatePosition { operator } = self;
        format!("Ternary '{operator}' cannot be nested in the alternate position.")
    }
}

/// TER104
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ExcessiveNestingDepth {
    depth: u32,
}

impl Violation for ExcessiveNestingDepth {
    fn rule() -> Rule {
        Rule::ExcessiveNestingDepth
    }

    fn message(&self) -> String {
        let ExcessiveNestingDepth { depth } = self;
        format!("Nested ternary has disallowed depth of '{depth}'.")
    }
}

/// TER101, TER102, TER103
pub(crate) fn nested_position(checker: &mut Checker, conditional: &ExprConditional) {
    let allowed = checker.settings().nesting.allowed_positions();
    if allowed.is_all() {
        return;
    }
    if !allowed.contains(AllowedPositions::TEST) {
        if let Some(nested) = find_conditional(&conditional.test) {
            checker.diagnostics.push(Diagnostic::new(
                NestedInTestPosition {
                    operator: checker.slice(nested).to_string(),
                },
                nested.range(),
            ));
        }
    }
    if !allowed.contains(AllowedPositions::CONSEQUENT) {
        if let Some(nested) = find_conditional(&conditional.consequent) {
            checker.diagnostics.push(Diagnostic::new(
                NestedInConsequentPosition {
                    operator: checker.slice(nested).to_string(),
                },
                nested.range(),
            ));
        }
    }
    if !allowed.contains(AllowedPositions::ALTERNATE) {
        if let Some(nested) = find_conditional(&conditional.alternate) {
            checker.diagnostics.push(Diagnostic::new(
                NestedInAlternatePosition {
                    operator: checker.slice(nested).to_string(),
                },
                nested.range(),
            ));
        }
    }
}

/// TER104
pub(crate) fn excessive_nesting_depth(
    checker: &mut Checker,
    conditional: &ExprConditional,
    in_chain: bool,
) {
    // Only chain roots are measured; interior conditionals were already
    // counted as part of the root's chain.
    if in_chain {
        return;
    }
    let Some(max_depth) = checker.settings().nesting.depth else {
        return;
    };
    let depth = chain_depth(conditional);
    if depth > max_depth {
        checker.diagnostics.push(Diagnostic::new(
            ExcessiveNestingDepth { depth },
            conditional.range(),
        ));
    }
}

/// Returns the number of conditional links below `conditional`, following
/// the first conditional slot at each level. A non-nested ternary has depth
/// zero.
fn chain_depth(conditional: &ExprConditional) -> u32 {
    let mut depth = 0;
    let mut current = conditional;
    while let Some(next) = [
        &current.test,
        &current.consequent,
        &current.alternate,
    ]
    .into_iter()
    .find_map(|slot| slot.as_conditional())
    {
        depth += 1;
        current = next;
    }
    depth
}

/// A ternary occupies a slot whether it sits there directly or (in source
/// text) behind parentheses, which leave no node behind.
fn find_conditional(expr: &Expr) -> Option<&ExprConditional> {
    expr.as_conditional()
}

#[cfg(test)]
mod tests {
    use crate::registry::Rule;
    use crate::settings::{LinterSettings, NestingSettings};
    use crate::test::{codes, codes_with, lint_with};

    fn nesting(nesting: NestingSettings) -> LinterSettings {
        LinterSettings {
            nesting,
            ..LinterSettings::default()
        }
    }

    #[test]
    fn test_position_denied_by_default() {
        assert_eq!(
            codes("(isMember ? 1 : 2) ? x : y"),
            vec![Rule::NestedInTestPosition]
        );
    }

    #[test]
    fn test_position_finding_names_the_nested_ternary() {
        let diagnostics = lint_with(
            "(isMember ? 1 : 2) ? x : y",
            &LinterSettings::default(),
        );
        assert_eq!(
            diagnostics[0].body,
            "Ternary 'isMember ? 1 : 2' cannot be nested in the test position."
        );
    }

    #[test]
    fn consequent_position_denied() {
        let settings = nesting(NestingSettings {
            consequent: false,
            ..NestingSettings::default()
        });
        assert_eq!(
            codes_with("x ? (a ? 1 : 2) : y", &settings),
            vec![Rule::NestedInConsequentPosition]
        );
        assert!(codes_with("x ? a : (b ? 1 : 2)", &settings).is_empty());
    }

    #[test]
    fn alternate_position_denied() {
        let settings = nesting(NestingSettings {
            alternate: false,
            ..NestingSettings::default()
        });
        assert_eq!(
            codes_with("x ? a : (b ? 1 : 2)", &settings),
            vec![Rule::NestedInAlternatePosition]
        );
        assert!(codes_with("x ? (a ? 1 : 2) : y", &settings).is_empty());
    }

    #[test]
    fn every_position_denied() {
        let settings = nesting(NestingSettings {
            test: false,
            consequent: false,
            alternate: false,
            depth: None,
        });
        // Both outer branches are ternaries, which canonicalize to the same
        // opaque value, so the branch-duplication rule fires alongside the
        // three position findings. Sorted by range: the duplication finding
        // spans the whole outer conditional and sorts after the test child.
        assert_eq!(
            codes_with(
                "(a ? 1 : 2) ? (b ? 3 : 4) : (c ? 5 : 6)",
                &settings
            ),
            vec![
                Rule::NestedInTestPosition,
                Rule::DuplicateExpression,
                Rule::NestedInConsequentPosition,
                Rule::NestedInAlternatePosition,
            ]
        );
    }

    #[test]
    fn every_position_allowed() {
        let settings = nesting(NestingSettings {
            test: true,
            consequent: true,
            alternate: true,
            depth: None,
        });
        // No position findings; only the opaque-branch duplication remains,
        // which is independent of the position policy.
        assert_eq!(
            codes_with(
                "(a ? 1 : 2) ? (b ? 3 : 4) : (c ? 5 : 6)",
                &settings
            ),
            vec![Rule::DuplicateExpression]
        );
    }

    #[test]
    fn depth_unbounded_by_default() {
        assert!(codes("x ? y ? z ? 1 : 2 : 3 : 4").is_empty());
    }

    #[test]
    fn depth_reported_once_per_chain() {
        let settings = nesting(NestingSettings {
            depth: Some(1),
            ..NestingSettings::default()
        });
        let diagnostics = lint_with("x ? y ? z ? 1 : 2 : 3 : 4", &settings);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, Rule::ExcessiveNestingDepth);
        assert_eq!(
            diagnostics[0].body,
            "Nested ternary has disallowed depth of '2'."
        );
        // Anchored on the outermost conditional.
        assert_eq!(diagnostics[0].range.start(), 0);
    }

    #[test]
    fn depth_within_limit_is_silent() {
        let settings = nesting(NestingSettings {
            depth: Some(2),
            ..NestingSettings::default()
        });
        assert!(codes_with("x ? y ? z ? 1 : 2 : 3 : 4", &settings).is_empty());
    }

    #[test]
    fn depth_zero_forbids_any_nesting() {
        let settings = nesting(NestingSettings {
            depth: Some(0),
            ..NestingSettings::default()
        });
        assert!(codes_with("x ? 1 : 2", &settings).is_empty());
        assert_eq!(
            codes_with("x ? 1 : y ? 2 : 3", &settings),
            vec![Rule::ExcessiveNestingDepth]
        );
    }

    #[test]
    fn sibling_chains_measured_independently() {
        let settings = nesting(NestingSettings {
            depth: Some(0),
            ..NestingSettings::default()
        });
        assert_eq!(
            codes_with("(a ? 1 : b ? 2 : 3) == (c ? 4 : d ? 5 : 6)", &settings),
            vec![Rule::ExcessiveNestingDepth, Rule::ExcessiveNestingDepth]
        );
    }
}
