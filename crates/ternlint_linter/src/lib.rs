//! Rules and analysis over ternary (conditional) expressions.
//!
//! The linter parses a compilation unit with [`ternlint_parser`] and walks
//! the resulting tree once, dispatching every conditional expression to the
//! rule set. Findings come back as [`Diagnostic`]s ordered by source
//! position.

pub mod canonical;
pub mod logic;
pub mod registry;
pub mod settings;

mod checkers;
mod diagnostic;
mod linter;
mod rules;
mod violation;

pub use diagnostic::Diagnostic;
pub use linter::{check_program, check_source};
pub use violation::Violation;


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::registry::Rule;
    use crate::settings::LinterSettings;
    use crate::test::{codes, lint};

    #[test]
    fn diagnostics_sorted_by_position() {
        let diagnostics = lint(
            "isReady ? isReady ? 1 : 2 : 3; flag ? 4 : 4",
        );
        assert_eq!(
            diagnostics
                .iter()
                .map(|d| d.rule)
                .collect::<Vec<_>>(),
            vec![Rule::DuplicateCondition, Rule::DuplicateExpression]
        );
        assert!(diagnostics[0].range.start() < diagnostics[1].range.start());
    }

    #[test]
    fn history_spans_statements() {
        // The condition history covers the whole unit, not one statement.
        assert_eq!(
            codes("isReady ? 1 : 2; isReady ? 3 : 4"),
            vec![Rule::DuplicateCondition]
        );
    }

    #[test]
    fn history_does_not_span_units() {
        let settings = LinterSettings::default();
        assert!(crate::check_source("isReady ? 1 : 2", &settings)
            .unwrap()
            .is_empty());
        // Same condition again in a fresh unit: still clean.
        assert!(crate::check_source("isReady ? 1 : 2", &settings)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn parse_errors_are_fatal_for_the_unit() {
        assert!(crate::check_source("x ? 1 :", &LinterSettings::default()).is_err());
    }

    #[test]
    fn multiple_rules_can_fire_on_one_conditional() {
        // Duplicate condition and duplicate branches on the same node.
        assert_eq!(
            codes("x ? 1 : x ? 2 : 2"),
            vec![Rule::DuplicateCondition, Rule::DuplicateExpression]
        );
    }
}
