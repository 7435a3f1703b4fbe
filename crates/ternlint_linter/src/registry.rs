//! The registry of all rules the linter can report.

use std::fmt;

/// Every finding kind, with a stable code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// TER001: a ternary test condition repeats an earlier one.
    DuplicateCondition,
    /// TER002: a ternary test condition is the inverse of an earlier one.
    DuplicateInvertedCondition,
    /// TER003: a condition is subsumed by an earlier OR-combination.
    EquivalentOrCondition,
    /// TER004: a condition shares a disjunct with an earlier OR-combination.
    DuplicateOrCondition,
    /// TER101: a ternary is nested in the test of another ternary.
    NestedInTestPosition,
    /// TER102: a ternary is nested in the consequent of another ternary.
    NestedInConsequentPosition,
    /// TER103: a ternary is nested in the alternate of another ternary.
    NestedInAlternatePosition,
    /// TER104: a ternary chain is nested deeper than the configured limit.
    ExcessiveNestingDepth,
    /// TER201: both branches of a ternary are the same expression.
    DuplicateExpression,
}

impl Rule {
    pub const fn code(self) -> &'static str {
        match self {
            Rule::DuplicateCondition => "TER001",
            Rule::DuplicateInvertedCondition => "TER002",
            Rule::EquivalentOrCondition => "TER003",
            Rule::DuplicateOrCondition => "TER004",
            Rule::NestedInTestPosition => "TER101",
            Rule::NestedInConsequentPosition => "TER102",
            Rule::NestedInAlternatePosition => "TER103",
            Rule::ExcessiveNestingDepth => "TER104",
            Rule::DuplicateExpression => "TER201",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rule::DuplicateCondition => "duplicate-condition",
            Rule::DuplicateInvertedCondition => "duplicate-inverted-condition",
            Rule::EquivalentOrCondition => "equivalent-or-condition",
            Rule::DuplicateOrCondition => "duplicate-or-condition",
            Rule::NestedInTestPosition => "nested-in-test-position",
            Rule::NestedInConsequentPosition => "nested-in-consequent-position",
            Rule::NestedInAlternatePosition => "nested-in-alternate-position",
            Rule::ExcessiveNestingDepth => "excessive-nesting-depth",
            Rule::DuplicateExpression => "duplicate-expression",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
