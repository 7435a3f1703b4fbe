//! Decomposition of boolean conditions into conjuncts and disjuncts.

use ternlint_ast::{Expr, ExprLogical, LogicalOp};

use crate::canonical::CanonicalExpr;

/// Recursively flattens a left-associated `&&` chain into its conjuncts.
/// Non-`&&` nodes yield a singleton.
pub fn split_conjuncts(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Logical(ExprLogical {
            op: LogicalOp::And,
            left,
            right,
            ..
        }) => {
            let mut conjuncts = split_conjuncts(left);
            conjuncts.extend(split_conjuncts(right));
            conjuncts
        }
        _ => vec![expr],
    }
}

/// Flattens the top-level `||` chain of a canonical condition into its
/// disjuncts. A disjunct that contains a nested OR below an AND stays one
/// opaque disjunct; only the outermost chain is split.
pub fn disjuncts(condition: &CanonicalExpr) -> Vec<CanonicalExpr> {
    fn collect(condition: &CanonicalExpr, out: &mut Vec<CanonicalExpr>) {
        if let CanonicalExpr::Logical {
            op: LogicalOp::Or,
            left,
            right,
        } = condition
        {
            collect(left, out);
            collect(right, out);
        } else {
            out.push(condition.clone());
        }
    }

    let mut out = Vec::new();
    collect(condition, &mut out);
    out
}

/// Whether every element of `a` appears in `b`.
pub fn is_subset_of(a: &[CanonicalExpr], b: &[CanonicalExpr]) -> bool {
    a.iter().all(|element| b.contains(element))
}

/// Whether `a` and `b` share any element.
pub fn shares_any(a: &[CanonicalExpr], b: &[CanonicalExpr]) -> bool {
    a.iter().any(|element| b.contains(element))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{disjuncts, is_subset_of, shares_any, split_conjuncts};
    use crate::canonical::{CanonicalExpr, canonicalize};

    fn canonical(source: &str) -> CanonicalExpr {
        canonicalize(&ternlint_parser::parse_expression(source).expect("source should parse"))
    }

    fn canonical_disjuncts(source: &str) -> Vec<String> {
        disjuncts(&canonical(source))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn conjuncts_of_a_flat_chain() {
        let expr = ternlint_parser::parse_expression("a && b && c").unwrap();
        let conjuncts: Vec<String> = split_conjuncts(&expr)
            .into_iter()
            .map(|conjunct| canonicalize(conjunct).to_string())
            .collect();
        assert_eq!(conjuncts, ["a", "b", "c"]);
    }

    #[test]
    fn conjuncts_split_through_parentheses() {
        let expr = ternlint_parser::parse_expression("(a && b) && c").unwrap();
        assert_eq!(split_conjuncts(&expr).len(), 3);
    }

    #[test]
    fn non_and_is_a_singleton() {
        let expr = ternlint_parser::parse_expression("a || b").unwrap();
        assert_eq!(split_conjuncts(&expr).len(), 1);
    }

    #[test]
    fn negated_chain_is_a_singleton() {
        // The negation owns the whole chain; it is not split.
        let expr = ternlint_parser::parse_expression("!(a && b)").unwrap();
        assert_eq!(split_conjuncts(&expr).len(), 1);
    }

    #[test]
    fn disjuncts_of_a_flat_chain() {
        assert_eq!(canonical_disjuncts("a || b || c"), ["a", "b", "c"]);
    }

    #[test]
    fn single_condition_is_one_disjunct() {
        assert_eq!(canonical_disjuncts("!condition1"), ["!condition1"]);
    }

    #[test]
    fn nested_or_below_and_stays_opaque() {
        // Two disjuncts, not three: the parenthesized OR belongs to the
        // second disjunct's AND. Its display form is flat and not meant to
        // be re-parseable.
        assert_eq!(
            canonical_disjuncts("a || b && (c || d)"),
            ["a", "b && c || d"]
        );
    }

    #[test]
    fn subset_and_overlap() {
        let group = disjuncts(&canonical("c3 || c2 || c1"));
        let single = disjuncts(&canonical("c1"));
        let partial = disjuncts(&canonical("c1 || c4"));
        assert!(is_subset_of(&single, &group));
        assert!(!is_subset_of(&partial, &group));
        assert!(shares_any(&partial, &group));
        assert!(!shares_any(&disjuncts(&canonical("c5")), &group));
    }
}
