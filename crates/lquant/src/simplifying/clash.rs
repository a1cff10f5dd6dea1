//! Clash detection.
//!
//! All rules add the `Inconsistent` sentinel without removing anything; the
//! controller drops the tableau afterwards.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{Proposition, Tableau, Term, WorldId};
use crate::state::{RewriteOutcome, SimplifyingRule};
use std::collections::HashMap;

/// Two equalities bind the same term in the same world to different values.
pub struct EqualityClashRule;

impl SimplifyingRule for EqualityClashRule {
    fn name(&self) -> &str {
        "ClashEq"
    }

    fn simplify(&self, tableau: &Tableau, _config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let mut bound: HashMap<(WorldId, &Term), i64> = HashMap::new();
        for (world, term, value) in tableau.bindings() {
            match bound.insert((world, term), value) {
                Some(previous) if previous != value => {
                    return Ok(RewriteOutcome::rewritten(tableau.closed()));
                }
                _ => {}
            }
        }
        Ok(RewriteOutcome::no_match())
    }
}

/// A numeric constant equated to a different number.
pub struct ConstantClashRule;

impl SimplifyingRule for ConstantClashRule {
    fn name(&self) -> &str {
        "ClashConst"
    }

    fn simplify(&self, tableau: &Tableau, _config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let clash = tableau
            .iter()
            .any(|f| matches!(&f.prop, Proposition::Eq(Term::Const(c), k) if c != k));
        if clash {
            Ok(RewriteOutcome::rewritten(tableau.closed()))
        } else {
            Ok(RewriteOutcome::no_match())
        }
    }
}

/// A term equated to a value outside the universe `[-MAX, MAX]`.
pub struct RangeClashRule;

impl SimplifyingRule for RangeClashRule {
    fn name(&self) -> &str {
        "ClashRange"
    }

    fn simplify(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        if tableau.bindings().any(|(_, _, value)| !config.in_range(value)) {
            Ok(RewriteOutcome::rewritten(tableau.closed()))
        } else {
            Ok(RewriteOutcome::no_match())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LabeledFormula;

    fn eq(world: i64, term: Term, value: i64) -> LabeledFormula {
        LabeledFormula::new(WorldId(world), Proposition::eq(term, value))
    }

    #[test]
    fn test_conflicting_bindings_clash() {
        let tableau: Tableau = vec![eq(1, Term::var("x"), 1), eq(1, Term::var("x"), 2)].into_iter().collect();
        let outcome = EqualityClashRule.simplify(&tableau, &SearchConfig::default()).unwrap();
        assert!(outcome.consumed);
        assert!(outcome.new_tableaux[0].is_inconsistent());
    }

    #[test]
    fn test_compound_terms_clash() {
        let t = Term::relu(Term::var("x"));
        let tableau: Tableau = vec![eq(1, t.clone(), 0), eq(1, t, -1)].into_iter().collect();
        let outcome = EqualityClashRule.simplify(&tableau, &SearchConfig::default()).unwrap();
        assert!(outcome.new_tableaux[0].is_inconsistent());
    }

    #[test]
    fn test_distinct_worlds_do_not_clash() {
        let tableau: Tableau = vec![eq(11, Term::var("x"), 1), eq(12, Term::var("x"), 2)].into_iter().collect();
        let outcome = EqualityClashRule.simplify(&tableau, &SearchConfig::default()).unwrap();
        assert!(!outcome.consumed);
    }

    #[test]
    fn test_constant_clash() {
        let bad = Tableau::from_root(eq(1, Term::constant(3), 2));
        let outcome = ConstantClashRule.simplify(&bad, &SearchConfig::default()).unwrap();
        assert!(outcome.new_tableaux[0].is_inconsistent());

        let good = Tableau::from_root(eq(1, Term::constant(3), 3));
        let outcome = ConstantClashRule.simplify(&good, &SearchConfig::default()).unwrap();
        assert!(!outcome.consumed);
    }

    #[test]
    fn test_out_of_range_binding_clash() {
        let config = SearchConfig::new(4);
        let bad = Tableau::from_root(eq(1, Term::var("x"), 10));
        let outcome = RangeClashRule.simplify(&bad, &config).unwrap();
        assert!(outcome.new_tableaux[0].is_inconsistent());

        let edge: Tableau = vec![eq(1, Term::var("x"), 4), eq(1, Term::relu(Term::var("y")), -4)].into_iter().collect();
        let outcome = RangeClashRule.simplify(&edge, &config).unwrap();
        assert!(!outcome.consumed);
    }
}
