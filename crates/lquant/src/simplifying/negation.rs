//! Negation pushing.
//!
//! Over the integers `~(e >= v)` holds iff `e <= v - 1`, i.e. `-1*e >= 1 - v`.
//! Negation is only defined over inequalities; any other negated shape is
//! malformed input.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term};
use crate::state::{RewriteOutcome, SimplifyingRule};

pub struct NegationRule;

impl SimplifyingRule for NegationRule {
    fn name(&self) -> &str {
        "Not"
    }

    fn simplify(&self, tableau: &Tableau, _config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let Some(formula) = tableau.find(|f| matches!(f.prop, Proposition::Not(_))) else {
            return Ok(RewriteOutcome::no_match());
        };

        let complement = match &formula.prop {
            Proposition::Not(inner) => match inner.as_ref() {
                Proposition::Geq(e, v) => {
                    Proposition::geq(Term::scalar(-1, e.clone()), 1i64.saturating_sub(*v))
                }
                _ => return Err(LquantError::UnrecognizedConstruct(formula.clone())),
            },
            _ => return Ok(RewriteOutcome::no_match()),
        };

        let next = tableau
            .without(formula)
            .extended([LabeledFormula::new(formula.world, complement)]);
        Ok(RewriteOutcome::rewritten(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::WorldId;

    #[test]
    fn test_negated_geq_becomes_complement() {
        let root = LabeledFormula::new(WorldId(1), Proposition::not(Proposition::geq(Term::var("y1"), 1)));
        let tableau = Tableau::from_root(root);

        let outcome = NegationRule.simplify(&tableau, &SearchConfig::default()).unwrap();
        let expected = LabeledFormula::new(WorldId(1), Proposition::geq(Term::scalar(-1, Term::var("y1")), 0));
        assert_eq!(outcome.new_tableaux, vec![Tableau::from_root(expected)]);
    }

    #[test]
    fn test_complement_excludes_bound() {
        // ~(x >= -2) means x <= -3
        let root = LabeledFormula::new(WorldId(1), Proposition::not(Proposition::geq(Term::var("x"), -2)));
        let outcome = NegationRule.simplify(&Tableau::from_root(root), &SearchConfig::default()).unwrap();
        let expected = LabeledFormula::new(WorldId(1), Proposition::geq(Term::scalar(-1, Term::var("x")), 3));
        assert!(outcome.new_tableaux[0].contains(&expected));
    }

    #[test]
    fn test_negated_equality_is_unrecognized() {
        let root = LabeledFormula::new(WorldId(1), Proposition::not(Proposition::eq(Term::var("x"), 0)));
        let err = NegationRule
            .simplify(&Tableau::from_root(root.clone()), &SearchConfig::default())
            .unwrap_err();
        assert_eq!(err, LquantError::UnrecognizedConstruct(root));
    }
}
