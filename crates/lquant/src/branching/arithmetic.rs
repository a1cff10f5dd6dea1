//! Binary arithmetic splits.
//!
//! `(w, e1 - e2 = v)` and `(w, e1 + e2 = v)` are split over every pair
//! `(a, b)` of the universe whose clamped difference (sum) equals `v`. Each
//! pair yields one branch asserting `(w, e1 = a)` and `(w, e2 = b)`.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term};
use crate::state::{BranchingRule, RewriteOutcome};

/// All pairs `(a, b)` of the universe with `clamp(op(a, b)) == target`
pub fn admissible_pairs(
    config: &SearchConfig,
    target: i64,
    op: impl Fn(i64, i64) -> i64,
) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();
    for a in config.universe() {
        for b in config.universe() {
            if config.clamp(op(a, b)) == target {
                pairs.push((a, b));
            }
        }
    }
    pairs
}

fn split(
    tableau: &Tableau,
    formula: &LabeledFormula,
    lhs: &Term,
    rhs: &Term,
    pairs: Vec<(i64, i64)>,
) -> RewriteOutcome {
    let remainder = tableau.without(formula);
    let branches = pairs
        .into_iter()
        .map(|(a, b)| {
            remainder.extended([
                LabeledFormula::new(formula.world, Proposition::eq(lhs.clone(), a)),
                LabeledFormula::new(formula.world, Proposition::eq(rhs.clone(), b)),
            ])
        })
        .collect();
    RewriteOutcome::branches(branches)
}

pub struct SubtractionSplitRule;

impl BranchingRule for SubtractionSplitRule {
    fn name(&self) -> &str {
        "Sub"
    }

    fn branch(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Eq(Term::Sub(e1, e2), v) => Some((f, e1, e2, *v)),
            _ => None,
        });
        let Some((formula, e1, e2, v)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };

        let pairs = admissible_pairs(config, v, |a, b| a.saturating_sub(b));
        Ok(split(tableau, formula, e1, e2, pairs))
    }
}

pub struct AdditionSplitRule;

impl BranchingRule for AdditionSplitRule {
    fn name(&self) -> &str {
        "Add"
    }

    fn branch(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Eq(Term::Add(e1, e2), v) => Some((f, e1, e2, *v)),
            _ => None,
        });
        let Some((formula, e1, e2, v)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };

        let pairs = admissible_pairs(config, v, |a, b| a.saturating_add(b));
        Ok(split(tableau, formula, e1, e2, pairs))
    }
}
