//! Aggregation split.
//!
//! `(w, agg(e) = v)` models the aggregate as the sum of two independent
//! instances of `e`, living in the fresh child worlds of `w`. For every `v1`
//! in the universe with `v2 = v - v1` also in the universe, one branch
//! asserts `(10w+1, e = v1)` and `(10w+2, e = v2)`.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term};
use crate::state::{BranchingRule, RewriteOutcome};

pub struct AggregationSplitRule;

impl BranchingRule for AggregationSplitRule {
    fn name(&self) -> &str {
        "Agg"
    }

    fn branch(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Eq(Term::Agg(e), v) => Some((f, e, *v)),
            _ => None,
        });
        let Some((formula, e, v)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };
        let (left, right) = formula.world.split()?;

        let remainder = tableau.without(formula);
        let mut branches = Vec::new();
        for v1 in config.universe() {
            let Some(v2) = v.checked_sub(v1).filter(|v2| config.in_range(*v2)) else {
                continue;
            };
            branches.push(remainder.extended([
                LabeledFormula::new(left, Proposition::eq((**e).clone(), v1)),
                LabeledFormula::new(right, Proposition::eq((**e).clone(), v2)),
            ]));
        }
        Ok(RewriteOutcome::branches(branches))
    }
}
