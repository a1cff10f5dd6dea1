//! Inequality grounding.
//!
//! `(w, p >= v)` branches into `(w, p = i)` for every `i` from `v` (raised to
//! the lower end of the universe) up to `MAX - 1`. The upper bound `MAX`
//! itself is never enumerated.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau};
use crate::state::{BranchingRule, RewriteOutcome};

pub struct GeqGroundingRule;

impl BranchingRule for GeqGroundingRule {
    fn name(&self) -> &str {
        "Geq"
    }

    fn branch(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Geq(p, v) => Some((f, p, *v)),
            _ => None,
        });
        let Some((formula, p, v)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };

        let remainder = tableau.without(formula);
        let branches = (v.max(-config.max)..config.max)
            .map(|i| remainder.extended([LabeledFormula::new(formula.world, Proposition::eq(p.clone(), i))]))
            .collect();
        Ok(RewriteOutcome::branches(branches))
    }
}
