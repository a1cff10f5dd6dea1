//! Conjunction elimination.
//!
//! `(w, p & q)` is replaced by `(w, p)` and `(w, q)`.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau};
use crate::state::{RewriteOutcome, SimplifyingRule};

pub struct ConjunctionRule;

impl SimplifyingRule for ConjunctionRule {
    fn name(&self) -> &str {
        "And"
    }

    fn simplify(&self, tableau: &Tableau, _config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::And(p, q) => Some((f, p, q)),
            _ => None,
        });
        let Some((formula, p, q)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };

        let next = tableau.without(formula).extended([
            LabeledFormula::new(formula.world, (**p).clone()),
            LabeledFormula::new(formula.world, (**q).clone()),
        ]);
        Ok(RewriteOutcome::rewritten(next))
    }
}
