//! ReLU grounding for non-positive outputs.
//!
//! `(w, relu(e) = v)` with `v <= 0` branches into `(w, e = i)` for every
//! `i` in `[-MAX, -1]`.
//!
//! Known gaps, kept as is: for `v < 0` the equation is unsatisfiable yet the
//! rule still produces branches, and for `v = 0` the input `e = 0` is not
//! enumerated.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term};
use crate::state::{BranchingRule, RewriteOutcome};

pub struct ReluGroundingRule;

impl BranchingRule for ReluGroundingRule {
    fn name(&self) -> &str {
        "ReluGround"
    }

    fn branch(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Eq(Term::Relu(e), v) if *v <= 0 => Some((f, e)),
            _ => None,
        });
        let Some((formula, e)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };

        let remainder = tableau.without(formula);
        let branches = (-config.max..0)
            .map(|i| {
                let grounded = LabeledFormula::new(formula.world, Proposition::eq((**e).clone(), i));
                remainder.extended([grounded])
            })
            .collect();
        Ok(RewriteOutcome::branches(branches))
    }
}
