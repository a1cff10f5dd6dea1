//! ReLU short-circuit: rectification is the identity on positive outputs,
//! so `(w, relu(e) = v)` with `v > 0` becomes `(w, e = v)`.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term};
use crate::state::{RewriteOutcome, SimplifyingRule};

pub struct ReluPositiveRule;

impl SimplifyingRule for ReluPositiveRule {
    fn name(&self) -> &str {
        "ReluPositive"
    }

    fn simplify(&self, tableau: &Tableau, _config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Eq(Term::Relu(e), v) if *v > 0 => Some((f, e, *v)),
            _ => None,
        });
        let Some((formula, e, v)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };

        let next = tableau
            .without(formula)
            .extended([LabeledFormula::new(formula.world, Proposition::eq((**e).clone(), v))]);
        Ok(RewriteOutcome::rewritten(next))
    }
}
