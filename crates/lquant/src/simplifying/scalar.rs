//! Scalar cancellation.
//!
//! `(w, c*e = v)` becomes `(w, e = q)` with `q = v / c` clamped into the
//! universe, provided `q * c == v` exactly. Otherwise no integer in range
//! solves the equation and the tableau closes. A zero factor is malformed.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term};
use crate::state::{RewriteOutcome, SimplifyingRule};

pub struct ScalarCancellationRule;

impl SimplifyingRule for ScalarCancellationRule {
    fn name(&self) -> &str {
        "ScalarCancel"
    }

    fn simplify(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError> {
        let matched = tableau.iter().find_map(|f| match &f.prop {
            Proposition::Eq(Term::ScalarMul(c, e), v) => Some((f, *c, e, *v)),
            _ => None,
        });
        let Some((formula, c, e, v)) = matched else {
            return Ok(RewriteOutcome::no_match());
        };
        if c == 0 {
            return Err(LquantError::MalformedScaling(formula.clone()));
        }

        let remainder = tableau.without(formula);
        let next = match cancel(c, v, config) {
            Some(q) => {
                let quotient = LabeledFormula::new(formula.world, Proposition::eq((**e).clone(), q));
                remainder.extended([quotient])
            }
            None => remainder.closed(),
        };
        Ok(RewriteOutcome::rewritten(next))
    }
}

/// Solve `c * q = v` for `q` in the universe. `c` must be non-zero.
pub fn cancel(c: i64, v: i64, config: &SearchConfig) -> Option<i64> {
    // Widen so that i64::MIN / -1 cannot overflow
    let q = config.clamp_wide(i128::from(v) / i128::from(c));
    (i128::from(q) * i128::from(c) == i128::from(v)).then_some(q)
}
