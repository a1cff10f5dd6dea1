//! Deterministic rule implementations.
//!
//! Every rule rewrites a single formula of a live tableau into a strictly
//! smaller one, or closes the tableau.

pub mod clash;
pub mod conjunction;
pub mod negation;
pub mod relu;
pub mod scalar;

pub use clash::{ConstantClashRule, EqualityClashRule, RangeClashRule};
pub use conjunction::ConjunctionRule;
pub use negation::NegationRule;
pub use relu::ReluPositiveRule;
pub use scalar::{cancel, ScalarCancellationRule};
