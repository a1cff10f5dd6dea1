//! Non-deterministic rule implementations.
//!
//! Each rule replaces one compound equation or inequality with a finite
//! disjunction of concrete equalities over the bounded universe. The
//! inspected tableau is discarded and every derived branch is a new tableau.

pub mod aggregation;
pub mod arithmetic;
pub mod inequality;
pub mod relu;

pub use aggregation::AggregationSplitRule;
pub use arithmetic::{admissible_pairs, AdditionSplitRule, SubtractionSplitRule};
pub use inequality::GeqGroundingRule;
pub use relu::ReluGroundingRule;
