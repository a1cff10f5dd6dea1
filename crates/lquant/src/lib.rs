//! lquant: a bounded tableau decision procedure for Lquant
//!
//! Lquant formulas assert integer equalities and inequalities over terms
//! built from variables, constants, scalar multiplication, addition,
//! subtraction, ReLU and a two-world aggregation operator. The search
//! decomposes a labeled root formula with deterministic rules, grounds the
//! remaining compound equations by branching over the universe
//! `[-MAX, MAX]`, and closes every tableau that binds a term to two values.

pub mod branching;
pub mod config;
pub mod error;
pub mod json;
pub mod logic;
pub mod profile;
pub mod prover;
pub mod simplifying;
pub mod state;

#[cfg(test)]
mod proptest_tests;

// Re-export the data model
pub use logic::{LabeledFormula, Proposition, Tableau, Term, WorldId};

// Re-export search types
pub use config::SearchConfig;
pub use error::LquantError;
pub use json::{SearchResultJson, TableauJson};
pub use profile::SearchProfile;
pub use prover::{refute, Tableaux};
pub use state::{BranchingRule, RewriteOutcome, RuleStrategy, RuleTier, SearchResult, SimplifyingRule};
