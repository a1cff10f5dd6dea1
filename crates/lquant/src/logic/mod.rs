//! Lquant data structures
//!
//! This module provides the fundamental types of the tableau search:
//! terms, propositions, world identifiers, labeled formulas and tableaux.

pub mod proposition;
pub mod tableau;
pub mod term;
pub mod world;

pub use proposition::{LabeledFormula, Proposition};
pub use tableau::Tableau;
pub use term::Term;
pub use world::WorldId;
