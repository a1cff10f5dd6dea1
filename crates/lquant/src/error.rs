//! Error types for the tableau search.
//!
//! Only malformed input is an error. A clash or an inexact scalar
//! cancellation closes a tableau and is never reported here.

use crate::logic::{LabeledFormula, WorldId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LquantError {
    /// Scalar multiplication by zero reached the cancellation rule
    #[error("Malformed scaling: zero scalar factor in {0}")]
    MalformedScaling(LabeledFormula),

    /// A formula shape that no rule of the strategy can resolve
    #[error("Unrecognized construct: no rule resolves {0}")]
    UnrecognizedConstruct(LabeledFormula),

    #[error("Invalid bound: MAX must be non-negative, got {0}")]
    InvalidBound(i64),

    /// Splitting the world would leave the range of the world id encoding
    #[error("World id overflow: cannot split world {0}")]
    WorldOverflow(WorldId),
}
