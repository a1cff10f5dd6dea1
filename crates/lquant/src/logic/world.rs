//! World identifiers.
//!
//! A world names a branch context. The aggregation rule splits world `w`
//! into the children `10w + 1` and `10w + 2`. The encoding is injective as
//! long as it does not overflow, which bounds the nesting depth of
//! aggregation splits to the number of decimal digits an `i64` can hold
//! (18 nested splits below the conventional root `1`). Overflow is reported
//! as [`LquantError::WorldOverflow`] and never wraps.

use crate::error::LquantError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldId(pub i64);

impl WorldId {
    /// Conventional root world
    pub const ROOT: WorldId = WorldId(1);

    /// The two child worlds `(10w + 1, 10w + 2)` of this world
    pub fn split(self) -> Result<(WorldId, WorldId), LquantError> {
        let child = |offset: i64| {
            self.0
                .checked_mul(10)
                .and_then(|base| base.checked_add(offset))
                .map(WorldId)
                .ok_or(LquantError::WorldOverflow(self))
        };
        Ok((child(1)?, child(2)?))
    }
}

impl Default for WorldId {
    fn default() -> Self {
        WorldId::ROOT
    }
}

impl From<i64> for WorldId {
    fn from(id: i64) -> Self {
        WorldId(id)
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_root() {
        assert_eq!(WorldId::ROOT.split().unwrap(), (WorldId(11), WorldId(12)));
        assert_eq!(WorldId(12).split().unwrap(), (WorldId(121), WorldId(122)));
    }

    #[test]
    fn test_split_is_injective_across_levels() {
        let mut seen = std::collections::HashSet::new();
        let mut level = vec![WorldId::ROOT];
        seen.insert(WorldId::ROOT);
        for _ in 0..4 {
            let mut next = Vec::new();
            for w in level {
                let (a, b) = w.split().unwrap();
                assert!(seen.insert(a));
                assert!(seen.insert(b));
                next.push(a);
                next.push(b);
            }
            level = next;
        }
    }

    #[test]
    fn test_split_overflow_is_reported() {
        let deep = WorldId(i64::MAX / 10 + 1);
        assert_eq!(deep.split(), Err(LquantError::WorldOverflow(deep)));
    }
}
