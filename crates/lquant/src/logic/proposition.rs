//! Propositions and world-labeled formulas

use super::term::Term;
use super::world::WorldId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposition of Lquant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proposition {
    /// `t = v`
    Eq(Term, i64),
    /// `t >= v`
    Geq(Term, i64),
    And(Box<Proposition>, Box<Proposition>),
    Not(Box<Proposition>),
    /// A bare term used as a boolean proposition
    Atom(Term),
}

impl Proposition {
    pub fn eq(term: Term, value: i64) -> Self {
        Proposition::Eq(term, value)
    }

    pub fn geq(term: Term, value: i64) -> Self {
        Proposition::Geq(term, value)
    }

    pub fn and(lhs: Proposition, rhs: Proposition) -> Self {
        Proposition::And(Box::new(lhs), Box::new(rhs))
    }

    /// Conjunction of all given propositions, nested to the right.
    ///
    /// Returns `None` for an empty iterator.
    pub fn conjunction(props: impl IntoIterator<Item = Proposition>) -> Option<Self> {
        let mut props: Vec<Proposition> = props.into_iter().collect();
        let mut acc = props.pop()?;
        while let Some(prop) = props.pop() {
            acc = Proposition::and(prop, acc);
        }
        Some(acc)
    }

    pub fn not(prop: Proposition) -> Self {
        Proposition::Not(Box::new(prop))
    }

    pub fn atom(term: Term) -> Self {
        Proposition::Atom(term)
    }

    /// Syntactic size; every rule strictly decreases the size of the formula it rewrites
    pub fn size(&self) -> usize {
        match self {
            Proposition::Eq(t, _) | Proposition::Geq(t, _) | Proposition::Atom(t) => 1 + t.size(),
            Proposition::And(p, q) => 1 + p.size() + q.size(),
            Proposition::Not(p) => 1 + p.size(),
        }
    }

    /// Check if this proposition is a concrete fact no rule needs to rewrite:
    /// a variable binding `x = v` or a satisfied constant equation `c = c`.
    pub fn is_resolved(&self) -> bool {
        match self {
            Proposition::Eq(Term::Var(_), _) => true,
            Proposition::Eq(Term::Const(c), v) => c == v,
            _ => false,
        }
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proposition::Eq(t, v) => write!(f, "{} = {}", t, v),
            Proposition::Geq(t, v) => write!(f, "{} >= {}", t, v),
            Proposition::And(p, q) => write!(f, "({} & {})", p, q),
            Proposition::Not(p) => write!(f, "~({})", p),
            Proposition::Atom(t) => write!(f, "{}", t),
        }
    }
}

/// A proposition labeled with the world it holds in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledFormula {
    pub world: WorldId,
    pub prop: Proposition,
}

impl LabeledFormula {
    pub fn new(world: WorldId, prop: Proposition) -> Self {
        LabeledFormula { world, prop }
    }
}

impl fmt::Display for LabeledFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.world, self.prop)
    }
}
