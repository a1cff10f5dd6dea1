//! Arithmetic terms of Lquant

use serde::{Deserialize, Serialize};
use std::fmt;

/// An arithmetic term over bounded integers.
///
/// Terms are immutable trees compared structurally: two terms are equal iff
/// their tags and sub-terms match recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Var(String),
    Const(i64),
    /// `c * t` for an integer scalar `c`
    ScalarMul(i64, Box<Term>),
    Add(Box<Term>, Box<Term>),
    Sub(Box<Term>, Box<Term>),
    /// Rectified linear unit, `max(0, t)`
    Relu(Box<Term>),
    /// Aggregation over two independent instances of the term
    Agg(Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn constant(value: i64) -> Self {
        Term::Const(value)
    }

    pub fn scalar(factor: i64, term: Term) -> Self {
        Term::ScalarMul(factor, Box::new(term))
    }

    pub fn add(lhs: Term, rhs: Term) -> Self {
        Term::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Term, rhs: Term) -> Self {
        Term::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn relu(term: Term) -> Self {
        Term::Relu(Box::new(term))
    }

    pub fn agg(term: Term) -> Self {
        Term::Agg(Box::new(term))
    }

    /// Number of nodes in the term tree
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) | Term::Const(_) => 1,
            Term::ScalarMul(_, t) | Term::Relu(t) | Term::Agg(t) => 1 + t.size(),
            Term::Add(l, r) | Term::Sub(l, r) => 1 + l.size() + r.size(),
        }
    }

}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{}", name),
            Term::Const(value) => write!(f, "{}", value),
            Term::ScalarMul(c, t) => write!(f, "{}*{}", c, t),
            Term::Add(l, r) => write!(f, "({} + {})", l, r),
            Term::Sub(l, r) => write!(f, "({} - {})", l, r),
            Term::Relu(t) => write!(f, "relu({})", t),
            Term::Agg(t) => write!(f, "agg({})", t),
        }
    }
}
