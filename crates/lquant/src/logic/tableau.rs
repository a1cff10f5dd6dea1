//! Tableaux: sets of labeled formulas with an inconsistency marker

use super::proposition::{LabeledFormula, Proposition};
use super::term::Term;
use super::world::WorldId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of labeled formulas believed jointly satisfiable.
///
/// Duplicates collapse and equality ignores order. Iteration follows
/// insertion order so that the search is deterministic. A tableau marked
/// inconsistent is dead: the controller drops it and no rule inspects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    formulas: IndexSet<LabeledFormula>,
    inconsistent: bool,
}

impl Tableau {
    /// Create an empty, consistent tableau
    pub fn new() -> Self {
        Tableau::default()
    }

    /// Create the initial tableau holding a single root formula
    pub fn from_root(root: LabeledFormula) -> Self {
        let mut tableau = Tableau::new();
        tableau.insert(root);
        tableau
    }

    /// Insert a formula, returning false if it was already present
    pub fn insert(&mut self, formula: LabeledFormula) -> bool {
        self.formulas.insert(formula)
    }

    /// Remove a formula, returning false if it was not present
    pub fn remove(&mut self, formula: &LabeledFormula) -> bool {
        self.formulas.shift_remove(formula)
    }

    pub fn contains(&self, formula: &LabeledFormula) -> bool {
        self.formulas.contains(formula)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledFormula> + '_ {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Add the `Inconsistent` sentinel
    pub fn mark_inconsistent(&mut self) {
        self.inconsistent = true;
    }

    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// Copy of this tableau with one formula removed (the remainder a rule builds on)
    pub fn without(&self, formula: &LabeledFormula) -> Tableau {
        let mut remainder = self.clone();
        remainder.remove(formula);
        remainder
    }

    /// Copy of this tableau extended with the given formulas
    pub fn extended(&self, formulas: impl IntoIterator<Item = LabeledFormula>) -> Tableau {
        let mut next = self.clone();
        next.formulas.extend(formulas);
        next
    }

    /// Copy of this tableau with the `Inconsistent` sentinel added
    pub fn closed(&self) -> Tableau {
        let mut next = self.clone();
        next.mark_inconsistent();
        next
    }

    /// First formula (in insertion order) satisfying the predicate
    pub fn find(&self, mut pred: impl FnMut(&LabeledFormula) -> bool) -> Option<&LabeledFormula> {
        self.formulas.iter().find(|f| pred(*f))
    }

    /// First formula that is not a concrete fact, if any
    pub fn unresolved(&self) -> Option<&LabeledFormula> {
        self.find(|f| !f.prop.is_resolved())
    }

    /// All equalities `(world, term, value)` recorded in this tableau
    pub fn bindings(&self) -> impl Iterator<Item = (WorldId, &Term, i64)> + '_ {
        self.formulas.iter().filter_map(|f| match &f.prop {
            Proposition::Eq(term, value) => Some((f.world, term, *value)),
            _ => None,
        })
    }

    /// Value bound to `term` in `world`, if any
    pub fn value_of(&self, world: WorldId, term: &Term) -> Option<i64> {
        self.bindings()
            .find(|(w, t, _)| *w == world && *t == term)
            .map(|(_, _, v)| v)
    }

    /// Total syntactic size of all formulas
    pub fn size(&self) -> usize {
        self.formulas.iter().map(|f| f.prop.size()).sum()
    }
}

impl FromIterator<LabeledFormula> for Tableau {
    fn from_iter<I: IntoIterator<Item = LabeledFormula>>(iter: I) -> Self {
        Tableau {
            formulas: iter.into_iter().collect(),
            inconsistent: false,
        }
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, formula) in self.formulas.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", formula)?;
        }
        if self.inconsistent {
            if !self.formulas.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "⊥")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(world: i64, name: &str, value: i64) -> LabeledFormula {
        LabeledFormula::new(WorldId(world), Proposition::eq(Term::var(name), value))
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut t = Tableau::new();
        assert!(t.insert(eq(1, "x", 2)));
        assert!(!t.insert(eq(1, "x", 2)));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Tableau = vec![eq(1, "x", 2), eq(1, "y", 3)].into_iter().collect();
        let b: Tableau = vec![eq(1, "y", 3), eq(1, "x", 2)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, b.closed());
    }

    #[test]
    fn test_without_and_extended() {
        let base: Tableau = vec![eq(1, "x", 2), eq(1, "y", 3)].into_iter().collect();
        let rest = base.without(&eq(1, "x", 2));
        assert_eq!(rest.len(), 1);
        assert_eq!(base.len(), 2);
        let next = rest.extended(vec![eq(11, "x", 0)]);
        assert!(next.contains(&eq(11, "x", 0)));
        assert!(!next.contains(&eq(1, "x", 2)));
    }

    #[test]
    fn test_value_of() {
        let t: Tableau = vec![eq(1, "x", 2), eq(11, "x", -1)].into_iter().collect();
        assert_eq!(t.value_of(WorldId(1), &Term::var("x")), Some(2));
        assert_eq!(t.value_of(WorldId(11), &Term::var("x")), Some(-1));
        assert_eq!(t.value_of(WorldId(12), &Term::var("x")), None);
    }

    #[test]
    fn test_display() {
        let t: Tableau = vec![eq(1, "x", 2)].into_iter().collect();
        assert_eq!(t.to_string(), "{w1: x = 2}");
        assert_eq!(t.closed().to_string(), "{w1: x = 2, ⊥}");
    }
}
