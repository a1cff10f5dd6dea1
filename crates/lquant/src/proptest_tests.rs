//! Property-based tests for the rules and the search controller using proptest.

use proptest::prelude::*;
use crate::branching::{admissible_pairs, AdditionSplitRule, GeqGroundingRule};
use crate::config::SearchConfig;
use crate::logic::{LabeledFormula, Proposition, Tableau, Term, WorldId};
use crate::prover::refute;
use crate::simplifying::ScalarCancellationRule;
use crate::state::{BranchingRule, SearchResult, SimplifyingRule};
use std::collections::HashMap;

fn arb_leaf() -> BoxedStrategy<Term> {
    prop_oneof![
        3 => prop_oneof![Just("x"), Just("y"), Just("z")].prop_map(|name| Term::var(name)),
        1 => (-2i64..=2).prop_map(Term::constant),
    ]
    .boxed()
}

/// Terms with at most one operator above the leaves
fn arb_term() -> BoxedStrategy<Term> {
    prop_oneof![
        2 => arb_leaf(),
        1 => (prop_oneof![(-2i64..=-1), (1i64..=2)], arb_leaf()).prop_map(|(c, t)| Term::scalar(c, t)),
        1 => (arb_leaf(), arb_leaf()).prop_map(|(l, r)| Term::add(l, r)),
        1 => (arb_leaf(), arb_leaf()).prop_map(|(l, r)| Term::sub(l, r)),
        1 => arb_leaf().prop_map(Term::relu),
        1 => arb_leaf().prop_map(Term::agg),
    ]
    .boxed()
}

fn arb_literal() -> BoxedStrategy<Proposition> {
    prop_oneof![
        2 => (arb_term(), -2i64..=2).prop_map(|(t, v)| Proposition::eq(t, v)),
        1 => (arb_term(), -2i64..=2).prop_map(|(t, v)| Proposition::geq(t, v)),
        1 => (arb_term(), -2i64..=2).prop_map(|(t, v)| Proposition::not(Proposition::geq(t, v))),
    ]
    .boxed()
}

/// Conjunctions of one or two literals
fn arb_formula() -> impl Strategy<Value = Proposition> {
    proptest::collection::vec(arb_literal(), 1..=2)
        .prop_filter_map("non-empty conjunction", |props| Proposition::conjunction(props))
}

/// Every (world, term) pair is bound to at most one value
fn clash_free(tableau: &Tableau) -> bool {
    let mut seen: HashMap<(WorldId, &Term), i64> = HashMap::new();
    tableau
        .bindings()
        .all(|(world, term, value)| *seen.entry((world, term)).or_insert(value) == value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The addition split yields one branch per admissible pair
    #[test]
    fn prop_addition_branch_count(max in 0i64..=3, offset in 0i64..=6) {
        let v = (offset - 3).clamp(-max, max);
        let config = SearchConfig::new(max);
        let tableau = Tableau::from_root(LabeledFormula::new(
            WorldId::ROOT,
            Proposition::eq(Term::add(Term::var("a"), Term::var("b")), v),
        ));
        let outcome = AdditionSplitRule.branch(&tableau, &config).unwrap();

        let expected = config
            .universe()
            .flat_map(|a| config.universe().map(move |b| (a, b)))
            .filter(|(a, b)| config.clamp(a + b) == v)
            .count();
        prop_assert_eq!(outcome.new_tableaux.len(), expected);
        prop_assert_eq!(admissible_pairs(&config, v, i64::saturating_add).len(), expected);
    }

    /// Scalar cancellation keeps exact quotients and closes everything else
    #[test]
    fn prop_scalar_cancellation(c in prop_oneof![(-5i64..=-1), (1i64..=5)], v in -4i64..=4) {
        let config = SearchConfig::new(4);
        let tableau = Tableau::from_root(LabeledFormula::new(
            WorldId::ROOT,
            Proposition::eq(Term::scalar(c, Term::var("x")), v),
        ));
        let outcome = ScalarCancellationRule.simplify(&tableau, &config).unwrap();
        prop_assert_eq!(outcome.new_tableaux.len(), 1);

        let next = &outcome.new_tableaux[0];
        if v % c == 0 {
            prop_assert!(!next.is_inconsistent());
            prop_assert_eq!(next.value_of(WorldId::ROOT, &Term::var("x")), Some(v / c));
        } else {
            prop_assert!(next.is_inconsistent());
        }
    }

    /// Grounding an inequality enumerates exactly `[v, MAX - 1]` within the universe
    #[test]
    fn prop_geq_grounding_range(max in 0i64..=4, v in -6i64..=6) {
        let config = SearchConfig::new(max);
        let tableau = Tableau::from_root(LabeledFormula::new(
            WorldId::ROOT,
            Proposition::geq(Term::var("x"), v),
        ));
        let outcome = GeqGroundingRule.branch(&tableau, &config).unwrap();
        let values: Vec<i64> = outcome
            .new_tableaux
            .iter()
            .filter_map(|t| t.value_of(WorldId::ROOT, &Term::var("x")))
            .collect();
        let expected: Vec<i64> = (v.max(-max)..max).collect();
        prop_assert_eq!(values, expected);
    }

    /// The search terminates, and every open tableau at the fixed point holds
    /// only concrete, mutually consistent facts
    #[test]
    fn prop_search_reaches_clash_free_fixed_point(prop in arb_formula(), max in 1i64..=2) {
        let root = LabeledFormula::new(WorldId::ROOT, prop);
        let config = SearchConfig::new(max).with_max_steps(20_000);
        let result = refute(root, config.clone()).unwrap();
        prop_assert!(
            !matches!(result, SearchResult::ResourceLimit(_)),
            "no fixed point within the step limit"
        );
        if let SearchResult::Satisfiable(frontier) = &result {
            for tableau in frontier {
                prop_assert!(!tableau.is_inconsistent());
                prop_assert!(tableau.unresolved().is_none());
                prop_assert!(clash_free(tableau), "clash in {}", tableau);
                prop_assert!(tableau.bindings().all(|(_, _, value)| config.in_range(value)));
            }
        }
    }
}
