//! Core state types for the tableau search.
//!
//! This module consolidates the rule traits, the rewrite outcome rules hand
//! back to the controller, the two-tier rule strategy, and the search result.

use crate::branching::{
    AdditionSplitRule, AggregationSplitRule, GeqGroundingRule, ReluGroundingRule,
    SubtractionSplitRule,
};
use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::json::SearchResultJson;
use crate::logic::Tableau;
use crate::simplifying::{
    ConjunctionRule, ConstantClashRule, EqualityClashRule, NegationRule, RangeClashRule,
    ReluPositiveRule, ScalarCancellationRule,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// RewriteOutcome
// =============================================================================

/// Result of offering a tableau to a rule.
///
/// Rules never touch the frontier. When `consumed` is true the controller
/// replaces the inspected tableau with `new_tableaux`; inconsistent tableaux
/// among them are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Whether the rule matched and rewrote the tableau
    pub consumed: bool,
    /// Tableaux replacing the inspected one (possibly none)
    pub new_tableaux: Vec<Tableau>,
}

impl RewriteOutcome {
    /// The rule does not apply
    pub fn no_match() -> Self {
        RewriteOutcome::default()
    }

    /// The rule rewrote the tableau into a single successor
    pub fn rewritten(tableau: Tableau) -> Self {
        RewriteOutcome {
            consumed: true,
            new_tableaux: vec![tableau],
        }
    }

    /// The rule split the tableau into zero or more branches
    pub fn branches(tableaux: Vec<Tableau>) -> Self {
        RewriteOutcome {
            consumed: true,
            new_tableaux: tableaux,
        }
    }
}

// =============================================================================
// Rule traits
// =============================================================================

/// Trait for deterministic rules (decomposition, cancellation, clash detection).
///
/// A deterministic rule performs at most one rewrite and yields exactly one
/// successor tableau, which may be marked inconsistent.
pub trait SimplifyingRule: Send + Sync {
    /// Get the name of this rule
    fn name(&self) -> &str;

    /// Rewrite one matching formula of a live tableau
    fn simplify(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError>;
}

/// Trait for non-deterministic rules (arithmetic splits, grounding).
///
/// A branching rule removes one formula and yields one successor per
/// admissible concrete assignment inside the bounded universe.
pub trait BranchingRule: Send + Sync {
    /// Get the name of this rule
    fn name(&self) -> &str;

    /// Split one matching formula of a live tableau into branches
    fn branch(&self, tableau: &Tableau, config: &SearchConfig) -> Result<RewriteOutcome, LquantError>;
}

// =============================================================================
// RuleStrategy
// =============================================================================

/// Priority tier of a rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleTier {
    /// Size-reducing rewrites; drained completely before any branching step
    Deterministic,
    /// Frontier-growing splits; one application at a time
    Branching,
}

impl fmt::Display for RuleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleTier::Deterministic => write!(f, "deterministic"),
            RuleTier::Branching => write!(f, "branching"),
        }
    }
}

/// Two-tier strategy table.
///
/// Tiers are consulted in the order of [`RuleStrategy::TIERS`]; within a
/// tier, rules are tried in the order they were registered.
pub struct RuleStrategy {
    simplifying: Vec<Box<dyn SimplifyingRule>>,
    branching: Vec<Box<dyn BranchingRule>>,
}

impl RuleStrategy {
    /// Tier priority: every deterministic rewrite before any branching step
    pub const TIERS: [RuleTier; 2] = [RuleTier::Deterministic, RuleTier::Branching];

    pub fn new(simplifying: Vec<Box<dyn SimplifyingRule>>, branching: Vec<Box<dyn BranchingRule>>) -> Self {
        RuleStrategy { simplifying, branching }
    }

    /// The rule lists of the Lquant tableau calculus.
    ///
    /// Clash detection runs first so that dead tableaux leave the frontier
    /// before any decomposition work is spent on them.
    pub fn standard() -> Self {
        let simplifying: Vec<Box<dyn SimplifyingRule>> = vec![
            Box::new(EqualityClashRule),
            Box::new(ConstantClashRule),
            Box::new(RangeClashRule),
            Box::new(ConjunctionRule),
            Box::new(NegationRule),
            Box::new(ScalarCancellationRule),
            Box::new(ReluPositiveRule),
        ];
        let branching: Vec<Box<dyn BranchingRule>> = vec![
            Box::new(GeqGroundingRule),
            Box::new(SubtractionSplitRule),
            Box::new(AdditionSplitRule),
            Box::new(ReluGroundingRule),
            Box::new(AggregationSplitRule),
        ];
        RuleStrategy::new(simplifying, branching)
    }

    pub fn simplifying(&self) -> &[Box<dyn SimplifyingRule>] {
        &self.simplifying
    }

    pub fn branching(&self) -> &[Box<dyn BranchingRule>] {
        &self.branching
    }

    /// Rule names of one tier, in priority order
    pub fn rule_names(&self, tier: RuleTier) -> Vec<&str> {
        match tier {
            RuleTier::Deterministic => self.simplifying.iter().map(|r| r.name()).collect(),
            RuleTier::Branching => self.branching.iter().map(|r| r.name()).collect(),
        }
    }
}

impl Default for RuleStrategy {
    fn default() -> Self {
        RuleStrategy::standard()
    }
}

impl fmt::Debug for RuleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleStrategy")
            .field("simplifying", &self.rule_names(RuleTier::Deterministic))
            .field("branching", &self.rule_names(RuleTier::Branching))
            .finish()
    }
}

// =============================================================================
// SearchResult
// =============================================================================

/// Result of the tableau search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// Every branch closed: the root formula has no model in the bounded universe
    Unsatisfiable,
    /// Open branches remain at the fixed point; the first one is the witness
    Satisfiable(Vec<Tableau>),
    /// Step limit reached before the fixed point
    ResourceLimit(Vec<Tableau>),
}

impl SearchResult {
    /// Verdict for a frontier that reached its fixed point
    pub fn from_frontier(frontier: Vec<Tableau>) -> Self {
        if frontier.is_empty() {
            SearchResult::Unsatisfiable
        } else {
            SearchResult::Satisfiable(frontier)
        }
    }

    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, SearchResult::Unsatisfiable)
    }

    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SearchResult::Satisfiable(_))
    }

    /// First open tableau at the fixed point, if the formula is satisfiable
    pub fn witness(&self) -> Option<&Tableau> {
        match self {
            SearchResult::Satisfiable(frontier) => frontier.first(),
            _ => None,
        }
    }

    /// Tableaux still open when the search stopped
    pub fn frontier(&self) -> &[Tableau] {
        match self {
            SearchResult::Unsatisfiable => &[],
            SearchResult::Satisfiable(frontier) | SearchResult::ResourceLimit(frontier) => frontier,
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self, steps: usize) -> SearchResultJson {
        SearchResultJson::from_result(self, steps)
    }
}
