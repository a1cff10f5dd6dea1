//! Tableau search controller.
//!
//! The `Tableaux` struct owns the frontier of live tableaux and applies the
//! rules of a `RuleStrategy` to it until no rule matches any more. Rules only
//! inspect a tableau; every frontier mutation happens here.
//!
//! Use `prove()` or `run()` to search to the fixed point, or `step()` for
//! incremental execution.

use crate::config::SearchConfig;
use crate::error::LquantError;
use crate::logic::{LabeledFormula, Tableau};
use crate::profile::SearchProfile;
use crate::state::{RuleStrategy, RuleTier, SearchResult};
use std::time::Instant;
use tracing::{debug, info, trace};

/// A rule application found on the frontier, not yet applied
struct Rewrite {
    index: usize,
    rule: String,
    tableaux: Vec<Tableau>,
}

/// Search controller: the frontier of live tableaux plus the rules to apply.
pub struct Tableaux {
    /// Search configuration (universe bound, step limit, profiling)
    pub config: SearchConfig,
    /// Two-tier rule strategy
    strategy: RuleStrategy,
    /// Live tableaux, in scan order
    frontier: Vec<Tableau>,
    /// Number of rule applications so far
    steps: usize,
    /// Profiling data (None if profiling disabled)
    profile: Option<SearchProfile>,
}

impl Tableaux {
    /// Create a controller whose frontier holds the single tableau `{root}`.
    pub fn new(
        root: LabeledFormula,
        config: SearchConfig,
        strategy: RuleStrategy,
    ) -> Result<Self, LquantError> {
        Tableaux::with_frontier(vec![Tableau::from_root(root)], config, strategy)
    }

    /// Create a controller over an arbitrary initial frontier.
    ///
    /// Inconsistent tableaux are dropped right away.
    pub fn with_frontier(
        frontier: Vec<Tableau>,
        config: SearchConfig,
        strategy: RuleStrategy,
    ) -> Result<Self, LquantError> {
        config.validate()?;

        let frontier: Vec<Tableau> = frontier.into_iter().filter(|t| !t.is_inconsistent()).collect();
        let profile = if config.enable_profiling {
            let mut profile = SearchProfile::default();
            profile.observe_frontier(frontier.len());
            Some(profile)
        } else {
            None
        };

        Ok(Tableaux {
            config,
            strategy,
            frontier,
            steps: 0,
            profile,
        })
    }

    pub fn frontier(&self) -> &[Tableau] {
        &self.frontier
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn strategy(&self) -> &RuleStrategy {
        &self.strategy
    }

    pub fn profile(&self) -> Option<&SearchProfile> {
        self.profile.as_ref()
    }

    /// Run the search to its fixed point, consuming the controller.
    ///
    /// Returns the search result and optional profiling data.
    pub fn prove(mut self) -> Result<(SearchResult, Option<SearchProfile>), LquantError> {
        let start_time = Instant::now();
        let result = self.run()?;

        if let Some(p) = self.profile.as_mut() {
            p.total_time = start_time.elapsed();
        }
        Ok((result, self.profile))
    }

    /// Apply rules until neither tier makes progress, then report the verdict.
    ///
    /// Every remaining formula must be a concrete fact at that point; anything
    /// else means the input used a construct no rule resolves.
    pub fn run(&mut self) -> Result<SearchResult, LquantError> {
        while self.step()? {
            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                info!(
                    steps = self.steps,
                    open = self.frontier.len(),
                    "step limit reached"
                );
                return Ok(SearchResult::ResourceLimit(self.frontier.clone()));
            }
        }

        for tableau in &self.frontier {
            if let Some(formula) = tableau.unresolved() {
                return Err(LquantError::UnrecognizedConstruct(formula.clone()));
            }
        }

        let result = SearchResult::from_frontier(self.frontier.clone());
        if result.is_unsatisfiable() {
            info!(steps = self.steps, "all tableaux closed: unsatisfiable");
        } else {
            info!(
                steps = self.steps,
                open = self.frontier.len(),
                "open tableaux remain: satisfiable"
            );
        }
        Ok(result)
    }

    /// Perform one prioritized rewrite, consulting the tiers in the order of
    /// [`RuleStrategy::TIERS`].
    ///
    /// Returns `false` once no rule of any tier matches any live tableau.
    pub fn step(&mut self) -> Result<bool, LquantError> {
        for tier in RuleStrategy::TIERS {
            if self.apply_tier(tier)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Apply at most one rewrite from the given tier
    pub fn apply_tier(&mut self, tier: RuleTier) -> Result<bool, LquantError> {
        match tier {
            RuleTier::Deterministic => self.apply_deterministic(),
            RuleTier::Branching => self.apply_branching(),
        }
    }

    /// Apply the first matching deterministic rule to the first tableau it
    /// matches, replacing that tableau in place (or dropping it if closed).
    pub fn apply_deterministic(&mut self) -> Result<bool, LquantError> {
        let t0 = self.profile.as_ref().map(|_| Instant::now());
        let Some(rewrite) = self.find_rewrite(RuleTier::Deterministic)? else {
            return Ok(false);
        };

        let live: Vec<Tableau> = rewrite.tableaux.into_iter().filter(|t| !t.is_inconsistent()).collect();
        let count = live.len();
        self.frontier.splice(rewrite.index..=rewrite.index, live);
        self.steps += 1;

        debug!(
            rule = %rewrite.rule,
            tableau = rewrite.index,
            closed = count == 0,
            frontier = self.frontier.len(),
            "deterministic rewrite"
        );
        if let (Some(p), Some(t)) = (self.profile.as_mut(), t0) {
            p.record_deterministic(&rewrite.rule, count, t.elapsed());
            p.observe_frontier(self.frontier.len());
        }
        Ok(true)
    }

    /// Apply the first matching branching rule to the first tableau it
    /// matches, removing that tableau and appending its live branches.
    pub fn apply_branching(&mut self) -> Result<bool, LquantError> {
        let t0 = self.profile.as_ref().map(|_| Instant::now());
        let Some(rewrite) = self.find_rewrite(RuleTier::Branching)? else {
            return Ok(false);
        };

        self.frontier.remove(rewrite.index);
        let mut count = 0;
        for tableau in rewrite.tableaux {
            if tableau.is_inconsistent() {
                continue;
            }
            trace!(branch = %tableau, "derived branch");
            self.frontier.push(tableau);
            count += 1;
        }
        self.steps += 1;

        debug!(
            rule = %rewrite.rule,
            tableau = rewrite.index,
            branches = count,
            frontier = self.frontier.len(),
            "branching rewrite"
        );
        if let (Some(p), Some(t)) = (self.profile.as_mut(), t0) {
            p.record_branching(&rewrite.rule, count, t.elapsed());
            p.observe_frontier(self.frontier.len());
        }
        Ok(true)
    }

    // =========================================================================
    // Private helper methods
    // =========================================================================

    /// Scan the frontier in order, trying the rules of one tier in priority
    /// order on each tableau, and return the first match.
    fn find_rewrite(&self, tier: RuleTier) -> Result<Option<Rewrite>, LquantError> {
        for (index, tableau) in self.frontier.iter().enumerate() {
            if tableau.is_inconsistent() {
                continue;
            }
            match tier {
                RuleTier::Deterministic => {
                    for rule in self.strategy.simplifying() {
                        let outcome = rule.simplify(tableau, &self.config)?;
                        if outcome.consumed {
                            return Ok(Some(Rewrite {
                                index,
                                rule: rule.name().to_string(),
                                tableaux: outcome.new_tableaux,
                            }));
                        }
                    }
                }
                RuleTier::Branching => {
                    for rule in self.strategy.branching() {
                        let outcome = rule.branch(tableau, &self.config)?;
                        if outcome.consumed {
                            return Ok(Some(Rewrite {
                                index,
                                rule: rule.name().to_string(),
                                tableaux: outcome.new_tableaux,
                            }));
                        }
                    }
                }
            }
        }
        Ok(None)
    }
}

/// Search for a model of `root` with the standard strategy
pub fn refute(root: LabeledFormula, config: SearchConfig) -> Result<SearchResult, LquantError> {
    let mut tableaux = Tableaux::new(root, config, RuleStrategy::standard())?;
    tableaux.run()
}
