//! Structured profiling for the tableau search
//!
//! Collects timing and counting data during the search when enabled via
//! `SearchConfig::enable_profiling`. All instrumentation is gated on
//! `Option::None` when disabled.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::time::Duration;

fn secs(d: &Duration) -> f64 {
    d.as_secs_f64()
}

/// Statistics for a single rule.
#[derive(Debug, Clone, Default)]
pub struct RuleStats {
    /// Number of times the rule matched and rewrote a tableau
    pub applications: usize,
    /// Live tableaux the rule handed back to the frontier
    pub branches: usize,
    /// Tableaux the rule closed or left without any live successor
    pub closed: usize,
    pub time: Duration,
}

impl Serialize for RuleStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RuleStats", 4)?;
        s.serialize_field("applications", &self.applications)?;
        s.serialize_field("branches", &self.branches)?;
        s.serialize_field("closed", &self.closed)?;
        s.serialize_field("time", &secs(&self.time))?;
        s.end()
    }
}

/// Profiling data collected during the search.
///
/// All `Duration` fields are serialized as `f64` seconds.
#[derive(Debug, Clone, Default)]
pub struct SearchProfile {
    // Top-level phase timings
    pub total_time: Duration,
    pub deterministic_time: Duration,
    pub branching_time: Duration,

    // Aggregate counters
    pub steps: usize,
    pub deterministic_steps: usize,
    pub branching_steps: usize,
    pub tableaux_closed: usize,
    pub branches_created: usize,
    pub max_frontier_size: usize,

    // Dynamic rule stats
    pub deterministic_rules: HashMap<String, RuleStats>,
    pub branching_rules: HashMap<String, RuleStats>,
}

impl SearchProfile {
    /// Record one application of a deterministic rule.
    ///
    /// `live` is the number of successors that stayed on the frontier (0 or 1).
    pub fn record_deterministic(&mut self, name: &str, live: usize, time: Duration) {
        let stats = self.deterministic_rules.entry(name.to_string()).or_default();
        stats.applications += 1;
        stats.branches += live;
        stats.time += time;
        if live == 0 {
            stats.closed += 1;
            self.tableaux_closed += 1;
        }
        self.steps += 1;
        self.deterministic_steps += 1;
        self.deterministic_time += time;
    }

    /// Record one application of a branching rule producing `live` branches.
    pub fn record_branching(&mut self, name: &str, live: usize, time: Duration) {
        let stats = self.branching_rules.entry(name.to_string()).or_default();
        stats.applications += 1;
        stats.branches += live;
        stats.time += time;
        if live == 0 {
            stats.closed += 1;
            self.tableaux_closed += 1;
        }
        self.steps += 1;
        self.branching_steps += 1;
        self.branches_created += live;
        self.branching_time += time;
    }

    /// Track the peak frontier size.
    pub fn observe_frontier(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }
}

impl Serialize for SearchProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SearchProfile", 11)?;

        // Top-level phase timings
        s.serialize_field("total_time", &secs(&self.total_time))?;
        s.serialize_field("deterministic_time", &secs(&self.deterministic_time))?;
        s.serialize_field("branching_time", &secs(&self.branching_time))?;

        // Aggregate counters
        s.serialize_field("steps", &self.steps)?;
        s.serialize_field("deterministic_steps", &self.deterministic_steps)?;
        s.serialize_field("branching_steps", &self.branching_steps)?;
        s.serialize_field("tableaux_closed", &self.tableaux_closed)?;
        s.serialize_field("branches_created", &self.branches_created)?;
        s.serialize_field("max_frontier_size", &self.max_frontier_size)?;

        // Dynamic rule stats
        s.serialize_field("deterministic_rules", &self.deterministic_rules)?;
        s.serialize_field("branching_rules", &self.branching_rules)?;

        s.end()
    }
}
