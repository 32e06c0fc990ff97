//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Remaining Time.
///
/// Prioritizes processes with the least CPU time still needed. Applied
/// every tick, this is preemptive shortest-job-first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_burst_time
    }
}

/// Process priority.
///
/// Uses the current priority value directly, so aging boosts are
/// reflected immediately. Priority 1 scores best.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }
}
