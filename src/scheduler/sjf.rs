//! Preemptive shortest-job-first (shortest remaining time).
//!
//! # Algorithm
//!
//! Every tick:
//! 1. Admit arrived processes to the ready list (insertion order kept).
//! 2. Pick the ready process with the least remaining burst; ties go to
//!    the earliest inserted.
//! 3. Run it for one tick, or idle if nothing is ready.
//!
//! Nothing guards against starvation: a long job waits as long as shorter
//! ones keep arriving.

use tracing::{debug, info};

use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessStatus};

use super::admission::admit;
use super::state::SimulationState;
use super::{SchedulingAlgorithm, SimulationRun};

/// Preemptive SJF engine.
#[derive(Debug, Clone)]
pub struct PreemptiveSjf {
    rules: RuleEngine,
}

impl PreemptiveSjf {
    /// Creates the engine.
    pub fn new() -> Self {
        Self {
            rules: RuleEngine::new().with_rule(rules::ShortestRemaining),
        }
    }
}

impl Default for PreemptiveSjf {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for PreemptiveSjf {
    fn name(&self) -> &'static str {
        "Preemptive SJF Scheduling"
    }

    fn slug(&self) -> &'static str {
        "preemptive_sjf"
    }

    fn run(&self, workload: &[Process]) -> SimulationRun {
        let mut processes: Vec<Process> = workload.iter().map(Process::reset).collect();
        let mut state = SimulationState::new(processes.len());
        let mut ready: Vec<usize> = Vec::new();

        info!(algorithm = self.name(), processes = processes.len(), "starting run");

        while !state.is_finished() {
            ready.extend(admit(&mut processes, &mut state));

            let Some(idx) = self.rules.select_best(&processes, &ready) else {
                state.idle_tick();
                continue;
            };

            let finished = state.dispatch(&mut processes[idx], 1);
            if finished {
                debug!(id = processes[idx].id, time = state.now, "completed");
                ready.retain(|&i| i != idx);
            } else {
                processes[idx].status = ProcessStatus::Ready;
            }
        }

        SimulationRun::finish(self.name(), processes, state)
    }
}
