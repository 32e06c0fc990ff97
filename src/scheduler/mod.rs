//! Time-stepped CPU scheduling engines and run metrics.
//!
//! Each engine is a pure function of the initial workload: it copies the
//! processes, advances a private logical clock until every process has
//! completed, and returns a [`SimulationRun`]. Engines share no state, so
//! the same workload can be fed to all of them for comparison.
//!
//! # Engines
//!
//! | Engine | Ready structure | Preemption |
//! |--------|-----------------|------------|
//! | [`PreemptiveSjf`] | single list, shortest remaining first | every tick |
//! | [`RoundRobinPriority`] | one FIFO per priority level | quantum end |
//! | [`MultilevelFeedbackQueue`] | Q0 (5), Q1 (10), Q2 (FCFS) | quantum end |
//! | [`PrioritySjfAging`] | single list, (priority, remaining) with aging | every tick |

mod admission;
mod aging;
mod kpi;
mod mlfq;
mod rr_priority;
mod sjf;
mod state;

pub use aging::PrioritySjfAging;
pub use kpi::{ProcessMetrics, RunKpi};
pub use mlfq::MultilevelFeedbackQueue;
pub use rr_priority::RoundRobinPriority;
pub use sjf::PreemptiveSjf;
pub use state::{SimEvent, SimulationState};

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::models::{Process, ProcessId, Timeline};

/// A scheduling policy that can simulate a workload.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// File-name friendly identifier (used for timeline exports).
    fn slug(&self) -> &'static str;

    /// Simulates `workload` until every process completes.
    ///
    /// The input is never mutated; the engine works on its own copy.
    fn run(&self, workload: &[Process]) -> SimulationRun;
}

/// Result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Algorithm name.
    pub algorithm: String,
    /// Final process states, sorted by id.
    pub processes: Vec<Process>,
    /// Tick-by-tick CPU occupancy.
    pub timeline: Timeline,
    /// Context switches.
    pub context_switches: u32,
    /// Event trace in simulation order.
    pub events: Vec<SimEvent>,
}

impl SimulationRun {
    pub(crate) fn finish(
        algorithm: &str,
        mut processes: Vec<Process>,
        state: SimulationState,
    ) -> Self {
        processes.sort_by_key(|p| p.id);
        info!(
            algorithm,
            end = state.now,
            context_switches = state.context_switches,
            "run finished"
        );
        Self {
            algorithm: algorithm.to_string(),
            processes,
            timeline: state.timeline,
            context_switches: state.context_switches,
            events: state.events,
        }
    }

    /// Final state of a process.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Computes the run's KPIs.
    pub fn kpi(&self) -> RunKpi {
        RunKpi::calculate(self)
    }
}

/// The four standard engines, in reporting order, configured from `config`.
///
/// # Panics
/// If `config` fails [`SimulationConfig::validate`].
pub fn standard_algorithms(config: &SimulationConfig) -> Vec<Box<dyn SchedulingAlgorithm>> {
    vec![
        Box::new(PreemptiveSjf::new()),
        Box::new(
            RoundRobinPriority::new()
                .with_quantum(config.rr_quantum)
                .with_levels(config.max_priority().max(1) as usize),
        ),
        Box::new(MultilevelFeedbackQueue::new().with_quanta(config.mlfq_quanta.clone())),
        Box::new(
            PrioritySjfAging::new()
                .with_threshold(config.aging_threshold)
                .with_boost(config.aging_boost),
        ),
    ]
}

/// Runs every algorithm on its own copy of the same workload.
pub fn run_all(
    algorithms: &[Box<dyn SchedulingAlgorithm>],
    workload: &[Process],
) -> Vec<SimulationRun> {
    algorithms.iter().map(|a| a.run(workload)).collect()
}
