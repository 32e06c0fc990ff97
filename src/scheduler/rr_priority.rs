//! Round-robin within priority levels.
//!
//! # Algorithm
//!
//! One FIFO queue per priority level (level 0 = priority 1).
//! 1. Admit arrived processes to the queue of their current priority.
//! 2. Pop the front of the highest non-empty level, or idle one tick.
//! 3. Run it for `min(quantum, remaining)` consecutive ticks.
//! 4. If unfinished, push it to the tail of its level.
//!
//! Priority is never preempted mid-slice: a higher-priority arrival
//! waits for the running slice to end.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::models::{Process, ProcessStatus, Tick};

use super::admission::admit;
use super::state::SimulationState;
use super::{SchedulingAlgorithm, SimulationRun};

/// Round-robin-within-priority engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinPriority {
    quantum: Tick,
    levels: usize,
}

impl RoundRobinPriority {
    /// Creates the engine with quantum 5 and 3 priority levels.
    pub fn new() -> Self {
        Self {
            quantum: 5,
            levels: 3,
        }
    }

    /// Sets the time quantum.
    ///
    /// # Panics
    /// If `quantum` is not positive.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        assert!(quantum > 0, "quantum must be positive");
        self.quantum = quantum;
        self
    }

    /// Sets the number of priority levels.
    ///
    /// # Panics
    /// If `levels` is zero.
    pub fn with_levels(mut self, levels: usize) -> Self {
        assert!(levels > 0, "at least one priority level is required");
        self.levels = levels;
        self
    }

    /// Time quantum.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }

    /// Queue index for a priority value, clamped into range.
    fn level_of(&self, process: &Process) -> usize {
        let level = (process.priority.max(1) - 1) as usize;
        if level >= self.levels {
            warn!(
                id = process.id,
                priority = process.priority,
                "priority beyond last level, using lowest queue"
            );
            self.levels - 1
        } else {
            level
        }
    }

    fn enqueue(&self, queues: &mut [VecDeque<usize>], processes: &mut [Process], idx: usize) {
        let level = self.level_of(&processes[idx]);
        processes[idx].status = ProcessStatus::Queued(level);
        queues[level].push_back(idx);
    }
}

impl Default for RoundRobinPriority {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for RoundRobinPriority {
    fn name(&self) -> &'static str {
        "RR + Non-Preemptive Priority Scheduling"
    }

    fn slug(&self) -> &'static str {
        "RR_priority"
    }

    fn run(&self, workload: &[Process]) -> SimulationRun {
        let mut processes: Vec<Process> = workload.iter().map(Process::reset).collect();
        let mut state = SimulationState::new(processes.len());
        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); self.levels];

        info!(
            algorithm = self.name(),
            processes = processes.len(),
            quantum = self.quantum,
            "starting run"
        );

        while !state.is_finished() {
            for idx in admit(&mut processes, &mut state) {
                self.enqueue(&mut queues, &mut processes, idx);
            }

            let Some(idx) = queues.iter_mut().find_map(|q| q.pop_front()) else {
                state.idle_tick();
                continue;
            };

            let ticks = self.quantum.min(processes[idx].remaining_burst_time);
            if state.dispatch(&mut processes[idx], ticks) {
                debug!(id = processes[idx].id, time = state.now, "completed");
            } else {
                self.enqueue(&mut queues, &mut processes, idx);
            }
        }

        SimulationRun::finish(self.name(), processes, state)
    }
}
