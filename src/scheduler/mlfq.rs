//! Multilevel feedback queue.
//!
//! # Algorithm
//!
//! Levels `0..n` are round-robin with increasing quanta (5, 10 by
//! default); the extra last level is FCFS and runs a process to completion.
//! 1. Newly arrived processes enter level 0.
//! 2. Serve the highest non-empty level, or idle one tick.
//! 3. Run for `min(level quantum, remaining)` consecutive ticks.
//! 4. An unfinished process drops one level. Levels only move down;
//!    there is no priority boost.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::models::{Process, ProcessStatus, Tick};

use super::admission::admit;
use super::state::{SimEvent, SimulationState};
use super::{SchedulingAlgorithm, SimulationRun};

/// Multilevel feedback queue engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultilevelFeedbackQueue {
    quanta: Vec<Tick>,
}

impl MultilevelFeedbackQueue {
    /// Creates the engine with Q0 = 5, Q1 = 10, Q2 = FCFS.
    pub fn new() -> Self {
        Self { quanta: vec![5, 10] }
    }

    /// Sets the quanta of the round-robin levels. An FCFS level is always
    /// appended below them.
    ///
    /// # Panics
    /// If any quantum is not positive.
    pub fn with_quanta(mut self, quanta: Vec<Tick>) -> Self {
        assert!(quanta.iter().all(|&q| q > 0), "quanta must be positive");
        self.quanta = quanta;
        self
    }

    /// Number of levels, including the FCFS level.
    pub fn level_count(&self) -> usize {
        self.quanta.len() + 1
    }

    /// Quantum of a level. `None` for the FCFS level.
    pub fn quantum(&self, level: usize) -> Option<Tick> {
        self.quanta.get(level).copied()
    }
}

impl Default for MultilevelFeedbackQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for MultilevelFeedbackQueue {
    fn name(&self) -> &'static str {
        "Multilevel Feedback Queue Scheduling"
    }

    fn slug(&self) -> &'static str {
        "MLFQ"
    }

    fn run(&self, workload: &[Process]) -> SimulationRun {
        let mut processes: Vec<Process> = workload.iter().map(Process::reset).collect();
        let mut state = SimulationState::new(processes.len());
        let mut queues: Vec<VecDeque<usize>> = vec![VecDeque::new(); self.level_count()];
        let last_level = self.level_count() - 1;

        info!(
            algorithm = self.name(),
            processes = processes.len(),
            quanta = ?self.quanta,
            "starting run"
        );

        while !state.is_finished() {
            for idx in admit(&mut processes, &mut state) {
                processes[idx].status = ProcessStatus::Queued(0);
                queues[0].push_back(idx);
            }

            let Some((level, idx)) = queues
                .iter_mut()
                .enumerate()
                .find_map(|(level, q)| q.pop_front().map(|idx| (level, idx)))
            else {
                state.idle_tick();
                continue;
            };

            let remaining = processes[idx].remaining_burst_time;
            let ticks = self.quantum(level).map_or(remaining, |q| q.min(remaining));

            if state.dispatch(&mut processes[idx], ticks) {
                debug!(id = processes[idx].id, time = state.now, level, "completed");
                continue;
            }

            let next = (level + 1).min(last_level);
            if next != level {
                debug!(id = processes[idx].id, from = level, to = next, "demoted");
                state.push_event(SimEvent::Demoted {
                    time: state.now,
                    id: processes[idx].id,
                    from: level,
                    to: next,
                });
            }
            processes[idx].status = ProcessStatus::Queued(next);
            queues[next].push_back(idx);
        }

        SimulationRun::finish(self.name(), processes, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_long_process_degrades() {
        let run = MultilevelFeedbackQueue::new().run(&[Process::new(1, 0, 20, 1)]);

        assert_eq!(run.process(1).unwrap().completion_time, Some(20));
        assert_eq!(run.context_switches, 0);

        let demotions: Vec<(usize, usize, i64)> = run
            .events
            .iter()
            .filter_map(|e| match e {
                SimEvent::Demoted { time, from, to, .. } => Some((*from, *to, *time)),
                _ => None,
            })
            .collect();
        assert_eq!(demotions, vec![(0, 1, 5), (1, 2, 15)]);
    }

    #[test]
    fn test_short_job_finishes_in_q0() {
        let workload = vec![Process::new(1, 0, 12, 1), Process::new(2, 0, 3, 1)];
        let run = MultilevelFeedbackQueue::new().run(&workload);

        // 1: 0..5 (-> Q1), 2: 5..8 done, 1: 8..15 in Q1
        assert_eq!(run.process(2).unwrap().completion_time, Some(8));
        assert_eq!(run.process(1).unwrap().completion_time, Some(15));
        assert_eq!(run.context_switches, 2);
    }

    #[test]
    fn test_new_arrival_beats_lower_levels() {
        let workload = vec![Process::new(1, 0, 30, 1), Process::new(2, 5, 4, 1)];
        let run = MultilevelFeedbackQueue::new().run(&workload);

        // 1: 0..5 -> Q1; 2 arrives at 5 into Q0 and runs 5..9; 1: 9..19 -> Q2; 19..34
        assert_eq!(run.process(2).unwrap().start_time, Some(5));
        assert_eq!(run.process(2).unwrap().completion_time, Some(9));
        assert_eq!(run.process(1).unwrap().completion_time, Some(34));
    }

    #[test]
    fn test_fcfs_level_runs_to_completion() {
        let workload = vec![Process::new(1, 0, 40, 1), Process::new(2, 20, 2, 1)];
        let run = MultilevelFeedbackQueue::new().run(&workload);

        // 1: 0..5, 5..15, then Q2 from 15 uninterrupted to 40; 2 waits
        assert_eq!(run.process(1).unwrap().completion_time, Some(40));
        assert_eq!(run.process(2).unwrap().start_time, Some(40));
        assert_eq!(run.process(2).unwrap().completion_time, Some(42));
    }

    #[test]
    fn test_custom_quanta() {
        let mlfq = MultilevelFeedbackQueue::new().with_quanta(vec![2]);
        assert_eq!(mlfq.level_count(), 2);
        assert_eq!(mlfq.quantum(0), Some(2));
        assert_eq!(mlfq.quantum(1), None);

        let run = mlfq.run(&[Process::new(1, 0, 5, 1)]);
        assert_eq!(run.process(1).unwrap().completion_time, Some(5));
    }
}
