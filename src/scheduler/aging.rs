//! Priority-based SJF with aging.
//!
//! # Algorithm
//!
//! Single ready list, re-evaluated every tick:
//! 1. Admit arrived processes; their wait clock starts at admission.
//! 2. Age: a ready process below the top priority that has waited at
//!    least `threshold` ticks gains `boost` priority (floor 1) and its wait
//!    clock restarts.
//! 3. Order by (priority, remaining burst); full ties keep insertion order.
//! 4. Run the head for one tick, or idle. Running restarts its wait clock.
//!
//! Priority dominates; SJF breaks ties. Aging bounds how long a
//! low-priority long job can starve, which plain preemptive SJF does not.

use tracing::{debug, info};

use crate::dispatching::{rules, RuleEngine};
use crate::models::{Process, ProcessStatus, Tick};

use super::admission::admit;
use super::state::{SimEvent, SimulationState};
use super::{SchedulingAlgorithm, SimulationRun};

/// Best priority value; aging never goes below it.
const TOP_PRIORITY: i32 = 1;

/// Aging priority-SJF engine.
#[derive(Debug, Clone)]
pub struct PrioritySjfAging {
    threshold: Tick,
    boost: i32,
    rules: RuleEngine,
}

impl PrioritySjfAging {
    /// Creates the engine with threshold 15 and boost 1.
    pub fn new() -> Self {
        Self {
            threshold: 15,
            boost: 1,
            rules: RuleEngine::new()
                .with_rule(rules::Priority)
                .with_rule(rules::ShortestRemaining),
        }
    }

    /// Sets the wait threshold that triggers aging.
    ///
    /// # Panics
    /// If `threshold` is not positive.
    pub fn with_threshold(mut self, threshold: Tick) -> Self {
        assert!(threshold > 0, "aging threshold must be positive");
        self.threshold = threshold;
        self
    }

    /// Sets the priority improvement per aging step.
    ///
    /// # Panics
    /// If `boost` is not positive.
    pub fn with_boost(mut self, boost: i32) -> Self {
        assert!(boost > 0, "aging boost must be positive");
        self.boost = boost;
        self
    }

    fn age(
        &self,
        processes: &mut [Process],
        ready: &[usize],
        wait_since: &mut [Tick],
        state: &mut SimulationState,
    ) {
        let now = state.now;
        for &idx in ready {
            let p = &mut processes[idx];
            if p.priority <= TOP_PRIORITY || now - wait_since[idx] < self.threshold {
                continue;
            }

            let from = p.priority;
            p.priority = (p.priority - self.boost).max(TOP_PRIORITY);
            wait_since[idx] = now;

            debug!(id = p.id, from, to = p.priority, time = now, "aged");
            state.push_event(SimEvent::Aged {
                time: now,
                id: p.id,
                from,
                to: p.priority,
            });
        }
    }
}

impl Default for PrioritySjfAging {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingAlgorithm for PrioritySjfAging {
    fn name(&self) -> &'static str {
        "Custom: Priority-based SJF with Aging Scheduling"
    }

    fn slug(&self) -> &'static str {
        "custom_priority_sjf_aging"
    }

    fn run(&self, workload: &[Process]) -> SimulationRun {
        let mut processes: Vec<Process> = workload.iter().map(Process::reset).collect();
        let mut state = SimulationState::new(processes.len());
        let mut ready: Vec<usize> = Vec::new();
        // Engine-local wait clock, indexed like `processes`.
        let mut wait_since: Vec<Tick> = vec![0; processes.len()];

        info!(
            algorithm = self.name(),
            processes = processes.len(),
            threshold = self.threshold,
            "starting run"
        );

        while !state.is_finished() {
            for idx in admit(&mut processes, &mut state) {
                wait_since[idx] = state.now;
                ready.push(idx);
            }

            self.age(&mut processes, &ready, &mut wait_since, &mut state);

            let Some(idx) = self.rules.select_best(&processes, &ready) else {
                state.idle_tick();
                continue;
            };

            let finished = state.dispatch(&mut processes[idx], 1);
            wait_since[idx] = state.now;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn starving_workload() -> Vec<Process> {
        vec![Process::new(1, 0, 3, 3), Process::new(2, 0, 40, 1)]
    }

    fn aged_steps(run: &SimulationRun, id: u32) -> Vec<(Tick, i32, i32)> {
        run.events
            .iter()
            .filter_map(|e| match *e {
                SimEvent::Aged { time, id: pid, from, to } if pid == id => Some((time, from, to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_aging_rescues_low_priority() {
        let run = PrioritySjfAging::new().run(&starving_workload());

        // P1 ages 3 -> 2 at t=15 and 2 -> 1 at t=30, then wins on SJF (3 < 10)
        assert_eq!(aged_steps(&run, 1), vec![(15, 3, 2), (30, 2, 1)]);
        let low = run.process(1).unwrap();
        assert_eq!(low.start_time, Some(30));
        assert_eq!(low.completion_time, Some(33));
        assert_eq!(low.priority, 1);
        assert_eq!(run.process(2).unwrap().completion_time, Some(43));
        assert_eq!(run.context_switches, 2);
    }

    #[test]
    fn test_running_process_does_not_age() {
        let run = PrioritySjfAging::new().run(&[Process::new(1, 0, 50, 3)]);
        assert!(aged_steps(&run, 1).is_empty());
        assert_eq!(run.process(1).unwrap().priority, 3);
        assert_eq!(run.process(1).unwrap().completion_time, Some(50));
    }

    #[test]
    fn test_priority_dominates_burst() {
        let workload = vec![Process::new(1, 0, 2, 2), Process::new(2, 0, 6, 1)];
        let run = PrioritySjfAging::new().run(&workload);
        assert_eq!(run.process(2).unwrap().completion_time, Some(6));
        assert_eq!(run.process(1).unwrap().completion_time, Some(8));
    }

    #[test]
    fn test_sjf_breaks_priority_ties() {
        let workload = vec![Process::new(1, 0, 6, 2), Process::new(2, 0, 2, 2)];
        let run = PrioritySjfAging::new().run(&workload);
        assert_eq!(run.process(2).unwrap().completion_time, Some(2));
        assert_eq!(run.process(1).unwrap().completion_time, Some(8));
    }

    #[test]
    fn test_larger_boost_floors_at_top() {
        let engine = PrioritySjfAging::new().with_boost(5);
        let run = engine.run(&starving_workload());

        assert_eq!(aged_steps(&run, 1), vec![(15, 3, 1)]);
        assert_eq!(run.process(1).unwrap().completion_time, Some(18));
    }

    #[test]
    fn test_custom_threshold() {
        let engine = PrioritySjfAging::new().with_threshold(4);
        let run = engine.run(&starving_workload());
        // 3 -> 2 at t=4, 2 -> 1 at t=8, then 3 < 32 remaining
        assert_eq!(aged_steps(&run, 1), vec![(4, 3, 2), (8, 2, 1)]);
        assert_eq!(run.process(1).unwrap().completion_time, Some(11));
    }
}
