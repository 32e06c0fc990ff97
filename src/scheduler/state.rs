//! Per-run simulation state and event trace.
//!
//! Every engine invocation owns one [`SimulationState`]: the clock, the
//! context-switch counter, the completion counter, the timeline and the
//! event trace. Nothing here is shared between runs.
//!
//! # Context switches
//! A switch is counted when a dispatch goes to a different process than
//! the previous busy slice. An idle tick clears the predecessor, so
//! idle → X is never a switch, and re-dispatching the same process is not
//! one either.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Process, ProcessId, ProcessStatus, Slot, Tick, Timeline};

/// Something that happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Process entered a ready structure.
    Admitted { time: Tick, id: ProcessId },
    /// Process ran for `ticks` consecutive units starting at `time`.
    Dispatched {
        time: Tick,
        id: ProcessId,
        ticks: Tick,
    },
    /// MLFQ moved a process to a lower level.
    Demoted {
        time: Tick,
        id: ProcessId,
        from: usize,
        to: usize,
    },
    /// Aging improved a process's priority.
    Aged {
        time: Tick,
        id: ProcessId,
        from: i32,
        to: i32,
    },
    /// Remaining burst reached zero.
    Completed { time: Tick, id: ProcessId },
    /// CPU idle for one tick.
    Idle { time: Tick },
}

/// Mutable state of one engine invocation.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Simulation clock.
    pub now: Tick,
    /// Context switches so far.
    pub context_switches: u32,
    /// Processes completed so far.
    pub completed: usize,
    total: usize,
    prev: Option<ProcessId>,
    pub(crate) timeline: Timeline,
    pub(crate) events: Vec<SimEvent>,
}

impl SimulationState {
    /// Creates the state for a run over `total` processes.
    pub fn new(total: usize) -> Self {
        Self {
            now: 0,
            context_switches: 0,
            completed: 0,
            total,
            prev: None,
            timeline: Timeline::new(),
            events: Vec::new(),
        }
    }

    /// Whether every process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completed >= self.total
    }

    /// Records one idle tick and advances the clock.
    pub fn idle_tick(&mut self) {
        self.timeline.record(self.now, Slot::Idle);
        self.events.push(SimEvent::Idle { time: self.now });
        self.now += 1;
        self.prev = None;
    }

    /// Runs `process` for `ticks` consecutive units.
    ///
    /// Returns `true` if the process completed during the slice.
    ///
    /// # Panics
    /// If the process is already done, has nothing left to run, or the
    /// slice exceeds its remaining burst. These are engine defects.
    pub fn dispatch(&mut self, process: &mut Process, ticks: Tick) -> bool {
        assert!(
            !process.is_done(),
            "process {} dispatched after completion",
            process.id
        );
        assert!(
            ticks > 0 && ticks <= process.remaining_burst_time,
            "process {} dispatched for {ticks} with {} remaining",
            process.id,
            process.remaining_burst_time
        );

        if matches!(self.prev, Some(prev) if prev != process.id) {
            self.context_switches += 1;
        }
        self.prev = Some(process.id);

        if !process.is_started {
            process.start_time = Some(self.now);
            process.is_started = true;
        }

        process.status = ProcessStatus::Running;
        self.timeline.record_run(self.now, ticks, process.id);
        self.events.push(SimEvent::Dispatched {
            time: self.now,
            id: process.id,
            ticks,
        });
        trace!(time = self.now, id = process.id, ticks, "dispatch");

        process.remaining_burst_time -= ticks;
        self.now += ticks;

        if process.remaining_burst_time == 0 {
            self.complete(process);
            true
        } else {
            false
        }
    }

    /// Marks a process done at the current time.
    pub(crate) fn complete(&mut self, process: &mut Process) {
        assert!(
            process.completion_time.is_none(),
            "process {} completed twice",
            process.id
        );
        process.completion_time = Some(self.now);
        process.status = ProcessStatus::Done;
        self.completed += 1;
        self.events.push(SimEvent::Completed {
            time: self.now,
            id: process.id,
        });
    }

    pub(crate) fn push_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_records_and_completes() {
        let mut state = SimulationState::new(1);
        let mut p = Process::new(1, 0, 3, 1);

        assert!(!state.dispatch(&mut p, 2));
        assert_eq!(p.start_time, Some(0));
        assert_eq!(p.remaining_burst_time, 1);
        assert_eq!(state.now, 2);

        assert!(state.dispatch(&mut p, 1));
        assert_eq!(p.completion_time, Some(3));
        assert_eq!(p.start_time, Some(0));
        assert_eq!(p.status, ProcessStatus::Done);
        assert!(state.is_finished());
        assert_eq!(state.timeline.slots_for(1), 3);
        assert_eq!(state.context_switches, 0);
    }

    #[test]
    fn test_switch_counting() {
        let mut state = SimulationState::new(2);
        let mut a = Process::new(1, 0, 5, 1);
        let mut b = Process::new(2, 0, 5, 1);

        state.dispatch(&mut a, 1);
        state.dispatch(&mut a, 1);
        assert_eq!(state.context_switches, 0);
        state.dispatch(&mut b, 1);
        assert_eq!(state.context_switches, 1);
        state.dispatch(&mut a, 1);
        assert_eq!(state.context_switches, 2);
    }

    #[test]
    fn test_idle_resets_predecessor() {
        let mut state = SimulationState::new(2);
        let mut a = Process::new(1, 0, 5, 1);
        let mut b = Process::new(2, 0, 5, 1);

        state.dispatch(&mut a, 1);
        state.idle_tick();
        state.dispatch(&mut b, 1);
        assert_eq!(state.context_switches, 0);
        assert_eq!(state.timeline.get(1), Some(Slot::Idle));
        assert_eq!(state.now, 3);
    }

    #[test]
    #[should_panic(expected = "dispatched after completion")]
    fn test_dispatch_after_completion_panics() {
        let mut state = SimulationState::new(1);
        let mut p = Process::new(1, 0, 1, 1);
        state.dispatch(&mut p, 1);
        state.dispatch(&mut p, 1);
    }

    #[test]
    #[should_panic(expected = "remaining")]
    fn test_overlong_slice_panics() {
        let mut state = SimulationState::new(1);
        let mut p = Process::new(1, 0, 2, 1);
        state.dispatch(&mut p, 3);
    }
}
