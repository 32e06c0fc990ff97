//! Process (workload unit) model.
//!
//! A process carries immutable inputs (arrival, burst, priority) and the
//! mutable run state an engine drives while simulating it.
//!
//! # Priority Convention
//! **Lower value = higher priority.** Priority 1 is the most urgent level.
//! Only the aging engine ever changes a process's priority.

use serde::{Deserialize, Serialize};

/// Simulation time unit.
pub type Tick = i64;

/// Stable process identifier (1-based in generated workloads).
pub type ProcessId = u32;

/// Where a process currently sits in an engine's state machine.
///
/// A process occupies exactly one status at any simulated instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProcessStatus {
    /// Arrival time not yet reached (or not yet admitted).
    #[default]
    NotArrived,
    /// Admitted into a single ready list.
    Ready,
    /// Resident in the ready queue with the given level index.
    Queued(usize),
    /// Occupying the CPU for the current slice.
    Running,
    /// Finished; never re-admitted.
    Done,
}

/// A simulated process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time the process becomes eligible for scheduling.
    pub arrival_time: Tick,
    /// Total CPU demand.
    pub burst_time: Tick,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
    /// CPU time still needed. Reaches 0 exactly once.
    pub remaining_burst_time: Tick,
    /// First dispatch time. `None` until dispatched.
    pub start_time: Option<Tick>,
    /// Completion time. `None` until the remaining burst reaches 0.
    pub completion_time: Option<Tick>,
    /// Time the process was admitted into a ready structure.
    pub admitted_at: Option<Tick>,
    /// Whether the process has been dispatched at least once.
    pub is_started: bool,
    /// Current engine state.
    pub status: ProcessStatus,
}

impl Process {
    /// Creates a fresh process with no run state.
    pub fn new(id: ProcessId, arrival_time: Tick, burst_time: Tick, priority: i32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            remaining_burst_time: burst_time,
            start_time: None,
            completion_time: None,
            admitted_at: None,
            is_started: false,
            status: ProcessStatus::NotArrived,
        }
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.status == ProcessStatus::Done
    }

    /// Turnaround time (completion - arrival). `None` until complete.
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Waiting time (turnaround - burst). `None` until complete.
    pub fn waiting_time(&self) -> Option<Tick> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Response time (first dispatch - arrival). `None` until started.
    pub fn response_time(&self) -> Option<Tick> {
        self.start_time.map(|s| s - self.arrival_time)
    }

    /// Returns a copy with run state cleared. The current priority is kept.
    pub fn reset(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new(3, 5, 12, 2);
        assert_eq!(p.id, 3);
        assert_eq!(p.remaining_burst_time, 12);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
        assert!(!p.is_started);
        assert_eq!(p.status, ProcessStatus::NotArrived);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 10, 4, 3);
        assert!(!p.has_arrived(9));
        assert!(p.has_arrived(10));
        assert!(p.has_arrived(11));
    }

    #[test]
    fn test_derived_times() {
        let mut p = Process::new(1, 5, 10, 1);
        assert_eq!(p.turnaround_time(), None);
        assert_eq!(p.waiting_time(), None);

        p.start_time = Some(8);
        p.completion_time = Some(25);
        assert_eq!(p.turnaround_time(), Some(20));
        assert_eq!(p.waiting_time(), Some(10));
        assert_eq!(p.response_time(), Some(3));
    }

    #[test]
    fn test_reset() {
        let mut p = Process::new(2, 0, 6, 3);
        p.remaining_burst_time = 0;
        p.priority = 1;
        p.completion_time = Some(6);
        p.status = ProcessStatus::Done;

        assert!(p.is_done());
        let fresh = p.reset();
        assert!(!fresh.is_done());
        assert_eq!(fresh.remaining_burst_time, 6);
        assert_eq!(fresh.priority, 1);
        assert_eq!(fresh.status, ProcessStatus::NotArrived);
        assert_eq!(fresh.completion_time, None);
    }
}
