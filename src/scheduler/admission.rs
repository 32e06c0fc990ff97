//! Ready-set admission shared by every engine.
//!
//! A process is admitted once: the first time the clock reaches its
//! arrival while it is still `NotArrived`. Engines route the returned
//! indices into their own ready structures.

use crate::models::{Process, ProcessStatus};

use super::state::{SimEvent, SimulationState};

/// Admits every arrived, not-yet-admitted process.
///
/// Returns the indices of newly admitted processes in workload order, with
/// their status set to `Ready`. A zero-burst process completes on the spot
/// and is not returned.
pub(crate) fn admit(processes: &mut [Process], state: &mut SimulationState) -> Vec<usize> {
    let now = state.now;
    let mut admitted = Vec::new();

    for (idx, p) in processes.iter_mut().enumerate() {
        if p.status != ProcessStatus::NotArrived || !p.has_arrived(now) {
            continue;
        }

        p.admitted_at = Some(now);
        state.push_event(SimEvent::Admitted { time: now, id: p.id });

        if p.remaining_burst_time <= 0 {
            p.remaining_burst_time = 0;
            p.start_time = Some(now);
            p.is_started = true;
            state.complete(p);
            continue;
        }

        p.status = ProcessStatus::Ready;
        admitted.push(idx);
    }

    admitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_arrived_once() {
        let mut processes = vec![
            Process::new(1, 0, 4, 1),
            Process::new(2, 5, 4, 1),
            Process::new(3, 0, 4, 1),
        ];
        let mut state = SimulationState::new(3);

        assert_eq!(admit(&mut processes, &mut state), vec![0, 2]);
        assert_eq!(processes[0].admitted_at, Some(0));
        assert_eq!(processes[1].status, ProcessStatus::NotArrived);

        // Already admitted processes are not admitted again
        assert!(admit(&mut processes, &mut state).is_empty());

        state.now = 5;
        assert_eq!(admit(&mut processes, &mut state), vec![1]);
        assert_eq!(processes[1].admitted_at, Some(5));
    }

    #[test]
    fn test_zero_burst_completes_on_admission() {
        let mut processes = vec![Process::new(1, 0, 0, 1), Process::new(2, 0, 3, 1)];
        let mut state = SimulationState::new(2);

        assert_eq!(admit(&mut processes, &mut state), vec![1]);
        assert_eq!(processes[0].status, ProcessStatus::Done);
        assert_eq!(processes[0].completion_time, Some(0));
        assert_eq!(state.completed, 1);
        assert!(state.timeline.is_empty());
    }
}
