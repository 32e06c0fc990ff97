//! Gantt timeline model.
//!
//! Maps every simulated tick to the process occupying the CPU, or to
//! an explicit idle slot. Idle ticks are entries, never gaps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ProcessId, Tick};

/// Occupant of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// CPU idle.
    Idle,
    /// CPU running the given process.
    Busy(ProcessId),
}

impl Slot {
    /// Numeric encoding used by exports: process id, or `-1` when idle.
    pub fn as_code(&self) -> i64 {
        match self {
            Slot::Idle => -1,
            Slot::Busy(id) => i64::from(*id),
        }
    }

    /// Process id, if busy.
    pub fn process(&self) -> Option<ProcessId> {
        match self {
            Slot::Idle => None,
            Slot::Busy(id) => Some(*id),
        }
    }
}

/// A maximal run of consecutive ticks with the same occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Occupant of the run.
    pub slot: Slot,
    /// First tick (inclusive).
    pub start: Tick,
    /// Last tick + 1 (exclusive).
    pub end: Tick,
}

/// Ordered time → occupant map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    slots: BTreeMap<Tick, Slot>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the occupant of a single tick.
    pub fn record(&mut self, tick: Tick, slot: Slot) {
        self.slots.insert(tick, slot);
    }

    /// Records `len` consecutive ticks for one process, starting at `start`.
    pub fn record_run(&mut self, start: Tick, len: Tick, id: ProcessId) {
        for t in start..start + len {
            self.slots.insert(t, Slot::Busy(id));
        }
    }

    /// Occupant at a tick.
    pub fn get(&self, tick: Tick) -> Option<Slot> {
        self.slots.get(&tick).copied()
    }

    /// Iterates `(tick, slot)` in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, Slot)> + '_ {
        self.slots.iter().map(|(&t, &s)| (t, s))
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Last recorded tick.
    pub fn last_tick(&self) -> Option<Tick> {
        self.slots.keys().next_back().copied()
    }

    /// Number of ticks assigned to a process.
    pub fn slots_for(&self, id: ProcessId) -> usize {
        self.slots
            .values()
            .filter(|s| **s == Slot::Busy(id))
            .count()
    }

    /// Number of busy ticks.
    pub fn busy_ticks(&self) -> usize {
        self.slots.values().filter(|s| **s != Slot::Idle).count()
    }

    /// Number of idle ticks.
    pub fn idle_ticks(&self) -> usize {
        self.len() - self.busy_ticks()
    }

    /// Collapses the timeline into maximal same-occupant runs.
    ///
    /// A gap in recorded ticks also ends a run.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        for (tick, slot) in self.iter() {
            match segments.last_mut() {
                Some(last) if last.slot == slot && last.end == tick => last.end = tick + 1,
                _ => segments.push(Segment {
                    slot,
                    start: tick,
                    end: tick + 1,
                }),
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut tl = Timeline::new();
        tl.record_run(0, 3, 2);
        tl.record(3, Slot::Idle);
        tl.record(4, Slot::Idle);
        tl.record_run(5, 2, 1);
        tl.record_run(7, 1, 2);
        tl
    }

    #[test]
    fn test_slot_codes() {
        assert_eq!(Slot::Idle.as_code(), -1);
        assert_eq!(Slot::Busy(7).as_code(), 7);
        assert_eq!(Slot::Busy(7).process(), Some(7));
        assert_eq!(Slot::Idle.process(), None);
    }

    #[test]
    fn test_counts() {
        let tl = sample_timeline();
        assert_eq!(tl.len(), 8);
        assert_eq!(tl.slots_for(2), 4);
        assert_eq!(tl.slots_for(1), 2);
        assert_eq!(tl.slots_for(9), 0);
        assert_eq!(tl.busy_ticks(), 6);
        assert_eq!(tl.idle_ticks(), 2);
        assert_eq!(tl.last_tick(), Some(7));
    }

    #[test]
    fn test_iter_sorted() {
        let mut tl = Timeline::new();
        tl.record(5, Slot::Busy(1));
        tl.record(0, Slot::Idle);
        tl.record(2, Slot::Busy(3));
        let ticks: Vec<Tick> = tl.iter().map(|(t, _)| t).collect();
        assert_eq!(ticks, vec![0, 2, 5]);
    }

    #[test]
    fn test_segments() {
        let segs = sample_timeline().segments();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], Segment { slot: Slot::Busy(2), start: 0, end: 3 });
        assert_eq!(segs[1], Segment { slot: Slot::Idle, start: 3, end: 5 });
        assert_eq!(segs[2], Segment { slot: Slot::Busy(1), start: 5, end: 7 });
        assert_eq!(segs[3], Segment { slot: Slot::Busy(2), start: 7, end: 8 });
    }

    #[test]
    fn test_segments_split_on_gap() {
        let mut tl = Timeline::new();
        tl.record_run(0, 2, 1);
        tl.record_run(4, 2, 1);
        let segs = tl.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!((segs[0].start, segs[0].end), (0, 2));
        assert_eq!((segs[1].start, segs[1].end), (4, 6));
    }

    #[test]
    fn test_empty_timeline() {
        let tl = Timeline::new();
        assert!(tl.is_empty());
        assert_eq!(tl.last_tick(), None);
        assert!(tl.segments().is_empty());
        assert_eq!(tl.idle_ticks(), 0);
    }
}
