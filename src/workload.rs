//! Random workload generation.
//!
//! Produces `N` processes with ids `1..=N`, arrival times drawn from a
//! small fixed set, uniform burst times and uniform priorities.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SimulationConfig;
use crate::models::{Process, ProcessId, Tick};

/// Generator of synthetic process batches.
///
/// # Example
/// ```
/// use u_cpusim::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new().generate_seeded(10, 42);
/// let b = WorkloadGenerator::new().generate_seeded(10, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadGenerator {
    arrival_options: Vec<Tick>,
    burst_range: (Tick, Tick),
    priority_range: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator with the standard parameters.
    pub fn new() -> Self {
        Self::from_config(&SimulationConfig::default())
    }

    /// Creates a generator from a simulation config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            arrival_options: config.arrival_options.clone(),
            burst_range: config.burst_range,
            priority_range: config.priority_range,
        }
    }

    /// Sets the arrival time options.
    pub fn with_arrival_options(mut self, options: Vec<Tick>) -> Self {
        self.arrival_options = options;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: Tick, max: Tick) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    /// Generates `count` processes using the given RNG.
    ///
    /// An empty arrival set means every process arrives at t=0.
    ///
    /// # Panics
    /// If the burst or priority range is empty (`min > max`).
    /// [`SimulationConfig::validate`] rejects such ranges.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        let (burst_min, burst_max) = self.burst_range;
        let (prio_min, prio_max) = self.priority_range;

        let processes: Vec<Process> = (1..=count)
            .map(|i| {
                let arrival = self.arrival_options.choose(rng).copied().unwrap_or(0);
                let burst = rng.random_range(burst_min..=burst_max);
                let priority = rng.random_range(prio_min..=prio_max);
                Process::new(i as ProcessId, arrival, burst, priority)
            })
            .collect();

        debug!(count = processes.len(), "generated workload");
        processes
    }

    /// Generates a reproducible batch from a seed.
    pub fn generate_seeded(&self, count: usize, seed: u64) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(count, &mut rng)
    }

    /// Generates a batch seeded from the OS.
    pub fn generate_random(&self, count: usize) -> Vec<Process> {
        let mut rng = StdRng::from_os_rng();
        self.generate(count, &mut rng)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
