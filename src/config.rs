//! Simulation configuration.
//!
//! `SimulationConfig::default()` reproduces the fixed batch: 10 processes,
//! arrivals in {0, 5, 10}, bursts in 6..=28, priorities in 1..=3, and the
//! four engines with their standard parameters.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Tick;

/// Environment variable naming a JSON config file for the driver.
pub const CONFIG_ENV_VAR: &str = "U_CPUSIM_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of generated processes.
    pub process_count: usize,
    /// RNG seed. `None` = seeded from the OS.
    pub seed: Option<u64>,
    /// Arrival times drawn uniformly from this set.
    pub arrival_options: Vec<Tick>,
    /// Inclusive burst time range.
    pub burst_range: (Tick, Tick),
    /// Inclusive priority range (1 = highest).
    pub priority_range: (i32, i32),
    /// Round-robin quantum within a priority level.
    pub rr_quantum: Tick,
    /// Quanta of the round-robin MLFQ levels; the level below them is FCFS.
    pub mlfq_quanta: Vec<Tick>,
    /// Wait (ticks) before a ready process is aged.
    pub aging_threshold: Tick,
    /// Priority improvement per aging step.
    pub aging_boost: i32,
    /// Directory for timeline CSV files. `None` disables export.
    pub export_dir: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_count: 10,
            seed: None,
            arrival_options: vec![0, 5, 10],
            burst_range: (6, 28),
            priority_range: (1, 3),
            rr_quantum: 5,
            mlfq_quanta: vec![5, 10],
            aging_threshold: 15,
            aging_boost: 1,
            export_dir: Some(PathBuf::from(".")),
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a config from JSON. Missing fields keep their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the parameters the generator and engines require.
    ///
    /// Ranges must be non-empty, priorities start at 1, arrivals are
    /// non-negative, and every quantum, threshold and boost is positive.
    pub fn validate(&self) -> Result<()> {
        let (burst_min, burst_max) = self.burst_range;
        if burst_min < 1 || burst_min > burst_max {
            return Err(Error::InvalidConfig(format!(
                "burst_range must satisfy 1 <= min <= max, got ({burst_min}, {burst_max})"
            )));
        }

        let (prio_min, prio_max) = self.priority_range;
        if prio_min < 1 || prio_min > prio_max {
            return Err(Error::InvalidConfig(format!(
                "priority_range must satisfy 1 <= min <= max, got ({prio_min}, {prio_max})"
            )));
        }

        if let Some(&arrival) = self.arrival_options.iter().find(|&&a| a < 0) {
            return Err(Error::InvalidConfig(format!(
                "arrival_options must be non-negative, got {arrival}"
            )));
        }

        if self.rr_quantum < 1 {
            return Err(Error::InvalidConfig(format!(
                "rr_quantum must be positive, got {}",
                self.rr_quantum
            )));
        }

        if let Some(&quantum) = self.mlfq_quanta.iter().find(|&&q| q < 1) {
            return Err(Error::InvalidConfig(format!(
                "mlfq_quanta must be positive, got {quantum}"
            )));
        }

        if self.aging_threshold < 1 {
            return Err(Error::InvalidConfig(format!(
                "aging_threshold must be positive, got {}",
                self.aging_threshold
            )));
        }

        if self.aging_boost < 1 {
            return Err(Error::InvalidConfig(format!(
                "aging_boost must be positive, got {}",
                self.aging_boost
            )));
        }

        Ok(())
    }

    /// Loads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads from `U_CPUSIM_CONFIG` when set, defaults otherwise.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets or clears the export directory.
    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.export_dir = dir;
        self
    }

    /// Highest (numerically largest) priority value a workload may use.
    pub fn max_priority(&self) -> i32 {
        self.priority_range.1
    }
}
