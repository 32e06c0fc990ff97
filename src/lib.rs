//! Discrete-time CPU scheduling simulator.
//!
//! Runs one synthetic workload through four scheduling policies on a
//! logical clock and compares turnaround, waiting and context switches.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ProcessStatus`, `Timeline`, `Slot`
//! - **`dispatching`**: Ready-list ordering rules (`ShortestRemaining`,
//!   `Priority`) composed by a `RuleEngine`
//! - **`scheduler`**: The engines (`PreemptiveSjf`, `RoundRobinPriority`,
//!   `MultilevelFeedbackQueue`, `PrioritySjfAging`), `SimulationRun`, `RunKpi`
//! - **`workload`**: Seeded random process generation
//! - **`validation`**: Workload integrity checks
//! - **`report`**: Result tables, Gantt grid, CSV timeline export
//! - **`config`**: `SimulationConfig`
//!
//! # Example
//!
//! ```
//! use u_cpusim::config::SimulationConfig;
//! use u_cpusim::scheduler::{run_all, standard_algorithms};
//! use u_cpusim::workload::WorkloadGenerator;
//!
//! let config = SimulationConfig::default().with_seed(1);
//! let workload = WorkloadGenerator::from_config(&config).generate_seeded(10, 1);
//! let runs = run_all(&standard_algorithms(&config), &workload);
//! assert_eq!(runs.len(), 4);
//! assert!(runs.iter().all(|r| r.processes.iter().all(|p| p.completion_time.is_some())));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-8

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
