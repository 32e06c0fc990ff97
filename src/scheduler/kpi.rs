//! Run performance metrics (KPIs).
//!
//! Computes per-process and aggregate indicators from a finished
//! simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | Utilization | Busy ticks / timeline ticks |
//! | Throughput | Completed processes / makespan |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessId, Tick};

use super::SimulationRun;

/// Metrics of one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    pub completion_time: Tick,
    pub turnaround_time: Tick,
    pub waiting_time: Tick,
    pub response_time: Tick,
}

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Algorithm name.
    pub algorithm: String,
    /// Per-process metrics, sorted by id.
    pub processes: Vec<ProcessMetrics>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion time (0 for an empty run).
    pub makespan: Tick,
    /// Fraction of recorded ticks the CPU was busy (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Context switches counted by the engine.
    pub context_switches: u32,
}

impl RunKpi {
    /// Computes KPIs from a finished run.
    ///
    /// Processes that never completed are left out. An empty workload
    /// yields zero averages rather than NaN.
    pub fn calculate(run: &SimulationRun) -> Self {
        let processes: Vec<ProcessMetrics> = run
            .processes
            .iter()
            .filter_map(|p| {
                let completion_time = p.completion_time?;
                let turnaround_time = completion_time - p.arrival_time;
                Some(ProcessMetrics {
                    id: p.id,
                    arrival_time: p.arrival_time,
                    burst_time: p.burst_time,
                    completion_time,
                    turnaround_time,
                    waiting_time: turnaround_time - p.burst_time,
                    response_time: p.response_time().unwrap_or(turnaround_time),
                })
            })
            .collect();

        let makespan = processes
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0);

        let utilization = if run.timeline.is_empty() {
            0.0
        } else {
            run.timeline.busy_ticks() as f64 / run.timeline.len() as f64
        };

        let throughput = if makespan <= 0 {
            0.0
        } else {
            processes.len() as f64 / makespan as f64
        };

        Self {
            algorithm: run.algorithm.clone(),
            avg_turnaround: mean(processes.iter().map(|m| m.turnaround_time)),
            avg_waiting: mean(processes.iter().map(|m| m.waiting_time)),
            avg_response: mean(processes.iter().map(|m| m.response_time)),
            processes,
            makespan,
            utilization,
            throughput,
            context_switches: run.context_switches,
        }
    }
}

fn mean(values: impl Iterator<Item = Tick>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
