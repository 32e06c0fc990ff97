//! Text reports and timeline export.
//!
//! - [`ResultsTable`]: per-process turnaround/waiting table for one run
//! - [`GanttGrid`]: aligned time / process grid of a timeline
//! - [`ComparisonTable`]: one summary row per algorithm
//! - [`write_timeline_csv`] / [`export_timeline_csv`]: `Time,ProcessID` CSV

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Process, Timeline};
use crate::scheduler::{RunKpi, SimulationRun};

const RULE: &str =
    "-----------------------------------------------------------------------------------------";
const SHORT_RULE: &str = "--------------------------------------------------";

/// Per-process results of one run.
#[derive(Debug)]
pub struct ResultsTable<'a> {
    kpi: RunKpi,
    run: &'a SimulationRun,
}

impl<'a> ResultsTable<'a> {
    /// Builds the table, computing the run's KPIs once.
    pub fn new(run: &'a SimulationRun) -> Self {
        Self { kpi: run.kpi(), run }
    }
}

impl fmt::Display for ResultsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} Results ---", self.run.algorithm)?;
        writeln!(
            f,
            "Process ID | Arrival Time | Burst Time | Completion Time | Turnaround Time | Waiting Time"
        )?;
        writeln!(f, "{RULE}")?;
        for m in &self.kpi.processes {
            writeln!(
                f,
                "{:>10} | {:>12} | {:>10} | {:>15} | {:>15} | {:>12}",
                m.id,
                m.arrival_time,
                m.burst_time,
                m.completion_time,
                m.turnaround_time,
                m.waiting_time
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Average Turnaround Time: {:.2}", self.kpi.avg_turnaround)?;
        writeln!(f, "Average Waiting Time: {:.2}", self.kpi.avg_waiting)?;
        writeln!(f, "Context Switches: {}", self.kpi.context_switches)
    }
}

/// Aligned Gantt grid: a `Time:` row and a `Process:` row, 4 columns per tick.
///
/// Rendered run by run from [`Timeline::segments`]; idle ticks show as `-`.
#[derive(Debug)]
pub struct GanttGrid<'a>(pub &'a Timeline);

impl fmt::Display for GanttGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gantt Chart:")?;
        let segments = self.0.segments();
        if segments.is_empty() {
            return writeln!(f, "  [Empty]");
        }

        write!(f, "Time:   ")?;
        for t in segments.iter().flat_map(|s| s.start..s.end) {
            write!(f, "{t:>4}")?;
        }
        writeln!(f)?;

        write!(f, "Process:")?;
        for seg in &segments {
            for _ in seg.start..seg.end {
                match seg.slot.process() {
                    Some(id) => write!(f, "{id:>4}")?,
                    None => write!(f, "{:>4}", "-")?,
                }
            }
        }
        writeln!(f)
    }
}

/// Initial workload listing.
#[derive(Debug)]
pub struct WorkloadTable<'a>(pub &'a [Process]);

impl fmt::Display for WorkloadTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Initial Processes ---")?;
        writeln!(f, "Process ID | Arrival Time | Burst Time | Priority")?;
        writeln!(f, "{SHORT_RULE}")?;
        for p in self.0 {
            writeln!(
                f,
                "{:>10} | {:>12} | {:>10} | {:>8}",
                p.id, p.arrival_time, p.burst_time, p.priority
            )?;
        }
        writeln!(f, "{SHORT_RULE}")
    }
}

/// Side-by-side summary of several runs over the same workload.
#[derive(Debug)]
pub struct ComparisonTable {
    rows: Vec<RunKpi>,
}

impl ComparisonTable {
    /// Builds one row per run, in the given order.
    pub fn new(runs: &[SimulationRun]) -> Self {
        Self {
            rows: runs.iter().map(SimulationRun::kpi).collect(),
        }
    }

    /// Name of the algorithm with the lowest average waiting time.
    pub fn best_by_waiting(&self) -> Option<&str> {
        self.rows
            .iter()
            .min_by(|a, b| a.avg_waiting.total_cmp(&b.avg_waiting))
            .map(|k| k.algorithm.as_str())
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Comparison ---")?;
        writeln!(
            f,
            "{:<48} | {:>8} | {:>8} | {:>8} | {:>8} | {:>6} | {:>8}",
            "Algorithm", "Avg TAT", "Avg Wait", "Avg Resp", "Makespan", "Util", "Switches"
        )?;
        for k in &self.rows {
            writeln!(
                f,
                "{:<48} | {:>8.2} | {:>8.2} | {:>8.2} | {:>8} | {:>5.1}% | {:>8}",
                k.algorithm,
                k.avg_turnaround,
                k.avg_waiting,
                k.avg_response,
                k.makespan,
                k.utilization * 100.0,
                k.context_switches
            )?;
        }
        Ok(())
    }
}

/// Writes a timeline as CSV: header `Time,ProcessID`, one row per tick,
/// ascending, idle as `-1`.
pub fn write_timeline_csv<W: Write>(timeline: &Timeline, mut out: W) -> io::Result<()> {
    writeln!(out, "Time,ProcessID")?;
    for (tick, slot) in timeline.iter() {
        writeln!(out, "{},{}", tick, slot.as_code())?;
    }
    out.flush()
}

/// Writes a timeline CSV file.
///
/// Failure is returned to the caller; the run itself stays valid.
pub fn export_timeline_csv(timeline: &Timeline, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let to_export_error = |source| Error::Export {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export_error)?;
    write_timeline_csv(timeline, BufWriter::new(file)).map_err(to_export_error)?;
    debug!(path = %path.display(), ticks = timeline.len(), "exported timeline");
    Ok(())
}
