use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use u_cpusim::config::SimulationConfig;
use u_cpusim::report::{export_timeline_csv, ComparisonTable, GanttGrid, ResultsTable, WorkloadTable};
use u_cpusim::scheduler::{run_all, standard_algorithms};
use u_cpusim::validation::validate_workload;
use u_cpusim::workload::WorkloadGenerator;
use u_cpusim::Error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> u_cpusim::Result<()> {
    let config = SimulationConfig::from_env()?;
    let generator = WorkloadGenerator::from_config(&config);
    let workload = match config.seed {
        Some(seed) => generator.generate_seeded(config.process_count, seed),
        None => generator.generate_random(config.process_count),
    };
    validate_workload(&workload, config.max_priority()).map_err(Error::InvalidWorkload)?;

    println!("{}", WorkloadTable(&workload));

    let algorithms = standard_algorithms(&config);
    let runs = run_all(&algorithms, &workload);

    for (algorithm, run) in algorithms.iter().zip(&runs) {
        println!("{}", GanttGrid(&run.timeline));
        println!("{}", ResultsTable::new(run));

        if let Some(dir) = &config.export_dir {
            let path = dir.join(format!("{}_gantt_data.csv", algorithm.slug()));
            match export_timeline_csv(&run.timeline, &path) {
                Ok(()) => info!(path = %path.display(), "saved Gantt data"),
                Err(e) => warn!("{e}"),
            }
        }
    }

    let comparison = ComparisonTable::new(&runs);
    println!("{comparison}");
    if let Some(best) = comparison.best_by_waiting() {
        println!("Lowest average waiting time: {best}");
    }

    Ok(())
}
