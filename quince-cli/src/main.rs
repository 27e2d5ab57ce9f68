mod result;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use convert_case::Case;
use log::info;
use log::LevelFilter;
use quince_solver::solve_with_strategy;
use quince_solver::statistics::configure_statistic_logging;
use quince_solver::statistics::log_statistic_postfix;
use quince_solver::CostMatrix;
use quince_solver::Instance;
use quince_solver::StrategyDetail;
use quince_solver::StrategyKind;
use quince_solver::StrategyOutcome;
use result::QuinceResult;
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The instance to solve, given as a JSON file holding either a bare
    /// cost matrix (an array of equal-length rows) or an object with a
    /// "matrix" field and optional "worker_capacities" and "job_durations"
    /// fields.
    instance_path: PathBuf,

    /// The strategy used to solve the instance. Only branch-and-bound
    /// reports the search tree and the decision history.
    #[arg(long = "strategy", value_enum, default_value_t = StrategyKind::BranchAndBound)]
    strategy: StrategyKind,

    /// The path the full JSON report is written to. By default only the
    /// cost and assignment are printed.
    #[arg(short = 'o', long = "output")]
    output_path: Option<PathBuf>,

    /// Enables log message output from the solver
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Enables logging of statistics from the solver
    #[arg(short = 's', long = "log-statistics", default_value_t = false)]
    log_statistics: bool,

    /// If `--verbose` is enabled removes the timestamp information from the
    /// log messages
    #[arg(long = "omit-timestamp", default_value_t = false)]
    omit_timestamp: bool,
}

/// The accepted shapes of an instance file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstanceFile {
    Bare(Vec<Vec<f64>>),
    Full(Instance),
}

fn main() {
    let args = Args::parse();

    configure_logging(args.verbose, args.omit_timestamp);

    if args.log_statistics {
        configure_statistic_logging(
            "%%quince-stat:",
            Some("%%quince-stat-end"),
            Some(Case::Camel),
            None,
        );
    }

    if let Err(error) = run(&args) {
        log::error!("execution failed: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> QuinceResult<()> {
    let instance = read_instance(&args.instance_path)?;

    info!(
        "solving a {0}x{0} instance with the {1:?} strategy",
        instance.matrix().dimension(),
        args.strategy
    );

    let outcome = solve_with_strategy(&instance, args.strategy);
    print_outcome(&outcome);

    if let StrategyDetail::BranchAndBound { statistics, .. } = &outcome.detail {
        statistics.log_statistics();
        log_statistic_postfix();
    }

    if let Some(output_path) = &args.output_path {
        let file = File::create(output_path)?;
        serde_json::to_writer_pretty(file, &outcome)?;
        info!("report written to {}", output_path.display());
    }

    Ok(())
}

fn read_instance(path: &Path) -> QuinceResult<Instance> {
    let contents = std::fs::read_to_string(path)?;

    let instance = match serde_json::from_str::<InstanceFile>(&contents)? {
        InstanceFile::Bare(rows) => Instance::new(CostMatrix::from_rows(rows)?),
        InstanceFile::Full(instance) => instance,
    };

    instance.validate()?;
    Ok(instance)
}

fn print_outcome(outcome: &StrategyOutcome) {
    match outcome.cost {
        Some(cost) => {
            println!("cost: {cost}");
            println!("assignment: {:?}", outcome.assignment);
        }
        None => println!("no complete assignment found"),
    }
}

fn configure_logging(verbose: bool, omit_timestamp: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            if omit_timestamp {
                writeln!(buf, "{} {}", record.level(), record.args())
            } else {
                writeln!(
                    buf,
                    "{} {} {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            }
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_bare_matrix_parses_into_an_instance() {
        let parsed: InstanceFile = serde_json::from_str("[[1.0, 2.0], [2.0, 1.0]]").unwrap();

        assert!(matches!(parsed, InstanceFile::Bare(_)));
    }

    #[test]
    fn an_object_with_optional_fields_parses_into_an_instance() {
        let parsed: InstanceFile = serde_json::from_str(
            r#"{"matrix": [[1.0, 2.0], [2.0, 1.0]], "worker_capacities": [1.0, 1.0]}"#,
        )
        .unwrap();

        let InstanceFile::Full(instance) = parsed else {
            panic!("object form parses as a full instance");
        };
        assert_eq!(2, instance.matrix().dimension());
        assert!(instance.validate().is_ok());
    }
}
