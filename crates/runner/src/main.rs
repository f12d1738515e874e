use std::path::PathBuf;

use tickfactor_factors::FactorConfig;
use tickfactor_runner::{
    BatchRunner, CsvDirectorySource, DEFAULT_PRECISION, FactorTable, RunnerError,
};

fn print_help() {
    eprintln!(
        r#"tickfactor - intraday microstructure factors from normalized tick data

USAGE:
    tickfactor --table <CSV> [OPTIONS]

OPTIONS:
    --table <CSV>         Factor table; symbols are read from its index column
                          and results are written back in place
    --data-root <DIR>     Directory holding <symbol>/trades.csv and orders.csv
    --config <PATH>       Load thresholds and windows from a JSON file
    --parallel            Compute symbols on all cores
    --precision <N>       Decimal places in the output (default: 10)
    --help                Print this help message

ENVIRONMENT VARIABLES:
    DATA_ROOT             Used when --data-root is not given
    RUST_LOG              Log level filter (default: info)

EXAMPLES:
    tickfactor --table factorValue.csv --data-root /data/2024-01-02
    DATA_ROOT=/data/2024-01-02 tickfactor --table factorValue.csv --parallel
"#
    );
}

struct Args {
    table: PathBuf,
    data_root: Option<PathBuf>,
    config: Option<PathBuf>,
    parallel: bool,
    precision: u32,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut table = None;
    let mut data_root = None;
    let mut config = None;
    let mut parallel = false;
    let mut precision = DEFAULT_PRECISION;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--parallel" | "-p" => parallel = true,
            flag @ ("--table" | "--data-root" | "--config" | "--precision") => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("Error: {} requires an argument", flag);
                    return None;
                };
                match flag {
                    "--table" => table = Some(PathBuf::from(value)),
                    "--data-root" => data_root = Some(PathBuf::from(value)),
                    "--config" => config = Some(PathBuf::from(value)),
                    _ => match value.parse() {
                        Ok(p) => precision = p,
                        Err(_) => {
                            eprintln!("Error: invalid precision: {}", value);
                            return None;
                        }
                    },
                }
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                return None;
            }
        }
        i += 1;
    }

    let Some(table) = table else {
        eprintln!("Error: --table is required");
        return None;
    };

    Some(Args {
        table,
        data_root,
        config,
        parallel,
        precision,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args() else {
        print_help();
        std::process::exit(1);
    };

    let data_root = args
        .data_root
        .or_else(|| std::env::var_os("DATA_ROOT").map(PathBuf::from))
        .ok_or(RunnerError::MissingDataRoot)?;

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            FactorConfig::from_file(path).map_err(RunnerError::from)?
        }
        None => FactorConfig::default(),
    };

    let mut table = FactorTable::read_csv(&args.table)?;
    log::info!(
        "Processing {} symbols from {} (data root: {})",
        table.len(),
        args.table.display(),
        data_root.display()
    );

    let runner =
        BatchRunner::new(CsvDirectorySource::new(data_root), config).with_parallelism(args.parallel);
    let report = runner.run_table(&mut table);

    table.write_csv(&args.table, args.precision)?;

    log::info!("===================================");
    log::info!(
        "{} computed, {} skipped, {} failed",
        report.computed.len(),
        report.skipped.len(),
        report.failed.len()
    );
    for (symbol, message) in &report.failed {
        log::info!("  failed {}: {}", symbol, message);
    }
    log::info!("Output: {}", args.table.display());
    Ok(())
}
