//! Headless simulation runner.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                                # Default scenario
//!   cargo run --bin simulate -- --scenario weather --speed 4
//!   cargo run --bin simulate -- --sweep 20 --seed 42        # Reproducible sweep

use railops::logging::init_stderr_tracing;
use railops::report::RunReport;
use railops::simulator::{run_scenario, run_sweep, HeadlessConfig, Invocation};
use std::env;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match HeadlessConfig::from_args(&args) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            return ExitCode::from(2);
        }
    };

    init_stderr_tracing(if config.quiet {
        "railops=warn"
    } else {
        "railops=info"
    });

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &HeadlessConfig) -> railops::Result<()> {
    if config.sweep_runs.is_some() {
        let sweep = run_sweep(config);
        info!(runs = sweep.runs.len(), completed = sweep.completed(), "sweep finished");
        if config.json {
            println!("{}", sweep.to_json()?);
        } else if !config.quiet {
            println!("{}", sweep.to_text());
        }
        if let Some(path) = &config.csv_path {
            std::fs::write(path, sweep.to_csv())?;
            info!(path = %path, "sweep CSV written");
        }
        return Ok(());
    }

    let Some(report) = run_scenario(config.parameters, config.max_ticks) else {
        return Ok(());
    };
    print_report(config, &report)?;
    if let Some(path) = &config.csv_path {
        std::fs::write(path, report.to_csv())?;
        info!(path = %path, "timeline CSV written");
    }
    Ok(())
}

fn print_report(config: &HeadlessConfig, report: &RunReport) -> railops::Result<()> {
    if config.json {
        println!("{}", report.to_json()?);
    } else if !config.quiet {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn print_help() {
    println!("RailOps headless simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --scenario <S>   schedule | incident | capacity | weather (default: schedule)");
    println!("    --weather <W>    clear | rain | snow | fog (default: clear)");
    println!("    --time <T>       morning | afternoon | evening | night (default: morning)");
    println!("    --speed <N>      Progress per tick, 1-5 (default: 1)");
    println!("    --trains <N>     Train count, 5-20 (default: 10)");
    println!("    --load <N>       Passenger load %, 20-100 (default: 75)");
    println!("    --ticks <N>      Stop unfinished runs after N ticks (default: 100)");
    println!("    --sweep <N>      Run N random parameter sets");
    println!("    --seed <S>       Seed for --sweep");
    println!("    --csv <FILE>     Write the KPI timeline (or sweep table) as CSV");
    println!("    --json           Print JSON instead of the text report");
    println!("    --quiet          Only warnings on stderr, no text report");
    println!("    -h, --help       Show this help");
}
