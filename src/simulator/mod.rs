//! Headless simulation runner.
//!
//! Runs scenarios without a terminal, either once with explicit
//! parameters or as a seeded sweep over random parameter sets. Runs go
//! through `SimulationController`, so the headless numbers match what the
//! dashboard shows.

mod config;
mod report;
mod runner;

pub use config::{parse_choice, HeadlessConfig, Invocation, DEFAULT_MAX_TICKS};
pub use report::SweepReport;
pub use runner::{random_parameters, run_scenario, run_sweep};
