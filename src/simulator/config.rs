//! Headless runner configuration and flag parsing.

use crate::core::params::SimulationParameters;
use serde::de::DeserializeOwned;

/// Enough ticks for a speed-1 run to finish.
pub const DEFAULT_MAX_TICKS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessConfig {
    /// Parameters for a single run (ignored by sweeps)
    pub parameters: SimulationParameters,

    /// Ticks before an unfinished run is stopped
    pub max_ticks: u64,

    /// Number of random parameter sets to run instead of a single run
    pub sweep_runs: Option<u32>,

    /// Random seed for sweeps (None = entropy)
    pub seed: Option<u64>,

    /// Write the timeline (or sweep table) as CSV to this file
    pub csv_path: Option<String>,

    /// Print JSON instead of the text report
    pub json: bool,

    /// Suppress the text report
    pub quiet: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            parameters: SimulationParameters::default(),
            max_ticks: DEFAULT_MAX_TICKS,
            sweep_runs: None,
            seed: None,
            csv_path: None,
            json: false,
            quiet: false,
        }
    }
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(HeadlessConfig),
    Help,
}

/// Parses a snake_case enum value the same way the JSON protocol does,
/// e.g. `high_speed` or `rain`.
pub fn parse_choice<T: DeserializeOwned>(flag: &str, raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase()))
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Invalid number for {}: {}", flag, raw))
}

impl HeadlessConfig {
    /// Parses flags (without the program name). Numeric parameters are
    /// clamped to their bounds like any other parameter write.
    pub fn from_args(args: &[String]) -> Result<Invocation, String> {
        let mut config = HeadlessConfig::default();
        let mut p = config.parameters;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if matches!(flag, "--help" | "-h") {
                return Ok(Invocation::Help);
            }
            match flag {
                "--json" => config.json = true,
                "--quiet" | "-q" => config.quiet = true,
                _ => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| format!("Missing value for {}", flag))?;
                    match flag {
                        "--scenario" => p.scenario = parse_choice(flag, value)?,
                        "--weather" => p.weather_condition = parse_choice(flag, value)?,
                        "--time" => p.time_of_day = parse_choice(flag, value)?,
                        "--speed" => p.speed = parse_number(flag, value)?,
                        "--trains" => p.train_count = parse_number(flag, value)?,
                        "--load" => p.passenger_load = parse_number(flag, value)?,
                        "--ticks" => config.max_ticks = parse_number::<u64>(flag, value)?.max(1),
                        "--sweep" => config.sweep_runs = Some(parse_number::<u32>(flag, value)?.max(1)),
                        "--seed" => config.seed = Some(parse_number(flag, value)?),
                        "--csv" => config.csv_path = Some(value.clone()),
                        other => return Err(format!("Unknown option: {}", other)),
                    }
                    i += 1;
                }
            }
            i += 1;
        }

        config.parameters = p.clamped();
        Ok(Invocation::Run(config))
    }
}
