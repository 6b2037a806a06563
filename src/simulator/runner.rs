//! Drives the simulation controller against a synthetic clock.
//!
//! Each step moves the clock forward by exactly one tick interval, so a
//! run takes as long as the engine needs rather than real seconds, while
//! still going through the same timer and history code as the dashboard.

use super::config::HeadlessConfig;
use super::report::SweepReport;
use crate::core::constants::{
    PASSENGER_LOAD_MAX, PASSENGER_LOAD_MIN, SPEED_MAX, SPEED_MIN, TICK_INTERVAL_MS,
    TRAIN_COUNT_MAX, TRAIN_COUNT_MIN,
};
use crate::core::controller::{SimulationAction, SimulationController};
use crate::core::engine::SimulationStatus;
use crate::core::params::{Scenario, SimulationParameters, TimeOfDay, WeatherCondition};
use crate::report::RunReport;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::debug;

/// Runs one scenario until it completes or `max_ticks` have elapsed, in
/// which case it is stopped. Returns `None` only if no tick was applied.
pub fn run_scenario(parameters: SimulationParameters, max_ticks: u64) -> Option<RunReport> {
    let mut controller = SimulationController::new(parameters, 1);
    let interval = Duration::from_millis(TICK_INTERVAL_MS);
    let t0 = Instant::now();

    controller.dispatch(SimulationAction::Start, t0);
    let mut clock = t0;
    for _ in 0..max_ticks {
        clock += interval;
        controller.advance(clock);
        if controller.state().status == SimulationStatus::Completed {
            break;
        }
    }

    if controller.state().status != SimulationStatus::Completed {
        controller.dispatch(SimulationAction::Stop, clock);
    }
    debug!(
        scenario = parameters.scenario.name(),
        samples = controller.timeline().len(),
        "headless run finished"
    );
    controller.last_report().cloned()
}

/// Random parameter set covering every enum value and numeric bound.
pub fn random_parameters(rng: &mut impl Rng) -> SimulationParameters {
    SimulationParameters {
        scenario: *Scenario::all().choose(rng).unwrap_or(&Scenario::Schedule),
        train_count: rng.gen_range(TRAIN_COUNT_MIN..=TRAIN_COUNT_MAX),
        passenger_load: rng.gen_range(PASSENGER_LOAD_MIN..=PASSENGER_LOAD_MAX),
        weather_condition: *WeatherCondition::all()
            .choose(rng)
            .unwrap_or(&WeatherCondition::Clear),
        time_of_day: *TimeOfDay::all().choose(rng).unwrap_or(&TimeOfDay::Morning),
        speed: rng.gen_range(SPEED_MIN..=SPEED_MAX),
    }
}

/// Runs `config.sweep_runs` random parameter sets. Run `i` uses
/// `seed + i`, so a sweep is reproducible from its seed alone.
pub fn run_sweep(config: &HeadlessConfig) -> SweepReport {
    let runs = config.sweep_runs.unwrap_or(1);
    let mut reports = Vec::with_capacity(runs as usize);

    for run_idx in 0..runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };
        let parameters = random_parameters(&mut rng);
        if let Some(report) = run_scenario(parameters, config.max_ticks) {
            reports.push(report);
        }
    }

    SweepReport::new(reports, config.seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RunOutcome;

    #[test]
    fn test_speed_one_completes_in_one_hundred_ticks() {
        let report = run_scenario(SimulationParameters::default(), 100).unwrap();
        assert_eq!(report.record.outcome, RunOutcome::Completed);
        assert_eq!(report.record.time_elapsed_seconds, 100);
        assert_eq!(report.timeline.len(), 100);
        assert_eq!(report.record.results.total_passengers, 45000);
    }

    #[test]
    fn test_tick_budget_stops_the_run() {
        let report = run_scenario(SimulationParameters::default(), 10).unwrap();
        assert_eq!(report.record.outcome, RunOutcome::Stopped);
        assert_eq!(report.record.progress, 10.0);
        assert_eq!(report.timeline.len(), 10);
    }

    #[test]
    fn test_zero_ticks_records_nothing() {
        assert!(run_scenario(SimulationParameters::default(), 0).is_none());
    }

    #[test]
    fn test_random_parameters_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let p = random_parameters(&mut rng);
            assert_eq!(p, p.clamped());
        }
    }

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let config = HeadlessConfig {
            sweep_runs: Some(5),
            seed: Some(42),
            ..Default::default()
        };
        let a: Vec<_> = run_sweep(&config)
            .runs
            .iter()
            .map(|r| r.record.parameters)
            .collect();
        let b: Vec<_> = run_sweep(&config)
            .runs
            .iter()
            .map(|r| r.record.parameters)
            .collect();
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
    }
}
