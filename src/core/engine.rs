//! Simulation state and its transition functions.
//!
//! Every operation here is total: actions that make no sense in the
//! current status leave the state untouched and report `false` (or
//! [`TickOutcome::Ignored`]) instead of failing. The controller uses
//! those return values to decide whether subscribers need to hear about
//! a change.

use crate::core::constants::*;
use crate::core::params::{ParameterUpdate, SimulationParameters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimulationStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl SimulationStatus {
    pub fn name(&self) -> &'static str {
        match self {
            SimulationStatus::Idle => "Idle",
            SimulationStatus::Running => "Running",
            SimulationStatus::Paused => "Paused",
            SimulationStatus::Completed => "Completed",
        }
    }
}

/// Derived KPIs shown on the simulation page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulationResults {
    pub on_time_performance: f64,
    pub passenger_satisfaction: f64,
    pub energy_efficiency: f64,
    pub total_passengers: u64,
}

impl SimulationResults {
    /// KPI values for a given progress percentage.
    pub fn for_progress(progress: f64) -> Self {
        let p = progress.clamp(PROGRESS_MIN, PROGRESS_MAX);
        Self {
            on_time_performance: (ON_TIME_BASE + p * ON_TIME_SPAN / 100.0).min(ON_TIME_CAP),
            passenger_satisfaction: (SATISFACTION_BASE + p * SATISFACTION_SPAN / 100.0)
                .min(SATISFACTION_CAP),
            energy_efficiency: (ENERGY_BASE + p * ENERGY_SPAN / 100.0).min(ENERGY_CAP),
            total_passengers: (p * PASSENGERS_AT_COMPLETION / 100.0).floor() as u64,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Ignored,
    /// Progress advanced and the run continues
    Advanced,
    /// Progress reached 100 on this tick
    Completed,
}

/// Full state of the simulation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulationState {
    pub status: SimulationStatus,
    /// Percentage complete, 0-100
    pub progress: f64,
    pub time_elapsed_seconds: u64,
    pub parameters: SimulationParameters,
    pub results: SimulationResults,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: SimulationParameters) -> Self {
        Self {
            parameters: parameters.clamped(),
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == SimulationStatus::Running
    }

    /// idle|paused -> running.
    pub fn start(&mut self) -> bool {
        match self.status {
            SimulationStatus::Idle | SimulationStatus::Paused => {
                self.status = SimulationStatus::Running;
                true
            }
            SimulationStatus::Running | SimulationStatus::Completed => false,
        }
    }

    /// running -> paused.
    pub fn pause(&mut self) -> bool {
        if self.status == SimulationStatus::Running {
            self.status = SimulationStatus::Paused;
            true
        } else {
            false
        }
    }

    /// Any status -> idle, clearing progress, elapsed time and results.
    /// Parameters survive.
    pub fn stop(&mut self) -> bool {
        let was_pristine = self.status == SimulationStatus::Idle
            && self.progress == 0.0
            && self.time_elapsed_seconds == 0
            && self.results == SimulationResults::default();

        self.status = SimulationStatus::Idle;
        self.progress = 0.0;
        self.time_elapsed_seconds = 0;
        self.results = SimulationResults::default();

        !was_pristine
    }

    pub fn reset(&mut self) -> bool {
        self.stop()
    }

    /// Merges a parameter write. Scenario-shaping parameters are locked
    /// while running; speed is always accepted.
    pub fn set_parameter(&mut self, update: ParameterUpdate) -> bool {
        if self.is_running() && !update.allowed_while_running() {
            return false;
        }
        self.parameters.apply(update)
    }

    /// Replaces every parameter at once, subject to the same lock as
    /// [`SimulationState::set_parameter`].
    pub fn set_parameters(&mut self, parameters: SimulationParameters) -> bool {
        if self.is_running() {
            return false;
        }
        let parameters = parameters.clamped();
        if parameters == self.parameters {
            return false;
        }
        self.parameters = parameters;
        true
    }

    /// One second of simulated operation.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        self.progress = (self.progress + self.parameters.speed as f64).min(PROGRESS_MAX);
        self.time_elapsed_seconds += 1;
        self.results = SimulationResults::for_progress(self.progress);

        if self.progress >= PROGRESS_MAX {
            self.status = SimulationStatus::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::{Scenario, WeatherCondition};

    fn running_with_speed(speed: u32) -> SimulationState {
        let mut state = SimulationState::new();
        state.set_parameter(ParameterUpdate::Speed(speed));
        state.start();
        state
    }

    #[test]
    fn test_new_state_is_idle_with_zero_results() {
        let state = SimulationState::new();
        assert_eq!(state.status, SimulationStatus::Idle);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.results, SimulationResults::default());
    }

    #[test]
    fn test_start_from_idle_and_paused() {
        let mut state = SimulationState::new();
        assert!(state.start());
        assert!(state.pause());
        assert_eq!(state.status, SimulationStatus::Paused);
        assert!(state.start());
        assert_eq!(state.status, SimulationStatus::Running);
    }

    #[test]
    fn test_start_is_noop_when_running_or_completed() {
        let mut state = running_with_speed(5);
        let before = state.clone();
        assert!(!state.start());
        assert_eq!(state, before);

        for _ in 0..20 {
            state.tick();
        }
        assert_eq!(state.status, SimulationStatus::Completed);
        let before = state.clone();
        assert!(!state.start());
        assert_eq!(state, before);
    }

    #[test]
    fn test_pause_only_from_running() {
        let mut state = SimulationState::new();
        assert!(!state.pause());
        assert_eq!(state.status, SimulationStatus::Idle);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut state = SimulationState::new();
        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert_eq!(state.time_elapsed_seconds, 0);

        let mut paused = running_with_speed(2);
        paused.tick();
        paused.pause();
        let before = paused.clone();
        assert_eq!(paused.tick(), TickOutcome::Ignored);
        assert_eq!(paused, before);
    }

    #[test]
    fn test_ten_ticks_at_speed_two() {
        let mut state = running_with_speed(2);
        for _ in 0..10 {
            assert_eq!(state.tick(), TickOutcome::Advanced);
        }
        assert_eq!(state.progress, 20.0);
        assert_eq!(state.status, SimulationStatus::Running);
        assert_eq!(state.time_elapsed_seconds, 10);
        assert_eq!(state.results.total_passengers, 9000);
    }

    #[test]
    fn test_final_tick_caps_and_completes() {
        let mut state = running_with_speed(5);
        state.progress = 98.0;
        assert_eq!(state.tick(), TickOutcome::Completed);
        assert_eq!(state.progress, 100.0);
        assert_eq!(state.status, SimulationStatus::Completed);
        assert_eq!(state.results.total_passengers, 45_000);
        assert_eq!(state.results.on_time_performance, 95.0);
        assert_eq!(state.results.passenger_satisfaction, 92.0);
        assert_eq!(state.results.energy_efficiency, 88.0);
    }

    #[test]
    fn test_stop_clears_everything_but_parameters() {
        let mut state = running_with_speed(3);
        state.set_parameter(ParameterUpdate::Speed(4));
        state.tick();
        state.tick();
        let params = state.parameters;

        assert!(state.stop());
        assert_eq!(state.status, SimulationStatus::Idle);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.time_elapsed_seconds, 0);
        assert_eq!(state.results, SimulationResults::default());
        assert_eq!(state.parameters, params);

        // Stopping a pristine idle state changes nothing
        assert!(!state.reset());
    }

    #[test]
    fn test_scenario_parameters_locked_while_running() {
        let mut state = running_with_speed(1);
        assert!(!state.set_parameter(ParameterUpdate::Scenario(Scenario::Weather)));
        assert!(!state.set_parameter(ParameterUpdate::TrainCount(15)));
        assert!(!state.set_parameter(ParameterUpdate::PassengerLoad(40)));
        assert!(!state.set_parameter(ParameterUpdate::WeatherCondition(
            WeatherCondition::Snow
        )));
        assert!(state.set_parameter(ParameterUpdate::Speed(4)));
        assert_eq!(state.parameters.scenario, Scenario::Schedule);
        assert_eq!(state.parameters.speed, 4);

        state.pause();
        assert!(state.set_parameter(ParameterUpdate::TrainCount(15)));
        assert_eq!(state.parameters.train_count, 15);
    }

    #[test]
    fn test_set_parameters_rejected_while_running() {
        let mut state = running_with_speed(1);
        let mut params = state.parameters;
        params.train_count = 6;
        assert!(!state.set_parameters(params));

        state.stop();
        assert!(state.set_parameters(params));
        assert_eq!(state.parameters.train_count, 6);
    }

    #[test]
    fn test_results_zero_progress_values() {
        let r = SimulationResults::for_progress(0.0);
        assert_eq!(r.on_time_performance, 85.0);
        assert_eq!(r.passenger_satisfaction, 80.0);
        assert_eq!(r.energy_efficiency, 70.0);
        assert_eq!(r.total_passengers, 0);
    }

    #[test]
    fn test_snapshot_serializes_snake_case() {
        let state = running_with_speed(2);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""status":"running""#));
        assert!(json.contains(r#""scenario":"schedule""#));
    }
}
