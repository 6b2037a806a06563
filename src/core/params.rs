//! Simulation parameters and the clamped updates applied to them.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// The scenario family a run models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    #[default]
    Schedule,
    Incident,
    Capacity,
    Weather,
}

impl Scenario {
    pub fn all() -> [Scenario; 4] {
        [
            Scenario::Schedule,
            Scenario::Incident,
            Scenario::Capacity,
            Scenario::Weather,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Schedule => "Schedule",
            Scenario::Incident => "Incident",
            Scenario::Capacity => "Capacity",
            Scenario::Weather => "Weather",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Schedule => "Delay propagation across the timetable",
            Scenario::Incident => "Breakdowns and track disruptions",
            Scenario::Capacity => "Peak-hour demand against fleet capacity",
            Scenario::Weather => "Adverse weather slowing the network",
        }
    }

    pub fn next(&self) -> Scenario {
        cycle_next(&Self::all(), *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Rain,
    Snow,
    Fog,
}

impl WeatherCondition {
    pub fn all() -> [WeatherCondition; 4] {
        [
            WeatherCondition::Clear,
            WeatherCondition::Rain,
            WeatherCondition::Snow,
            WeatherCondition::Fog,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Fog => "Fog",
        }
    }

    pub fn next(&self) -> WeatherCondition {
        cycle_next(&Self::all(), *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn all() -> [TimeOfDay; 4] {
        [
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    pub fn next(&self) -> TimeOfDay {
        cycle_next(&Self::all(), *self)
    }
}

fn cycle_next<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Inputs to a simulation run.
///
/// Numeric fields always hold values inside their documented bounds;
/// every write goes through [`SimulationParameters::apply`] or
/// [`SimulationParameters::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub scenario: Scenario,
    pub train_count: u32,
    /// Percentage of seated capacity in use
    pub passenger_load: u32,
    pub weather_condition: WeatherCondition,
    pub time_of_day: TimeOfDay,
    /// Progress points gained per tick
    pub speed: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            train_count: DEFAULT_TRAIN_COUNT,
            passenger_load: DEFAULT_PASSENGER_LOAD,
            weather_condition: WeatherCondition::default(),
            time_of_day: TimeOfDay::default(),
            speed: DEFAULT_SPEED,
        }
    }
}

impl SimulationParameters {
    /// Returns a copy with every numeric field pulled inside its bounds.
    pub fn clamped(mut self) -> Self {
        self.train_count = self.train_count.clamp(TRAIN_COUNT_MIN, TRAIN_COUNT_MAX);
        self.passenger_load = self
            .passenger_load
            .clamp(PASSENGER_LOAD_MIN, PASSENGER_LOAD_MAX);
        self.speed = self.speed.clamp(SPEED_MIN, SPEED_MAX);
        self
    }

    /// Merges a single update, clamping numeric values. Returns true if
    /// the stored value changed.
    pub fn apply(&mut self, update: ParameterUpdate) -> bool {
        let before = *self;
        match update {
            ParameterUpdate::Scenario(s) => self.scenario = s,
            ParameterUpdate::TrainCount(n) => {
                self.train_count = n.clamp(TRAIN_COUNT_MIN, TRAIN_COUNT_MAX)
            }
            ParameterUpdate::PassengerLoad(n) => {
                self.passenger_load = n.clamp(PASSENGER_LOAD_MIN, PASSENGER_LOAD_MAX)
            }
            ParameterUpdate::WeatherCondition(w) => self.weather_condition = w,
            ParameterUpdate::TimeOfDay(t) => self.time_of_day = t,
            ParameterUpdate::Speed(n) => self.speed = n.clamp(SPEED_MIN, SPEED_MAX),
        }
        *self != before
    }
}

/// A write to one simulation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "parameter", content = "value", rename_all = "snake_case")]
pub enum ParameterUpdate {
    Scenario(Scenario),
    TrainCount(u32),
    PassengerLoad(u32),
    WeatherCondition(WeatherCondition),
    TimeOfDay(TimeOfDay),
    Speed(u32),
}

impl ParameterUpdate {
    /// Whether this parameter may change while a run is in progress.
    /// Only the playback speed can; everything else shapes the scenario.
    pub fn allowed_while_running(&self) -> bool {
        matches!(self, ParameterUpdate::Speed(_))
    }

    pub fn key(&self) -> &'static str {
        match self {
            ParameterUpdate::Scenario(_) => "scenario",
            ParameterUpdate::TrainCount(_) => "train_count",
            ParameterUpdate::PassengerLoad(_) => "passenger_load",
            ParameterUpdate::WeatherCondition(_) => "weather_condition",
            ParameterUpdate::TimeOfDay(_) => "time_of_day",
            ParameterUpdate::Speed(_) => "speed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        let p = SimulationParameters::default();
        assert_eq!(p, p.clamped());
        assert_eq!(p.scenario, Scenario::Schedule);
        assert_eq!(p.speed, 1);
    }

    #[test]
    fn test_apply_clamps_out_of_range_values() {
        let mut p = SimulationParameters::default();
        p.apply(ParameterUpdate::TrainCount(99));
        assert_eq!(p.train_count, TRAIN_COUNT_MAX);
        p.apply(ParameterUpdate::TrainCount(0));
        assert_eq!(p.train_count, TRAIN_COUNT_MIN);
        p.apply(ParameterUpdate::PassengerLoad(5));
        assert_eq!(p.passenger_load, PASSENGER_LOAD_MIN);
        p.apply(ParameterUpdate::Speed(12));
        assert_eq!(p.speed, SPEED_MAX);
    }

    #[test]
    fn test_apply_reports_change() {
        let mut p = SimulationParameters::default();
        assert!(!p.apply(ParameterUpdate::Speed(DEFAULT_SPEED)));
        assert!(p.apply(ParameterUpdate::WeatherCondition(WeatherCondition::Snow)));
    }

    #[test]
    fn test_only_speed_allowed_while_running() {
        assert!(ParameterUpdate::Speed(3).allowed_while_running());
        assert!(!ParameterUpdate::TrainCount(8).allowed_while_running());
        assert!(!ParameterUpdate::Scenario(Scenario::Weather).allowed_while_running());
        assert!(!ParameterUpdate::TimeOfDay(TimeOfDay::Night).allowed_while_running());
    }

    #[test]
    fn test_enum_cycles_wrap() {
        assert_eq!(Scenario::Weather.next(), Scenario::Schedule);
        assert_eq!(WeatherCondition::Clear.next(), WeatherCondition::Rain);
        assert_eq!(TimeOfDay::Night.next(), TimeOfDay::Morning);
    }

    #[test]
    fn test_update_json_shape() {
        let json = serde_json::to_string(&ParameterUpdate::Speed(3)).unwrap();
        assert_eq!(json, r#"{"parameter":"speed","value":3}"#);
        let parsed: ParameterUpdate =
            serde_json::from_str(r#"{"parameter":"weather_condition","value":"fog"}"#).unwrap();
        assert_eq!(parsed, ParameterUpdate::WeatherCondition(WeatherCondition::Fog));
    }
}
