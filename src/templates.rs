//! Preset scenario templates.
//!
//! Each template names a scenario and a full parameter set so a run can be
//! configured in one step from the simulation page or a web client.

use crate::core::params::{Scenario, SimulationParameters, TimeOfDay, WeatherCondition};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: SimulationParameters,
}

pub const TEMPLATES: [ScenarioTemplate; 6] = [
    ScenarioTemplate {
        name: "Schedule Delay Impact",
        description: "Delays spreading through the timetable on a normal weekday",
        parameters: SimulationParameters {
            scenario: Scenario::Schedule,
            train_count: 12,
            passenger_load: 70,
            weather_condition: WeatherCondition::Clear,
            time_of_day: TimeOfDay::Morning,
            speed: 2,
        },
    },
    ScenarioTemplate {
        name: "Track Maintenance Impact",
        description: "Half the capacity of a main line closed for works",
        parameters: SimulationParameters {
            scenario: Scenario::Incident,
            train_count: 8,
            passenger_load: 55,
            weather_condition: WeatherCondition::Clear,
            time_of_day: TimeOfDay::Night,
            speed: 1,
        },
    },
    ScenarioTemplate {
        name: "Peak Hour Capacity",
        description: "Rush-hour demand at one and a half times the usual load",
        parameters: SimulationParameters {
            scenario: Scenario::Capacity,
            train_count: 20,
            passenger_load: 100,
            weather_condition: WeatherCondition::Clear,
            time_of_day: TimeOfDay::Evening,
            speed: 2,
        },
    },
    ScenarioTemplate {
        name: "Weather Impact",
        description: "Four hours of heavy rain cutting line speeds",
        parameters: SimulationParameters {
            scenario: Scenario::Weather,
            train_count: 14,
            passenger_load: 65,
            weather_condition: WeatherCondition::Rain,
            time_of_day: TimeOfDay::Afternoon,
            speed: 1,
        },
    },
    ScenarioTemplate {
        name: "Equipment Failure",
        description: "A rolling-stock failure with passenger transfers",
        parameters: SimulationParameters {
            scenario: Scenario::Incident,
            train_count: 10,
            passenger_load: 80,
            weather_condition: WeatherCondition::Fog,
            time_of_day: TimeOfDay::Morning,
            speed: 3,
        },
    },
    ScenarioTemplate {
        name: "Network Optimization",
        description: "Rescheduled services aimed at minimising delays",
        parameters: SimulationParameters {
            scenario: Scenario::Schedule,
            train_count: 16,
            passenger_load: 60,
            weather_condition: WeatherCondition::Clear,
            time_of_day: TimeOfDay::Afternoon,
            speed: 5,
        },
    },
];

pub fn get_template(index: usize) -> Option<&'static ScenarioTemplate> {
    TEMPLATES.get(index)
}

pub fn find_template(name: &str) -> Option<&'static ScenarioTemplate> {
    TEMPLATES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_within_bounds() {
        for template in &TEMPLATES {
            assert_eq!(
                template.parameters,
                template.parameters.clamped(),
                "{} has out-of-range parameters",
                template.name
            );
        }
    }

    #[test]
    fn test_every_scenario_has_a_template() {
        for scenario in Scenario::all() {
            assert!(TEMPLATES.iter().any(|t| t.parameters.scenario == scenario));
        }
    }

    #[test]
    fn test_find_template_ignores_case() {
        let t = find_template("weather impact").unwrap();
        assert_eq!(t.parameters.weather_condition, WeatherCondition::Rain);
        assert!(find_template("Nope").is_none());
        assert!(get_template(TEMPLATES.len()).is_none());
    }
}
