//! JSON messages exchanged with browser clients.
//!
//! Clients send a [`SimulationAction`]:
//! `{"action":"start"}`, `{"action":"set","parameter":"speed","value":3}`,
//! `{"action":"apply_template","index":2}`.
//! The server answers every state change with a serialized
//! [`StateChange`]: `{"kind":"ticked","state":{...}}`.

use crate::core::controller::{SimulationAction, StateChange};
use crate::error::Result;

pub fn parse_command(text: &str) -> Result<SimulationAction> {
    Ok(serde_json::from_str(text.trim())?)
}

pub fn encode_change(change: &StateChange) -> Result<String> {
    Ok(serde_json::to_string(change)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::ChangeKind;
    use crate::core::engine::SimulationState;
    use crate::core::params::{ParameterUpdate, WeatherCondition};

    #[test]
    fn test_parse_lifecycle_commands() {
        assert_eq!(
            parse_command(r#"{"action":"start"}"#).unwrap(),
            SimulationAction::Start
        );
        assert_eq!(
            parse_command(" {\"action\":\"reset\"}\n").unwrap(),
            SimulationAction::Reset
        );
    }

    #[test]
    fn test_parse_parameter_command() {
        let action = parse_command(r#"{"action":"set","parameter":"weather_condition","value":"fog"}"#)
            .unwrap();
        assert_eq!(
            action,
            SimulationAction::Set {
                update: ParameterUpdate::WeatherCondition(WeatherCondition::Fog)
            }
        );
    }

    #[test]
    fn test_malformed_commands_are_errors() {
        assert!(parse_command("start").is_err());
        assert!(parse_command(r#"{"action":"launch"}"#).is_err());
        assert!(parse_command(r#"{"action":"set","parameter":"speed","value":"fast"}"#).is_err());
    }

    #[test]
    fn test_encode_change_shape() {
        let change = StateChange {
            kind: ChangeKind::Ticked,
            state: SimulationState::new(),
        };
        let json: serde_json::Value = serde_json::from_str(&encode_change(&change).unwrap()).unwrap();
        assert_eq!(json["kind"], "ticked");
        assert_eq!(json["state"]["status"], "idle");
        assert_eq!(json["state"]["parameters"]["train_count"], 10);
    }
}
