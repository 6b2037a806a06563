//! Simulation core: parameters, state transitions, tick source and the
//! state container that ties them together.

pub mod constants;
pub mod controller;
pub mod engine;
pub mod params;
pub mod timer;

pub use controller::{ChangeKind, SimulationAction, SimulationController, StateChange};
pub use engine::{SimulationResults, SimulationState, SimulationStatus, TickOutcome};
pub use params::{ParameterUpdate, Scenario, SimulationParameters, TimeOfDay, WeatherCondition};
pub use timer::{TickTimer, TimerHandle};
