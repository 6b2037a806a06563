//! History entries for finished or abandoned runs.

use crate::core::engine::{SimulationResults, SimulationState};
use crate::core::params::SimulationParameters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Stopped,
}

impl RunOutcome {
    pub fn name(&self) -> &'static str {
        match self {
            RunOutcome::Completed => "Completed",
            RunOutcome::Stopped => "Stopped",
        }
    }
}

/// KPI values observed at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSample {
    pub second: u64,
    pub progress: f64,
    pub results: SimulationResults,
}

impl KpiSample {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            second: state.time_elapsed_seconds,
            progress: state.progress,
            results: state.results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub parameters: SimulationParameters,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub outcome: RunOutcome,
    pub progress: f64,
    pub time_elapsed_seconds: u64,
    pub results: SimulationResults,
}

impl RunRecord {
    /// Captures the state as it stood just before the run ended.
    pub fn capture(
        state: &SimulationState,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        outcome: RunOutcome,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            parameters: state.parameters,
            started_at,
            ended_at,
            outcome,
            progress: state.progress,
            time_elapsed_seconds: state.time_elapsed_seconds,
            results: state.results,
        }
    }

    /// Wall-clock length of the run, including time spent paused.
    pub fn wall_seconds(&self) -> i64 {
        (self.ended_at - self.started_at).num_seconds().max(0)
    }
}
