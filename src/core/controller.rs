//! State container for the simulation page.
//!
//! `SimulationController` is owned by whichever surface hosts the
//! simulation (the terminal loop, the headless runner, tests). All
//! mutation flows through [`SimulationController::dispatch`] and
//! [`SimulationController::advance`]; observers receive a
//! [`StateChange`] for every transition that actually changed something.

use crate::core::engine::{SimulationState, SimulationStatus, TickOutcome};
use crate::core::params::{ParameterUpdate, SimulationParameters};
use crate::core::timer::TickTimer;
use crate::report::{KpiSample, RunOutcome, RunRecord, RunReport};
use crate::templates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;
use tracing::{debug, info};

/// A user or remote request against the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SimulationAction {
    Start,
    Pause,
    Stop,
    Reset,
    Set {
        #[serde(flatten)]
        update: ParameterUpdate,
    },
    ApplyTemplate {
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Started,
    Resumed,
    Paused,
    Stopped,
    Ticked,
    Completed,
    ParametersChanged,
}

/// Notification sent to subscribers after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub kind: ChangeKind,
    pub state: SimulationState,
}

pub struct SimulationController {
    state: SimulationState,
    timer: TickTimer,
    subscribers: Vec<Sender<StateChange>>,
    history: VecDeque<RunRecord>,
    history_limit: usize,
    timeline: Vec<KpiSample>,
    run_started_at: Option<DateTime<Utc>>,
    last_report: Option<RunReport>,
}

impl SimulationController {
    pub fn new(parameters: SimulationParameters, history_limit: usize) -> Self {
        Self::with_timer(parameters, history_limit, TickTimer::default())
    }

    pub fn with_timer(
        parameters: SimulationParameters,
        history_limit: usize,
        timer: TickTimer,
    ) -> Self {
        Self {
            state: SimulationState::with_parameters(parameters),
            timer,
            subscribers: Vec::new(),
            history: VecDeque::new(),
            history_limit: history_limit.max(1),
            timeline: Vec::new(),
            run_started_at: None,
            last_report: None,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Finished runs, newest first.
    pub fn history(&self) -> impl Iterator<Item = &RunRecord> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// KPI samples recorded for the current (or last finished) run.
    pub fn timeline(&self) -> &[KpiSample] {
        &self.timeline
    }

    /// Report for the most recently finished run.
    pub fn last_report(&self) -> Option<&RunReport> {
        self.last_report.as_ref()
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Seconds until the next tick while running.
    pub fn next_tick_in(&self, now: Instant) -> Option<f64> {
        self.timer.remaining(now).map(|d| d.as_secs_f64())
    }

    /// Registers an observer. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<StateChange> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Applies an action. Returns true if the state changed.
    pub fn dispatch(&mut self, action: SimulationAction, now: Instant) -> bool {
        match action {
            SimulationAction::Start => self.start(now),
            SimulationAction::Pause => self.pause(),
            SimulationAction::Stop | SimulationAction::Reset => self.stop(),
            SimulationAction::Set { update } => self.set_parameter(update),
            SimulationAction::ApplyTemplate { index } => self.apply_template(index),
        }
    }

    /// Applies every tick that fell due since the last call.
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = self.timer.poll(now);
        let mut applied = 0;
        for _ in 0..due {
            match self.state.tick() {
                TickOutcome::Ignored => {
                    self.timer.cancel();
                    break;
                }
                TickOutcome::Advanced => {
                    applied += 1;
                    self.record_sample();
                    debug!(
                        progress = self.state.progress,
                        elapsed = self.state.time_elapsed_seconds,
                        "tick"
                    );
                    self.notify(ChangeKind::Ticked);
                }
                TickOutcome::Completed => {
                    applied += 1;
                    self.timer.cancel();
                    self.record_sample();
                    self.finish_run(RunOutcome::Completed);
                    info!(
                        elapsed = self.state.time_elapsed_seconds,
                        passengers = self.state.results.total_passengers,
                        "simulation completed"
                    );
                    self.notify(ChangeKind::Completed);
                    break;
                }
            }
        }
        applied
    }

    fn start(&mut self, now: Instant) -> bool {
        let resuming = self.state.status == SimulationStatus::Paused;
        if !self.state.start() {
            return false;
        }
        // arm() replaces any earlier arming, so at most one cadence is live
        self.timer.arm(now);

        if resuming {
            info!(progress = self.state.progress, "simulation resumed");
            self.notify(ChangeKind::Resumed);
        } else {
            self.timeline.clear();
            self.run_started_at = Some(Utc::now());
            info!(
                scenario = self.state.parameters.scenario.name(),
                speed = self.state.parameters.speed,
                "simulation started"
            );
            self.notify(ChangeKind::Started);
        }
        true
    }

    fn pause(&mut self) -> bool {
        if !self.state.pause() {
            return false;
        }
        self.timer.cancel();
        info!(progress = self.state.progress, "simulation paused");
        self.notify(ChangeKind::Paused);
        true
    }

    fn stop(&mut self) -> bool {
        self.timer.cancel();
        let interrupted = matches!(
            self.state.status,
            SimulationStatus::Running | SimulationStatus::Paused
        ) && self.state.progress > 0.0;
        if interrupted {
            self.finish_run(RunOutcome::Stopped);
        }
        self.run_started_at = None;

        if !self.state.stop() {
            return false;
        }
        info!("simulation stopped");
        self.notify(ChangeKind::Stopped);
        true
    }

    fn set_parameter(&mut self, update: ParameterUpdate) -> bool {
        if !self.state.set_parameter(update) {
            debug!(parameter = update.key(), "parameter update ignored");
            return false;
        }
        info!(parameter = update.key(), "parameter changed");
        self.notify(ChangeKind::ParametersChanged);
        true
    }

    fn apply_template(&mut self, index: usize) -> bool {
        let Some(template) = templates::get_template(index) else {
            return false;
        };
        if !self.state.set_parameters(template.parameters) {
            return false;
        }
        info!(template = template.name, "template applied");
        self.notify(ChangeKind::ParametersChanged);
        true
    }

    fn record_sample(&mut self) {
        self.timeline.push(KpiSample::from_state(&self.state));
    }

    fn finish_run(&mut self, outcome: RunOutcome) {
        let ended_at = Utc::now();
        let started_at = self.run_started_at.take().unwrap_or(ended_at);
        let record = RunRecord::capture(&self.state, started_at, ended_at, outcome);

        self.last_report = Some(RunReport::new(record.clone(), self.timeline.clone()));
        self.history.push_front(record);
        self.history.truncate(self.history_limit);
    }

    fn notify(&mut self, kind: ChangeKind) {
        let change = StateChange {
            kind,
            state: self.state.clone(),
        };
        self.subscribers
            .retain(|tx| tx.send(change.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn controller() -> SimulationController {
        SimulationController::new(SimulationParameters::default(), 50)
    }

    #[test]
    fn test_dispatch_start_arms_timer() {
        let mut c = controller();
        let t0 = Instant::now();
        assert!(c.dispatch(SimulationAction::Start, t0));
        assert!(c.timer_armed());
        assert_eq!(c.state().status, SimulationStatus::Running);
    }

    #[test]
    fn test_pause_cancels_timer() {
        let mut c = controller();
        let t0 = Instant::now();
        c.dispatch(SimulationAction::Start, t0);
        c.dispatch(SimulationAction::Pause, t0);
        assert!(!c.timer_armed());
        assert_eq!(c.advance(t0 + Duration::from_secs(3)), 0);
    }

    #[test]
    fn test_subscribers_see_transitions_only() {
        let mut c = controller();
        let rx = c.subscribe();
        let t0 = Instant::now();
        c.dispatch(SimulationAction::Pause, t0); // no-op
        c.dispatch(SimulationAction::Start, t0);
        c.dispatch(SimulationAction::Start, t0); // no-op
        c.advance(t0 + Duration::from_secs(1));

        let kinds: Vec<ChangeKind> = rx.try_iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::Started, ChangeKind::Ticked]);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut c = controller();
        let rx = c.subscribe();
        drop(rx);
        c.dispatch(SimulationAction::Start, Instant::now());
        assert_eq!(c.subscriber_count(), 0);
    }

    #[test]
    fn test_template_ignored_while_running() {
        let mut c = controller();
        let t0 = Instant::now();
        c.dispatch(SimulationAction::Start, t0);
        assert!(!c.dispatch(SimulationAction::ApplyTemplate { index: 2 }, t0));
        c.dispatch(SimulationAction::Stop, t0);
        assert!(c.dispatch(SimulationAction::ApplyTemplate { index: 2 }, t0));
        assert_eq!(c.state().parameters.train_count, 20);
        assert!(!c.dispatch(SimulationAction::ApplyTemplate { index: 99 }, t0));
    }

    #[test]
    fn test_action_json_shape() {
        let start: SimulationAction = serde_json::from_str(r#"{"action":"start"}"#).unwrap();
        assert_eq!(start, SimulationAction::Start);
        let set: SimulationAction =
            serde_json::from_str(r#"{"action":"set","parameter":"speed","value":3}"#).unwrap();
        assert_eq!(
            set,
            SimulationAction::Set {
                update: ParameterUpdate::Speed(3)
            }
        );
        let template: SimulationAction =
            serde_json::from_str(r#"{"action":"apply_template","index":1}"#).unwrap();
        assert_eq!(template, SimulationAction::ApplyTemplate { index: 1 });
    }
}
