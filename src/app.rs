//! Dashboard application state.
//!
//! `App` owns the simulation controller plus everything the pages need to
//! render: the catalog, filters, the activity log and the page cursor.
//! The terminal loop feeds it key events and calls [`App::sync`] once per
//! frame.

use crate::analytics::DashboardSummary;
use crate::catalog::{MockCatalog, ScheduleFilter, TrackFilter, TrainFilter};
use crate::config::AppConfig;
use crate::core::constants::MAX_ACTIVITY_LOG_ENTRIES;
use crate::core::controller::{ChangeKind, SimulationAction, SimulationController, StateChange};
use crate::core::params::ParameterUpdate;
use crate::input::{map_key, InputAction};
use crate::templates::TEMPLATES;
use chrono::Local;
use crossterm::event::KeyEvent;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Fleet,
    Tracks,
    Schedules,
    Analytics,
    Predictions,
    Simulation,
}

impl Page {
    pub fn all() -> [Page; 6] {
        [
            Page::Fleet,
            Page::Tracks,
            Page::Schedules,
            Page::Analytics,
            Page::Predictions,
            Page::Simulation,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Fleet => "Fleet",
            Page::Tracks => "Tracks",
            Page::Schedules => "Schedules",
            Page::Analytics => "Analytics",
            Page::Predictions => "Predictions",
            Page::Simulation => "Simulation",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Page {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Pages that list catalog records and accept search/filter keys.
    pub fn is_catalog(&self) -> bool {
        matches!(self, Page::Fleet | Page::Tracks | Page::Schedules)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

pub const TRAIN_COUNT_STEP: u32 = 1;
pub const PASSENGER_LOAD_STEP: u32 = 5;

pub struct App {
    pub controller: SimulationController,
    pub catalog: MockCatalog,
    pub summary: DashboardSummary,
    pub page: Page,
    pub mode: InputMode,
    pub train_filter: TrainFilter,
    pub track_filter: TrackFilter,
    pub schedule_filter: ScheduleFilter,
    /// Recent transitions, newest first
    pub activity: VecDeque<String>,
    /// Index of the template `t` applies next
    pub template_cursor: usize,
    changes: Receiver<StateChange>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut controller =
            SimulationController::new(config.default_parameters, config.history_limit);
        let changes = controller.subscribe();
        let catalog = MockCatalog;

        Self {
            controller,
            catalog,
            summary: DashboardSummary::from_catalog(&catalog),
            page: Page::Fleet,
            mode: InputMode::Normal,
            train_filter: TrainFilter::default(),
            track_filter: TrackFilter::default(),
            schedule_filter: ScheduleFilter::default(),
            activity: VecDeque::new(),
            template_cursor: 0,
            changes,
        }
    }

    /// Advances the simulation clock and folds any state changes into the
    /// activity log. Call once per frame.
    pub fn sync(&mut self, now: Instant) {
        self.controller.advance(now);
        self.drain_changes();
    }

    /// Applies a simulation action from outside the keyboard path
    /// (e.g. a web client).
    pub fn dispatch(&mut self, action: SimulationAction, now: Instant) -> bool {
        let changed = self.controller.dispatch(action, now);
        self.drain_changes();
        changed
    }

    /// Handles one key press. Returns false when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(action) = map_key(self.page, self.mode, key) else {
            return true;
        };
        self.handle_action(action, now)
    }

    pub fn handle_action(&mut self, action: InputAction, now: Instant) -> bool {
        let params = self.controller.state().parameters;
        let sim = |a: SimulationAction| Some(a);
        let set = |update: ParameterUpdate| Some(SimulationAction::Set { update });

        let sim_action = match action {
            InputAction::Quit => return false,
            InputAction::NextPage => {
                self.page = self.page.next();
                None
            }
            InputAction::PrevPage => {
                self.page = self.page.prev();
                None
            }
            InputAction::GoToPage(page) => {
                self.page = page;
                None
            }

            InputAction::Start => sim(SimulationAction::Start),
            InputAction::Pause => sim(SimulationAction::Pause),
            InputAction::Stop => sim(SimulationAction::Stop),
            InputAction::Reset => sim(SimulationAction::Reset),
            InputAction::SpeedUp => set(ParameterUpdate::Speed(params.speed + 1)),
            InputAction::SpeedDown => {
                set(ParameterUpdate::Speed(params.speed.saturating_sub(1)))
            }
            InputAction::CycleScenario => set(ParameterUpdate::Scenario(params.scenario.next())),
            InputAction::CycleWeather => set(ParameterUpdate::WeatherCondition(
                params.weather_condition.next(),
            )),
            InputAction::CycleTimeOfDay => {
                set(ParameterUpdate::TimeOfDay(params.time_of_day.next()))
            }
            InputAction::TrainsUp => set(ParameterUpdate::TrainCount(
                params.train_count + TRAIN_COUNT_STEP,
            )),
            InputAction::TrainsDown => set(ParameterUpdate::TrainCount(
                params.train_count.saturating_sub(TRAIN_COUNT_STEP),
            )),
            InputAction::LoadUp => set(ParameterUpdate::PassengerLoad(
                params.passenger_load + PASSENGER_LOAD_STEP,
            )),
            InputAction::LoadDown => set(ParameterUpdate::PassengerLoad(
                params.passenger_load.saturating_sub(PASSENGER_LOAD_STEP),
            )),
            InputAction::NextTemplate => {
                let index = self.template_cursor;
                if !self.controller.state().is_running() {
                    self.template_cursor = (self.template_cursor + 1) % TEMPLATES.len();
                }
                sim(SimulationAction::ApplyTemplate { index })
            }

            InputAction::BeginSearch => {
                self.mode = InputMode::Search;
                None
            }
            InputAction::SearchChar(c) => {
                if let Some(search) = self.search_mut() {
                    search.push(c);
                }
                None
            }
            InputAction::SearchBackspace => {
                if let Some(search) = self.search_mut() {
                    search.pop();
                }
                None
            }
            InputAction::EndSearch => {
                self.mode = InputMode::Normal;
                None
            }
            InputAction::ClearSearch => {
                if let Some(search) = self.search_mut() {
                    search.clear();
                }
                self.mode = InputMode::Normal;
                None
            }
            InputAction::CycleFilter => {
                match self.page {
                    Page::Fleet => self.train_filter.cycle_status(),
                    Page::Tracks => self.track_filter.cycle_status(),
                    Page::Schedules => self.schedule_filter.cycle_status(),
                    _ => {}
                }
                None
            }
        };

        if let Some(a) = sim_action {
            self.dispatch(a, now);
        }
        true
    }

    /// Search text of the current catalog page.
    pub fn current_search(&self) -> Option<&str> {
        match self.page {
            Page::Fleet => Some(&self.train_filter.search),
            Page::Tracks => Some(&self.track_filter.search),
            Page::Schedules => Some(&self.schedule_filter.search),
            _ => None,
        }
    }

    fn search_mut(&mut self) -> Option<&mut String> {
        match self.page {
            Page::Fleet => Some(&mut self.train_filter.search),
            Page::Tracks => Some(&mut self.track_filter.search),
            Page::Schedules => Some(&mut self.schedule_filter.search),
            _ => None,
        }
    }

    fn drain_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            if let Some(line) = describe_change(&change) {
                self.push_activity(line);
            }
        }
    }

    fn push_activity(&mut self, line: String) {
        let stamped = format!("{} {}", Local::now().format("%H:%M:%S"), line);
        self.activity.push_front(stamped);
        self.activity.truncate(MAX_ACTIVITY_LOG_ENTRIES);
    }
}

/// Activity log line for a change; per-tick updates are not logged.
fn describe_change(change: &StateChange) -> Option<String> {
    let s = &change.state;
    let p = &s.parameters;
    let line = match change.kind {
        ChangeKind::Ticked => return None,
        ChangeKind::Started => format!(
            "Started {} scenario ({} trains, {}% load, {}x)",
            p.scenario.name(),
            p.train_count,
            p.passenger_load,
            p.speed
        ),
        ChangeKind::Resumed => format!("Resumed at {:.0}%", s.progress),
        ChangeKind::Paused => format!("Paused at {:.0}%", s.progress),
        ChangeKind::Stopped => "Stopped and reset".to_string(),
        ChangeKind::Completed => format!(
            "Completed in {}s, {} passengers",
            s.time_elapsed_seconds, s.results.total_passengers
        ),
        ChangeKind::ParametersChanged => format!(
            "Parameters: {} / {} / {} / {} trains / {}% / {}x",
            p.scenario.name(),
            p.weather_condition.name(),
            p.time_of_day.name(),
            p.train_count,
            p.passenger_load,
            p.speed
        ),
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::SimulationStatus;
    use std::time::Duration;

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Simulation.next(), Page::Fleet);
        assert_eq!(Page::Fleet.prev(), Page::Simulation);
    }

    #[test]
    fn test_start_and_tick_through_actions() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action(InputAction::SpeedUp, t0);
        app.handle_action(InputAction::Start, t0);
        app.sync(t0 + Duration::from_secs(1));
        assert_eq!(app.controller.state().progress, 2.0);
        // Transition lines only: parameter change + start
        assert_eq!(app.activity.len(), 2);
        assert!(app.activity[0].contains("Started Schedule"));
    }

    #[test]
    fn test_locked_parameters_do_not_log() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action(InputAction::Start, t0);
        app.handle_action(InputAction::TrainsUp, t0);
        assert_eq!(app.controller.state().parameters.train_count, 10);
        assert_eq!(app.activity.len(), 1);
    }

    #[test]
    fn test_template_cursor_advances_when_idle() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action(InputAction::NextTemplate, t0);
        assert_eq!(app.template_cursor, 1);
        assert_eq!(
            app.controller.state().parameters,
            TEMPLATES[0].parameters
        );
    }

    #[test]
    fn test_search_edits_current_page_filter() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_action(InputAction::GoToPage(Page::Tracks), t0);
        app.handle_action(InputAction::BeginSearch, t0);
        assert_eq!(app.mode, InputMode::Search);
        app.handle_action(InputAction::SearchChar('y'), t0);
        app.handle_action(InputAction::SearchChar('a'), t0);
        app.handle_action(InputAction::SearchBackspace, t0);
        app.handle_action(InputAction::EndSearch, t0);
        assert_eq!(app.track_filter.search, "y");
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.current_search(), Some("y"));
    }

    #[test]
    fn test_quit_returns_false() {
        let mut app = app();
        assert!(!app.handle_action(InputAction::Quit, Instant::now()));
        assert_eq!(app.controller.state().status, SimulationStatus::Idle);
    }
}
