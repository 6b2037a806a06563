//! Key mapping for the dashboard.
//!
//! Translates crossterm key events into [`InputAction`]s without touching
//! any state, so the mapping can be tested on its own.

use crate::app::{InputMode, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    NextPage,
    PrevPage,
    GoToPage(Page),

    // Simulation controls
    Start,
    Pause,
    Stop,
    Reset,
    SpeedUp,
    SpeedDown,
    CycleScenario,
    CycleWeather,
    CycleTimeOfDay,
    TrainsUp,
    TrainsDown,
    LoadUp,
    LoadDown,
    NextTemplate,

    // Catalog pages
    BeginSearch,
    SearchChar(char),
    SearchBackspace,
    EndSearch,
    ClearSearch,
    CycleFilter,
}

pub fn map_key(page: Page, mode: InputMode, key: KeyEvent) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    if mode == InputMode::Search {
        return match key.code {
            KeyCode::Char(c) => Some(InputAction::SearchChar(c)),
            KeyCode::Backspace => Some(InputAction::SearchBackspace),
            KeyCode::Enter => Some(InputAction::EndSearch),
            KeyCode::Esc => Some(InputAction::ClearSearch),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return Some(InputAction::Quit)
        }
        KeyCode::Tab | KeyCode::Right => return Some(InputAction::NextPage),
        KeyCode::BackTab | KeyCode::Left => return Some(InputAction::PrevPage),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            return Page::all().get(idx).copied().map(InputAction::GoToPage);
        }
        _ => {}
    }

    if page == Page::Simulation {
        return match key.code {
            KeyCode::Char('s') => Some(InputAction::Start),
            KeyCode::Char('p') | KeyCode::Char(' ') => Some(InputAction::Pause),
            KeyCode::Char('x') => Some(InputAction::Stop),
            KeyCode::Char('r') => Some(InputAction::Reset),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(InputAction::SpeedUp),
            KeyCode::Char('-') => Some(InputAction::SpeedDown),
            KeyCode::Char('c') => Some(InputAction::CycleScenario),
            KeyCode::Char('w') => Some(InputAction::CycleWeather),
            KeyCode::Char('d') => Some(InputAction::CycleTimeOfDay),
            KeyCode::Char(']') => Some(InputAction::TrainsUp),
            KeyCode::Char('[') => Some(InputAction::TrainsDown),
            KeyCode::Char('}') => Some(InputAction::LoadUp),
            KeyCode::Char('{') => Some(InputAction::LoadDown),
            KeyCode::Char('t') => Some(InputAction::NextTemplate),
            _ => None,
        };
    }

    if page.is_catalog() {
        return match key.code {
            KeyCode::Char('/') => Some(InputAction::BeginSearch),
            KeyCode::Char('f') => Some(InputAction::CycleFilter),
            _ => None,
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_jump_to_pages() {
        assert_eq!(
            map_key(Page::Fleet, InputMode::Normal, key(KeyCode::Char('6'))),
            Some(InputAction::GoToPage(Page::Simulation))
        );
        assert_eq!(
            map_key(Page::Fleet, InputMode::Normal, key(KeyCode::Char('7'))),
            None
        );
    }

    #[test]
    fn test_simulation_keys_only_on_simulation_page() {
        assert_eq!(
            map_key(Page::Simulation, InputMode::Normal, key(KeyCode::Char('s'))),
            Some(InputAction::Start)
        );
        assert_eq!(
            map_key(Page::Fleet, InputMode::Normal, key(KeyCode::Char('s'))),
            None
        );
    }

    #[test]
    fn test_search_mode_captures_letters() {
        assert_eq!(
            map_key(Page::Fleet, InputMode::Search, key(KeyCode::Char('q'))),
            Some(InputAction::SearchChar('q'))
        );
        assert_eq!(
            map_key(Page::Fleet, InputMode::Search, key(KeyCode::Esc)),
            Some(InputAction::ClearSearch)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            map_key(Page::Tracks, InputMode::Search, ctrl_c),
            Some(InputAction::Quit)
        );
    }
}
