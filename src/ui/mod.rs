mod analytics_page;
mod catalog_pages;
mod predictions_page;
pub mod responsive;
mod simulation_page;
mod throbber;

use crate::app::{App, InputMode, Page};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use responsive::{render_too_small, LayoutContext, SizeTier};

/// Draws the whole dashboard for one frame.
pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let ctx = LayoutContext::from_frame(frame);
    if ctx.tier == SizeTier::TooSmall {
        render_too_small(frame, &ctx);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Page body
            Constraint::Length(3), // Key hints
        ])
        .split(frame.size());

    draw_tabs(frame, chunks[0], app);

    let body = chunks[1];
    match app.page {
        Page::Fleet => catalog_pages::draw_fleet(frame, body, app, &ctx),
        Page::Tracks => catalog_pages::draw_tracks(frame, body, app, &ctx),
        Page::Schedules => catalog_pages::draw_schedules(frame, body, app, &ctx),
        Page::Analytics => analytics_page::draw_analytics(frame, body, &app.summary),
        Page::Predictions => predictions_page::draw_predictions(frame, body, &app.catalog),
        Page::Simulation => simulation_page::draw_simulation(frame, body, app, &ctx),
    }

    draw_footer(frame, chunks[2], app);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();

    let status = app.controller.state().status;
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" RailOps [{}] ", status.name())),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn footer_hints(page: Page, mode: InputMode) -> &'static [(&'static str, &'static str)] {
    if mode == InputMode::Search {
        return &[("type", "search"), ("Enter", "done"), ("Esc", "clear")];
    }
    match page {
        Page::Simulation => &[
            ("s", "start"),
            ("p", "pause"),
            ("x", "stop"),
            ("+/-", "speed"),
            ("c/w/d", "scenario/weather/time"),
            ("[ ]", "trains"),
            ("{ }", "load"),
            ("t", "template"),
            ("q", "quit"),
        ],
        Page::Fleet | Page::Tracks | Page::Schedules => &[
            ("Tab", "page"),
            ("/", "search"),
            ("f", "filter"),
            ("q", "quit"),
        ],
        Page::Analytics | Page::Predictions => &[("Tab", "page"), ("1-6", "jump"), ("q", "quit")],
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, (key, label)) in footer_hints(app.page, app.mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::Gray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, cols: u16, rows: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| draw_dashboard(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = App::new(&AppConfig::default());
        for page in Page::all() {
            app.page = page;
            let screen = render(&app, 120, 40);
            assert!(screen.contains(page.title()), "{:?} missing title", page);
        }
    }

    #[test]
    fn test_fleet_page_lists_trains() {
        let app = App::new(&AppConfig::default());
        let screen = render(&app, 120, 40);
        assert!(screen.contains("IC-101"));
        assert!(screen.contains("10/10 shown"));
    }

    #[test]
    fn test_too_small_terminal_shows_message() {
        let app = App::new(&AppConfig::default());
        let screen = render(&app, 50, 15);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_search_mode_changes_hints() {
        assert_eq!(footer_hints(Page::Fleet, InputMode::Search)[0].0, "type");
        assert_eq!(footer_hints(Page::Simulation, InputMode::Normal)[0].0, "s");
    }
}
