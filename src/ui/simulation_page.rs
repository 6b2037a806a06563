//! Simulation page: run controls, parameters, KPIs, activity and history.

use super::responsive::LayoutContext;
use super::throbber::{dispatch_message, spinner_char};
use crate::app::App;
use crate::core::engine::{SimulationState, SimulationStatus};
use crate::report::RunOutcome;
use crate::templates::TEMPLATES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};
use std::time::Instant;

fn status_color(status: SimulationStatus) -> Color {
    match status {
        SimulationStatus::Idle => Color::Gray,
        SimulationStatus::Running => Color::Green,
        SimulationStatus::Paused => Color::Yellow,
        SimulationStatus::Completed => Color::Cyan,
    }
}

pub fn draw_simulation(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status line
            Constraint::Length(3), // Progress gauge
            Constraint::Length(9), // Parameters + results
            Constraint::Min(0),    // Activity + history
        ])
        .split(area);

    let state = app.controller.state();
    draw_status(frame, rows[0], app, state);
    draw_progress(frame, rows[1], state);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    draw_parameters(frame, middle[0], app, state);
    draw_results(frame, middle[1], state);

    if ctx.show_detail() {
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);
        draw_activity(frame, bottom[0], app);
        draw_history(frame, bottom[1], app);
    } else {
        draw_activity(frame, rows[3], app);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, state: &SimulationState) {
    let mut spans = vec![Span::styled(
        state.status.name(),
        Style::default()
            .fg(status_color(state.status))
            .add_modifier(Modifier::BOLD),
    )];

    match state.status {
        SimulationStatus::Running => {
            spans.push(Span::raw(format!(
                "  {} {}",
                spinner_char(),
                dispatch_message(state.time_elapsed_seconds)
            )));
            if let Some(secs) = app.controller.next_tick_in(Instant::now()) {
                spans.push(Span::styled(
                    format!("  next tick {:.1}s", secs),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        SimulationStatus::Paused => spans.push(Span::raw("  press s to resume")),
        SimulationStatus::Completed => spans.push(Span::raw("  press r to reset")),
        SimulationStatus::Idle => spans.push(Span::raw("  press s to start")),
    }

    spans.push(Span::styled(
        format!("  elapsed {}s", state.time_elapsed_seconds),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Simulation"));
    frame.render_widget(status, area);
}

fn draw_progress(frame: &mut Frame, area: Rect, state: &SimulationState) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(status_color(state.status)))
        .ratio((state.progress / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", state.progress));
    frame.render_widget(gauge, area);
}

fn param_line(label: &str, value: String, locked: bool) -> Line<'static> {
    let value_style = if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

fn draw_parameters(frame: &mut Frame, area: Rect, app: &App, state: &SimulationState) {
    let p = &state.parameters;
    let locked = state.is_running();

    let lines = vec![
        param_line("Scenario", p.scenario.name().to_string(), locked),
        param_line("Weather", p.weather_condition.name().to_string(), locked),
        param_line("Time of day", p.time_of_day.name().to_string(), locked),
        param_line("Trains", p.train_count.to_string(), locked),
        param_line("Load", format!("{}%", p.passenger_load), locked),
        param_line("Speed", format!("{}x", p.speed), false),
        Line::from(Span::styled(
            format!("t: {}", TEMPLATES[app.template_cursor].name),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let title = if locked {
        "Parameters (locked)"
    } else {
        "Parameters"
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_results(frame: &mut Frame, area: Rect, state: &SimulationState) {
    let r = &state.results;
    let kpi = |label: &str, value: f64| {
        Line::from(vec![
            Span::styled(format!("{:<24}", label), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}%", value),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        kpi("On-time performance", r.on_time_performance),
        kpi("Passenger satisfaction", r.passenger_satisfaction),
        kpi("Energy efficiency", r.energy_efficiency),
        Line::from(vec![
            Span::styled(format!("{:<24}", "Passengers"), Style::default().fg(Color::Gray)),
            Span::styled(
                r.total_passengers.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            state.parameters.scenario.description(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Results")),
        area,
    );
}

fn draw_activity(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .activity
        .iter()
        .map(|line| ListItem::new(line.as_str()))
        .collect();
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Activity")),
        area,
    );
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .controller
        .history()
        .map(|run| {
            let color = match run.outcome {
                RunOutcome::Completed => Color::Green,
                RunOutcome::Stopped => Color::Yellow,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    run.ended_at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<9}", run.outcome.name()),
                    Style::default().fg(color),
                ),
                Span::raw(format!(
                    " {} {:.0}% {}s",
                    run.parameters.scenario.name(),
                    run.progress,
                    run.time_elapsed_seconds
                )),
            ]))
        })
        .collect();

    let title = format!("History ({})", app.controller.history_len());
    frame.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}
