use crate::analytics::DashboardSummary;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn gauge_color(percent: f64) -> Color {
    if percent >= 80.0 {
        Color::Green
    } else if percent >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn draw_gauge(frame: &mut Frame, area: Rect, title: &str, percent: f64) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(gauge_color(percent)))
        .percent(percent.clamp(0.0, 100.0).round() as u16)
        .label(format!("{:.1}%", percent));
    frame.render_widget(gauge, area);
}

/// Headline gauges on top, per-area breakdowns underneath.
pub fn draw_analytics(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let gauges = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
    draw_gauge(frame, gauges[0], "Fleet availability", summary.fleet.availability_percent);
    draw_gauge(frame, gauges[1], "Tracks operational", summary.network.operational_percent);
    draw_gauge(frame, gauges[2], "On-time services", summary.schedules.on_time_percent);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    let fleet = &summary.fleet;
    let fleet_lines = vec![
        stat_line("Trains", fleet.total.to_string()),
        stat_line("Active", fleet.active.to_string()),
        stat_line("In maintenance", fleet.maintenance.to_string()),
        stat_line("Out of service", fleet.out_of_service.to_string()),
        stat_line("Retired", fleet.retired.to_string()),
        stat_line("Total capacity", fleet.total_capacity.to_string()),
    ];
    frame.render_widget(
        Paragraph::new(fleet_lines).block(Block::default().borders(Borders::ALL).title("Fleet")),
        panels[0],
    );

    let network = &summary.network;
    let network_lines = vec![
        stat_line("Tracks", network.total_tracks.to_string()),
        stat_line("Operational", network.operational.to_string()),
        stat_line("Network length", format!("{:.1} km", network.total_length_km)),
        stat_line("Hourly capacity", format!("{} trains", network.hourly_capacity)),
    ];
    frame.render_widget(
        Paragraph::new(network_lines)
            .block(Block::default().borders(Borders::ALL).title("Network")),
        panels[1],
    );

    let schedules = &summary.schedules;
    let schedule_lines = vec![
        stat_line("Services", schedules.total.to_string()),
        stat_line("Cancelled", schedules.cancelled.to_string()),
        stat_line("Delayed", schedules.delayed.to_string()),
        stat_line(
            "Average delay",
            format!("{:.1} min", schedules.average_delay_minutes),
        ),
        stat_line("Worst delay", format!("{} min", schedules.max_delay_minutes)),
        stat_line("Passengers", schedules.passengers_scheduled.to_string()),
        Line::from(""),
        stat_line("Predictions", summary.prediction_count.to_string()),
        stat_line(
            "Avg confidence",
            format!("{:.0}%", summary.average_prediction_confidence * 100.0),
        ),
    ];
    frame.render_widget(
        Paragraph::new(schedule_lines)
            .block(Block::default().borders(Borders::ALL).title("Operations")),
        panels[2],
    );
}
