//! Fleet, track and schedule tables.

use super::responsive::LayoutContext;
use crate::app::{App, InputMode};
use crate::catalog::{CatalogSource, ScheduleStatus, TrackStatus, TrainStatus};
use crate::core::constants::ON_TIME_THRESHOLD_MINUTES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn train_status_color(status: TrainStatus) -> Color {
    match status {
        TrainStatus::Active => Color::Green,
        TrainStatus::Maintenance => Color::Yellow,
        TrainStatus::OutOfService => Color::Red,
        TrainStatus::Retired => Color::DarkGray,
    }
}

fn track_status_color(status: TrackStatus) -> Color {
    match status {
        TrackStatus::Operational => Color::Green,
        TrackStatus::Maintenance => Color::Yellow,
        TrackStatus::Closed => Color::Red,
        TrackStatus::UnderConstruction => Color::Blue,
    }
}

fn schedule_status_color(status: ScheduleStatus) -> Color {
    match status {
        ScheduleStatus::Scheduled => Color::White,
        ScheduleStatus::Active => Color::Green,
        ScheduleStatus::Completed => Color::DarkGray,
        ScheduleStatus::Cancelled => Color::Red,
        ScheduleStatus::Delayed => Color::Yellow,
    }
}

/// Splits the page into filter bar and table area.
fn split_filter_bar(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

fn draw_filter_bar(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    status: Option<&'static str>,
    shown: usize,
    total: usize,
) {
    let search = app.current_search().unwrap_or_default();
    let editing = app.mode == InputMode::Search;

    let mut spans = vec![
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            status.unwrap_or("All"),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            search.to_string(),
            Style::default().fg(if editing { Color::Yellow } else { Color::White }),
        ),
    ];
    if editing {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        format!("   {}/{} shown", shown, total),
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filter"));
    frame.render_widget(bar, area);
}

pub fn draw_fleet(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let trains = app.catalog.trains();
    let visible = app.train_filter.apply(trains);
    let (bar_area, table_area) = split_filter_bar(area);
    draw_filter_bar(
        frame,
        bar_area,
        app,
        app.train_filter.status.map(|s| s.name()),
        visible.len(),
        trains.len(),
    );

    let detail = ctx.show_detail();
    let rows: Vec<Row> = visible
        .iter()
        .map(|t| {
            let mut cells = vec![
                Cell::from(t.train_number),
                Cell::from(t.name),
                Cell::from(t.train_type.name()),
                Cell::from(t.status.name())
                    .style(Style::default().fg(train_status_color(t.status))),
                Cell::from(t.current_location),
            ];
            if detail {
                cells.push(Cell::from(t.capacity.to_string()));
                cells.push(Cell::from(format!("{} km/h", t.max_speed_kmh)));
            }
            Row::new(cells)
        })
        .collect();

    let mut header = vec!["Number", "Name", "Type", "Status", "Location"];
    let mut widths = vec![
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(11),
        Constraint::Length(15),
        Constraint::Min(14),
    ];
    if detail {
        header.extend(["Capacity", "Max speed"]);
        widths.extend([Constraint::Length(9), Constraint::Length(10)]);
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style()))
        .block(Block::default().borders(Borders::ALL).title("Fleet"));
    frame.render_widget(table, table_area);
}

pub fn draw_tracks(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let tracks = app.catalog.tracks();
    let visible = app.track_filter.apply(tracks);
    let (bar_area, table_area) = split_filter_bar(area);
    draw_filter_bar(
        frame,
        bar_area,
        app,
        app.track_filter.status.map(|s| s.name()),
        visible.len(),
        tracks.len(),
    );

    let detail = ctx.show_detail();
    let rows: Vec<Row> = visible
        .iter()
        .map(|t| {
            let mut cells = vec![
                Cell::from(t.name),
                Cell::from(t.track_type.name()),
                Cell::from(t.status.name())
                    .style(Style::default().fg(track_status_color(t.status))),
                Cell::from(format!("{:.1} km", t.length_km)),
            ];
            if detail {
                cells.push(Cell::from(format!("{} km/h", t.max_speed_kmh)));
                cells.push(Cell::from(format!("{}/h", t.capacity_trains_per_hour)));
            }
            Row::new(cells)
        })
        .collect();

    let mut header = vec!["Name", "Type", "Status", "Length"];
    let mut widths = vec![
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(19),
        Constraint::Length(10),
    ];
    if detail {
        header.extend(["Max speed", "Capacity"]);
        widths.extend([Constraint::Length(10), Constraint::Length(9)]);
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style()))
        .block(Block::default().borders(Borders::ALL).title("Tracks"));
    frame.render_widget(table, table_area);
}

pub fn draw_schedules(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let schedules = app.catalog.schedules();
    let visible = app.schedule_filter.apply(schedules);
    let (bar_area, table_area) = split_filter_bar(area);
    draw_filter_bar(
        frame,
        bar_area,
        app,
        app.schedule_filter.status.map(|s| s.name()),
        visible.len(),
        schedules.len(),
    );

    let detail = ctx.show_detail();
    let rows: Vec<Row> = visible
        .iter()
        .map(|s| {
            let train = app
                .catalog
                .train(s.train_id)
                .map_or("?", |t| t.train_number);
            let delay_color = if s.delay_minutes == 0 {
                Color::Green
            } else if s.delay_minutes <= ON_TIME_THRESHOLD_MINUTES {
                Color::Yellow
            } else {
                Color::Red
            };

            let mut cells = vec![
                Cell::from(s.departure_label()),
                Cell::from(train),
                Cell::from(format!("{} → {}", s.origin, s.destination)),
                Cell::from(s.status.name())
                    .style(Style::default().fg(schedule_status_color(s.status))),
                Cell::from(format!("+{}m", s.delay_minutes))
                    .style(Style::default().fg(delay_color)),
            ];
            if detail {
                let track = app.catalog.track(s.track_id).map_or("?", |t| t.name);
                cells.push(Cell::from(track));
                cells.push(Cell::from(s.passenger_count.to_string()));
            }
            Row::new(cells)
        })
        .collect();

    let mut header = vec!["Dep", "Train", "Route", "Status", "Delay"];
    let mut widths = vec![
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(6),
    ];
    if detail {
        header.extend(["Track", "Pax"]);
        widths.extend([Constraint::Min(16), Constraint::Length(6)]);
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style()))
        .block(Block::default().borders(Borders::ALL).title("Schedules"));
    frame.render_widget(table, table_area);
}
