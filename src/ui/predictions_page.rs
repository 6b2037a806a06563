use crate::catalog::{CatalogSource, PredictionKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

fn kind_color(kind: PredictionKind) -> Color {
    match kind {
        PredictionKind::Delay => Color::Red,
        PredictionKind::Demand => Color::Cyan,
        PredictionKind::Maintenance => Color::Yellow,
        PredictionKind::Fuel => Color::Magenta,
    }
}

/// Ten-cell bar for a 0.0-1.0 confidence.
fn confidence_bar(confidence: f64) -> String {
    let filled = (confidence.clamp(0.0, 1.0) * 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn draw_predictions(frame: &mut Frame, area: Rect, catalog: &impl CatalogSource) {
    let rows: Vec<Row> = catalog
        .predictions()
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.kind.name()).style(Style::default().fg(kind_color(p.kind))),
                Cell::from(p.subject),
                Cell::from(format!("{:.1} {}", p.value, p.unit)),
                Cell::from(confidence_bar(p.confidence)),
                Cell::from(format!("{:.0}%", p.confidence * 100.0)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(18),
        Constraint::Length(16),
        Constraint::Length(11),
        Constraint::Length(5),
    ];
    let header = Row::new(vec!["Kind", "Subject", "Forecast", "Confidence", ""]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Predictions"));
    frame.render_widget(table, area);
}
