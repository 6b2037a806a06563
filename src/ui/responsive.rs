//! Terminal size classification.
//!
//! A `LayoutContext` is built once per frame and passed to every page so
//! they agree on how much detail to show.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    Compact, // 60x20+
    Regular, // 90x28+
    Wide,    // 130x36+
}

const WIDE_MIN_COLS: u16 = 130;
const WIDE_MIN_ROWS: u16 = 36;
const REGULAR_MIN_COLS: u16 = 90;
const REGULAR_MIN_ROWS: u16 = 28;
const COMPACT_MIN_COLS: u16 = 60;
const COMPACT_MIN_ROWS: u16 = 20;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// min(width tier, height tier)
    pub tier: SizeTier,
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    pub fn from_size(cols: u16, rows: u16) -> Self {
        let width_tier = classify(cols, WIDE_MIN_COLS, REGULAR_MIN_COLS, COMPACT_MIN_COLS);
        let height_tier = classify(rows, WIDE_MIN_ROWS, REGULAR_MIN_ROWS, COMPACT_MIN_ROWS);
        LayoutContext {
            tier: width_tier.min(height_tier),
            cols,
            rows,
        }
    }

    /// Whether pages have room for secondary columns and panels.
    pub fn show_detail(&self) -> bool {
        self.tier >= SizeTier::Regular
    }
}

fn classify(val: u16, wide: u16, regular: u16, compact: u16) -> SizeTier {
    if val >= wide {
        SizeTier::Wide
    } else if val >= regular {
        SizeTier::Regular
    } else if val >= compact {
        SizeTier::Compact
    } else {
        SizeTier::TooSmall
    }
}

pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small for the dashboard",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                COMPACT_MIN_COLS, COMPACT_MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_use_the_smaller_dimension() {
        assert_eq!(LayoutContext::from_size(200, 50).tier, SizeTier::Wide);
        assert_eq!(LayoutContext::from_size(200, 24).tier, SizeTier::Compact);
        assert_eq!(LayoutContext::from_size(95, 40).tier, SizeTier::Regular);
    }

    #[test]
    fn test_below_minimum_is_too_small() {
        assert_eq!(LayoutContext::from_size(59, 30).tier, SizeTier::TooSmall);
        assert_eq!(LayoutContext::from_size(80, 19).tier, SizeTier::TooSmall);
        assert!(!LayoutContext::from_size(70, 22).show_detail());
    }
}
