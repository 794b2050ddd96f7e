//! Screen layout definitions for the TUI
//!
//! Header on top, key hints at the bottom, and a 4/12 + 8/12 split between
//! the configuration panel and the output panel.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Metrics card height: border + four bars with gaps + tooltip row + border
pub const METRICS_HEIGHT: u16 = 10;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Left column: form and Generate button
    pub config: Rect,
    /// Right column: metrics card and editor
    pub output: Rect,
    /// Key hints row
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Ratio(4, 12), Constraint::Ratio(8, 12)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        config: columns[0],
        output: columns[1],
        footer: rows[2],
    }
}

/// Areas inside the output column
#[derive(Debug, Clone, Copy)]
pub struct OutputAreas {
    /// Present only when metrics exist
    pub metrics: Option<Rect>,
    pub editor: Rect,
}

/// Split the output column; the metrics card is omitted entirely without metrics
pub fn output(area: Rect, has_metrics: bool) -> OutputAreas {
    if !has_metrics {
        return OutputAreas {
            metrics: None,
            editor: area,
        };
    }

    let chunks =
        Layout::vertical([Constraint::Length(METRICS_HEIGHT), Constraint::Min(5)]).split(area);

    OutputAreas {
        metrics: Some(chunks[0]),
        editor: chunks[1],
    }
}
