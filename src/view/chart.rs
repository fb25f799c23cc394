//! Byte-count chart widget.

use super::constants::{
    SERIES_NAME, TICK_COUNT, TIME_LABEL_FORMAT, X_AXIS_TITLE, Y_AXIS_TITLE, Y_LOWER_PADDING,
    Y_UPPER_FACTOR,
};
use crate::model::LogRecord;
use chrono::{NaiveDateTime, TimeDelta};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

// ===== ThroughputChart Widget =====

/// Line chart of byte counts over time.
///
/// Points are kept in record order: a log that jumps back in time draws a
/// line going backwards rather than being re-sorted. Each point is marked
/// by a scatter dataset on top of the connecting line.
///
/// Rendered by reference (`&ThroughputChart` implements [`Widget`]) so the
/// interactive loop can redraw it on resize.
#[derive(Debug, Clone)]
pub struct ThroughputChart<'a> {
    title: &'a str,
    hint: Option<&'a str>,
    points: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Vec<String>,
    y_labels: Vec<String>,
}

impl<'a> ThroughputChart<'a> {
    /// Build a chart for `records`.
    ///
    /// Returns `None` for an empty slice; there is nothing to draw.
    pub fn new(records: &[LogRecord], title: &'a str) -> Option<Self> {
        let origin = records.iter().map(LogRecord::timestamp).min()?;

        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| (seconds_between(origin, r.timestamp()), r.byte_count() as f64))
            .collect();

        let span = points.iter().map(|&(x, _)| x).fold(0.0, f64::max);
        let x_bounds = if span > 0.0 { [0.0, span] } else { [0.0, 1.0] };
        let y_bounds = y_bounds(records)?;

        let x_labels = ticks(x_bounds)
            .map(|x| {
                let offset = TimeDelta::microseconds((x * 1_000_000.0).round() as i64);
                (origin + offset).format(TIME_LABEL_FORMAT).to_string()
            })
            .collect();
        let y_labels = ticks(y_bounds).map(|y| format!("{:.0}", y)).collect();

        Some(Self {
            title,
            hint: None,
            points,
            x_bounds,
            y_bounds,
            x_labels,
            y_labels,
        })
    }

    /// Show `hint` in the bottom border.
    pub fn with_hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Data points as `(seconds since earliest record, bytes)`, in record order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// X axis range in seconds since the earliest record.
    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    /// Y axis range in bytes.
    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }
}

impl Widget for &ThroughputChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Dataset::default()
            .name(SERIES_NAME)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&self.points);

        let markers = Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .data(&self.points);

        let mut block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));
        if let Some(hint) = self.hint {
            block = block.title_bottom(hint);
        }

        let axis_style = Style::default().fg(Color::Gray);
        Chart::new(vec![line, markers])
            .block(block)
            .x_axis(
                Axis::default()
                    .title(X_AXIS_TITLE)
                    .style(axis_style)
                    .bounds(self.x_bounds)
                    .labels(self.x_labels.clone()),
            )
            .y_axis(
                Axis::default()
                    .title(Y_AXIS_TITLE)
                    .style(axis_style)
                    .bounds(self.y_bounds)
                    .labels(self.y_labels.clone()),
            )
            .render(area, buf);
    }
}

/// Y axis range for `records`: `[min - 10, max * 1.1]`.
///
/// The padding is a fixed visual heuristic and is not scaled to the data,
/// so the lower bound can go negative for small byte counts. Returns `None`
/// for an empty slice.
pub fn y_bounds(records: &[LogRecord]) -> Option<[f64; 2]> {
    let min = records.iter().map(LogRecord::byte_count).min()?;
    let max = records.iter().map(LogRecord::byte_count).max()?;
    Some([
        min as f64 - Y_LOWER_PADDING,
        max as f64 * Y_UPPER_FACTOR,
    ])
}

/// Evenly spaced tick values from `bounds[0]` to `bounds[1]` inclusive.
fn ticks(bounds: [f64; 2]) -> impl Iterator<Item = f64> {
    let [low, high] = bounds;
    let steps = (TICK_COUNT - 1) as f64;
    (0..TICK_COUNT).map(move |i| low + (high - low) * i as f64 / steps)
}

fn seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_seconds() as f64,
    }
}
