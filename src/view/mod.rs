//! Chart rendering and terminal management (impure shell)

pub mod chart;
pub mod constants;

pub use chart::ThroughputChart;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect, widgets::Widget};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::LogRecord;

/// Diagnostic printed when there is nothing to chart.
pub const NO_DATA_MESSAGE: &str = "No data to display.";

/// Errors that can occur while rendering the chart
#[derive(Debug, Error)]
pub enum ViewError {
    /// IO error while driving the terminal or writing the chart text to output
    #[error("Chart output error: {0}")]
    Io(#[from] io::Error),

    /// Failed to write the headless chart to its output file
    #[error("Failed to write chart to {}: {source}", path.display())]
    WriteOutput {
        /// Output file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// How the chart is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    /// Full-screen terminal chart; blocks until the user dismisses it.
    #[default]
    Interactive,
    /// Off-screen rendering written as text to a file or the output stream.
    Headless,
}

/// Rendering options for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Chart title shown in the top border.
    pub title: String,
    /// Presentation mode.
    pub mode: ChartMode,
    /// Headless width in terminal cells.
    pub width: u16,
    /// Headless height in terminal cells.
    pub height: u16,
    /// Headless output file; `None` writes to the output stream.
    pub output: Option<PathBuf>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: constants::DEFAULT_TITLE.to_string(),
            mode: ChartMode::default(),
            width: constants::DEFAULT_CHART_WIDTH,
            height: constants::DEFAULT_CHART_HEIGHT,
            output: None,
        }
    }
}

/// Render `records` as a time vs. bytes line chart.
///
/// An empty slice prints [`NO_DATA_MESSAGE`] to `out` and renders nothing.
/// Interactive mode returns once the user closes the chart; headless mode
/// returns once the text has been written.
///
/// # Errors
///
/// Returns `ViewError` if the terminal cannot be driven or the chart text
/// cannot be written.
pub fn render<W: Write>(
    records: &[LogRecord],
    options: &ChartOptions,
    out: &mut W,
) -> Result<(), ViewError> {
    let Some(chart) = ThroughputChart::new(records, &options.title) else {
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        info!("No records to chart");
        return Ok(());
    };

    info!(points = records.len(), mode = ?options.mode, "Rendering chart");
    match options.mode {
        ChartMode::Interactive => run_interactive(&chart.with_hint(constants::DISMISS_HINT)),
        ChartMode::Headless => write_headless(&chart, options, out),
    }
}

/// Render `chart` off-screen into a `width` x `height` grid of text.
///
/// Trailing spaces are trimmed from each row; rows are kept so the chart
/// keeps its shape.
pub fn render_to_string(chart: &ThroughputChart<'_>, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

/// Convert a ratatui buffer to plain text, one line per row.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut text = String::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }

    text
}

fn write_headless<W: Write>(
    chart: &ThroughputChart<'_>,
    options: &ChartOptions,
    out: &mut W,
) -> Result<(), ViewError> {
    let text = render_to_string(chart, options.width, options.height);

    match &options.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|source| ViewError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            writeln!(out, "Chart written to {}", path.display())?;
            debug!(path = %path.display(), "Headless chart written");
        }
        None => out.write_all(text.as_bytes())?,
    }

    Ok(())
}

/// Show `chart` full-screen until the user dismisses it.
///
/// The terminal is restored even when drawing or event reading fails.
fn run_interactive(chart: &ThroughputChart<'_>) -> Result<(), ViewError> {
    enable_raw_mode()?;

    let result = io::stdout()
        .execute(EnterAlternateScreen)
        .map_err(ViewError::from)
        .and_then(|_| event_loop(chart));

    // Ensure cleanup happens even on error
    let restored = restore_terminal();
    result.and(restored)
}

fn event_loop(chart: &ThroughputChart<'_>) -> Result<(), ViewError> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    loop {
        terminal.draw(|frame| frame.render_widget(chart, frame.area()))?;

        // Blocks until the next event; resize and other events fall through to a redraw
        if let Event::Key(key) = event::read()? {
            if is_dismiss_key(key) {
                debug!(?key, "Chart dismissed");
                return Ok(());
            }
        }
    }
}

/// Keys that close the interactive chart: `q`, `Esc`, `Enter`, `Ctrl+C`.
fn is_dismiss_key(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Restore terminal to normal mode
fn restore_terminal() -> Result<(), ViewError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
