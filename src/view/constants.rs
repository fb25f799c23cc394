//! Text and dimension constants for chart rendering.
//!
//! Centralized location for the chart's fixed labels and sizing so the
//! headless and interactive renderers stay consistent.

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Bytes over time";

/// X axis title.
pub const X_AXIS_TITLE: &str = "Time";

/// Y axis title.
pub const Y_AXIS_TITLE: &str = "Bytes";

/// Legend name of the byte-count series.
pub const SERIES_NAME: &str = "Bytes";

/// Footer shown in the interactive window.
pub const DISMISS_HINT: &str = " q / Esc / Enter to close ";

/// Amount subtracted from the smallest byte count for the lower Y bound.
pub const Y_LOWER_PADDING: f64 = 10.0;

/// Factor applied to the largest byte count for the upper Y bound.
pub const Y_UPPER_FACTOR: f64 = 1.1;

/// Number of tick labels per axis (first, middle, last).
pub const TICK_COUNT: usize = 3;

/// Tick label format for timestamps.
///
/// Terminal cells cannot rotate text, so labels are kept short instead.
pub const TIME_LABEL_FORMAT: &str = "%H:%M:%S%.3f";

/// Default headless chart width in cells.
pub const DEFAULT_CHART_WIDTH: u16 = 120;

/// Default headless chart height in cells.
pub const DEFAULT_CHART_HEIGHT: u16 = 40;

/// Smallest accepted chart width or height in cells.
pub const MIN_CHART_DIMENSION: u16 = 10;
