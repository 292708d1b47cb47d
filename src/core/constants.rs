//! A collection of constants.

/// Glyph painted on both circle arcs
pub const SECTOR_GLYPH: char = '#';
/// Horizontal offset that pulls the two arcs apart
pub const SECTOR_SHIFT: f64 = 10.0;
/// Max distance from the ideal radius that still counts as "on the arc".
///
/// Roughly the stroke width; 0.5 gives a thin line, 0.7 a heavier one.
pub const SECTOR_TOLERANCE: f64 = 0.5;
/// The circle center sits at `rows / CENTER_Y_DIVISOR`, below the middle,
/// because only the upper half is drawn.
pub const CENTER_Y_DIVISOR: f64 = 1.5;
/// Radius is `min(rows, cols) / 2 - RADIUS_INSET`
pub const RADIUS_INSET: i64 = 2;

pub const PATTERN_ROWS: usize = 24;
pub const PATTERN_COLS: usize = 24;

pub const GRAPH_HEIGHT: usize = 12;
pub const GRAPH_WIDTH: usize = 24;

pub const FLAG_WIDTH: usize = 36;
pub const FLAG_STRIPE_HEIGHT: usize = 3;

/// Width of the filled + padded part of each chart bar
pub const BAR_WIDTH: usize = 40;
/// Full block used for the filled part of a bar
pub const BAR_GLYPH: char = '█';
/// `"Even : |"` + `"| "` + `"100.0%"` around every bar
pub const BAR_CHROME_WIDTH: usize = 16;

pub const SEQUENCE_FILE: &str = "sequence.txt";

pub const ANIMATION_FRAMES: usize = 3;
pub const ANIMATION_LOOPS: usize = 3;
pub const ANIMATION_DELAY_SECS: f64 = 0.1;

/// Percentages are rounded to the first decimal place.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;
/// Averages are printed with four decimals.
pub const AVERAGE_PRECISION: usize = 4;
