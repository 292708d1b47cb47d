//! Public-facing crate root – re-exports + one-shot helpers.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{Ansi, AnsiCode, Backend, Color, Layer, Plain, Tint, colorize},
    config::{Config, ConfigBuilder},
    constants::DECIMAL_PRECISION,
    data::{ParseMode, Parsed, Rejected, parse_sequence, read_source},
    error::{ColorError, ConfigError, SketchError},
    stats::{ChartStats, compute_averages},
};

pub use crate::render::{
    Animation, Cell, Chart, ChartOutcome, Circle, Glyph, Grid, Pattern, Sector, render_chart,
};

/// Convenience function: file in, chart out.
///
/// A missing file is treated as an empty sequence, so the result is then
/// [`ChartOutcome::Empty`].  Rejected tokens are returned alongside so the
/// caller can report them.
pub fn chart_from_path(
    path: impl AsRef<std::path::Path>,
    mode: ParseMode,
    bar_width: usize,
) -> Result<(ChartOutcome, Vec<Rejected>), SketchError> {
    let parsed = read_source(path.as_ref())?
        .map(|text| parse_sequence(&text, mode))
        .unwrap_or_default();
    let stats = compute_averages(&parsed.values);
    Ok((render_chart(stats, bar_width), parsed.rejected))
}
