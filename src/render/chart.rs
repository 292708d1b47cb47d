//! Dual horizontal bar chart of the odd/even absolute averages.
//!
//! Bars are always exactly `bar_width` characters: the rounded filled part
//! is clipped to the width and the remainder padded with spaces.  Rounding
//! is half away from zero (`f64::round`), so 50.0% of an odd width rounds up.

use std::fmt::Write;

use crate::core::{
    color::{Backend, Color, Tint},
    constants::{AVERAGE_PRECISION, BAR_GLYPH, DECIMAL_PRECISION},
    stats::ChartStats,
};

pub const HEADING: &str = "Absolute average values (odd vs even positions)";
pub const NO_CHART: &str = "Cannot build chart (sum of absolute averages is zero or no data).";

/// One series of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub name: &'static str,
    pub avg: f64,
    pub pct: f64,
    pub filled: usize,
    pub width: usize,
    pub tint: Tint,
}

impl Bar {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn new(name: &'static str, avg: f64, total: f64, width: usize, color: Color) -> Self {
        let pct = avg / total * 100.0;
        let filled = (width as f64 * pct / 100.0).round().max(0.0) as usize;
        Self {
            name,
            avg,
            pct,
            filled: filled.min(width),
            width,
            tint: Tint::fg(color),
        }
    }

    #[inline]
    #[must_use]
    pub fn padding(&self) -> usize {
        self.width - self.filled
    }

    /// Uncolored bar body, exactly `width` chars.
    #[must_use]
    pub fn body(&self) -> String {
        let mut s = String::with_capacity(self.width * BAR_GLYPH.len_utf8());
        s.extend(std::iter::repeat_n(BAR_GLYPH, self.filled));
        s.extend(std::iter::repeat_n(' ', self.padding()));
        s
    }

    fn summary_line(&self) -> String {
        format!(
            "{:<18}: {:.*} ({:5.*}%)",
            format!("{} positions avg", self.name),
            AVERAGE_PRECISION,
            self.avg,
            DECIMAL_PRECISION,
            self.pct
        )
    }

    fn bar_line(&self, backend: &dyn Backend) -> String {
        let mut line = format!("{:<5}: |", self.name);
        if self.filled > 0 {
            let fill: String = std::iter::repeat_n(BAR_GLYPH, self.filled).collect();
            line.push_str(&backend.paint(&fill, self.tint));
        }
        line.extend(std::iter::repeat_n(' ', self.padding()));
        // writing into a String cannot fail
        let _ = write!(line, "| {:5.*}%", DECIMAL_PRECISION, self.pct);
        line
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub odd: Bar,
    pub even: Bar,
}

/// Either a drawable chart or the signaled "nothing to draw" state.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartOutcome {
    Drawn(Chart),
    Empty,
}

impl ChartOutcome {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn lines(&self, backend: &dyn Backend) -> Vec<String> {
        match self {
            Self::Empty => vec![NO_CHART.to_owned()],
            Self::Drawn(c) => vec![
                HEADING.to_owned(),
                c.odd.summary_line(),
                c.even.summary_line(),
                String::new(),
                c.odd.bar_line(backend),
                c.even.bar_line(backend),
            ],
        }
    }
}

/// `Empty` when the averages sum to zero (or overflow to a non-finite total).
#[must_use]
pub fn render_chart(stats: ChartStats, bar_width: usize) -> ChartOutcome {
    let total = stats.total();
    if total == 0.0 || !total.is_finite() {
        return ChartOutcome::Empty;
    }
    ChartOutcome::Drawn(Chart {
        odd: Bar::new("Odd", stats.avg_odd, total, bar_width, Color::Yellow),
        even: Bar::new("Even", stats.avg_even, total, bar_width, Color::Green),
    })
}
