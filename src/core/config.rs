//! Run-time configuration object + fluent builder.

use std::{path::PathBuf, time::Duration};

use crate::core::{
    color::Color,
    constants::{
        ANIMATION_DELAY_SECS, ANIMATION_FRAMES, ANIMATION_LOOPS, BAR_WIDTH, FLAG_STRIPE_HEIGHT,
        FLAG_WIDTH, GRAPH_HEIGHT, GRAPH_WIDTH, PATTERN_COLS, PATTERN_ROWS, SECTOR_SHIFT,
        SECTOR_TOLERANCE, SEQUENCE_FILE,
    },
    data::ParseMode,
    error::ConfigError,
};

/// Immutable parameters handed to the renderers.
#[derive(Debug, Clone)]
pub struct Config {
    // pattern
    pub rows: usize,
    pub cols: usize,
    pub tolerance: f64,
    pub shift: f64,
    pub sector_colors: [Color; 2],

    // function graph
    pub graph_height: usize,
    pub graph_width: usize,

    // flag
    pub flag_width: usize,
    pub stripe_height: usize,

    // chart
    pub sequence_path: PathBuf,
    pub parse_mode: ParseMode,
    pub bar_width: usize,

    // animation
    pub frames: usize,
    pub loops: usize,
    pub delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: PATTERN_ROWS,
            cols: PATTERN_COLS,
            tolerance: SECTOR_TOLERANCE,
            shift: SECTOR_SHIFT,
            sector_colors: [Color::Red, Color::Green],
            graph_height: GRAPH_HEIGHT,
            graph_width: GRAPH_WIDTH,
            flag_width: FLAG_WIDTH,
            stripe_height: FLAG_STRIPE_HEIGHT,
            sequence_path: PathBuf::from(SEQUENCE_FILE),
            parse_mode: ParseMode::default(),
            bar_width: BAR_WIDTH,
            frames: ANIMATION_FRAMES,
            loops: ANIMATION_LOOPS,
            delay: Duration::from_secs_f64(ANIMATION_DELAY_SECS),
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder; every field starts at its default.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    cfg: Config,
    delay_secs: Option<f64>,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn pattern_size(mut self, rows: usize, cols: usize) -> Self {
        self.cfg.rows = rows;
        self.cfg.cols = cols;
        self
    }
    #[inline]
    #[must_use]
    pub fn tolerance(mut self, t: f64) -> Self {
        self.cfg.tolerance = t;
        self
    }
    #[inline]
    #[must_use]
    pub fn shift(mut self, s: f64) -> Self {
        self.cfg.shift = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn sector_colors(mut self, first: Color, second: Color) -> Self {
        self.cfg.sector_colors = [first, second];
        self
    }
    #[inline]
    #[must_use]
    pub fn graph_size(mut self, height: usize, width: usize) -> Self {
        self.cfg.graph_height = height;
        self.cfg.graph_width = width;
        self
    }
    #[inline]
    #[must_use]
    pub fn flag_size(mut self, width: usize, stripe_height: usize) -> Self {
        self.cfg.flag_width = width;
        self.cfg.stripe_height = stripe_height;
        self
    }
    #[inline]
    #[must_use]
    pub fn sequence_path(mut self, p: impl Into<PathBuf>) -> Self {
        self.cfg.sequence_path = p.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn parse_mode(mut self, m: ParseMode) -> Self {
        self.cfg.parse_mode = m;
        self
    }
    #[inline]
    #[must_use]
    pub fn bar_width(mut self, w: usize) -> Self {
        self.cfg.bar_width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn animation(mut self, frames: usize, loops: usize) -> Self {
        self.cfg.frames = frames;
        self.cfg.loops = loops;
        self
    }
    /// Seconds between frames.  Validated in [`build`](Self::build).
    #[inline]
    #[must_use]
    pub fn delay_secs(mut self, secs: f64) -> Self {
        self.delay_secs = Some(secs);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let mut cfg = self.cfg;
        if !cfg.tolerance.is_finite() || cfg.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(cfg.tolerance));
        }
        if !cfg.shift.is_finite() {
            return Err(ConfigError::InvalidShift(cfg.shift));
        }
        if let Some(secs) = self.delay_secs {
            cfg.delay = Duration::try_from_secs_f64(secs)
                .map_err(|_| ConfigError::InvalidDelay(secs))?;
        }
        Ok(cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
