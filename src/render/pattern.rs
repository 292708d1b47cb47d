//! Two circle arcs, pulled apart horizontally and painted per sector.
//!
//! ### Geometry
//! For a `rows × cols` grid the implied circle is
//! * `radius   = min(rows, cols) / 2 - 2` (integer, may go negative)
//! * `center_y = rows / 1.5`, below the middle, since only `y < center_y`
//!   is ever drawn
//! * `center_x = cols / 2` (integer)
//!
//! Every cell is tested against an ordered list of [`Sector`]s and takes the
//! glyph of the first one that claims it.  Each sector shifts the column by
//! its own `offset` before measuring, which is what separates the arcs.

use crate::{
    core::{
        color::{Color, Tint},
        config::Config,
        constants::{CENTER_Y_DIVISOR, RADIUS_INSET, SECTOR_GLYPH, SECTOR_SHIFT, SECTOR_TOLERANCE},
    },
    render::grid::{Glyph, Grid},
};

/// The circle every sector measures against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: i64,
}

impl Circle {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_grid(rows: usize, cols: usize) -> Self {
        let half = i64::try_from(rows.min(cols) / 2).unwrap_or(i64::MAX);
        Self {
            center_x: (cols / 2) as f64,
            center_y: rows as f64 / CENTER_Y_DIVISOR,
            radius: half - RADIUS_INSET,
        }
    }
}

/// Which side of `center_x` a sector covers (after shifting).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Half {
    /// `x >= center_x`
    Right,
    /// `x < center_x`
    Left,
}

/// One classifier: a half-plane of the upper half of the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub offset: f64,
    pub half: Half,
    pub glyph: Glyph,
}

impl Sector {
    /// Is `(y, x)` on this sector's arc, within `tolerance`?
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, circle: &Circle, tolerance: f64, y: usize, x: usize) -> bool {
        if circle.radius < 0 {
            return false;
        }
        let xs = x as f64 + self.offset;
        let yf = y as f64;
        let on_side = match self.half {
            Half::Right => xs >= circle.center_x,
            Half::Left => xs < circle.center_x,
        };
        on_side
            && yf < circle.center_y
            && ((xs - circle.center_x).hypot(yf - circle.center_y) - circle.radius as f64).abs()
                <= tolerance
    }
}

/// Ordered sector list + stroke tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    tolerance: f64,
    sectors: Vec<Sector>,
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(SECTOR_TOLERANCE, SECTOR_SHIFT, [Color::Red, Color::Green])
    }
}

impl Pattern {
    /// Right arc shifted by `+shift` in `colors[0]`, left arc by `-shift` in
    /// `colors[1]`, evaluated in that order.
    #[must_use]
    pub fn new(tolerance: f64, shift: f64, colors: [Color; 2]) -> Self {
        Self {
            tolerance,
            sectors: vec![
                Sector {
                    offset: shift,
                    half: Half::Right,
                    glyph: Glyph::new(SECTOR_GLYPH, Tint::fg(colors[0])),
                },
                Sector {
                    offset: -shift,
                    half: Half::Left,
                    glyph: Glyph::new(SECTOR_GLYPH, Tint::fg(colors[1])),
                },
            ],
        }
    }

    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.tolerance, cfg.shift, cfg.sector_colors)
    }

    #[inline]
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// First sector claiming `(y, x)`, if any.
    #[must_use]
    pub fn classify(&self, circle: &Circle, y: usize, x: usize) -> Option<&Sector> {
        self.sectors
            .iter()
            .find(|s| s.contains(circle, self.tolerance, y, x))
    }

    #[must_use]
    pub fn render(&self, rows: usize, cols: usize) -> Grid {
        let circle = Circle::for_grid(rows, cols);
        Grid::from_fn(rows, cols, |y, x| {
            self.classify(&circle, y, x).map(|s| s.glyph)
        })
    }
}
