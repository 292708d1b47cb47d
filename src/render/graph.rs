//! `y = |x|` in the first quadrant: a diagonal over two axes.

use crate::{
    core::color::{Color, Tint},
    render::grid::{Cell, Glyph, Grid},
};

pub const CAPTION: &str = "Graph of y = |x| in the first quadrant";

const DIAGONAL: Glyph = Glyph::new('*', Tint::fg(Color::Red));
const Y_AXIS: Glyph = Glyph::new('|', Tint::fg(Color::Cyan));
const X_AXIS: Glyph = Glyph::new('-', Tint::fg(Color::Cyan));

/// Diagonal first, then the left axis, then the bottom axis.
#[inline]
fn cell(height: usize, row: usize, col: usize) -> Cell {
    if row + col + 1 == height {
        Some(DIAGONAL)
    } else if col == 0 {
        Some(Y_AXIS)
    } else if row + 1 == height {
        Some(X_AXIS)
    } else {
        None
    }
}

#[must_use]
pub fn render(height: usize, width: usize) -> Grid {
    Grid::from_fn(height, width, |row, col| cell(height, row, col))
}
