//! Three horizontal stripes painted with background tints.

use crate::{
    core::color::{Color, Tint},
    render::grid::{Glyph, Grid},
};

/// Top to bottom.
pub const STRIPES: [Color; 3] = [Color::Yellow, Color::Green, Color::Red];

#[must_use]
pub fn render(width: usize, stripe_height: usize) -> Grid {
    Grid::from_fn(STRIPES.len() * stripe_height, width, |row, _| {
        Some(Glyph::new(' ', Tint::bg(STRIPES[row / stripe_height])))
    })
}
