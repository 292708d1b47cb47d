//! Character grid shared by every cell-based renderer.

use crate::core::color::{Backend, Tint};

/// One painted character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub tint: Tint,
}

impl Glyph {
    #[inline]
    #[must_use]
    pub const fn new(ch: char, tint: Tint) -> Self {
        Self { ch, tint }
    }
}

/// `None` is a blank cell.
pub type Cell = Option<Glyph>;

/// Row-major grid of cells.  Rows may be empty but are never ragged when
/// built through [`Grid::from_fn`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Evaluate `cell(row, col)` for every position.
    pub fn from_fn(rows: usize, cols: usize, mut cell: impl FnMut(usize, usize) -> Cell) -> Self {
        Self {
            rows: (0..rows)
                .map(|y| (0..cols).map(|x| cell(y, x)).collect())
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Every painted cell with its position.
    pub fn painted(&self) -> impl Iterator<Item = (usize, usize, Glyph)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, r)| {
            r.iter()
                .enumerate()
                .filter_map(move |(x, c)| c.map(|g| (y, x, g)))
        })
    }

    /// Render through `backend`, one string per row.
    ///
    /// Consecutive cells with the same tint are painted as one run so the
    /// ANSI output carries one escape pair per run, not per character.
    #[must_use]
    pub fn lines(&self, backend: &dyn Backend) -> Vec<String> {
        self.rows.iter().map(|r| render_row(r, backend)).collect()
    }
}

fn render_row(row: &[Cell], backend: &dyn Backend) -> String {
    let mut out = String::with_capacity(row.len());
    let mut run = String::new();
    let mut run_tint: Option<Tint> = None;

    let flush = |out: &mut String, run: &mut String, tint: Option<Tint>| {
        if run.is_empty() {
            return;
        }
        match tint {
            Some(t) => out.push_str(&backend.paint(run, t)),
            None => out.push_str(run),
        }
        run.clear();
    };

    for cell in row {
        let (ch, tint) = match cell {
            Some(g) => (g.ch, Some(g.tint)),
            None => (' ', None),
        };
        if tint != run_tint {
            flush(&mut out, &mut run, run_tint);
            run_tint = tint;
        }
        run.push(ch);
    }
    flush(&mut out, &mut run, run_tint);
    out
}
