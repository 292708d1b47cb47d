//! Looped frame animation.
//!
//! Each frame is a fixed 5×5 matrix.  Playback clears the screen between
//! frames on terminal backends, hides the cursor for the duration, and
//! restores it on drop even if a write fails half-way.

use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crate::core::color::{Backend, Color, Tint};

const CLEAR_SCREEN: &[u8] = b"\x1b[2J\x1b[1;1H";
const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Two spaces in front of every frame row
const INDENT: &str = "  ";

pub struct Frame {
    pub title: &'static str,
    pub cells: [[&'static str; 5]; 5],
}

impl Frame {
    /// Cells joined by single spaces, indented.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| format!("{INDENT}{}", row.join(" ")))
            .collect()
    }
}

pub static FRAMES: [Frame; 3] = [
    Frame {
        title: "EMOJI",
        cells: [
            ["🌟", "⭐", "✨", "💫", "🌠"],
            ["🔥", "💥", "⚡", "🌙", "☀️"],
            ["🌈", "🌸", "🌺", "🌻", "🌹"],
            ["🍎", "🍊", "🍋", "🍌", "🍇"],
            ["🎵", "🎶", "🎸", "🎹", "🎺"],
        ],
    },
    Frame {
        title: "LETTERS",
        cells: [
            ["A", "B", "C", "D", "E"],
            ["F", "G", "H", "I", "J"],
            ["K", "L", "M", "N", "O"],
            ["P", "Q", "R", "S", "T"],
            ["U", "V", "W", "X", "Y"],
        ],
    },
    Frame {
        title: "SYMBOLS",
        cells: [
            ["1", "2", "3", "4", "5"],
            ["6", "7", "8", "9", "0"],
            ["@", "#", "$", "%", "&"],
            ["+", "-", "*", "/", "="],
            ["!", "?", ".", ",", ";"],
        ],
    },
];

/// Frame shown at position `i` of a loop; wraps past the built-in set.
#[inline]
#[must_use]
pub fn frame_at(i: usize) -> &'static Frame {
    &FRAMES[i % FRAMES.len()]
}

/// Hides the cursor on construction and shows it again on Drop
struct CursorGuard<'a, W: Write> {
    out: &'a mut W,
    active: bool,
}

impl<'a, W: Write> CursorGuard<'a, W> {
    fn new(out: &'a mut W, active: bool) -> io::Result<Self> {
        if active {
            out.write_all(HIDE_CURSOR)?;
        }
        Ok(Self { out, active })
    }
}

impl<W: Write> Drop for CursorGuard<'_, W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.out.write_all(SHOW_CURSOR);
            let _ = self.out.flush();
        }
    }
}

/// Blocking playback settings.
#[derive(Clone, Copy, Debug)]
pub struct Animation {
    pub frames: usize,
    pub loops: usize,
    pub delay: Duration,
}

impl Animation {
    /// Play `loops × frames` frames into `out`; returns how many were shown.
    pub fn play<W: Write>(&self, out: &mut W, backend: &dyn Backend) -> io::Result<usize> {
        let terminal = backend.is_terminal();
        let guard = CursorGuard::new(out, terminal)?;
        let mut shown = 0usize;

        for lap in 0..self.loops {
            for i in 0..self.frames {
                let frame = frame_at(i);
                if terminal {
                    guard.out.write_all(CLEAR_SCREEN)?;
                }
                log::trace!("loop {lap} frame {i} ({})", frame.title);
                writeln!(guard.out, "{}", backend.paint(frame.title, Tint::fg(Color::Cyan)))?;
                for line in frame.lines() {
                    writeln!(guard.out, "{line}")?;
                }
                writeln!(guard.out)?;
                guard.out.flush()?;
                shown += 1;
                thread::sleep(self.delay);
            }
        }
        Ok(shown)
    }
}
