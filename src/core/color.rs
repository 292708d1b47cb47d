//! Logical color tags + the backends that turn them into text.
//!
//! Renderers only ever produce [`Tint`]s.  Escape sequences live in
//! [`AnsiCode`] and are reached exclusively through the [`Backend`] trait,
//! so swapping ANSI output for plain text never touches rendering logic.

use std::{fmt, str::FromStr};

use crate::core::error::ColorError;

/// The eight basic terminal colors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Single-letter stand-in for a background fill; unique per color
    /// (`K` is black, as in CMYK).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Black => 'K',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Magenta => 'M',
            Self::Cyan => 'C',
            Self::White => 'W',
        }
    }

    /// Offset inside the SGR 30..37 / 40..47 blocks.
    const fn sgr_offset(self) -> usize {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }

    /// Parse a color name, case-insensitive.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ColorError::UnknownName(s.to_owned()))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which part of the cell a color applies to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Layer {
    Foreground,
    Background,
}

/// A color tag as carried by rendered cells.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tint {
    pub color: Color,
    pub layer: Layer,
}

impl Tint {
    #[inline]
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            color,
            layer: Layer::Foreground,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            color,
            layer: Layer::Background,
        }
    }
}

// --- AnsiCode ---

const FG: [&str; 8] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
    "\x1b[37m",
];
const BG: [&str; 8] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m",
    "\x1b[47m",
];

/// A static SGR escape sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnsiCode(&'static str);

impl AnsiCode {
    #[must_use]
    pub const fn for_tint(tint: Tint) -> Self {
        let i = tint.color.sgr_offset();
        match tint.layer {
            Layer::Foreground => Self(FG[i]),
            Layer::Background => Self(BG[i]),
        }
    }

    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self("\x1b[0m")
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- Backends ---

/// Presentation adapter: turns a tinted run of text into printable output.
pub trait Backend {
    fn paint(&self, text: &str, tint: Tint) -> String;

    /// Whether the backend understands cursor / screen-control sequences.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// SGR escapes, one sequence + reset per run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ansi;

impl Backend for Ansi {
    fn paint(&self, text: &str, tint: Tint) -> String {
        colorize(AnsiCode::for_tint(tint), text)
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

/// No escapes at all.  Background-only blanks become [`Color::letter`] so
/// that purely background-painted art (the flag) stays visible.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Backend for Plain {
    fn paint(&self, text: &str, tint: Tint) -> String {
        if tint.layer == Layer::Background && text.chars().all(|c| c == ' ') {
            let letter = tint.color.letter();
            return text.chars().map(|_| letter).collect();
        }
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name(" Cyan ").unwrap(), Color::Cyan);
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert!(matches!(
            Color::from_name("orange"),
            Err(ColorError::UnknownName(n)) if n == "orange"
        ));
    }

    #[test]
    fn test_ansi_codes() {
        assert_eq!(AnsiCode::for_tint(Tint::fg(Color::Red)).as_str(), "\x1b[31m");
        assert_eq!(AnsiCode::for_tint(Tint::fg(Color::Cyan)).as_str(), "\x1b[36m");
        assert_eq!(AnsiCode::for_tint(Tint::bg(Color::Yellow)).as_str(), "\x1b[43m");
        assert_eq!(AnsiCode::for_tint(Tint::bg(Color::Green)).as_str(), "\x1b[42m");
    }

    #[test]
    fn test_ansi_backend_wraps_run() {
        let out = Ansi.paint("##", Tint::fg(Color::Green));
        assert_eq!(out, "\x1b[32m##\x1b[0m");
    }

    #[test]
    fn test_plain_backend() {
        assert_eq!(Plain.paint("#", Tint::fg(Color::Red)), "#");
        assert_eq!(Plain.paint("   ", Tint::bg(Color::Yellow)), "YYY");
        assert!(!Plain.is_terminal());
    }

    #[test]
    fn test_plain_fill_letters_are_distinct() {
        let fills: Vec<String> = Color::ALL
            .iter()
            .map(|&c| Plain.paint(" ", Tint::bg(c)))
            .collect();
        for (i, a) in fills.iter().enumerate() {
            assert!(fills[i + 1..].iter().all(|b| a != b), "{a} repeats");
        }
        assert_eq!(Plain.paint("  ", Tint::bg(Color::Black)), "KK");
        assert_eq!(Plain.paint("  ", Tint::bg(Color::Blue)), "BB");
    }
}
