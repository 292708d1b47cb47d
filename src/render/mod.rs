pub mod chart;
pub mod flag;
pub mod frame;
pub mod graph;
pub mod grid;
pub mod pattern;

pub use chart::{Chart, ChartOutcome, render_chart};
pub use frame::Animation;
pub use grid::{Cell, Glyph, Grid};
pub use pattern::{Circle, Pattern, Sector};
