//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod stats;

// re-export frequently-used items for convenience
pub use color::{Ansi, AnsiCode, Backend, Color, Layer, Plain, Tint, colorize};
pub use config::{Config, ConfigBuilder};
pub use data::{ParseMode, Parsed, Rejected, parse_sequence, read_source};
pub use error::{ColorError, ConfigError, SketchError};
pub use stats::{ChartStats, compute_averages};
