use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use crate::core::{
    color::Color,
    config::Config,
    constants::{
        ANIMATION_DELAY_SECS, ANIMATION_FRAMES, ANIMATION_LOOPS, BAR_WIDTH, FLAG_STRIPE_HEIGHT,
        FLAG_WIDTH, GRAPH_HEIGHT, GRAPH_WIDTH, PATTERN_COLS, PATTERN_ROWS, SECTOR_SHIFT,
        SECTOR_TOLERANCE, SEQUENCE_FILE,
    },
    data::ParseMode,
    error::ConfigError,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "term-sketch",
    about = "Colored terminal art, a ratio chart and a small animation"
)]
pub struct Cli {
    /// Run a single demo (default: all of them, in order)
    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Disable ANSI colors and screen control
    #[arg(long, global = true)]
    pub plain: bool,

    /// Skip the "Press Enter" gate before the animation
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    #[command(flatten)]
    pub params: Params,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Three-stripe flag
    Flag,
    /// Two shifted circle arcs
    Pattern,
    /// y = |x| with axes
    Graph,
    /// Odd/even absolute-average ratio chart from a file
    Chart,
    /// Looped 5x5 frame animation
    Animate,
    /// Show available color names
    Colors,
}

/// Demo parameters shared by every subcommand.
#[derive(Args, Debug)]
pub struct Params {
    /// Pattern height
    #[arg(long, global = true, default_value_t = PATTERN_ROWS)]
    pub rows: usize,
    /// Pattern width
    #[arg(long, global = true, default_value_t = PATTERN_COLS)]
    pub cols: usize,
    /// Arc stroke tolerance
    #[arg(long, global = true, default_value_t = SECTOR_TOLERANCE)]
    pub tolerance: f64,
    /// Horizontal offset separating the two arcs
    #[arg(long, global = true, default_value_t = SECTOR_SHIFT)]
    pub shift: f64,
    /// Color of the right-hand arc
    #[arg(long, global = true, default_value_t = Color::Red)]
    pub first_color: Color,
    /// Color of the left-hand arc
    #[arg(long, global = true, default_value_t = Color::Green)]
    pub second_color: Color,

    /// Function graph height
    #[arg(long, global = true, default_value_t = GRAPH_HEIGHT)]
    pub graph_height: usize,
    /// Function graph width
    #[arg(long, global = true, default_value_t = GRAPH_WIDTH)]
    pub graph_width: usize,

    /// Flag width (clamped to the terminal)
    #[arg(long, global = true, default_value_t = FLAG_WIDTH)]
    pub flag_width: usize,
    /// Rows per flag stripe
    #[arg(long, global = true, default_value_t = FLAG_STRIPE_HEIGHT)]
    pub stripe_height: usize,

    /// Numeric sequence file
    #[arg(short, long, global = true, value_name = "FILE", default_value = SEQUENCE_FILE)]
    pub file: PathBuf,
    /// `lines` (one number per line) or `tokens` (split on whitespace , ;)
    #[arg(long, global = true, default_value = "lines")]
    pub parse_mode: ParseMode,
    /// Chart bar width (clamped to the terminal)
    #[arg(long, global = true, default_value_t = BAR_WIDTH)]
    pub bar_width: usize,

    /// Frames per animation loop
    #[arg(long, global = true, default_value_t = ANIMATION_FRAMES)]
    pub frames: usize,
    /// Animation loops
    #[arg(long, global = true, default_value_t = ANIMATION_LOOPS)]
    pub loops: usize,
    /// Seconds between frames
    #[arg(long, global = true, default_value_t = ANIMATION_DELAY_SECS)]
    pub delay: f64,
}

impl Params {
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        Config::builder()
            .pattern_size(self.rows, self.cols)
            .tolerance(self.tolerance)
            .shift(self.shift)
            .sector_colors(self.first_color, self.second_color)
            .graph_size(self.graph_height, self.graph_width)
            .flag_size(self.flag_width, self.stripe_height)
            .sequence_path(self.file.clone())
            .parse_mode(self.parse_mode)
            .bar_width(self.bar_width)
            .animation(self.frames, self.loops)
            .delay_secs(self.delay)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["term-sketch"]).unwrap();
        assert!(cli.cmd.is_none());
        assert_eq!(cli.log_level, LevelFilter::Warn);
        let cfg = cli.params.to_config().unwrap();
        assert_eq!(cfg.sequence_path, PathBuf::from("sequence.txt"));
        assert_eq!(cfg.sector_colors, [Color::Red, Color::Green]);
    }

    #[test]
    fn test_subcommand_with_global_options() {
        let cli = Cli::try_parse_from([
            "term-sketch",
            "chart",
            "--file",
            "data.txt",
            "--parse-mode",
            "tokens",
            "--plain",
        ])
        .unwrap();
        assert_eq!(cli.cmd, Some(Command::Chart));
        assert!(cli.plain);
        let cfg = cli.params.to_config().unwrap();
        assert_eq!(cfg.parse_mode, ParseMode::Tokens);
        assert_eq!(cfg.sequence_path, PathBuf::from("data.txt"));
    }

    #[test]
    fn test_bad_color_rejected() {
        assert!(Cli::try_parse_from(["term-sketch", "--first-color", "mauve"]).is_err());
    }

    #[test]
    fn test_negative_tolerance_fails_config() {
        let cli = Cli::try_parse_from(["term-sketch", "pattern", "--tolerance=-1"]).unwrap();
        assert!(cli.params.to_config().is_err());
    }
}
