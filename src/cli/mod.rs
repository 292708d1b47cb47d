pub mod handlers;
pub mod parse;

use std::io::{self, Write};

use clap::Parser;
pub use parse::Cli;

use crate::core::{
    color::{Ansi, Backend, Plain},
    error::SketchError,
};

pub fn run() -> Result<(), SketchError> {
    let cli = parse::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let cfg = cli.params.to_config()?;
    log::debug!("running with {cfg:?}");

    let backend: &dyn Backend = if cli.plain { &Plain } else { &Ansi };
    let mut out = io::stdout().lock();

    match cli.cmd {
        None if cli.no_pause => {
            handlers::all::<io::StdinLock<'_>, _>(&cfg, backend, None, &mut out)?;
        }
        None => {
            let mut input = io::stdin().lock();
            handlers::all(&cfg, backend, Some(&mut input), &mut out)?;
        }
        Some(parse::Command::Flag) => handlers::flag(&cfg, backend, &mut out)?,
        Some(parse::Command::Pattern) => handlers::pattern(&cfg, backend, &mut out)?,
        Some(parse::Command::Graph) => handlers::graph(&cfg, backend, &mut out)?,
        Some(parse::Command::Chart) => handlers::chart(&cfg, backend, &mut out)?,
        Some(parse::Command::Animate) => handlers::animate(&cfg, backend, &mut out)?,
        Some(parse::Command::Colors) => handlers::colors(backend, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
