use std::io::{self, BufRead, Write};

use crate::{
    core::{
        bounds::fit_terminal,
        color::{Backend, Color, Tint},
        config::Config,
        constants::{BAR_CHROME_WIDTH, BAR_WIDTH, FLAG_WIDTH},
        data::{parse_sequence, read_source},
        stats::compute_averages,
    },
    render::{Animation, Pattern, chart, flag, graph, grid::Grid},
};

fn write_grid<W: Write>(out: &mut W, grid: &Grid, backend: &dyn Backend) -> io::Result<()> {
    for line in grid.lines(backend) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn flag<W: Write>(cfg: &Config, backend: &dyn Backend, out: &mut W) -> io::Result<()> {
    let width = fit_terminal(cfg.flag_width, FLAG_WIDTH, 0);
    write_grid(out, &flag::render(width, cfg.stripe_height), backend)
}

pub fn pattern<W: Write>(cfg: &Config, backend: &dyn Backend, out: &mut W) -> io::Result<()> {
    let grid = Pattern::from_config(cfg).render(cfg.rows, cfg.cols);
    write_grid(out, &grid, backend)
}

pub fn graph<W: Write>(cfg: &Config, backend: &dyn Backend, out: &mut W) -> io::Result<()> {
    write_grid(
        out,
        &graph::render(cfg.graph_height, cfg.graph_width),
        backend,
    )?;
    writeln!(out, "{}", graph::CAPTION)
}

/// Read + parse the sequence file.  Every failure short of a broken output
/// stream degrades to an empty sequence with a notice on `out`.
pub fn load_sequence<W: Write>(cfg: &Config, out: &mut W) -> io::Result<Vec<f64>> {
    let path = &cfg.sequence_path;
    match read_source(path) {
        Ok(Some(text)) => {
            let parsed = parse_sequence(&text, cfg.parse_mode);
            for r in &parsed.rejected {
                writeln!(out, "{r}")?;
            }
            Ok(parsed.values)
        }
        Ok(None) => {
            writeln!(out, "Sequence file '{}' not found.", path.display())?;
            Ok(Vec::new())
        }
        Err(e) => {
            log::warn!("failed to read {}: {e}", path.display());
            writeln!(out, "Error reading file '{}': {e}", path.display())?;
            Ok(Vec::new())
        }
    }
}

pub fn chart<W: Write>(cfg: &Config, backend: &dyn Backend, out: &mut W) -> io::Result<()> {
    let values = load_sequence(cfg, out)?;
    let stats = compute_averages(&values);
    log::debug!(
        "{} values -> avg_odd {} avg_even {}",
        values.len(),
        stats.avg_odd,
        stats.avg_even
    );
    let width = fit_terminal(cfg.bar_width, BAR_WIDTH, BAR_CHROME_WIDTH);
    for line in chart::render_chart(stats, width).lines(backend) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Block until one line (or EOF) arrives on `input`.
pub fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    write!(out, "Press Enter to start animation...")?;
    out.flush()?;
    let mut ack = String::new();
    input.read_line(&mut ack)?;
    Ok(())
}

pub fn animate<W: Write>(cfg: &Config, backend: &dyn Backend, out: &mut W) -> io::Result<()> {
    let anim = Animation {
        frames: cfg.frames,
        loops: cfg.loops,
        delay: cfg.delay,
    };
    let shown = anim.play(out, backend)?;
    log::debug!("animation finished after {shown} frames");
    Ok(())
}

/// Every demo in order, with section headers.  `input` is `None` to skip
/// the pause gate.
pub fn all<R: BufRead, W: Write>(
    cfg: &Config,
    backend: &dyn Backend,
    input: Option<&mut R>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "--- Lithuanian Flag ---")?;
    flag(cfg, backend, out)?;
    writeln!(out)?;

    writeln!(out, "--- Pattern (quarters of circle) ---")?;
    pattern(cfg, backend, out)?;
    writeln!(out)?;

    writeln!(out, "--- Function Graph y=|x| (first quadrant) ---")?;
    graph(cfg, backend, out)?;
    writeln!(out)?;

    writeln!(
        out,
        "--- Percentage Ratio Chart ({}) ---",
        cfg.sequence_path.display()
    )?;
    chart(cfg, backend, out)?;
    writeln!(out)?;

    if let Some(input) = input {
        pause(input, out)?;
    }
    animate(cfg, backend, out)
}

/// Pretty-print the accepted color names.
pub fn colors<W: Write>(backend: &dyn Backend, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nPossible colors:")?;
    for c in Color::ALL {
        writeln!(out, "{}", backend.paint(c.name(), Tint::fg(c)))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::Plain, config::Config};
    use crate::render::chart::{HEADING, NO_CHART};
    use std::io::Cursor;
    use tempfile::{Builder, NamedTempFile, tempdir};

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn missing_file_config() -> Config {
        Config::builder()
            .sequence_path("definitely/not/here/sequence.txt")
            .bar_width(10)
            .animation(1, 1)
            .delay_secs(0.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_file_degrades() {
        let cfg = missing_file_config();
        let text = run(|out| chart(&cfg, &Plain, out));
        assert_eq!(
            text,
            "Sequence file 'definitely/not/here/sequence.txt' not found.\n\
             Cannot build chart (sum of absolute averages is zero or no data).\n"
        );
    }

    #[test]
    fn test_explicit_bar_width_is_kept() {
        let file = write_temp("1\n3\n");
        let cfg = Config::builder()
            .sequence_path(file.path())
            .bar_width(70)
            .build()
            .unwrap();
        let text = run(|out| chart(&cfg, &Plain, out));
        let bars: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("Odd  : |") || l.starts_with("Even : |"))
            .collect();
        assert_eq!(bars.len(), 2);
        for bar in bars {
            let body = bar.split('|').nth(1).unwrap();
            assert_eq!(body.chars().count(), 70, "{bar:?}");
        }
    }

    #[test]
    fn test_rejected_lines_warned_before_chart() {
        let file = write_temp("1\nabc\n3");
        let cfg = Config::builder()
            .sequence_path(file.path())
            .bar_width(10)
            .build()
            .unwrap();
        let text = run(|out| chart(&cfg, &Plain, out));
        let warning = text
            .find("Warning: Line 2 contains invalid number: 'abc'")
            .unwrap();
        let heading = text.find(HEADING).unwrap();
        assert!(warning < heading);
        assert!(text.starts_with("Warning: "));
    }

    #[test]
    fn test_unreadable_file_degrades() {
        let dir = tempdir().unwrap();
        let cfg = Config::builder()
            .sequence_path(dir.path())
            .bar_width(10)
            .build()
            .unwrap();
        let text = run(|out| chart(&cfg, &Plain, out));
        let notice = format!("Error reading file '{}': ", dir.path().display());
        assert!(text.starts_with(&notice), "{text:?}");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], NO_CHART);
    }

    #[test]
    fn test_graph_has_caption() {
        let cfg = Config::builder().graph_size(3, 4).build().unwrap();
        let text = run(|out| graph(&cfg, &Plain, out));
        assert_eq!(text, "| * \n|*  \n*---\n".to_owned() + graph::CAPTION + "\n");
    }

    #[test]
    fn test_pause_accepts_eof() {
        let mut input = Cursor::new(Vec::new());
        let text = run(|out| pause(&mut input, out));
        assert_eq!(text, "Press Enter to start animation...");
    }

    #[test]
    fn test_all_sections_in_order() {
        let cfg = missing_file_config();
        let mut input = Cursor::new(b"\n".to_vec());
        let text = run(|out| all(&cfg, &Plain, Some(&mut input), out));
        let order = [
            "--- Lithuanian Flag ---",
            "--- Pattern (quarters of circle) ---",
            "--- Function Graph y=|x| (first quadrant) ---",
            "--- Percentage Ratio Chart (definitely/not/here/sequence.txt) ---",
            "Press Enter to start animation...",
            "EMOJI",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_all_without_gate() {
        let cfg = missing_file_config();
        let text = run(|out| all::<Cursor<Vec<u8>>, _>(&cfg, &Plain, None, out));
        assert!(!text.contains("Press Enter"));
        assert!(text.contains("EMOJI"));
    }

    #[test]
    fn test_colors_listing() {
        let text = run(|out| colors(&Plain, out));
        for c in Color::ALL {
            assert!(text.contains(c.name()));
        }
    }
}
