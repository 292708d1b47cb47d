//! Terminal size plumbing.

use terminal_size::terminal_size;

/// Visible columns of the terminal on stdout, `None` when stdout is not one.
#[inline]
#[must_use]
pub fn terminal_columns() -> Option<usize> {
    terminal_size().map(|(w, _)| usize::from(w.0))
}

/// Clamp `requested` so that it plus `reserved` chrome columns fits in
/// `columns`.  Never returns less than 1 unless 0 was requested.
#[inline]
#[must_use]
pub fn fit_columns(requested: usize, reserved: usize, columns: usize) -> usize {
    let room = columns.saturating_sub(reserved).max(1);
    if requested > room {
        log::debug!("clamping width {requested} to {room} visible columns");
    }
    requested.min(room)
}

/// Shrink a width still at its `default` to the given terminal columns.
/// Any other width, or output that is not a terminal, passes through.
#[inline]
#[must_use]
pub fn fit_default(
    requested: usize,
    default: usize,
    reserved: usize,
    columns: Option<usize>,
) -> usize {
    match columns {
        Some(cols) if requested == default => fit_columns(requested, reserved, cols),
        _ => requested,
    }
}

/// [`fit_default`] against the live terminal.
#[inline]
#[must_use]
pub fn fit_terminal(requested: usize, default: usize, reserved: usize) -> usize {
    fit_default(requested, default, reserved, terminal_columns())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_columns() {
        assert_eq!(fit_columns(40, 16, 80), 40);
        assert_eq!(fit_columns(40, 16, 50), 34);
        assert_eq!(fit_columns(40, 16, 10), 1);
        assert_eq!(fit_columns(0, 16, 10), 0);
    }

    #[test]
    fn test_fit_default_only_touches_default_on_terminal() {
        // default width on a narrow terminal shrinks
        assert_eq!(fit_default(40, 40, 16, Some(50)), 34);
        // explicit width is kept even if it overflows
        assert_eq!(fit_default(70, 40, 16, Some(50)), 70);
        // piped output never clamps
        assert_eq!(fit_default(40, 40, 16, None), 40);
        assert_eq!(fit_default(200, 40, 16, None), 200);
    }
}
