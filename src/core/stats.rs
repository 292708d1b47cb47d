//! Position-parity partition + absolute averages.

/// `(avg_odd, avg_even)`.
///
/// "Odd" is the partition starting at index 0 (1st, 3rd, ... value), "even"
/// the one starting at index 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartStats {
    pub avg_odd: f64,
    pub avg_even: f64,
}

impl ChartStats {
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.avg_odd + self.avg_even
    }
}

/// `|mean|`, or 0.0 for an empty slice.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn abs_mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { (sum / n as f64).abs() }
}

#[must_use]
pub fn compute_averages(seq: &[f64]) -> ChartStats {
    ChartStats {
        avg_odd: abs_mean(seq.iter().copied().step_by(2)),
        avg_even: abs_mean(seq.iter().skip(1).copied().step_by(2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(compute_averages(&[]), ChartStats::default());
    }

    #[test]
    fn test_single_value() {
        let s = compute_averages(&[-3.5]);
        assert_eq!(s.avg_odd, 3.5);
        assert_eq!(s.avg_even, 0.0);
    }

    #[test]
    fn test_interleaved() {
        let s = compute_averages(&[1.0, -2.0, 3.0, -4.0]);
        assert_eq!(s.avg_odd, 2.0);
        assert_eq!(s.avg_even, 3.0);
        assert_eq!(s.total(), 5.0);
    }

    #[test]
    fn test_mean_before_abs() {
        // odd partition [1, -3] -> mean -1 -> 1, not mean(|x|) = 2
        let s = compute_averages(&[1.0, 10.0, -3.0]);
        assert_eq!(s.avg_odd, 1.0);
        assert_eq!(s.avg_even, 10.0);
    }

    #[test]
    fn test_cancelling_partitions() {
        let s = compute_averages(&[2.0, 5.0, -2.0, -5.0]);
        assert_eq!(s.total(), 0.0);
    }
}
