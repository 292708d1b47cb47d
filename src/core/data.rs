//! Numeric sequence ingest: raw text in, `Vec<f64>` out.
//!
//! Two strategies, picked once per run through [`ParseMode`]:
//! * `Lines`  - one float per line, blank lines skipped
//! * `Tokens` - any run of whitespace / `,` / `;` separates values
//!
//! Bad tokens never abort the parse.  They are collected as [`Rejected`]
//! so the caller decides how loudly to report them.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    fs, io,
    path::Path,
    str::FromStr,
};

/// Selectable parsing strategy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ParseMode {
    #[default]
    Lines,
    Tokens,
}

impl ParseMode {
    pub const NAMES: [&'static str; 2] = ["lines", "tokens"];
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "tokens" | "token" => Ok(Self::Tokens),
            other => Err(format!(
                "unknown parse mode `{other}` (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// A token that could not be read as a finite float.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based line number
    pub line: usize,
    pub text: String,
}

impl Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: Line {} contains invalid number: '{}'",
            self.line, self.text
        )
    }
}

/// Result of a parse: the values in first-seen order plus what was skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parsed {
    pub values: Vec<f64>,
    pub rejected: Vec<Rejected>,
}

// --- Helpers ---

/// U+2212 MINUS SIGN shows up in copy-pasted data; fold it into ASCII.
#[inline]
fn normalize_unicode_minus(s: &str) -> Cow<'_, str> {
    if s.contains('\u{2212}') {
        Cow::Owned(s.replace('\u{2212}', "-"))
    } else {
        Cow::Borrowed(s)
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

/// Finite floats only; `NaN` / `inf` would poison the averages.
#[inline]
fn parse_f64(token: &str) -> Option<f64> {
    lexical_core::parse::<f64>(normalize_unicode_minus(token).as_bytes())
        .ok()
        .filter(|v| v.is_finite())
}

// --- Parsing ---

#[must_use]
pub fn parse_sequence(raw: &str, mode: ParseMode) -> Parsed {
    let mut out = Parsed::default();

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        match mode {
            ParseMode::Lines => {
                let token = line.trim();
                if token.is_empty() {
                    continue;
                }
                out.push(token, line_no);
            }
            ParseMode::Tokens => {
                for token in line.split(is_separator).filter(|t| !t.is_empty()) {
                    out.push(token, line_no);
                }
            }
        }
    }

    log::debug!(
        "parsed {} values ({} rejected) in {mode:?} mode",
        out.values.len(),
        out.rejected.len()
    );
    out
}

impl Parsed {
    fn push(&mut self, token: &str, line: usize) {
        if let Some(v) = parse_f64(token) {
            self.values.push(v);
        } else {
            log::debug!("line {line}: skipping invalid token {token:?}");
            self.rejected.push(Rejected {
                line,
                text: token.to_owned(),
            });
        }
    }
}

// --- File access ---

/// Read the whole file as text.
///
/// * `Ok(None)` - the file does not exist (not an error for this program)
/// * invalid UTF-8 is replaced, so those tokens simply fail to parse
pub fn read_source(path: &Path) -> io::Result<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("sequence file {} not found", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_skip_invalid() {
        let p = parse_sequence("1\n2\nabc\n3", ParseMode::Lines);
        assert_eq!(p.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            p.rejected,
            vec![Rejected {
                line: 3,
                text: "abc".into()
            }]
        );
    }

    #[test]
    fn test_lines_blank_and_whitespace() {
        let p = parse_sequence("  4.5  \r\n\n\t-2\n", ParseMode::Lines);
        assert_eq!(p.values, vec![4.5, -2.0]);
        assert!(p.rejected.is_empty());
    }

    #[test]
    fn test_lines_whole_line_must_parse() {
        let p = parse_sequence("1 2\n3", ParseMode::Lines);
        assert_eq!(p.values, vec![3.0]);
        assert_eq!(p.rejected[0].line, 1);
        assert_eq!(p.rejected[0].text, "1 2");
    }

    #[test]
    fn test_tokens_mixed_separators() {
        let p = parse_sequence("1, 2;3\n x 4", ParseMode::Tokens);
        assert_eq!(p.values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            p.rejected,
            vec![Rejected {
                line: 2,
                text: "x".into()
            }]
        );
    }

    #[test]
    fn test_tokens_separator_runs() {
        let p = parse_sequence(",,;  1.5 ;; ,2e1,", ParseMode::Tokens);
        assert_eq!(p.values, vec![1.5, 20.0]);
        assert!(p.rejected.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_sequence("", ParseMode::Lines), Parsed::default());
        assert_eq!(parse_sequence(" \n\n", ParseMode::Tokens), Parsed::default());
    }

    #[test]
    fn test_unicode_minus_and_non_finite() {
        let p = parse_sequence("\u{2212}7\nNaN\ninf\n", ParseMode::Lines);
        assert_eq!(p.values, vec![-7.0]);
        assert_eq!(p.rejected.len(), 2);
    }

    #[test]
    fn test_digit_separators_rejected() {
        let p = parse_sequence("1_000\n1000\n", ParseMode::Lines);
        assert_eq!(p.values, vec![1000.0]);
        assert_eq!(p.rejected.len(), 1);
        assert_eq!(p.rejected[0].text, "1_000");
    }

    #[test]
    fn test_rejected_display() {
        let r = Rejected {
            line: 3,
            text: "abc".into(),
        };
        assert_eq!(r.to_string(), "Warning: Line 3 contains invalid number: 'abc'");
    }

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!("Lines".parse::<ParseMode>(), Ok(ParseMode::Lines));
        assert_eq!("tokens".parse::<ParseMode>(), Ok(ParseMode::Tokens));
        assert!("csv".parse::<ParseMode>().is_err());
    }
}
