use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Print options for the `Display` output of vectors and matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    /// Digits after the decimal point. `None` prints the shortest
    /// representation that round trips.
    pub precision: Option<usize>,

    pub separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: None,
            separator: ", ".to_string(),
        }
    }
}

impl FormatConfig {
    pub fn new(precision: Option<usize>, separator: &str) -> Self {
        Self {
            precision,
            separator: separator.to_string(),
        }
    }

    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..Self::default()
        }
    }

    /// Write `values` as a bracketed row, e.g. `[1, 2, 3]`.
    pub(crate) fn write_row<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        values: &[f64],
    ) -> fmt::Result {
        write!(out, "[")?;
        for (idx, value) in values.iter().enumerate() {
            match self.precision {
                Some(p) => write!(out, "{:.*}", p, value)?,
                None => write!(out, "{}", value)?,
            }
            if idx + 1 != values.len() {
                write!(out, "{}", self.separator)?;
            }
        }
        write!(out, "]")
    }
}

/// A container that can render itself under a given `FormatConfig`.
pub(crate) trait FormatWith {
    fn fmt_with(&self, out: &mut dyn fmt::Write, cfg: &FormatConfig) -> fmt::Result;
}

/// `Display` adapter pairing a container with explicit print options.
pub(crate) struct DisplayWith<'a, T>(pub &'a T, pub &'a FormatConfig);

impl<T: FormatWith> fmt::Display for DisplayWith<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_with(f, self.1)
    }
}

impl FromStr for FormatConfig {
    type Err = String;

    /// Accepts `"auto"` (shortest representation) or a digit count such as `"3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(FormatConfig::default()),
            digits => digits
                .parse::<usize>()
                .map(FormatConfig::with_precision)
                .map_err(|_| {
                    format!(
                        "Unknown precision: {}. Expected 'auto' or a number of digits",
                        s
                    )
                }),
        }
    }
}
