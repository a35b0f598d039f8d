//! Stat value formatting
//!
//! Each stat card carries an explicit `StatFormat` next to its numeric target,
//! so in-flight animation frames are formatted exactly like the final value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a stat value is rendered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatFormat {
    /// Rounded integer, no separators: `1234`
    #[default]
    Integer,
    /// Dollar prefix with thousands separators: `$45,000`
    Currency,
    /// Rounded integer with a percent suffix: `87%`
    Percent,
}

impl StatFormat {
    /// Format a (possibly mid-animation) value
    pub fn format(&self, value: f64) -> String {
        let rounded = value.round() as i64;
        match self {
            StatFormat::Integer => rounded.to_string(),
            StatFormat::Currency => {
                if rounded < 0 {
                    format!("-${}", group_thousands(rounded.unsigned_abs()))
                } else {
                    format!("${}", group_thousands(rounded.unsigned_abs()))
                }
            }
            StatFormat::Percent => format!("{}%", rounded),
        }
    }
}

/// Errors from turning a display literal back into a stat target
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatError {
    #[error("Unparseable stat value: {0:?}")]
    Unparseable(String),
}

/// Numeric target of a stat card plus its display format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatTarget {
    pub value: f64,
    pub format: StatFormat,
}

impl StatTarget {
    pub fn new(value: f64, format: StatFormat) -> Self {
        Self { value, format }
    }

    pub fn integer(value: impl Into<f64>) -> Self {
        Self::new(value.into(), StatFormat::Integer)
    }

    pub fn currency(value: impl Into<f64>) -> Self {
        Self::new(value.into(), StatFormat::Currency)
    }

    pub fn percent(value: impl Into<f64>) -> Self {
        Self::new(value.into(), StatFormat::Percent)
    }

    /// Final formatted value
    pub fn display(&self) -> String {
        self.format.format(self.value)
    }

    /// Parse a display literal such as `"$45,000"`, `"87%"` or `"1234"`
    ///
    /// The format is chosen from the literal's prefix or suffix. Anything that
    /// does not reduce to a plain number is rejected rather than guessed at.
    pub fn from_literal(literal: &str) -> Result<Self, StatError> {
        let trimmed = literal.trim();
        let unparseable = || StatError::Unparseable(literal.to_string());

        let (format, digits) = if let Some(rest) = trimmed.strip_prefix('$') {
            (StatFormat::Currency, rest)
        } else if let Some(rest) = trimmed.strip_suffix('%') {
            (StatFormat::Percent, rest)
        } else {
            (StatFormat::Integer, trimmed)
        };

        let cleaned: String = digits.chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() {
            return Err(unparseable());
        }

        let value: f64 = cleaned.parse().map_err(|_| unparseable())?;
        if !value.is_finite() {
            return Err(unparseable());
        }

        Ok(Self::new(value, format))
    }
}

/// Insert `,` between groups of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
