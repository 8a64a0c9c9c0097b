//! Settings for [`Splicer`](crate::Splicer), loaded from TOML.
//!
//! ```toml
//! range-policy = "clamp"   # or "strict" (default)
//! line-break   = "\n"      # char inserted by `insert_line_break`
//! ```
//!
//! Every key is optional. Unknown keys are rejected.

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::error::{
  Error,
  Result,
};

pub const DEFAULT_LINE_BREAK: char = '\n';

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse rich text config: {0}")]
  Parse(#[from] toml::de::Error),
}

/// How explicit `start..end` arguments are checked against a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
  /// Reject ranges outside the text or with `start > end`.
  #[default]
  Strict,
  /// Pull `end` back to the text length and `start` back to `end`.
  Clamp,
}

impl RangePolicy {
  pub fn resolve(self, start: usize, end: usize, len: usize) -> Result<(usize, usize)> {
    match self {
      RangePolicy::Strict => {
        Error::ensure_range(start, end, len)?;
        Ok((start, end))
      },
      RangePolicy::Clamp => {
        let clamped_end = end.min(len);
        let clamped_start = start.min(clamped_end);
        if (clamped_start, clamped_end) != (start, end) {
          tracing::debug!(
            "clamped range {start}..{end} to {clamped_start}..{clamped_end} for length {len}"
          );
        }
        Ok((clamped_start, clamped_end))
      },
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  pub range_policy: RangePolicy,
  /// Char inserted by `insert_line_break`.
  pub line_break:   char,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      range_policy: RangePolicy::Strict,
      line_break:   DEFAULT_LINE_BREAK,
    }
  }
}

impl Config {
  pub fn from_toml(contents: &str) -> std::result::Result<Self, ConfigError> {
    Ok(toml::from_str(contents)?)
  }
}
