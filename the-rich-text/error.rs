//! Errors raised by record construction and record operations.
//!
//! - **InvalidRange** - `start > end`, or `end` past the text length. Raised
//!   for explicit ranges under the strict policy and for selections that do
//!   not fit the text.
//! - **LengthMismatch** - the format array does not have one slot per char.
//!   Raised when building or decoding a record. Operations build their output
//!   through the same check.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("invalid range {start}..{end} for text length {len}")]
  InvalidRange { start: usize, end: usize, len: usize },
  #[error("formats length {formats} does not match text length {text}")]
  LengthMismatch { text: usize, formats: usize },
}

impl Error {
  /// Checks `start..end` against a text of `len` chars.
  pub(crate) fn ensure_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end > len {
      return Err(Error::InvalidRange { start, end, len });
    }
    Ok(())
  }
}
