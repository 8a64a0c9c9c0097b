//! Caret and range selections over a rich text record.
//!
//! Offsets are char indices into the record text. A [`Selection`] with
//! `start == end` is a caret:
//!
//! ```text
//! start=2, end=5: "on[e t]wo"
//! start=3, end=3: "one|two"
//! ```

use serde::{
  Deserialize,
  Serialize,
};

use crate::error::{
  Error,
  Result,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
  pub start: usize,
  pub end:   usize,
}

impl Selection {
  #[inline]
  pub fn new(start: usize, end: usize) -> Self {
    Self { start, end }
  }

  /// Zero-width selection at `pos`.
  #[inline]
  pub fn point(pos: usize) -> Self {
    Self::new(pos, pos)
  }

  #[inline]
  #[must_use]
  pub fn is_collapsed(&self) -> bool {
    self.start == self.end
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.end.saturating_sub(self.start)
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.is_collapsed()
  }

  #[inline]
  pub fn contains(&self, pos: usize) -> bool {
    self.start <= pos && pos < self.end
  }

  /// Fails with [`Error::InvalidRange`] unless `start <= end <= len`.
  pub fn ensure_within(&self, len: usize) -> Result<()> {
    Error::ensure_range(self.start, self.end, len)
  }
}

impl From<std::ops::Range<usize>> for Selection {
  fn from(range: std::ops::Range<usize>) -> Self {
    Self::new(range.start, range.end)
  }
}
