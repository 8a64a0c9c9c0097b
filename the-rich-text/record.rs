//! The rich text record: text, one format slot per char, and a selection.
//!
//! A [`RichText`] can only be built through validating constructors, so
//! every value upholds `formats.len() == text.len_chars()` and keeps its
//! selection within the text. Records are values: operations in
//! [`crate::splice`] read them by reference and return new records. Cloning
//! is cheap for the text since [`Rope`] shares its chunks.
//!
//! # Encoding
//!
//! Records (de)serialize as
//!
//! ```text
//! { "text": "ab", "formats": [null, [{ "type": "em" }]], "selection": { "start": 0, "end": 0 } }
//! ```
//!
//! Decoding runs the same validation as [`RichText::from_parts`].

use ropey::Rope;
use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  error::{
    Error,
    Result,
  },
  format::FormatSet,
  selection::Selection,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRichText", into = "RawRichText")]
pub struct RichText {
  text:      Rope,
  formats:   Vec<Option<FormatSet>>,
  selection: Selection,
}

impl RichText {
  #[must_use]
  pub fn new() -> Self {
    Self {
      text:      Rope::new(),
      formats:   Vec::new(),
      selection: Selection::point(0),
    }
  }

  /// Plain text with every format slot absent and a caret at 0.
  pub fn from_text(text: &str) -> Self {
    let text = Rope::from_str(text);
    let formats = vec![None; text.len_chars()];
    Self {
      text,
      formats,
      selection: Selection::point(0),
    }
  }

  /// A single line break char with an absent format slot.
  pub fn line_break(ch: char) -> Self {
    Self::from_text(ch.encode_utf8(&mut [0; 4]))
  }

  pub fn from_parts(
    text: impl Into<Rope>,
    formats: Vec<Option<FormatSet>>,
    selection: Selection,
  ) -> Result<Self> {
    let text = text.into();
    let len = text.len_chars();
    if formats.len() != len {
      return Err(Error::LengthMismatch {
        text:    len,
        formats: formats.len(),
      });
    }
    selection.ensure_within(len)?;

    Ok(Self {
      text,
      formats,
      selection,
    })
  }

  pub fn with_selection(mut self, selection: Selection) -> Result<Self> {
    selection.ensure_within(self.len_chars())?;
    self.selection = selection;
    Ok(self)
  }

  #[inline]
  pub fn text(&self) -> &Rope {
    &self.text
  }

  #[inline]
  pub fn formats(&self) -> &[Option<FormatSet>] {
    &self.formats
  }

  /// The formats on the char at `index`, if any.
  pub fn formats_at(&self, index: usize) -> Option<&FormatSet> {
    self.formats.get(index)?.as_ref()
  }

  #[inline]
  pub fn selection(&self) -> Selection {
    self.selection
  }

  /// Length in chars.
  #[inline]
  pub fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len_chars() == 0
  }

  #[inline]
  pub fn is_collapsed(&self) -> bool {
    self.selection.is_collapsed()
  }

  pub fn text_content(&self) -> String {
    self.text.to_string()
  }

  pub(crate) fn into_parts(self) -> (Rope, Vec<Option<FormatSet>>, Selection) {
    (self.text, self.formats, self.selection)
  }
}

impl Default for RichText {
  fn default() -> Self {
    Self::new()
  }
}

impl From<&str> for RichText {
  fn from(text: &str) -> Self {
    Self::from_text(text)
  }
}

#[derive(Serialize, Deserialize)]
struct RawRichText {
  text:      String,
  formats:   Vec<Option<FormatSet>>,
  #[serde(default)]
  selection: Selection,
}

impl TryFrom<RawRichText> for RichText {
  type Error = Error;

  fn try_from(raw: RawRichText) -> Result<Self> {
    Self::from_parts(raw.text, raw.formats, raw.selection)
  }
}

impl From<RichText> for RawRichText {
  fn from(record: RichText) -> Self {
    let (text, formats, selection) = record.into_parts();
    Self {
      text: text.to_string(),
      formats,
      selection,
    }
  }
}
