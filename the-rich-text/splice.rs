//! Pure transformations of [`RichText`] records.
//!
//! The central operation is [`insert`]: the span `start..end` of a record
//! is replaced with the text and format slots of another record, and the
//! selection collapses to a caret right after the inserted content.
//!
//! ```text
//! record:    "one two three"   formats: _ _ _ _ e e e _ _ _ _ _ _
//! insert:    "a"               formats: s
//! at 2..6:   "onao three"      formats: _ _ s e _ _ _ _ _ _   caret: 3
//! ```
//!
//! Every other edit (deletion, line breaks, joins) is expressed in terms of
//! the same splice. None of the operations mutate their inputs.
//!
//! # Ranges
//!
//! Functions without an explicit range operate on the record's selection.
//! Explicit ranges are checked by the [`RangePolicy`] of the [`Splicer`];
//! the free functions use [`RangePolicy::Strict`] and fail with
//! [`Error::InvalidRange`](crate::Error::InvalidRange).

use ropey::{
  Rope,
  RopeBuilder,
};

use crate::{
  config::{
    Config,
    RangePolicy,
  },
  error::Result,
  format::{
    Format,
    with_format,
    without_format,
  },
  record::RichText,
  selection::Selection,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Splicer {
  config: Config,
}

impl Splicer {
  pub fn new(config: &Config) -> Self {
    Self { config: *config }
  }

  pub fn with_policy(range_policy: RangePolicy) -> Self {
    Self {
      config: Config {
        range_policy,
        ..Config::default()
      },
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  fn resolve(&self, record: &RichText, start: usize, end: usize) -> Result<(usize, usize)> {
    self
      .config
      .range_policy
      .resolve(start, end, record.len_chars())
  }

  /// Replaces the selection of `record` with `to_insert`.
  pub fn insert(&self, record: &RichText, to_insert: &RichText) -> Result<RichText> {
    let selection = record.selection();
    self.insert_at(record, to_insert, selection.start, selection.end)
  }

  /// Replaces `start..end` of `record` with `to_insert`.
  pub fn insert_at(
    &self,
    record: &RichText,
    to_insert: &RichText,
    start: usize,
    end: usize,
  ) -> Result<RichText> {
    let (start, end) = self.resolve(record, start, end)?;
    splice(record, to_insert, start, end)
  }

  pub fn remove(&self, record: &RichText) -> Result<RichText> {
    self.insert(record, &RichText::new())
  }

  pub fn remove_at(&self, record: &RichText, start: usize, end: usize) -> Result<RichText> {
    self.insert_at(record, &RichText::new(), start, end)
  }

  pub fn insert_line_break(&self, record: &RichText) -> Result<RichText> {
    self.insert(record, &RichText::line_break(self.config.line_break))
  }

  /// Copies `start..end` into a new record with a caret at 0.
  pub fn slice(&self, record: &RichText, start: usize, end: usize) -> Result<RichText> {
    let (start, end) = self.resolve(record, start, end)?;
    copy_range(record, start, end)
  }

  /// Splits `record` around its selection, dropping the selected text.
  pub fn split(&self, record: &RichText) -> Result<(RichText, RichText)> {
    let selection = record.selection();
    self.split_at(record, selection.start, selection.end)
  }

  /// Returns `..start` with a caret at its end and `end..` with a caret at 0.
  pub fn split_at(
    &self,
    record: &RichText,
    start: usize,
    end: usize,
  ) -> Result<(RichText, RichText)> {
    let (start, end) = self.resolve(record, start, end)?;
    tracing::trace!("split record at {start}..{end}");

    let before = copy_range(record, 0, start)?.with_selection(Selection::point(start))?;
    let after = copy_range(record, end, record.len_chars())?;
    Ok((before, after))
  }

  pub fn apply_format(&self, record: &RichText, format: &Format) -> Result<RichText> {
    let selection = record.selection();
    self.apply_format_at(record, format, selection.start, selection.end)
  }

  /// Adds `format` to every char in `start..end`, replacing formats of the
  /// same kind.
  pub fn apply_format_at(
    &self,
    record: &RichText,
    format: &Format,
    start: usize,
    end: usize,
  ) -> Result<RichText> {
    let (start, end) = self.resolve(record, start, end)?;
    tracing::trace!("apply {} format to {start}..{end}", format.kind);

    let mut formats = record.formats().to_vec();
    for slot in &mut formats[start..end] {
      *slot = Some(with_format(slot.as_ref(), format));
    }
    RichText::from_parts(record.text().clone(), formats, record.selection())
  }

  pub fn remove_format(&self, record: &RichText, kind: &str) -> Result<RichText> {
    let selection = record.selection();
    self.remove_format_at(record, kind, selection.start, selection.end)
  }

  /// Drops formats of `kind` from every char in `start..end`.
  pub fn remove_format_at(
    &self,
    record: &RichText,
    kind: &str,
    start: usize,
    end: usize,
  ) -> Result<RichText> {
    let (start, end) = self.resolve(record, start, end)?;
    tracing::trace!("remove {kind} format from {start}..{end}");

    let mut formats = record.formats().to_vec();
    for slot in &mut formats[start..end] {
      *slot = without_format(slot.as_ref(), kind);
    }
    RichText::from_parts(record.text().clone(), formats, record.selection())
  }

  /// Joins two records with a caret at the seam.
  pub fn concat(&self, left: &RichText, right: &RichText) -> Result<RichText> {
    let seam = left.len_chars();
    splice(left, right, seam, seam)?.with_selection(Selection::point(seam))
  }
}

pub fn insert(record: &RichText, to_insert: &RichText) -> Result<RichText> {
  Splicer::default().insert(record, to_insert)
}

pub fn insert_at(
  record: &RichText,
  to_insert: &RichText,
  start: usize,
  end: usize,
) -> Result<RichText> {
  Splicer::default().insert_at(record, to_insert, start, end)
}

pub fn remove(record: &RichText) -> Result<RichText> {
  Splicer::default().remove(record)
}

pub fn remove_at(record: &RichText, start: usize, end: usize) -> Result<RichText> {
  Splicer::default().remove_at(record, start, end)
}

pub fn insert_line_break(record: &RichText) -> Result<RichText> {
  Splicer::default().insert_line_break(record)
}

pub fn slice(record: &RichText, start: usize, end: usize) -> Result<RichText> {
  Splicer::default().slice(record, start, end)
}

pub fn split(record: &RichText) -> Result<(RichText, RichText)> {
  Splicer::default().split(record)
}

pub fn split_at(record: &RichText, start: usize, end: usize) -> Result<(RichText, RichText)> {
  Splicer::default().split_at(record, start, end)
}

pub fn concat(left: &RichText, right: &RichText) -> Result<RichText> {
  Splicer::default().concat(left, right)
}

pub fn apply_format(record: &RichText, format: &Format) -> Result<RichText> {
  Splicer::default().apply_format(record, format)
}

pub fn apply_format_at(
  record: &RichText,
  format: &Format,
  start: usize,
  end: usize,
) -> Result<RichText> {
  Splicer::default().apply_format_at(record, format, start, end)
}

pub fn remove_format(record: &RichText, kind: &str) -> Result<RichText> {
  Splicer::default().remove_format(record, kind)
}

pub fn remove_format_at(
  record: &RichText,
  kind: &str,
  start: usize,
  end: usize,
) -> Result<RichText> {
  Splicer::default().remove_format_at(record, kind, start, end)
}

fn append_slice(text: &Rope, from: usize, to: usize, builder: &mut RopeBuilder) {
  if from >= to {
    return;
  }
  for chunk in text.slice(from..to).chunks() {
    builder.append(chunk);
  }
}

// `start..end` must already be validated against `record`.
fn splice(record: &RichText, to_insert: &RichText, start: usize, end: usize) -> Result<RichText> {
  let len = record.len_chars();
  let inserted = to_insert.len_chars();
  tracing::trace!("splice {inserted} chars over {start}..{end} of {len}");

  let mut builder = RopeBuilder::new();
  append_slice(record.text(), 0, start, &mut builder);
  append_slice(to_insert.text(), 0, inserted, &mut builder);
  append_slice(record.text(), end, len, &mut builder);

  let formats = record.formats();
  let mut spliced = Vec::with_capacity(start + inserted + (len - end));
  spliced.extend_from_slice(&formats[..start]);
  spliced.extend_from_slice(to_insert.formats());
  spliced.extend_from_slice(&formats[end..]);

  RichText::from_parts(
    builder.finish(),
    spliced,
    Selection::point(start + inserted),
  )
}

fn copy_range(record: &RichText, start: usize, end: usize) -> Result<RichText> {
  RichText::from_parts(
    Rope::from(record.text().slice(start..end)),
    record.formats()[start..end].to_vec(),
    Selection::point(0),
  )
}
