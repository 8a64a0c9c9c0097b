//! Format descriptors attached to individual characters.
//!
//! Each char of a [`RichText`] owns one slot in its format array. A slot is
//! either absent (`None`, plain text) or a [`FormatSet`]. The helpers here
//! never turn an absent slot into an empty set: adding a format writes a
//! set containing it, and removing the last format of a set clears the slot.

use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize,
};
use smallvec::SmallVec;

use crate::{
  Tendril,
  record::RichText,
};

/// Formats applied to a single char, at most one per [`Format::kind`].
pub type FormatSet = SmallVec<[Format; 2]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Format {
  /// Tag such as `em`, `strong` or `a`.
  #[serde(rename = "type")]
  pub kind:       Tendril,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub attributes: BTreeMap<Tendril, Tendril>,
}

impl Format {
  pub fn new(kind: impl Into<Tendril>) -> Self {
    Self {
      kind:       kind.into(),
      attributes: BTreeMap::new(),
    }
  }

  #[must_use]
  pub fn with_attribute(mut self, key: impl Into<Tendril>, value: impl Into<Tendril>) -> Self {
    self.attributes.insert(key.into(), value.into());
    self
  }

  pub fn attribute(&self, key: &str) -> Option<&str> {
    self.attributes.get(key).map(|value| value.as_str())
  }

  #[inline]
  pub fn is(&self, kind: &str) -> bool {
    self.kind.as_str() == kind
  }
}

/// Returns `slot` with `format` added. Every format of the same kind is
/// dropped and `format` takes the place of the first one.
pub fn with_format(slot: Option<&FormatSet>, format: &Format) -> FormatSet {
  let mut set = slot.cloned().unwrap_or_default();
  let position = set
    .iter()
    .position(|existing| existing.kind == format.kind);
  set.retain(|existing| existing.kind != format.kind);
  set.insert(position.unwrap_or(set.len()), format.clone());
  set
}

/// Returns `slot` without formats of `kind`, or `None` if nothing is left.
pub fn without_format(slot: Option<&FormatSet>, kind: &str) -> Option<FormatSet> {
  let set = slot?;
  if !set.iter().any(|format| format.is(kind)) {
    return Some(set.clone());
  }

  let remaining: FormatSet = set
    .iter()
    .filter(|format| !format.is(kind))
    .cloned()
    .collect();
  (!remaining.is_empty()).then_some(remaining)
}

/// The format of `kind` on the char at the start of the selection.
pub fn active_format<'a>(record: &'a RichText, kind: &str) -> Option<&'a Format> {
  record
    .formats_at(record.selection().start)?
    .iter()
    .find(|format| format.is(kind))
}

#[cfg(test)]
mod test {
  use smallvec::smallvec;

  use super::*;
  use crate::Selection;

  #[test]
  fn with_format_fills_absent_slot() {
    let em = Format::new("em");
    let set = with_format(None, &em);
    assert_eq!(set.as_slice(), &[em]);
  }

  #[test]
  fn with_format_replaces_same_kind() {
    let link = Format::new("a").with_attribute("url", "https://a.test");
    let strong = Format::new("strong");
    let slot: FormatSet = smallvec![strong.clone(), link];

    let updated = Format::new("a").with_attribute("url", "https://b.test");
    let set = with_format(Some(&slot), &updated);

    assert_eq!(set.len(), 2);
    assert_eq!(set[0], strong);
    assert_eq!(set[1].attribute("url"), Some("https://b.test"));
  }

  #[test]
  fn with_format_collapses_duplicate_kinds() {
    let x = Format::new("a").with_attribute("url", "x");
    let y = Format::new("a").with_attribute("url", "y");
    let strong = Format::new("strong");
    let slot: FormatSet = smallvec![strong.clone(), x, Format::new("em"), y];

    let z = Format::new("a").with_attribute("url", "z");
    let set = with_format(Some(&slot), &z);

    assert_eq!(set.as_slice(), &[strong, z, Format::new("em")]);
  }

  #[test]
  fn apply_format_on_decoded_duplicates() {
    let record: RichText = serde_json::from_str(
      r#"{
        "text": "t",
        "formats": [[
          { "type": "a", "attributes": { "url": "x" } },
          { "type": "a", "attributes": { "url": "y" } }
        ]],
        "selection": { "start": 0, "end": 1 }
      }"#,
    )
    .unwrap();

    let link = Format::new("a").with_attribute("url", "z");
    let result = crate::splice::apply_format(&record, &link).unwrap();

    assert_eq!(result.formats_at(0).map(|set| set.as_slice()), Some(&[link][..]));
  }

  #[test]
  fn without_format_clears_emptied_slot() {
    let slot: FormatSet = smallvec![Format::new("em")];
    assert_eq!(without_format(Some(&slot), "em"), None);
    assert_eq!(without_format(None, "em"), None);
  }

  #[test]
  fn without_format_keeps_other_kinds() {
    let slot: FormatSet = smallvec![Format::new("em"), Format::new("strong")];
    let set = without_format(Some(&slot), "em").unwrap();
    assert_eq!(set.as_slice(), &[Format::new("strong")]);

    let untouched = without_format(Some(&slot), "code").unwrap();
    assert_eq!(untouched, slot);
  }

  #[test]
  fn active_format_at_selection_start() {
    let em = Format::new("em");
    let record = RichText::from_parts(
      "ab",
      vec![None, Some(smallvec![em.clone()])],
      Selection::point(1),
    )
    .unwrap();

    assert_eq!(active_format(&record, "em"), Some(&em));
    assert_eq!(active_format(&record, "strong"), None);

    let at_end = record.with_selection(Selection::point(2)).unwrap();
    assert_eq!(active_format(&at_end, "em"), None);
  }
}
