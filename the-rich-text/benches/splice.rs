//! Benchmarks for record splicing in the-rich-text.
//!
//! Run with: `cargo bench -p the-rich-text --bench splice`

use divan::{
  Bencher,
  black_box,
};
use smallvec::smallvec;
use the_rich_text::{
  Format,
  FormatSet,
  RichText,
  Selection,
  insert,
  insert_at,
  splice::Splicer,
};

fn main() {
  divan::main();
}

fn make_ascii_text(size: usize) -> String {
  let line = "The quick brown fox jumps over the lazy dog. ";
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(line);
  }
  s.truncate(size);
  s
}

// Every fourth char is emphasized, the rest are absent slots.
fn make_record(size: usize) -> RichText {
  let text = make_ascii_text(size);
  let formats: Vec<Option<FormatSet>> = (0..size)
    .map(|i| (i % 4 == 0).then(|| smallvec![Format::new("em")]))
    .collect();
  RichText::from_parts(text.as_str(), formats, Selection::point(size / 2)).unwrap()
}

mod insert {
  use super::*;

  #[divan::bench(args = [1024, 100 * 1024, 1024 * 1024])]
  fn caret(bencher: Bencher, size: usize) {
    let record = make_record(size);
    let to_insert = RichText::from_text("x");

    bencher.bench(|| {
      let result = insert(black_box(&record), black_box(&to_insert)).unwrap();
      black_box(result);
    });
  }

  #[divan::bench(args = [1024, 100 * 1024, 1024 * 1024])]
  fn replace_range(bencher: Bencher, size: usize) {
    let record = make_record(size);
    let to_insert = make_record(64);
    let start = size / 4;
    let end = start + size / 8;

    bencher.bench(|| {
      let result = insert_at(black_box(&record), black_box(&to_insert), start, end).unwrap();
      black_box(result);
    });
  }
}

mod format {
  use super::*;

  #[divan::bench(args = [1024, 100 * 1024])]
  fn apply_to_half(bencher: Bencher, size: usize) {
    let record = make_record(size);
    let splicer = Splicer::default();
    let strong = Format::new("strong");

    bencher.bench(|| {
      let result = splicer
        .apply_format_at(black_box(&record), black_box(&strong), 0, size / 2)
        .unwrap();
      black_box(result);
    });
  }
}
