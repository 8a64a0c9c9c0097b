use smartstring::{LazyCompact, SmartString};

pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod selection;
pub mod splice;

pub use error::{Error, Result};
pub use format::{Format, FormatSet};
pub use record::RichText;
pub use selection::Selection;
pub use splice::{Splicer, insert, insert_at};

pub type Tendril = SmartString<LazyCompact>;
