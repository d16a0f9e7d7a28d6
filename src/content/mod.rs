//! Site content: the records the file system is built from, and the sources
//! they are loaded from.

pub mod source;
pub mod types;

pub use source::{ContentError, ContentFormat, ContentSource, FileContentSource, StaticContentSource};
pub use types::*;
