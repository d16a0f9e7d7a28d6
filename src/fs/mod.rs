//! File System Module
//!
//! The synthetic file system the shell operates on:
//! - types: the owned node tree and its errors
//! - path: cwd-relative path normalization and lookup
//! - builder: populating the tree from site content

pub mod builder;
pub mod path;
pub mod types;

pub use builder::{build_filesystem, build_from_content, slugify};
pub use path::{display_path, join, lookup, resolve, resolve_mut, split_parent, to_absolute, HOME_DIR};
pub use types::*;
