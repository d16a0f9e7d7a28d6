//! File System Types
//!
//! Core types for the synthetic, memory-resident file system. The tree is a
//! strict ownership hierarchy: every directory owns its children and there
//! are no back pointers, so every traversal starts at the root.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory '{path}'")]
    NotFound { path: String },

    #[error("EEXIST: file already exists '{path}'")]
    AlreadyExists { path: String },

    #[error("EISDIR: illegal operation on a directory '{path}'")]
    IsDirectory { path: String },

    #[error("ENOTDIR: not a directory '{path}'")]
    NotDirectory { path: String },
}

/// A node of the synthetic file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    Directory { children: IndexMap<String, FsNode> },
    File { content: String },
}

impl FsNode {
    /// Create an empty directory.
    pub fn dir() -> Self {
        FsNode::Directory { children: IndexMap::new() }
    }

    /// Create a file holding `content`.
    pub fn file(content: impl Into<String>) -> Self {
        FsNode::File { content: content.into() }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&IndexMap<String, FsNode>> {
        match self {
            FsNode::Directory { children } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut IndexMap<String, FsNode>> {
        match self {
            FsNode::Directory { children } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    /// Content of a file, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Size as shown by `ls -l`: character count for files.
    pub fn size(&self) -> Option<usize> {
        self.content().map(|c| c.chars().count())
    }

    /// Look up an immediate child by name.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children().and_then(|c| c.get(name))
    }

    /// Insert (or replace) a child. Files silently ignore the call.
    pub fn set(&mut self, name: impl Into<String>, node: FsNode) {
        if let Some(children) = self.children_mut() {
            children.insert(name.into(), node);
        }
    }

    /// Child names sorted in case-sensitive lexicographic order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .children()
            .map(|c| c.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Insert a new empty directory named `name`.
    pub fn create_dir(&mut self, name: &str, path: &str) -> Result<(), FsError> {
        let children = self.children_mut().ok_or_else(|| FsError::NotDirectory {
            path: path.to_string(),
        })?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists { path: path.to_string() });
        }
        children.insert(name.to_string(), FsNode::dir());
        Ok(())
    }

    /// Insert a new empty file named `name`; an existing entry is left alone.
    pub fn touch_file(&mut self, name: &str, path: &str) -> Result<(), FsError> {
        let children = self.children_mut().ok_or_else(|| FsError::NotDirectory {
            path: path.to_string(),
        })?;
        children
            .entry(name.to_string())
            .or_insert_with(|| FsNode::file(""));
        Ok(())
    }
}

impl Default for FsNode {
    fn default() -> Self {
        FsNode::dir()
    }
}
