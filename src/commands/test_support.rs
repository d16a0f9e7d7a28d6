// src/commands/test_support.rs
//! Fixtures shared by the builtin tests.

use indexmap::IndexMap;
use std::time::Instant;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::content::SiteContent;
use crate::fs::{build_from_content, FsNode, HOME_DIR};

pub struct TestShell {
    pub cwd: String,
    pub env: IndexMap<String, String>,
    pub history: Vec<String>,
    pub fs: FsNode,
    pub builtins: Vec<String>,
}

impl TestShell {
    /// A shell over an empty root, cwd `/`.
    pub fn empty() -> Self {
        Self {
            cwd: "/".to_string(),
            env: IndexMap::new(),
            history: Vec::new(),
            fs: FsNode::dir(),
            builtins: Vec::new(),
        }
    }

    /// A shell over the sample site content, cwd at home.
    pub fn portfolio() -> Self {
        Self {
            cwd: HOME_DIR.to_string(),
            fs: build_from_content(&SiteContent::sample()),
            ..Self::empty()
        }
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    /// Add a file at an absolute path, creating parent directories.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        let Some((name, dirs)) = parts.split_last() else {
            return self;
        };
        let mut node = &mut self.fs;
        for dir in dirs {
            node = node
                .children_mut()
                .expect("parent is a directory")
                .entry(dir.to_string())
                .or_insert_with(FsNode::dir);
        }
        node.set(*name, FsNode::file(content));
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        let mut node = &mut self.fs;
        for dir in path.split('/').filter(|p| !p.is_empty()) {
            node = node
                .children_mut()
                .expect("parent is a directory")
                .entry(dir.to_string())
                .or_insert_with(FsNode::dir);
        }
        self
    }

    pub fn run(&mut self, cmd: &dyn Command, args: &[&str]) -> CommandResult {
        self.run_with_stdin(cmd, args, "")
    }

    pub fn run_with_stdin(&mut self, cmd: &dyn Command, args: &[&str], stdin: &str) -> CommandResult {
        let ctx = CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            stdin: stdin.to_string(),
            cwd: &self.cwd,
            env: &mut self.env,
            history: &self.history,
            fs: &mut self.fs,
            builtins: &self.builtins,
            started_at: Instant::now(),
        };
        cmd.execute(ctx)
    }
}
