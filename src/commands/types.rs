// src/commands/types.rs
use indexmap::IndexMap;
use std::time::Instant;

use crate::fs::FsNode;
use crate::interpreter::errors::ShellError;

/// Session-level side effects a command can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    /// Switch the working directory to this absolute path.
    ChangeDir(String),
    ClearScreen,
    Exit,
}

/// Result of running one builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub effect: Option<ShellEffect>,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0, effect: None }
    }

    pub fn empty() -> Self {
        Self::success(String::new())
    }

    pub fn failure(err: ShellError) -> Self {
        Self { stdout: String::new(), stderr: err.to_string(), exit_code: err.exit_code(), effect: None }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, effect: None }
    }

    pub fn with_effect(mut self, effect: ShellEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

impl From<Result<String, ShellError>> for CommandResult {
    fn from(result: Result<String, ShellError>) -> Self {
        match result {
            Ok(stdout) => CommandResult::success(stdout),
            Err(err) => CommandResult::failure(err),
        }
    }
}

/// Everything a builtin may read or change.
///
/// `cwd` is read-only: a directory change is requested through
/// [`ShellEffect::ChangeDir`] and applied by the caller.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub stdin: String,
    pub cwd: &'a str,
    pub env: &'a mut IndexMap<String, String>,
    pub history: &'a [String],
    pub fs: &'a mut FsNode,
    /// Sorted names of every registered builtin.
    pub builtins: &'a [String],
    pub started_at: Instant,
}

/// A builtin command.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Extra names the command answers to.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
