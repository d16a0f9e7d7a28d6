//! Interpreter Types
//!
//! Result and option types shared by the interpreter and the terminal session.

use std::collections::HashMap;

/// Outcome of executing one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub should_exit: bool,
    pub should_clear_screen: bool,
    /// Working directory the caller should switch to, when `cd` ran.
    pub new_cwd: Option<String>,
}

/// Options for creating a session.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Starting directory; must name an existing directory, else home is used.
    pub cwd: Option<String>,
    /// Extra environment variables, applied over the defaults.
    pub env: Option<HashMap<String, String>>,
}
