//! Shell Errors
//!
//! Every failure a builtin can report. Errors are rendered as a single error
//! line (two for an unknown command) and never end the session.

use thiserror::Error;

use crate::fs::FsError;

/// Exit code for ordinary failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for commands the sandbox refuses to run.
pub const EXIT_NOT_PERMITTED: i32 = 126;
/// Exit code for unknown commands.
pub const EXIT_NOT_FOUND: i32 = 127;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("{command}: {operand}: No such file or directory")]
    PathNotFound { command: String, operand: String },

    #[error("{command}: {operand}: Not a directory")]
    NotADirectory { command: String, operand: String },

    #[error("{command}: {operand}: Is a directory")]
    IsADirectory { command: String, operand: String },

    #[error("{command}: {operand}: File exists")]
    AlreadyExists { command: String, operand: String },

    #[error("{command}: {message}")]
    InvalidArgument { command: String, message: String },

    #[error("{message}")]
    PermissionDenied { command: String, message: String },

    #[error("{command}: command not found\nType 'help' for available commands.")]
    UnknownCommand { command: String },
}

impl ShellError {
    pub fn not_found(command: &str, operand: impl Into<String>) -> Self {
        ShellError::PathNotFound { command: command.to_string(), operand: operand.into() }
    }

    pub fn not_a_directory(command: &str, operand: impl Into<String>) -> Self {
        ShellError::NotADirectory { command: command.to_string(), operand: operand.into() }
    }

    pub fn is_a_directory(command: &str, operand: impl Into<String>) -> Self {
        ShellError::IsADirectory { command: command.to_string(), operand: operand.into() }
    }

    pub fn already_exists(command: &str, operand: impl Into<String>) -> Self {
        ShellError::AlreadyExists { command: command.to_string(), operand: operand.into() }
    }

    pub fn invalid_argument(command: &str, message: impl Into<String>) -> Self {
        ShellError::InvalidArgument { command: command.to_string(), message: message.into() }
    }

    pub fn permission_denied(command: &str, message: impl Into<String>) -> Self {
        ShellError::PermissionDenied { command: command.to_string(), message: message.into() }
    }

    pub fn unknown_command(command: &str) -> Self {
        ShellError::UnknownCommand { command: command.to_string() }
    }

    /// Map a file system error onto the taxonomy, naming `operand` as typed.
    pub fn from_fs(command: &str, operand: impl Into<String>, err: FsError) -> Self {
        match err {
            FsError::NotFound { .. } => Self::not_found(command, operand),
            FsError::AlreadyExists { .. } => Self::already_exists(command, operand),
            FsError::IsDirectory { .. } => Self::is_a_directory(command, operand),
            FsError::NotDirectory { .. } => Self::not_a_directory(command, operand),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::PermissionDenied { .. } => EXIT_NOT_PERMITTED,
            ShellError::UnknownCommand { .. } => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::not_found("cat", "x.txt").to_string(),
            "cat: x.txt: No such file or directory"
        );
        assert_eq!(
            ShellError::already_exists("mkdir", "cannot create directory 'foo'").to_string(),
            "mkdir: cannot create directory 'foo': File exists"
        );
        assert_eq!(
            ShellError::unknown_command("frobnicate").to_string(),
            "frobnicate: command not found\nType 'help' for available commands."
        );
        assert_eq!(
            ShellError::permission_denied("sudo", "Permission denied. Nice try though.").to_string(),
            "Permission denied. Nice try though."
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShellError::not_a_directory("cd", "a").exit_code(), 1);
        assert_eq!(ShellError::permission_denied("rm", "no").exit_code(), 126);
        assert_eq!(ShellError::unknown_command("x").exit_code(), 127);
    }

    #[test]
    fn test_from_fs_keeps_operand() {
        let err = ShellError::from_fs(
            "touch",
            "cannot touch 'a/b'",
            FsError::NotFound { path: "/a/b".to_string() },
        );
        assert_eq!(err.to_string(), "touch: cannot touch 'a/b': No such file or directory");
    }
}
