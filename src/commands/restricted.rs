//! Commands a visitor might reach for that the shell refuses on purpose.

use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

#[derive(Clone, Copy)]
enum Restriction {
    ReadOnly,
    Privilege,
    Editor,
    Runtime,
}

impl Restriction {
    fn message(self, name: &str) -> String {
        match self {
            Restriction::ReadOnly => {
                format!("{}: operation not permitted, this portfolio is read-only!", name)
            }
            Restriction::Privilege => "Permission denied. Nice try though.".to_string(),
            Restriction::Editor => format!(
                "{}: editor not available. This is a read-only filesystem.",
                name
            ),
            Restriction::Runtime => format!(
                "{}: not loaded. This shell emulates basic Unix commands.\n\
                 The filesystem contains the portfolio data, explore with ls, cd, cat.",
                name
            ),
        }
    }
}

pub struct RestrictedCommand {
    name: &'static str,
    restriction: Restriction,
}

impl Command for RestrictedCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::failure(ShellError::permission_denied(
            self.name,
            self.restriction.message(self.name),
        ))
    }
}

/// Every refused command, one instance per name.
pub fn restricted_commands() -> Vec<Box<dyn Command>> {
    const TABLE: &[(&str, Restriction)] = &[
        ("rm", Restriction::ReadOnly),
        ("sudo", Restriction::Privilege),
        ("vi", Restriction::Editor),
        ("vim", Restriction::Editor),
        ("nano", Restriction::Editor),
        ("python", Restriction::Runtime),
        ("python3", Restriction::Runtime),
        ("node", Restriction::Runtime),
    ];

    TABLE
        .iter()
        .map(|&(name, restriction)| {
            Box::new(RestrictedCommand { name, restriction }) as Box<dyn Command>
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;

    fn find(name: &str) -> Box<dyn Command> {
        restricted_commands()
            .into_iter()
            .find(|c| c.name() == name)
            .expect("registered")
    }

    #[test]
    fn test_sudo_denied() {
        let mut shell = TestShell::empty();
        let result = shell.run(find("sudo").as_ref(), &["ls"]);
        assert_eq!(result.stderr, "Permission denied. Nice try though.");
        assert_eq!(result.exit_code, 126);
    }

    #[test]
    fn test_rm_never_touches_the_tree() {
        let mut shell = TestShell::portfolio();
        let before = shell.fs.clone();
        let result = shell.run(find("rm").as_ref(), &["-rf", "/"]);
        assert!(result.stderr.starts_with("rm: operation not permitted"));
        assert_eq!(shell.fs, before);
    }

    #[test]
    fn test_editor_and_runtime_messages_name_the_command() {
        let mut shell = TestShell::empty();
        let vim = shell.run(find("vim").as_ref(), &["file"]);
        assert!(vim.stderr.starts_with("vim: editor not available"));
        let node = shell.run(find("node").as_ref(), &[]);
        assert!(node.stderr.starts_with("node: not loaded."));
    }
}
