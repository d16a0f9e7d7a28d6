// src/commands/env/mod.rs
use crate::commands::utils::{append_line, operands};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

fn format_env(ctx: &CommandContext<'_>) -> String {
    ctx.env
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct EnvCommand;

impl Command for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(format_env(&ctx))
    }
}

pub struct PrintenvCommand;

impl Command for PrintenvCommand {
    fn name(&self) -> &'static str {
        "printenv"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let vars = operands(&ctx.args);
        if vars.is_empty() {
            return CommandResult::success(format_env(&ctx));
        }

        let mut lines: Vec<&str> = Vec::new();
        let mut exit_code = 0;
        for name in vars {
            match ctx.env.get(name) {
                Some(value) => lines.push(value),
                None => exit_code = 1,
            }
        }
        CommandResult::with_exit_code(lines.join("\n"), String::new(), exit_code)
    }
}

pub struct ExportCommand;

impl Command for ExportCommand {
    fn name(&self) -> &'static str {
        "export"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            let listing = ctx
                .env
                .iter()
                .map(|(key, value)| format!("declare -x {}=\"{}\"", key, value))
                .collect::<Vec<_>>()
                .join("\n");
            return CommandResult::success(listing);
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        for arg in &ctx.args {
            match arg.split_once('=') {
                Some((key, value)) if is_identifier(key) => {
                    ctx.env.insert(key.to_string(), value.to_string());
                }
                // A bare name only marks the variable for export, which is a no-op here.
                None if is_identifier(arg) => {}
                _ => {
                    let err = ShellError::invalid_argument(
                        "export",
                        format!("'{}': not a valid identifier", arg),
                    );
                    append_line(&mut stderr, &err.to_string());
                    exit_code = err.exit_code();
                }
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;

    fn shell_with_env() -> TestShell {
        let mut shell = TestShell::empty();
        shell.env.insert("HOME".to_string(), "/home/visitor".to_string());
        shell.env.insert("USER".to_string(), "visitor".to_string());
        shell
    }

    #[test]
    fn test_env_lists_in_insertion_order() {
        let mut shell = shell_with_env();
        let result = shell.run(&EnvCommand, &[]);
        assert_eq!(result.stdout, "HOME=/home/visitor\nUSER=visitor");
    }

    #[test]
    fn test_printenv_single_value() {
        let mut shell = shell_with_env();
        assert_eq!(shell.run(&PrintenvCommand, &["USER"]).stdout, "visitor");
        let missing = shell.run(&PrintenvCommand, &["NOPE"]);
        assert_eq!(missing.stdout, "");
        assert_eq!(missing.exit_code, 1);
    }

    #[test]
    fn test_export_sets_and_lists() {
        let mut shell = TestShell::empty();
        let result = shell.run(&ExportCommand, &["EDITOR=cat", "GREETING=hello=world"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(shell.env.get("GREETING").map(String::as_str), Some("hello=world"));

        let listing = shell.run(&ExportCommand, &[]);
        assert_eq!(
            listing.stdout,
            "declare -x EDITOR=\"cat\"\ndeclare -x GREETING=\"hello=world\""
        );
    }

    #[test]
    fn test_export_overwrites_in_place() {
        let mut shell = shell_with_env();
        shell.run(&ExportCommand, &["HOME=/tmp"]);
        let result = shell.run(&EnvCommand, &[]);
        assert_eq!(result.stdout, "HOME=/tmp\nUSER=visitor");
    }

    #[test]
    fn test_export_rejects_bad_identifier() {
        let mut shell = TestShell::empty();
        let result = shell.run(&ExportCommand, &["=oops", "1X=2"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            result.stderr,
            "export: '=oops': not a valid identifier\nexport: '1X=2': not a valid identifier"
        );
        assert!(shell.env.is_empty());
    }
}
