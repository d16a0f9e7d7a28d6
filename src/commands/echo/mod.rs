// src/commands/echo/mod.rs
use lazy_static::lazy_static;
use regex_lite::{Captures, Regex};

use crate::commands::{Command, CommandContext, CommandResult};

lazy_static! {
    static ref VARIABLE: Regex = Regex::new(r"\$(\w+)").unwrap();
}

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let text = ctx.args.join(" ");
        let expanded = VARIABLE.replace_all(&text, |caps: &Captures| {
            ctx.env.get(&caps[1]).cloned().unwrap_or_default()
        });
        CommandResult::success(expanded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;

    #[test]
    fn test_echo_joins_args() {
        let mut shell = TestShell::empty();
        let result = shell.run(&EchoCommand, &["hello", "world"]);
        assert_eq!(result.stdout, "hello world");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_echo_no_args() {
        let mut shell = TestShell::empty();
        assert_eq!(shell.run(&EchoCommand, &[]).stdout, "");
    }

    #[test]
    fn test_echo_expands_variables() {
        let mut shell = TestShell::empty();
        shell.env.insert("USER".to_string(), "visitor".to_string());
        let result = shell.run(&EchoCommand, &["hi", "$USER!", "[$MISSING]"]);
        assert_eq!(result.stdout, "hi visitor! []");
    }
}
