use crate::commands::utils::append_line;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct WhichCommand;

impl Command for WhichCommand {
    fn name(&self) -> &'static str {
        "which"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let names: Vec<&str> = ctx
            .args
            .iter()
            .map(|a| a.as_str())
            .filter(|a| !a.starts_with('-'))
            .collect();
        if names.is_empty() {
            return CommandResult::failure(ShellError::invalid_argument("which", "missing argument"));
        }

        let mut stdout = String::new();
        let mut exit_code = 0;
        for name in names {
            if ctx.builtins.iter().any(|b| b == name) {
                append_line(&mut stdout, &format!("/usr/bin/{}", name));
            } else {
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(stdout, String::new(), exit_code)
    }
}
