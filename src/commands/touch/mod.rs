// src/commands/touch/mod.rs
use crate::commands::utils::{append_line, operands};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_mut, split_parent, to_absolute, FsNode};
use crate::interpreter::errors::ShellError;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let files = operands(&ctx.args);
        if files.is_empty() {
            return CommandResult::failure(ShellError::invalid_argument(
                "touch",
                "missing file operand",
            ));
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        for file in files {
            if let Err(err) = touch(ctx.fs, ctx.cwd, file) {
                append_line(&mut stderr, &err.to_string());
                exit_code = err.exit_code();
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}

fn touch(root: &mut FsNode, cwd: &str, operand: &str) -> Result<(), ShellError> {
    let label = format!("cannot touch '{}'", operand);
    let abs = to_absolute(cwd, operand);
    // Touching the root leaves it as it is.
    let Some((parent, name)) = split_parent(&abs) else {
        return Ok(());
    };

    match resolve_mut(root, "/", &parent).0 {
        None => Err(ShellError::not_found("touch", label)),
        Some(node) => node
            .touch_file(&name, &abs)
            .map_err(|err| ShellError::from_fs("touch", label, err)),
    }
}
