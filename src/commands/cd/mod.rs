// src/commands/cd/mod.rs
use crate::commands::utils::operands;
use crate::commands::{Command, CommandContext, CommandResult, ShellEffect};
use crate::fs::{resolve, FsNode};
use crate::interpreter::errors::ShellError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let target = operands(&ctx.args).first().copied().unwrap_or("~");
        let (node, abs) = resolve(&*ctx.fs, ctx.cwd, target);

        match node {
            None => CommandResult::failure(ShellError::not_found("cd", target)),
            Some(FsNode::File { .. }) => CommandResult::failure(ShellError::not_a_directory("cd", target)),
            Some(FsNode::Directory { .. }) => CommandResult::empty().with_effect(ShellEffect::ChangeDir(abs)),
        }
    }
}
