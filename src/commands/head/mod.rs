// src/commands/head/mod.rs
use crate::commands::utils::{get_head, run_head_tail};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        run_head_tail(&ctx, "head", get_head)
    }
}
