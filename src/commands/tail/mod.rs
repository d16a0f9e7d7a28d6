// src/commands/tail/mod.rs
use crate::commands::utils::{get_tail, run_head_tail};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        run_head_tail(&ctx, "tail", get_tail)
    }
}
