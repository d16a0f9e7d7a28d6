use crate::commands::{Command, CommandContext, CommandResult, ShellEffect};
use crate::style::{paint, DIM};

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["quit"]
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(paint(DIM, "Exiting shell...")).with_effect(ShellEffect::Exit)
    }
}
