use crate::commands::{Command, CommandContext, CommandResult, ShellEffect};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::empty().with_effect(ShellEffect::ClearScreen)
    }
}
