use crate::commands::{Command, CommandContext, CommandResult};

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        // The shell has exactly one user.
        CommandResult::success("visitor".to_string())
    }
}
