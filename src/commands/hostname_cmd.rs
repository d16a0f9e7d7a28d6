use crate::commands::{Command, CommandContext, CommandResult};

pub struct HostnameCommand;

impl Command for HostnameCommand {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success("portfolio".to_string())
    }
}
