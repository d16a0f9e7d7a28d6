use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        // `history N` shows only the last N entries, numbered as in the full list.
        let skip = match ctx.args.first() {
            None => 0,
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) => ctx.history.len().saturating_sub(n),
                Err(_) => {
                    return CommandResult::failure(ShellError::invalid_argument(
                        "history",
                        format!("{}: numeric argument required", arg),
                    ))
                }
            },
        };

        let listing = ctx
            .history
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, line)| format!("  {:>4}  {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::success(listing)
    }
}
