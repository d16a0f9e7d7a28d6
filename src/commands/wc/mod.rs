// src/commands/wc/mod.rs
use crate::commands::utils::{operands, read_operand_or_stdin};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct WcCommand;

#[derive(Debug, Default, PartialEq, Eq)]
struct Stats {
    lines: usize,
    words: usize,
    chars: usize,
}

/// Lines are `\n`-separated segments, so a trailing-newline-free
/// single line counts as one.
fn count_stats(content: &str) -> Stats {
    Stats {
        lines: content.split('\n').count(),
        words: content.split_whitespace().count(),
        chars: content.chars().count(),
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let file = operands(&ctx.args).first().copied();
        let content = match read_operand_or_stdin(&ctx, "wc", file) {
            Ok(content) => content,
            Err(err) => return CommandResult::failure(err),
        };

        let stats = count_stats(&content);
        let mut out = format!("  {} {} {}", stats.lines, stats.words, stats.chars);
        if let Some(file) = file {
            out.push_str(&format!("  {}", file));
        }
        CommandResult::success(out)
    }
}
