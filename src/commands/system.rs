use crate::commands::{Command, CommandContext, CommandResult};
use crate::style::{paint, DIM};

pub struct UnameCommand;

impl Command for UnameCommand {
    fn name(&self) -> &'static str {
        "uname"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "-a" || a == "--all") {
            return CommandResult::success(format!(
                "PortfolioOS 1.0.0 portfolio {} portfolio-shell/{} Rust",
                std::env::consts::ARCH,
                env!("CARGO_PKG_VERSION")
            ));
        }
        CommandResult::success("PortfolioOS".to_string())
    }
}

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(format!("up {}s", ctx.started_at.elapsed().as_secs()))
    }
}

pub struct ManCommand;

impl Command for ManCommand {
    fn name(&self) -> &'static str {
        "man"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let topic = ctx.args.first().map(String::as_str).unwrap_or("?");
        CommandResult::success(paint(
            DIM,
            &format!("No manual entry for {}. Try 'help'.", topic),
        ))
    }
}
