use rand::seq::SliceRandom;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::style::{paint, BOLD, CYAN, GREEN, RED, RESET, YELLOW};

const FORTUNES: &[&str] = &[
    "There are only two hard things in CS: cache invalidation and naming things.",
    "It works on my machine. -- Every developer ever",
    "// TODO: fix this later  -- committed 3 years ago",
    "The best error message is the one that never shows up.",
    "First, solve the problem. Then, write the code. -- John Johnson",
    "Code is like humor. When you have to explain it, it's bad.",
    "Any fool can write code that a computer can understand. Good programmers write code that humans can understand. -- Martin Fowler",
    "Deleted code is debugged code. -- Jeff Sickel",
    "Software and cathedrals are much the same: first we build them, then we pray.",
    "Talk is cheap. Show me the code. -- Linus Torvalds",
    "Programming is 10% writing code and 90% understanding why it doesn't work.",
    "There is no cloud. It's just someone else's computer.",
    "A good programmer looks both ways before crossing a one-way street.",
    "It compiles; ship it!",
    "Weeks of coding can save you hours of planning.",
];

pub struct FortuneCommand;

impl Command for FortuneCommand {
    fn name(&self) -> &'static str {
        "fortune"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let quote = FORTUNES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        CommandResult::success(quote.to_string())
    }
}

pub struct CowsayCommand;

fn cowsay(message: &str) -> String {
    let border = "─".repeat(message.chars().count() + 2);
    [
        format!(" ┌{}┐", border),
        format!(" │ {} │", message),
        format!(" └{}┘", border),
        r"        \   ^__^".to_string(),
        r"         \  (oo)\_______".to_string(),
        r"            (__)\       )\/\".to_string(),
        "                ||----w |".to_string(),
        "                ||     ||".to_string(),
    ]
    .join("\n")
}

impl Command for CowsayCommand {
    fn name(&self) -> &'static str {
        "cowsay"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let message = if ctx.args.is_empty() {
            "Moo!".to_string()
        } else {
            ctx.args.join(" ")
        };
        CommandResult::success(cowsay(&message))
    }
}

pub struct NeofetchCommand;

impl Command for NeofetchCommand {
    fn name(&self) -> &'static str {
        "neofetch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let field = |label: &str, value: &str| format!("  {} {}", paint(BOLD, &format!("{:<11}", label)), value);
        let lines = [
            format!("  {}", paint(&format!("{}{}", GREEN, BOLD), "visitor@portfolio")),
            format!("  {}", "─".repeat(22)),
            field("OS:", &format!("PortfolioOS ({} host)", std::env::consts::OS)),
            field("Arch:", std::env::consts::ARCH),
            field("Shell:", &format!("portfolio-shell {}", env!("CARGO_PKG_VERSION"))),
            field("Language:", "Rust"),
            field("Commands:", &ctx.builtins.len().to_string()),
            field("Uptime:", &format!("{}s", ctx.started_at.elapsed().as_secs())),
            String::new(),
            format!("  {}███{}███{}███{}███{}", RED, GREEN, YELLOW, CYAN, RESET),
        ];
        CommandResult::success(lines.join("\n"))
    }
}
