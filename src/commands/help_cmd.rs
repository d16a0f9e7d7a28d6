use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;
use crate::style::{paint, BOLD, DIM, GREEN};

pub struct HelpCommand;

type Entry = (&'static str, &'static str, &'static str);

const CATEGORIES: &[(&str, &[Entry])] = &[
    ("Filesystem", &[
        ("ls", "ls [-l] [-a] [path]", "List directory contents"),
        ("cd", "cd <path>", "Change directory"),
        ("cat", "cat <file>", "Print file contents"),
        ("pwd", "pwd", "Print working directory"),
        ("tree", "tree [path]", "Display directory tree"),
        ("find", "find [path] [-name pat]", "Search for files"),
        ("mkdir", "mkdir <dir>", "Create directory"),
        ("touch", "touch <file>", "Create empty file"),
    ]),
    ("Text Processing", &[
        ("head", "head [-n N] <file>", "Show first N lines"),
        ("tail", "tail [-n N] <file>", "Show last N lines"),
        ("wc", "wc <file>", "Line/word/char count"),
        ("grep", "grep [-i] <pat> <file>", "Search file for pattern"),
        ("echo", "echo <text>", "Print text (supports $VAR)"),
    ]),
    ("System", &[
        ("whoami", "whoami", "Current user"),
        ("hostname", "hostname", "Show hostname"),
        ("uname", "uname [-a]", "System info"),
        ("date", "date", "Current date/time"),
        ("uptime", "uptime", "Session uptime"),
        ("env", "env / printenv", "Show environment variables"),
        ("export", "export KEY=VALUE", "Set environment variable"),
        ("neofetch", "neofetch", "System info (pretty)"),
        ("history", "history", "Command history"),
        ("which", "which <cmd>", "Locate a command"),
    ]),
    ("Fun", &[
        ("fortune", "fortune", "Random dev quote"),
        ("cowsay", "cowsay <text>", "ASCII cow"),
        ("hexdump", "hexdump <file>", "Hex dump of file"),
        ("base64", "base64 [-d] <file>", "Base64 encode file"),
    ]),
    ("Other", &[
        ("clear", "clear", "Clear screen"),
        ("exit", "exit", "Exit the shell"),
    ]),
];

fn entry_line(usage: &str, description: &str) -> String {
    format!("  {:<23} {}", usage, description)
}

fn overview() -> String {
    let mut lines = vec![
        format!(
            "{} - a Unix-like shell over this portfolio",
            paint(&format!("{}{}", GREEN, BOLD), "Portfolio Shell v1.0")
        ),
    ];
    for (category, entries) in CATEGORIES {
        lines.push(String::new());
        lines.push(paint(BOLD, &format!("{}:", category)));
        lines.extend(entries.iter().map(|(_, usage, desc)| entry_line(usage, desc)));
    }
    lines.push(format!("  {}", paint(DIM, "Pipes supported: cat file | grep pattern | head")));
    lines.push(String::new());
    lines.push(paint(DIM, "Tip: Try 'tree ~' to see the full portfolio filesystem!"));
    lines.join("\n")
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(topic) = ctx.args.first() else {
            return CommandResult::success(overview());
        };

        let lookup = if topic == "printenv" { "env" } else { topic.as_str() };
        CATEGORIES
            .iter()
            .flat_map(|(_, entries)| entries.iter())
            .find(|(name, _, _)| *name == lookup)
            .map(|(_, usage, desc)| CommandResult::success(entry_line(usage, desc)))
            .unwrap_or_else(|| {
                CommandResult::failure(ShellError::invalid_argument(
                    "help",
                    format!("no help topics match '{}'", topic),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;
    use crate::style::strip_ansi;

    #[test]
    fn test_help_lists_categories() {
        let mut shell = TestShell::empty();
        let out = strip_ansi(&shell.run(&HelpCommand, &[]).stdout);
        for category in ["Filesystem:", "Text Processing:", "System:", "Fun:", "Other:"] {
            assert!(out.contains(category), "{}", category);
        }
        assert!(out.contains("ls [-l] [-a] [path]"));
    }

    #[test]
    fn test_help_single_topic() {
        let mut shell = TestShell::empty();
        let result = shell.run(&HelpCommand, &["grep"]);
        assert_eq!(result.stdout, "  grep [-i] <pat> <file>  Search file for pattern");
    }

    #[test]
    fn test_help_unknown_topic() {
        let mut shell = TestShell::empty();
        let result = shell.run(&HelpCommand, &["emacs"]);
        assert_eq!(result.stderr, "help: no help topics match 'emacs'");
    }
}
