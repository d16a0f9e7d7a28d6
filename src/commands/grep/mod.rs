// src/commands/grep/mod.rs
use regex_lite::Regex;

use crate::commands::utils::{append_line, read_operand_or_stdin};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;
use crate::style::{BOLD, RED, RESET};

pub struct GrepCommand;

#[derive(Debug, Default)]
struct GrepOptions {
    ignore_case: bool,
    invert: bool,
    line_numbers: bool,
    count_only: bool,
    pattern: String,
    file: Option<String>,
}

fn parse_grep_args(args: &[String]) -> Result<GrepOptions, ShellError> {
    let mut opts = GrepOptions::default();
    let mut positional: Vec<&str> = Vec::new();

    for arg in args {
        if arg.len() > 1 && arg.starts_with('-') {
            for flag in arg[1..].chars() {
                match flag {
                    'i' => opts.ignore_case = true,
                    'v' => opts.invert = true,
                    'n' => opts.line_numbers = true,
                    'c' => opts.count_only = true,
                    other => {
                        return Err(ShellError::invalid_argument(
                            "grep",
                            format!("invalid option -- '{}'", other),
                        ))
                    }
                }
            }
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    opts.pattern = positional
        .next()
        .ok_or_else(|| ShellError::invalid_argument("grep", "missing pattern"))?
        .to_string();
    opts.file = positional.next().map(str::to_string);
    Ok(opts)
}

/// Compile the pattern; on a syntax error match it literally instead.
fn build_regex(pattern: &str, ignore_case: bool) -> Result<Regex, ShellError> {
    let prefix = if ignore_case { "(?i)" } else { "" };
    Regex::new(&format!("{}{}", prefix, pattern))
        .or_else(|_| Regex::new(&format!("{}{}", prefix, regex_lite::escape(pattern))))
        .map_err(|e| ShellError::invalid_argument("grep", e.to_string()))
}

fn highlight_first(regex: &Regex, line: &str) -> String {
    regex
        .replace(line, |caps: &regex_lite::Captures| {
            format!("{}{}{}{}", RED, BOLD, &caps[0], RESET)
        })
        .into_owned()
}

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let opts = match parse_grep_args(&ctx.args) {
            Ok(opts) => opts,
            Err(err) => return CommandResult::failure(err),
        };
        let content = match read_operand_or_stdin(&ctx, "grep", opts.file.as_deref()) {
            Ok(content) => content,
            Err(err) => return CommandResult::failure(err),
        };

        let regex = match build_regex(&opts.pattern, opts.ignore_case) {
            Ok(regex) => regex,
            Err(err) => return CommandResult::failure(err),
        };
        let mut stdout = String::new();
        let mut count = 0;

        for (i, line) in content.split('\n').enumerate() {
            if regex.is_match(line) == opts.invert {
                continue;
            }
            count += 1;
            if opts.count_only {
                continue;
            }
            let rendered = if opts.invert {
                line.to_string()
            } else {
                highlight_first(&regex, line)
            };
            if opts.line_numbers {
                append_line(&mut stdout, &format!("{}:{}", i + 1, rendered));
            } else {
                append_line(&mut stdout, &rendered);
            }
        }

        if opts.count_only {
            stdout = count.to_string();
        }
        let exit_code = if count > 0 { 0 } else { 1 };
        CommandResult::with_exit_code(stdout, String::new(), exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;
    use crate::style::strip_ansi;

    #[test]
    fn test_grep_basic_highlights_first_match() {
        let mut shell = TestShell::empty().with_file("/f.txt", "foo bar foo\nbaz");
        let result = shell.run(&GrepCommand, &["foo", "/f.txt"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, format!("{}{}foo{} bar foo", RED, BOLD, RESET));
    }

    #[test]
    fn test_grep_ignore_case() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&GrepCommand, &["-i", "abc"], "ABCxyz\nnope");
        assert_eq!(strip_ansi(&result.stdout), "ABCxyz");
    }

    #[test]
    fn test_grep_invert_and_numbers() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&GrepCommand, &["-vn", "b"], "a\nb\nc");
        assert_eq!(result.stdout, "1:a\n3:c");
    }

    #[test]
    fn test_grep_count() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&GrepCommand, &["-c", "o"], "one\ntwo\nthree");
        assert_eq!(result.stdout, "2");
    }

    #[test]
    fn test_grep_invalid_regex_falls_back_to_literal() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&GrepCommand, &["a(b"], "xa(by\nab");
        assert_eq!(strip_ansi(&result.stdout), "xa(by");
    }

    #[test]
    fn test_grep_no_match() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&GrepCommand, &["zzz"], "abc");
        assert_eq!(result.stdout, "");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_grep_missing_pattern() {
        let mut shell = TestShell::empty();
        let result = shell.run(&GrepCommand, &[]);
        assert_eq!(result.stderr, "grep: missing pattern");
    }

    #[test]
    fn test_grep_missing_file() {
        let mut shell = TestShell::empty();
        let result = shell.run(&GrepCommand, &["x", "nofile"]);
        assert_eq!(result.stderr, "grep: nofile: No such file or directory");
    }
}
