// src/commands/utils/head_tail.rs
use crate::commands::utils::input::read_operand_or_stdin;
use crate::commands::{CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub const DEFAULT_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTailOptions {
    pub lines: usize,
    pub file: Option<String>,
}

impl Default for HeadTailOptions {
    fn default() -> Self {
        Self { lines: DEFAULT_LINES, file: None }
    }
}

fn parse_count(cmd_name: &str, raw: &str) -> Result<usize, ShellError> {
    raw.parse()
        .map_err(|_| ShellError::invalid_argument(cmd_name, format!("invalid number of lines: '{}'", raw)))
}

/// Parse `-n N`, `-nN`, `--lines=N` and `-N`; the first operand is the file.
pub fn parse_head_tail_args(args: &[String], cmd_name: &str) -> Result<HeadTailOptions, ShellError> {
    let mut opts = HeadTailOptions::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "-n" {
            i += 1;
            let value = args.get(i).ok_or_else(|| {
                ShellError::invalid_argument(cmd_name, "option requires an argument -- 'n'")
            })?;
            opts.lines = parse_count(cmd_name, value)?;
        } else if let Some(value) = arg.strip_prefix("--lines=") {
            opts.lines = parse_count(cmd_name, value)?;
        } else if let Some(value) = arg.strip_prefix("-n") {
            opts.lines = parse_count(cmd_name, value)?;
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c.is_ascii_digit()) {
            opts.lines = parse_count(cmd_name, &arg[1..])?;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(ShellError::invalid_argument(
                cmd_name,
                format!("invalid option -- '{}'", arg.trim_start_matches('-')),
            ));
        } else if opts.file.is_none() {
            opts.file = Some(arg.clone());
        }
        i += 1;
    }

    Ok(opts)
}

/// Shared driver: parse, read the file or stdin, and apply `processor`.
pub fn run_head_tail<F>(ctx: &CommandContext<'_>, cmd_name: &str, processor: F) -> CommandResult
where
    F: Fn(&str, usize) -> String,
{
    let result = parse_head_tail_args(&ctx.args, cmd_name).and_then(|opts| {
        let content = read_operand_or_stdin(ctx, cmd_name, opts.file.as_deref())?;
        Ok(processor(&content, opts.lines))
    });
    result.into()
}

/// First `lines` newline-separated lines of `content`.
pub fn get_head(content: &str, lines: usize) -> String {
    content.split('\n').take(lines).collect::<Vec<_>>().join("\n")
}

/// Last `lines` newline-separated lines of `content`.
pub fn get_tail(content: &str, lines: usize) -> String {
    let all: Vec<&str> = content.split('\n').collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
