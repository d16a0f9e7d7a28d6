// src/commands/utils/input.rs
use crate::commands::CommandContext;
use crate::fs::{resolve, FsNode};
use crate::interpreter::errors::ShellError;

/// Read the file named by `operand`, relative to the context's cwd.
pub fn read_file(ctx: &CommandContext<'_>, cmd_name: &str, operand: &str) -> Result<String, ShellError> {
    let (node, _) = resolve(&*ctx.fs, ctx.cwd, operand);
    match node {
        Some(FsNode::File { content }) => Ok(content.clone()),
        Some(FsNode::Directory { .. }) => Err(ShellError::is_a_directory(cmd_name, operand)),
        None => Err(ShellError::not_found(cmd_name, operand)),
    }
}

/// Read `operand` when given, otherwise the piped stdin.
pub fn read_operand_or_stdin(
    ctx: &CommandContext<'_>,
    cmd_name: &str,
    operand: Option<&str>,
) -> Result<String, ShellError> {
    match operand {
        Some(path) => read_file(ctx, cmd_name, path),
        None => Ok(ctx.stdin.clone()),
    }
}

/// Append `line` to `buf`, separating it from earlier lines.
pub fn append_line(buf: &mut String, line: &str) {
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(line);
}

/// Positional (non-dash) arguments.
pub fn operands(args: &[String]) -> Vec<&str> {
    args.iter()
        .map(|a| a.as_str())
        .filter(|a| !a.starts_with('-'))
        .collect()
}

/// Whether the single-letter flag `flag` appears, alone or in a cluster like `-la`.
pub fn has_flag(args: &[String], flag: char) -> bool {
    args.iter().any(|a| {
        a.len() > 1
            && a.starts_with('-')
            && !a.starts_with("--")
            && a[1..].contains(flag)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_append_line() {
        let mut buf = String::new();
        append_line(&mut buf, "a");
        append_line(&mut buf, "b");
        assert_eq!(buf, "a\nb");
    }

    #[test]
    fn test_flags_and_operands() {
        let a = args(&["-la", "docs", "-i", "--help"]);
        assert!(has_flag(&a, 'l'));
        assert!(has_flag(&a, 'a'));
        assert!(has_flag(&a, 'i'));
        assert!(!has_flag(&a, 'h'));
        assert_eq!(operands(&a), vec!["docs"]);
    }
}
