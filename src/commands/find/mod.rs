// src/commands/find/mod.rs
mod matcher;
mod parser;
mod types;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{join, resolve, FsNode};
use crate::interpreter::errors::ShellError;
use crate::style::{paint, DIM};

use matcher::matches_all;
use parser::parse_query;
use types::{EvalContext, FindQuery};

pub struct FindCommand;

/// Depth-first walk; children in sorted order, hidden entries included.
fn walk(node: &FsNode, path: &str, depth: usize, query: &FindQuery, results: &mut Vec<String>) {
    if query.options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    for name in node.sorted_names() {
        let Some(child) = node.child(name) else {
            continue;
        };
        let child_path = join(path, name);
        let ctx = EvalContext { name, is_directory: child.is_directory() };
        let deep_enough = query.options.min_depth.map_or(true, |min| depth + 1 >= min);

        if deep_enough && matches_all(&query.tests, &ctx) {
            results.push(child_path.clone());
        }
        if child.is_directory() {
            walk(child, &child_path, depth + 1, query, results);
        }
    }
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let query = match parse_query(&ctx.args) {
            Ok(query) => query,
            Err(err) => return CommandResult::failure(err),
        };
        let start = query.path.as_deref().unwrap_or(".");

        let (node, abs) = resolve(&*ctx.fs, ctx.cwd, start);
        let Some(node) = node else {
            return CommandResult::failure(ShellError::not_found("find", format!("'{}'", start)));
        };

        let mut results = Vec::new();
        walk(node, &abs, 0, &query, &mut results);

        if results.is_empty() {
            CommandResult::success(paint(DIM, "(no matches)"))
        } else {
            CommandResult::success(results.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;
    use crate::style::strip_ansi;

    fn sample() -> TestShell {
        TestShell::empty()
            .with_file("/site/b.txt", "")
            .with_file("/site/A/readme.MD", "")
            .with_file("/site/.secret", "")
            .cwd("/site")
    }

    #[test]
    fn test_find_lists_absolute_paths_sorted() {
        let mut shell = sample();
        let result = shell.run(&FindCommand, &[]);
        assert_eq!(result.stdout, "/site/.secret\n/site/A\n/site/A/readme.MD\n/site/b.txt");
    }

    #[test]
    fn test_find_name_case_insensitive() {
        let mut shell = sample();
        let result = shell.run(&FindCommand, &["-name", "*.md"]);
        assert_eq!(result.stdout, "/site/A/readme.MD");
    }

    #[test]
    fn test_find_from_root_has_single_slash() {
        let mut shell = sample();
        let result = shell.run(&FindCommand, &["/", "-name", "b.txt"]);
        assert_eq!(result.stdout, "/site/b.txt");
    }

    #[test]
    fn test_find_type_and_maxdepth() {
        let mut shell = sample();
        let dirs = shell.run(&FindCommand, &["/", "-type", "d"]);
        assert_eq!(dirs.stdout, "/site\n/site/A");
        let shallow = shell.run(&FindCommand, &["-maxdepth", "1"]);
        assert_eq!(shallow.stdout, "/site/.secret\n/site/A\n/site/b.txt");
    }

    #[test]
    fn test_find_no_matches() {
        let mut shell = sample();
        let result = shell.run(&FindCommand, &["-name", "*.rs"]);
        assert_eq!(strip_ansi(&result.stdout), "(no matches)");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_find_missing_path() {
        let mut shell = sample();
        let result = shell.run(&FindCommand, &["ghost"]);
        assert_eq!(result.stderr, "find: 'ghost': No such file or directory");
    }

    #[test]
    fn test_every_printed_path_resolves() {
        let mut shell = TestShell::portfolio();
        let result = shell.run(&FindCommand, &["/"]);
        for line in result.stdout.lines() {
            assert!(resolve(&shell.fs, "/", line).0.is_some(), "{}", line);
        }
    }
}
