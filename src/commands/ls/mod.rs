// src/commands/ls/mod.rs
use crate::commands::utils::{has_flag, operands};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve, FsNode};
use crate::interpreter::errors::ShellError;
use crate::style::{dir_name, paint, DIM};

pub struct LsCommand;

fn format_mode(node: &FsNode) -> &'static str {
    if node.is_directory() {
        "drwxr-xr-x"
    } else {
        "-rw-r--r--"
    }
}

fn format_size(node: &FsNode) -> String {
    node.size().map_or_else(|| "-".to_string(), |s| s.to_string())
}

fn display_name(name: &str, node: &FsNode) -> String {
    if node.is_directory() {
        dir_name(&format!("{}/", name))
    } else {
        name.to_string()
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let show_all = has_flag(&ctx.args, 'a');
        let long_format = has_flag(&ctx.args, 'l');
        let target = operands(&ctx.args).first().copied().unwrap_or(".");

        let (node, _) = resolve(&*ctx.fs, ctx.cwd, target);
        let dir = match node {
            None => {
                return CommandResult::failure(ShellError::not_found(
                    "ls",
                    format!("cannot access '{}'", target),
                ))
            }
            Some(FsNode::File { .. }) => return CommandResult::success(target.to_string()),
            Some(dir) => dir,
        };

        let entries: Vec<(&str, &FsNode)> = dir
            .sorted_names()
            .into_iter()
            .filter(|name| show_all || !name.starts_with('.'))
            .filter_map(|name| dir.child(name).map(|child| (name, child)))
            .collect();

        if entries.is_empty() {
            return CommandResult::success(paint(DIM, "(empty directory)"));
        }

        let stdout = if long_format {
            entries
                .iter()
                .map(|(name, child)| {
                    format!(
                        "{}  visitor visitor  {:>6}  {}",
                        format_mode(child),
                        format_size(child),
                        display_name(name, child)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            entries
                .iter()
                .map(|(name, child)| display_name(name, child))
                .collect::<Vec<_>>()
                .join("  ")
        };

        CommandResult::success(stdout)
    }
}
