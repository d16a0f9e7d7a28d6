use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve, FsNode};
use crate::interpreter::errors::ShellError;
use crate::style::{dir_name, paint, DIM};

pub struct TreeCommand;

#[derive(Default)]
struct TreeOptions {
    show_hidden: bool,
    max_depth: Option<usize>,
}

#[derive(Default)]
struct TreeCounts {
    dirs: usize,
    files: usize,
}

fn parse_args(args: &[String]) -> Result<(TreeOptions, Option<&str>), ShellError> {
    let mut options = TreeOptions::default();
    let mut path = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-a" => options.show_hidden = true,
            "-L" => {
                i += 1;
                let level = args.get(i).and_then(|v| v.parse().ok()).filter(|&n: &usize| n > 0);
                match level {
                    Some(n) => options.max_depth = Some(n),
                    None => return Err(ShellError::invalid_argument("tree", "Invalid level, must be greater than 0.")),
                }
            }
            other if path.is_none() && !other.starts_with('-') => path = Some(other),
            _ => {}
        }
        i += 1;
    }

    Ok((options, path))
}

fn walk(
    node: &FsNode,
    prefix: &str,
    depth: usize,
    options: &TreeOptions,
    lines: &mut Vec<String>,
    counts: &mut TreeCounts,
) {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    let entries: Vec<(&str, &FsNode)> = node
        .sorted_names()
        .into_iter()
        .filter(|name| options.show_hidden || !name.starts_with('.'))
        .filter_map(|name| node.child(name).map(|child| (name, child)))
        .collect();

    for (idx, (name, child)) in entries.iter().enumerate() {
        let is_last = idx == entries.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };

        if child.is_directory() {
            counts.dirs += 1;
            lines.push(format!("{}{}{}", prefix, connector, dir_name(name)));
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            walk(child, &child_prefix, depth + 1, options, lines, counts);
        } else {
            counts.files += 1;
            lines.push(format!("{}{}{}", prefix, connector, name));
        }
    }
}

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let (options, path) = match parse_args(&ctx.args) {
            Ok(parsed) => parsed,
            Err(err) => return CommandResult::failure(err),
        };
        let label = path.unwrap_or(".");

        let node = match resolve(&*ctx.fs, ctx.cwd, label).0 {
            None => return CommandResult::failure(ShellError::not_found("tree", format!("'{}'", label))),
            Some(FsNode::File { .. }) => return CommandResult::success(label.to_string()),
            Some(node) => node,
        };

        let mut lines = vec![label.to_string()];
        let mut counts = TreeCounts::default();
        walk(node, "", 0, &options, &mut lines, &mut counts);

        lines.push(String::new());
        lines.push(paint(
            DIM,
            &format!("{} directories, {} files", counts.dirs, counts.files),
        ));
        CommandResult::success(lines.join("\n"))
    }
}
