// src/commands/mkdir/mod.rs
use crate::commands::utils::{append_line, has_flag, operands};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_mut, split_parent, to_absolute, FsNode};
use crate::interpreter::errors::ShellError;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let dirs = operands(&ctx.args);
        if dirs.is_empty() {
            return CommandResult::failure(ShellError::invalid_argument("mkdir", "missing operand"));
        }

        let parents = has_flag(&ctx.args, 'p');
        let mut stderr = String::new();
        let mut exit_code = 0;

        for dir in dirs {
            let made = if parents {
                make_parents(ctx.fs, ctx.cwd, dir)
            } else {
                make_dir(ctx.fs, ctx.cwd, dir)
            };
            if let Err(err) = made {
                append_line(&mut stderr, &err.to_string());
                exit_code = err.exit_code();
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}

fn make_dir(root: &mut FsNode, cwd: &str, operand: &str) -> Result<(), ShellError> {
    let label = format!("cannot create directory '{}'", operand);
    let abs = to_absolute(cwd, operand);
    let Some((parent, name)) = split_parent(&abs) else {
        return Err(ShellError::already_exists("mkdir", label));
    };

    match resolve_mut(root, "/", &parent).0 {
        None => Err(ShellError::not_found("mkdir", label)),
        Some(node) => node
            .create_dir(&name, &abs)
            .map_err(|err| ShellError::from_fs("mkdir", label, err)),
    }
}

/// `mkdir -p`: create every missing segment, existing directories are fine.
fn make_parents(root: &mut FsNode, cwd: &str, operand: &str) -> Result<(), ShellError> {
    let abs = to_absolute(cwd, operand);
    let mut node = root;
    for part in abs.split('/').filter(|p| !p.is_empty()) {
        let children = node.children_mut().ok_or_else(|| {
            ShellError::not_a_directory("mkdir", format!("cannot create directory '{}'", operand))
        })?;
        node = children.entry(part.to_string()).or_insert_with(FsNode::dir);
    }
    if node.is_directory() {
        Ok(())
    } else {
        Err(ShellError::already_exists(
            "mkdir",
            format!("cannot create directory '{}'", operand),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;
    use crate::fs::resolve;

    #[test]
    fn test_mkdir_creates_empty_directory() {
        let mut shell = TestShell::empty().cwd("/");
        let result = shell.run(&MkdirCommand, &["foo"]);
        assert_eq!(result.exit_code, 0);
        let (node, _) = resolve(&shell.fs, "/", "/foo");
        assert!(node.unwrap().is_directory());
        assert_eq!(node.unwrap().children().unwrap().len(), 0);
    }

    #[test]
    fn test_mkdir_twice_reports_exists_and_leaves_tree() {
        let mut shell = TestShell::empty();
        shell.run(&MkdirCommand, &["foo"]);
        let before = shell.fs.clone();
        let result = shell.run(&MkdirCommand, &["foo"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "mkdir: cannot create directory 'foo': File exists");
        assert_eq!(shell.fs, before);
    }

    #[test]
    fn test_mkdir_missing_parent() {
        let mut shell = TestShell::empty();
        let result = shell.run(&MkdirCommand, &["a/b"]);
        assert_eq!(
            result.stderr,
            "mkdir: cannot create directory 'a/b': No such file or directory"
        );
    }

    #[test]
    fn test_mkdir_parent_is_file() {
        let mut shell = TestShell::empty().with_file("/f", "x");
        let result = shell.run(&MkdirCommand, &["f/sub"]);
        assert_eq!(result.stderr, "mkdir: cannot create directory 'f/sub': Not a directory");
    }

    #[test]
    fn test_mkdir_multiple_continues_after_error() {
        let mut shell = TestShell::empty().with_dir("/taken");
        let result = shell.run(&MkdirCommand, &["taken", "fresh"]);
        assert_eq!(result.exit_code, 1);
        assert!(resolve(&shell.fs, "/", "fresh").0.is_some());
    }

    #[test]
    fn test_mkdir_relative_to_cwd() {
        let mut shell = TestShell::empty().with_dir("/home/visitor").cwd("/home/visitor");
        shell.run(&MkdirCommand, &["notes"]);
        assert!(resolve(&shell.fs, "/", "/home/visitor/notes").0.is_some());
    }

    #[test]
    fn test_mkdir_parents() {
        let mut shell = TestShell::empty().with_dir("/a");
        let result = shell.run(&MkdirCommand, &["-p", "/a/b/c"]);
        assert_eq!(result.exit_code, 0);
        assert!(resolve(&shell.fs, "/", "/a/b/c").0.unwrap().is_directory());
        let again = shell.run(&MkdirCommand, &["-p", "/a/b/c"]);
        assert_eq!(again.exit_code, 0);
    }

    #[test]
    fn test_mkdir_missing_operand() {
        let mut shell = TestShell::empty();
        assert_eq!(shell.run(&MkdirCommand, &[]).stderr, "mkdir: missing operand");
    }
}
