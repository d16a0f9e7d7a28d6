// src/commands/cat/mod.rs
use crate::commands::utils::{append_line, read_file};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut show_line_numbers = false;
        let mut files: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "-n" | "--number" => show_line_numbers = true,
                _ => files.push(arg),
            }
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        let mut stdout = if files.is_empty() {
            if ctx.stdin.is_empty() {
                return CommandResult::failure(ShellError::invalid_argument("cat", "missing operand"));
            }
            ctx.stdin.clone()
        } else {
            let mut pieces: Vec<String> = Vec::new();
            for file in &files {
                match read_file(&ctx, "cat", file) {
                    Ok(content) => pieces.push(content),
                    Err(err) => {
                        append_line(&mut stderr, &err.to_string());
                        exit_code = err.exit_code();
                    }
                }
            }
            pieces.join("\n")
        };

        if show_line_numbers {
            stdout = add_line_numbers(&stdout);
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}

fn add_line_numbers(content: &str) -> String {
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("{:>6}\t{}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;

    #[test]
    fn test_cat_single_file() {
        let mut shell = TestShell::empty().with_file("/a.txt", "hello\nworld");
        let result = shell.run(&CatCommand, &["a.txt"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "hello\nworld");
    }

    #[test]
    fn test_cat_multiple_files_newline_joined() {
        let mut shell = TestShell::empty()
            .with_file("/a.txt", "aaa")
            .with_file("/b.txt", "bbb");
        let result = shell.run(&CatCommand, &["/a.txt", "/b.txt"]);
        assert_eq!(result.stdout, "aaa\nbbb");
    }

    #[test]
    fn test_cat_reports_each_failure_and_keeps_going() {
        let mut shell = TestShell::empty()
            .with_file("/a.txt", "aaa")
            .with_dir("/dir");
        let result = shell.run(&CatCommand, &["missing", "/a.txt", "/dir"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stdout, "aaa");
        assert_eq!(
            result.stderr,
            "cat: missing: No such file or directory\ncat: /dir: Is a directory"
        );
    }

    #[test]
    fn test_cat_reads_stdin_without_operands() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&CatCommand, &[], "piped");
        assert_eq!(result.stdout, "piped");
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut shell = TestShell::empty();
        let result = shell.run(&CatCommand, &[]);
        assert_eq!(result.stderr, "cat: missing operand");
    }

    #[test]
    fn test_cat_project_readme_has_title_and_tech() {
        let content = crate::content::SiteContent::sample();
        let mut shell = TestShell::portfolio();
        let project = &content.projects[0];
        let path = format!("projects/{}/README.md", crate::fs::slugify(&project.title));
        let result = shell.run(&CatCommand, &[path.as_str()]);
        assert!(result.stdout.contains(&project.title));
        for tech in &project.tech {
            assert!(result.stdout.contains(tech.as_str()));
        }
    }

    #[test]
    fn test_cat_numbered() {
        let mut shell = TestShell::empty().with_file("/a.txt", "x\ny");
        let result = shell.run(&CatCommand, &["-n", "/a.txt"]);
        assert_eq!(result.stdout, "     1\tx\n     2\ty");
    }
}
