//! Interpreter - Line Execution Engine
//!
//! Owns the builtin registry and turns an input line into an [`ExecOutcome`]
//! against a caller-owned [`ShellState`].

use log::debug;

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry, CommandResult};
use crate::interpreter::errors::ShellError;
use crate::interpreter::pipeline_execution::execute_pipeline;
use crate::interpreter::state::ShellState;
use crate::interpreter::types::ExecOutcome;

pub struct Interpreter {
    registry: CommandRegistry,
    builtins: Vec<String>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_registry(create_builtin_registry())
    }

    pub fn with_registry(registry: CommandRegistry) -> Self {
        let builtins = registry.names().into_iter().map(str::to_string).collect();
        Self { registry, builtins }
    }

    /// Sorted names of every command, aliases included.
    pub fn builtins(&self) -> &[String] {
        &self.builtins
    }

    /// Execute one input line.
    ///
    /// A non-empty line is recorded in history before it runs, even when it
    /// fails. The working directory change is reported in
    /// [`ExecOutcome::new_cwd`] for the caller to apply.
    pub fn execute(&self, input: &str, state: &mut ShellState) -> ExecOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ExecOutcome::default();
        }

        state.history.push(trimmed.to_string());
        execute_pipeline(self, trimmed, state)
    }

    /// Run a single command with the given stdin and working directory.
    pub(crate) fn dispatch(
        &self,
        name: &str,
        args: Vec<String>,
        stdin: String,
        cwd: &str,
        state: &mut ShellState,
    ) -> CommandResult {
        let Some(cmd) = self.registry.get(name) else {
            debug!("unknown command {}", name);
            return CommandResult::failure(ShellError::unknown_command(name));
        };

        debug!("dispatch {} {:?}", name, args);
        let ctx = CommandContext {
            args,
            stdin,
            cwd,
            env: &mut state.env,
            history: &state.history,
            fs: &mut state.fs,
            builtins: &self.builtins,
            started_at: state.started_at,
        };
        cmd.execute(ctx)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use crate::fs::lookup;
    use crate::interpreter::state::init_session;
    use crate::style::strip_ansi;

    fn setup() -> (Interpreter, ShellState) {
        (Interpreter::new(), init_session(&SiteContent::sample()))
    }

    /// Execute and apply, the way an interactive caller does.
    fn run(interp: &Interpreter, state: &mut ShellState, line: &str) -> ExecOutcome {
        let outcome = interp.execute(line, state);
        state.apply(&outcome);
        outcome
    }

    #[test]
    fn test_empty_line_is_noop() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "   ");
        assert_eq!(outcome, ExecOutcome::default());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_history_records_trimmed_line_even_on_failure() {
        let (interp, mut state) = setup();
        run(&interp, &mut state, "  ls  ");
        run(&interp, &mut state, "frobnicate");
        assert_eq!(state.history, vec!["ls", "frobnicate"]);
    }

    #[test]
    fn test_unknown_command() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "frobnicate --now");
        assert_eq!(outcome.exit_code, 127);
        assert_eq!(
            outcome.stderr,
            "frobnicate: command not found\nType 'help' for available commands."
        );
    }

    #[test]
    fn test_cd_then_pwd() {
        let (interp, mut state) = setup();
        let cd = run(&interp, &mut state, "cd projects");
        assert_eq!(cd.new_cwd.as_deref(), Some("/home/visitor/projects"));
        let pwd = run(&interp, &mut state, "pwd");
        assert_eq!(pwd.stdout, "/home/visitor/projects");
    }

    #[test]
    fn test_execute_does_not_apply_cwd_itself() {
        let (interp, mut state) = setup();
        let outcome = interp.execute("cd /etc", &mut state);
        assert_eq!(outcome.new_cwd.as_deref(), Some("/etc"));
        assert_eq!(state.cwd, "/home/visitor");
    }

    #[test]
    fn test_cd_inside_pipeline_moves_later_stages() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "cd /etc | pwd");
        assert_eq!(outcome.stdout, "/etc");
        assert_eq!(state.cwd, "/etc");
    }

    #[test]
    fn test_echo_into_wc() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "echo \"a b c\" | wc");
        assert_eq!(outcome.stdout, "  1 3 5");
    }

    #[test]
    fn test_cat_grep_head_pipeline() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "cat /etc/motd | grep -i welcome | head -n 1");
        assert!(strip_ansi(&outcome.stdout).starts_with("Welcome to John Doe"));
    }

    #[test]
    fn test_stderr_accumulates_and_partial_stdout_flows() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "cat about.txt nope | wc");
        assert_eq!(outcome.stderr, "cat: nope: No such file or directory");
        assert!(outcome.stdout.starts_with("  "));
        assert_ne!(outcome.stdout, "  1 0 0");
        assert_eq!(outcome.exit_code, 0);
    }

    #[test]
    fn test_empty_stage_yields_empty_output() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "echo hi |");
        assert_eq!(outcome.stdout, "");
    }

    #[test]
    fn test_exit_stops_pipeline() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "exit | mkdir never");
        assert!(outcome.should_exit);
        assert_eq!(strip_ansi(&outcome.stdout), "Exiting shell...");
        assert!(lookup(&state.fs, "/home/visitor/never").is_none());
    }

    #[test]
    fn test_clear_stops_pipeline() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "clear | echo hidden");
        assert!(outcome.should_clear_screen);
        assert_eq!(outcome.stdout, "");
    }

    #[test]
    fn test_mkdir_twice_leaves_tree_unchanged() {
        let (interp, mut state) = setup();
        run(&interp, &mut state, "mkdir foo");
        let before = state.fs.clone();
        let second = run(&interp, &mut state, "mkdir foo");
        assert_eq!(second.stderr, "mkdir: cannot create directory 'foo': File exists");
        assert_eq!(state.fs, before);
    }

    #[test]
    fn test_ls_hidden_message() {
        let (interp, mut state) = setup();
        let plain = run(&interp, &mut state, "ls /etc/secrets");
        assert!(!plain.stdout.contains(".hidden_message"));
        let all = run(&interp, &mut state, "ls -a /etc/secrets");
        assert!(all.stdout.contains(".hidden_message"));
    }

    #[test]
    fn test_export_then_echo() {
        let (interp, mut state) = setup();
        run(&interp, &mut state, "export NAME=world");
        let outcome = run(&interp, &mut state, "echo hello $NAME from $HOME");
        assert_eq!(outcome.stdout, "hello world from /home/visitor");
    }

    #[test]
    fn test_history_includes_current_line() {
        let (interp, mut state) = setup();
        run(&interp, &mut state, "pwd");
        let outcome = run(&interp, &mut state, "history");
        assert_eq!(outcome.stdout, "     1  pwd\n     2  history");
    }

    #[test]
    fn test_restricted_commands_exit_126() {
        let (interp, mut state) = setup();
        let outcome = run(&interp, &mut state, "sudo rm -rf /");
        assert_eq!(outcome.exit_code, 126);
        assert_eq!(outcome.stderr, "Permission denied. Nice try though.");
    }

    #[test]
    fn test_which_uses_registry() {
        let (interp, mut state) = setup();
        assert_eq!(run(&interp, &mut state, "which grep").stdout, "/usr/bin/grep");
        assert_eq!(run(&interp, &mut state, "which gcc").exit_code, 1);
    }
}
