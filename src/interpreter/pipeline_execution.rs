//! Pipeline Execution
//!
//! Runs the stages of `cmd1 | cmd2 | cmd3` left to right. Each stage reads the
//! previous stage's stdout, stderr accumulates across stages, and a `cd` only
//! moves the pipeline's own working directory.

use log::debug;

use crate::commands::utils::append_line;
use crate::commands::{CommandResult, ShellEffect};
use crate::interpreter::interpreter::Interpreter;
use crate::interpreter::state::ShellState;
use crate::interpreter::tokenizer::{split_pipeline, tokenize};
use crate::interpreter::types::ExecOutcome;

/// Pipeline execution state.
#[derive(Debug)]
pub struct PipelineState {
    /// Stdin for the next stage.
    pub stdin: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Working directory seen by the next stage.
    pub cwd: String,
    /// Set once any stage changed directory.
    pub cwd_changed: bool,
}

impl PipelineState {
    pub fn new(cwd: &str) -> Self {
        Self {
            stdin: String::new(),
            stderr: String::new(),
            exit_code: 0,
            cwd: cwd.to_string(),
            cwd_changed: false,
        }
    }

    /// Fold one stage result in; its stdout becomes the next stdin.
    fn record(&mut self, result: CommandResult) -> Option<ShellEffect> {
        if !result.stderr.is_empty() {
            append_line(&mut self.stderr, &result.stderr);
        }
        self.exit_code = result.exit_code;
        self.stdin = result.stdout;

        match result.effect {
            Some(ShellEffect::ChangeDir(dir)) => {
                self.cwd = dir;
                self.cwd_changed = true;
                None
            }
            other => other,
        }
    }

    fn finish(self) -> ExecOutcome {
        ExecOutcome {
            stdout: self.stdin,
            stderr: self.stderr,
            exit_code: self.exit_code,
            should_exit: false,
            should_clear_screen: false,
            new_cwd: self.cwd_changed.then_some(self.cwd),
        }
    }
}

/// Execute every stage of `line`, stopping early on exit or clear.
pub fn execute_pipeline(interpreter: &Interpreter, line: &str, state: &mut ShellState) -> ExecOutcome {
    let mut pipeline = PipelineState::new(&state.cwd);

    for (index, stage) in split_pipeline(line).into_iter().enumerate() {
        let mut tokens = tokenize(stage);
        debug!("pipeline stage {}: {:?}", index, tokens);

        if tokens.is_empty() {
            pipeline.stdin.clear();
            pipeline.exit_code = 0;
            continue;
        }

        let name = tokens.remove(0);
        let stdin = std::mem::take(&mut pipeline.stdin);
        let result = interpreter.dispatch(&name, tokens, stdin, &pipeline.cwd, state);

        match pipeline.record(result) {
            Some(ShellEffect::Exit) => {
                let mut outcome = pipeline.finish();
                outcome.should_exit = true;
                return outcome;
            }
            Some(ShellEffect::ClearScreen) => {
                let mut outcome = pipeline.finish();
                outcome.should_clear_screen = true;
                return outcome;
            }
            _ => {}
        }
    }

    pipeline.finish()
}
