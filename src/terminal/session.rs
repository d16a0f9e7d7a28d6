//! Terminal Session
//!
//! A line-editing reducer: every [`InputEvent`] updates the edit buffer, the
//! history cursor or the shell state, and answers with the
//! [`RenderInstruction`]s a front end needs to redraw. Events are handled
//! one at a time to completion.

use log::{info, trace};

use crate::content::SiteContent;
use crate::fs::lookup;
use crate::interpreter::{init_session_with, ExecOutcome, Interpreter, ShellOptions, ShellState};
use crate::terminal::completion::{complete, COMPLETABLE_COMMANDS};
use crate::terminal::events::InputEvent;
use crate::terminal::lines::{LineKind, RenderInstruction, RenderedLine};
use crate::terminal::prompt::prompt_for;

pub struct TerminalSession {
    shell: ShellState,
    interpreter: Interpreter,
    /// Scrollback since the last clear.
    lines: Vec<RenderedLine>,
    buffer: String,
    /// Cursor position in characters.
    cursor: usize,
    /// Steps back into history while browsing; 0 is the most recent entry.
    history_index: Option<usize>,
    saved_draft: String,
    exited: bool,
}

impl TerminalSession {
    pub fn new(content: &SiteContent, options: ShellOptions) -> Self {
        Self::from_state(init_session_with(content, options))
    }

    pub fn from_state(shell: ShellState) -> Self {
        Self {
            shell,
            interpreter: Interpreter::new(),
            lines: Vec::new(),
            buffer: String::new(),
            cursor: 0,
            history_index: None,
            saved_draft: String::new(),
            exited: false,
        }
    }

    /// Banner and message of the day, then the first prompt.
    pub fn start(&mut self) -> Vec<RenderInstruction> {
        info!("session started in {}", self.shell.cwd);

        let mut lines = vec![
            RenderedLine::new(
                LineKind::Emphasized,
                format!("portfolio-shell {}", env!("CARGO_PKG_VERSION")),
            ),
            RenderedLine::new(
                LineKind::Muted,
                "A Unix-like shell over an in-memory portfolio filesystem.",
            ),
            RenderedLine::new(LineKind::Muted, "Try: ls, cd projects, cat about.txt, tree ~"),
            RenderedLine::new(LineKind::Muted, ""),
        ];
        if let Some(motd) = lookup(&self.shell.fs, "/etc/motd").and_then(|n| n.content()) {
            lines.extend(RenderedLine::split(LineKind::Muted, motd));
        }

        vec![self.append(lines), self.render_prompt()]
    }

    pub fn prompt(&self) -> String {
        prompt_for(&self.shell.cwd)
    }

    pub fn render_prompt(&self) -> RenderInstruction {
        RenderInstruction::UpdatePrompt {
            prompt: self.prompt(),
            buffer: self.buffer.clone(),
            cursor: self.cursor,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }

    pub fn state(&self) -> &ShellState {
        &self.shell
    }

    pub fn handle_input_event(&mut self, event: InputEvent) -> Vec<RenderInstruction> {
        if self.exited {
            return Vec::new();
        }
        trace!("input event {:?}", event);

        match event {
            InputEvent::Char(c) => self.insert(&c.to_string()),
            InputEvent::Paste(text) => {
                let clean: String = text.chars().filter(|c| *c != '\r' && *c != '\n').collect();
                self.insert(&clean);
            }
            InputEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.buffer.remove(at);
                }
            }
            InputEvent::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_index(self.cursor);
                    self.buffer.remove(at);
                }
            }
            InputEvent::Left => self.cursor = self.cursor.saturating_sub(1),
            InputEvent::Right => self.cursor = (self.cursor + 1).min(self.len()),
            InputEvent::Home | InputEvent::Ctrl('a') => self.cursor = 0,
            InputEvent::End | InputEvent::Ctrl('e') => self.cursor = self.len(),
            InputEvent::Up => self.history_back(),
            InputEvent::Down => self.history_forward(),
            InputEvent::Tab => self.complete(),
            InputEvent::Enter => return self.submit(),
            InputEvent::Ctrl('c') => return self.interrupt(),
            InputEvent::Ctrl('l') => {
                self.lines.clear();
                return vec![RenderInstruction::ClearScreen, self.render_prompt()];
            }
            InputEvent::Ctrl('u') => self.set_buffer(String::new()),
            InputEvent::Ctrl('w') => self.delete_word(),
            InputEvent::Ctrl(_) => return Vec::new(),
        }

        vec![self.render_prompt()]
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    fn insert(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    /// Replace the whole buffer, cursor at the end.
    fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.len();
    }

    fn history_back(&mut self) {
        let history = &self.shell.history;
        if history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.saved_draft = self.buffer.clone();
                0
            }
            Some(i) => (i + 1).min(history.len() - 1),
        };
        let entry = history[history.len() - 1 - index].clone();
        self.history_index = Some(index);
        self.set_buffer(entry);
    }

    fn history_forward(&mut self) {
        match self.history_index {
            None => {}
            Some(0) => {
                self.history_index = None;
                let draft = std::mem::take(&mut self.saved_draft);
                self.set_buffer(draft);
            }
            Some(i) => {
                let history = &self.shell.history;
                let entry = history[history.len() - i].clone();
                self.history_index = Some(i - 1);
                self.set_buffer(entry);
            }
        }
    }

    fn complete(&mut self) {
        let at = self.byte_index(self.cursor);
        let (before, after) = self.buffer.split_at(at);
        if let Some(completed) =
            complete(before, COMPLETABLE_COMMANDS, &self.shell.fs, &self.shell.cwd)
        {
            self.cursor = completed.chars().count();
            self.buffer = format!("{}{}", completed, after);
        }
    }

    /// Drop trailing whitespace before the cursor, then the word before it.
    fn delete_word(&mut self) {
        let at = self.byte_index(self.cursor);
        let before = &self.buffer[..at];
        let kept = before
            .trim_end_matches(char::is_whitespace)
            .trim_end_matches(|c: char| !c.is_whitespace())
            .len();
        self.buffer.replace_range(kept..at, "");
        self.cursor = self.buffer[..kept].chars().count();
    }

    fn reset_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_draft.clear();
    }

    fn interrupt(&mut self) -> Vec<RenderInstruction> {
        let echoed = RenderedLine::new(
            LineKind::Muted,
            format!("{}{}^C", self.prompt(), self.buffer),
        );
        self.reset_line();
        vec![self.append(vec![echoed]), self.render_prompt()]
    }

    fn submit(&mut self) -> Vec<RenderInstruction> {
        let submitted = RenderedLine::new(LineKind::Input, format!("{}{}", self.prompt(), self.buffer));
        let line = std::mem::take(&mut self.buffer);
        self.reset_line();

        let outcome = self.interpreter.execute(&line, &mut self.shell);
        self.shell.apply(&outcome);

        let mut instructions = Vec::new();
        if outcome.should_clear_screen {
            self.lines.clear();
            instructions.push(RenderInstruction::ClearScreen);
        } else {
            let mut lines = vec![submitted];
            lines.extend(output_lines(&outcome));
            instructions.push(self.append(lines));
        }

        if outcome.should_exit {
            self.exited = true;
            info!("session exited");
            instructions.push(RenderInstruction::Exit);
        } else {
            instructions.push(self.render_prompt());
        }
        instructions
    }

    fn append(&mut self, lines: Vec<RenderedLine>) -> RenderInstruction {
        self.lines.extend(lines.iter().cloned());
        RenderInstruction::AppendLines { lines }
    }
}

/// stderr as errors, then stdout; the exit farewell is muted.
fn output_lines(outcome: &ExecOutcome) -> Vec<RenderedLine> {
    let mut lines = Vec::new();
    if !outcome.stderr.is_empty() {
        lines.extend(RenderedLine::split(LineKind::Error, &outcome.stderr));
    }
    if !outcome.stdout.is_empty() {
        let kind = if outcome.should_exit { LineKind::Muted } else { LineKind::Output };
        lines.extend(RenderedLine::split(kind, &outcome.stdout));
    }
    lines
}
