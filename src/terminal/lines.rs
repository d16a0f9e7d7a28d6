//! Render output: the lines a session produces and the instructions a
//! front end applies to its screen.

use serde::Serialize;

use crate::style::strip_ansi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// A submitted prompt and command line.
    Input,
    Output,
    Error,
    Emphasized,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub text: String,
}

impl RenderedLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// One line of `kind` per `\n`-separated segment of `text`.
    pub fn split(kind: LineKind, text: &str) -> Vec<RenderedLine> {
        text.split('\n').map(|line| RenderedLine::new(kind, line)).collect()
    }

    /// The same line with terminal styling removed.
    pub fn plain(&self) -> RenderedLine {
        RenderedLine::new(self.kind, strip_ansi(&self.text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderInstruction {
    AppendLines { lines: Vec<RenderedLine> },
    ClearScreen,
    /// Redraw the editable line; `cursor` counts characters into `buffer`.
    UpdatePrompt { prompt: String, buffer: String, cursor: usize },
    Exit,
}
