//! portfolio-shell - a Unix-like shell over an in-memory portfolio
//!
//! Site content is turned into a synthetic file system that a small command
//! interpreter (pipes, quoting, about forty builtins) runs against. A
//! line-editing terminal session turns key events into render instructions.

pub mod commands;
pub mod content;
pub mod fs;
pub mod interpreter;
pub mod style;
pub mod terminal;

pub use content::SiteContent;
pub use interpreter::{init_session, ExecOutcome, Interpreter, ShellOptions, ShellState};
pub use terminal::{InputEvent, RenderInstruction, TerminalSession};
