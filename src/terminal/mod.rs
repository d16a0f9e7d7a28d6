//! Line-editing terminal session on top of the interpreter.

pub mod completion;
pub mod events;
pub mod lines;
pub mod prompt;
pub mod session;

pub use events::InputEvent;
pub use lines::{LineKind, RenderInstruction, RenderedLine};
pub use prompt::prompt_for;
pub use session::TerminalSession;
