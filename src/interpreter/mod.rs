//! Interpreter module
//!
//! Tokenizes input lines, runs pipelines of builtins and tracks session state.

pub mod errors;
#[allow(clippy::module_inception)]
pub mod interpreter;
pub mod pipeline_execution;
pub mod state;
pub mod tokenizer;
pub mod types;

pub use errors::ShellError;
pub use interpreter::Interpreter;
pub use state::{default_env, init_session, init_session_with, ShellState};
pub use types::{ExecOutcome, ShellOptions};
