// src/commands/mod.rs
pub mod base64_cmd;
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod date;
pub mod echo;
pub mod env;
pub mod exit_cmd;
pub mod find;
pub mod fun;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod hexdump_cmd;
pub mod history_cmd;
pub mod hostname_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod registry;
pub mod restricted;
pub mod system;
pub mod tail;
pub mod touch;
pub mod tree_cmd;
pub mod true_cmd;
pub mod types;
pub mod utils;
pub mod wc;
pub mod which_cmd;
pub mod whoami_cmd;

#[cfg(test)]
pub mod test_support;

pub use registry::{create_builtin_registry, register_builtins, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, ShellEffect};
