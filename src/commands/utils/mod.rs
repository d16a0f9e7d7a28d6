// src/commands/utils/mod.rs
pub mod head_tail;
pub mod input;

pub use head_tail::{get_head, get_tail, parse_head_tail_args, run_head_tail, HeadTailOptions};
pub use input::{append_line, has_flag, operands, read_file, read_operand_or_stdin};
