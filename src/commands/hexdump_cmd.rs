use crate::commands::utils::{operands, read_operand_or_stdin};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::style::{paint, DIM};

/// Bytes shown before the dump is cut short.
const MAX_BYTES: usize = 256;
const BYTES_PER_ROW: usize = 16;

fn format_row(offset: usize, chunk: &[u8]) -> String {
    let hex = chunk
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    let ascii: String = chunk
        .iter()
        .map(|&b| if (32..127).contains(&b) { b as char } else { '.' })
        .collect();
    format!("{:08x}  {:<48}  |{}|", offset, hex, ascii)
}

fn hexdump(text: &str) -> String {
    let bytes = text.as_bytes();
    let shown = &bytes[..bytes.len().min(MAX_BYTES)];

    let mut lines: Vec<String> = shown
        .chunks(BYTES_PER_ROW)
        .enumerate()
        .map(|(i, chunk)| format_row(i * BYTES_PER_ROW, chunk))
        .collect();

    if bytes.len() > MAX_BYTES {
        lines.push(paint(
            DIM,
            &format!("... (truncated, {} bytes total)", bytes.len()),
        ));
    }
    lines.join("\n")
}

pub struct HexdumpCommand;

impl Command for HexdumpCommand {
    fn name(&self) -> &'static str {
        "hexdump"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let file = operands(&ctx.args).first().copied();
        read_operand_or_stdin(&ctx, "hexdump", file)
            .map(|content| hexdump(&content))
            .into()
    }
}
