// src/commands/base64_cmd/mod.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::commands::utils::{operands, read_operand_or_stdin};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct Base64Command;

impl Command for Base64Command {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let decode = ctx.args.iter().any(|a| a == "-d" || a == "--decode");
        let file = operands(&ctx.args).first().copied();

        let data = match read_operand_or_stdin(&ctx, "base64", file) {
            Ok(data) => data,
            Err(err) => return CommandResult::failure(err),
        };

        if decode {
            let cleaned: String = data.chars().filter(|c| !c.is_whitespace()).collect();
            match STANDARD.decode(&cleaned) {
                Ok(decoded) => CommandResult::success(String::from_utf8_lossy(&decoded).into_owned()),
                Err(_) => CommandResult::failure(ShellError::invalid_argument("base64", "invalid input")),
            }
        } else {
            CommandResult::success(STANDARD.encode(data.as_bytes()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestShell;

    #[test]
    fn test_base64_encode_stdin() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&Base64Command, &[], "hello");
        assert_eq!(result.stdout, "aGVsbG8=");
    }

    #[test]
    fn test_base64_encode_utf8_file() {
        let mut shell = TestShell::empty().with_file("/f.txt", "héllo");
        let result = shell.run(&Base64Command, &["/f.txt"]);
        assert_eq!(result.stdout, STANDARD.encode("héllo".as_bytes()));
    }

    #[test]
    fn test_base64_decode() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&Base64Command, &["-d"], "aGVs\nbG8=");
        assert_eq!(result.stdout, "hello");
    }

    #[test]
    fn test_base64_decode_invalid() {
        let mut shell = TestShell::empty();
        let result = shell.run_with_stdin(&Base64Command, &["-d"], "@@@");
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "base64: invalid input");
    }

    #[test]
    fn test_base64_missing_file() {
        let mut shell = TestShell::empty();
        let result = shell.run(&Base64Command, &["nope"]);
        assert_eq!(result.stderr, "base64: nope: No such file or directory");
    }
}
