// src/commands/date/mod.rs
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, Utc};

use crate::commands::{Command, CommandContext, CommandResult};
use crate::interpreter::errors::ShellError;

pub struct DateCommand;

const DEFAULT_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Reject strftime strings chrono cannot render instead of panicking on display.
fn validate_format(format: &str) -> Result<(), ShellError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ShellError::invalid_argument(
            "date",
            format!("invalid format '{}'", format),
        ));
    }
    Ok(())
}

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut utc = false;
        let mut format = DEFAULT_FORMAT;

        for arg in &ctx.args {
            match arg.as_str() {
                "-u" | "--utc" => utc = true,
                "-I" | "--iso-8601" => format = ISO_FORMAT,
                a if a.starts_with('+') => format = &a[1..],
                a => {
                    return CommandResult::failure(ShellError::invalid_argument(
                        "date",
                        format!("invalid date '{}'", a),
                    ))
                }
            }
        }

        if let Err(err) = validate_format(format) {
            return CommandResult::failure(err);
        }

        let rendered = if utc {
            Utc::now().format(format).to_string()
        } else {
            Local::now().format(format).to_string()
        };
        CommandResult::success(rendered)
    }
}
