use super::types::*;
use crate::interpreter::errors::ShellError;

fn take_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ShellError> {
    args.get(i)
        .map(|s| s.as_str())
        .ok_or_else(|| ShellError::invalid_argument("find", format!("missing argument to `{}'", flag)))
}

fn parse_depth(raw: &str, flag: &str) -> Result<usize, ShellError> {
    raw.parse().map_err(|_| {
        ShellError::invalid_argument("find", format!("invalid argument `{}' to `{}'", raw, flag))
    })
}

/// Parse find arguments: the first non-option word is the starting path,
/// the rest are tests and global options.
pub fn parse_query(args: &[String]) -> Result<FindQuery, ShellError> {
    let mut query = FindQuery::default();
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-name" | "-iname" => {
                i += 1;
                let pattern = take_value(args, i, arg)?;
                query.tests.push(Expression::Name { pattern: pattern.to_string() });
            }
            "-type" => {
                i += 1;
                let kind = match take_value(args, i, arg)? {
                    "f" => FileType::File,
                    "d" => FileType::Directory,
                    other => {
                        return Err(ShellError::invalid_argument(
                            "find",
                            format!("Unknown argument to -type: {}", other),
                        ))
                    }
                };
                query.tests.push(Expression::Type(kind));
            }
            "-maxdepth" => {
                i += 1;
                query.options.max_depth = Some(parse_depth(take_value(args, i, arg)?, arg)?);
            }
            "-mindepth" => {
                i += 1;
                query.options.min_depth = Some(parse_depth(take_value(args, i, arg)?, arg)?);
            }
            _ if arg.starts_with('-') => {
                return Err(ShellError::invalid_argument(
                    "find",
                    format!("unknown predicate `{}'", arg),
                ))
            }
            _ if query.path.is_none() => query.path = Some(arg.to_string()),
            _ => {}
        }
        i += 1;
    }

    Ok(query)
}
