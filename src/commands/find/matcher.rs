use glob::{MatchOptions, Pattern};

use super::types::*;

const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Collapse runs of `*`; `**` is only valid as a whole path component.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if !(c == '*' && out.ends_with('*')) {
            out.push(c);
        }
    }
    out
}

/// Case-insensitive glob match of a bare entry name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    match Pattern::new(&collapse_stars(pattern)) {
        Ok(compiled) => compiled.matches_with(name, NAME_MATCH),
        Err(_) => pattern.eq_ignore_ascii_case(name),
    }
}

pub fn evaluate(expr: &Expression, ctx: &EvalContext<'_>) -> bool {
    match expr {
        Expression::Name { pattern } => glob_match(pattern, ctx.name),
        Expression::Type(FileType::File) => !ctx.is_directory,
        Expression::Type(FileType::Directory) => ctx.is_directory,
    }
}

pub fn matches_all(tests: &[Expression], ctx: &EvalContext<'_>) -> bool {
    tests.iter().all(|t| evaluate(t, ctx))
}
