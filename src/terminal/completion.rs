//! Tab completion of command names and paths.

use crate::fs::{resolve, FsNode};

/// Command names offered by Tab. Aliases, `true`/`false` and the refused
/// commands are left out so they never shadow a usable prefix.
pub const COMPLETABLE_COMMANDS: &[&str] = &[
    "ls", "cd", "cat", "pwd", "echo", "whoami", "hostname", "uname", "date", "uptime", "env",
    "printenv", "export", "head", "tail", "wc", "grep", "tree", "find", "mkdir", "touch",
    "history", "hexdump", "base64", "fortune", "cowsay", "neofetch", "clear", "exit", "help",
    "which", "man",
];

/// The single entry of `candidates` starting with `prefix`, if exactly one does.
fn unique_match<'a, I>(candidates: I, prefix: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches = candidates.into_iter().filter(|c| c.starts_with(prefix));
    let first = matches.next()?;
    match matches.next() {
        None => Some(first),
        Some(_) => None,
    }
}

/// Complete `before`, the text left of the cursor.
///
/// With no space yet the whole text is a command-name prefix. Otherwise the
/// last word is a path whose part up to the final `/` names the directory
/// searched (the cwd when there is none). Returns the replacement for
/// `before`, or `None` when there is no unique match.
pub fn complete(before: &str, commands: &[&str], fs: &FsNode, cwd: &str) -> Option<String> {
    if !before.contains(' ') {
        let name = unique_match(commands.iter().copied(), before)?;
        return Some(format!("{} ", name));
    }

    let token_start = before
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    let (head, token) = before.split_at(token_start);

    let (dir_part, file_part) = match token.rfind('/') {
        Some(pos) => token.split_at(pos + 1),
        None => ("", token),
    };

    let (dir, _) = resolve(fs, cwd, if dir_part.is_empty() { "." } else { dir_part });
    let dir = dir.filter(|n| n.is_directory())?;
    let name = unique_match(dir.sorted_names(), file_part)?;
    let suffix = if dir.child(name).is_some_and(FsNode::is_directory) { "/" } else { " " };

    Some(format!("{}{}{}{}", head, dir_part, name, suffix))
}
