//! Path Resolution
//!
//! Pure helpers that normalize a path string against a working directory and
//! walk the tree from the root to the node it names.

use super::types::FsNode;

/// Home directory of the only user of the shell.
pub const HOME_DIR: &str = "/home/visitor";

/// Normalize `path` against `cwd` into an absolute path.
///
/// A leading `~` expands to [`HOME_DIR`]. Empty and `.` segments are dropped
/// and `..` pops the previous segment; popping at the root is a no-op.
pub fn to_absolute(cwd: &str, path: &str) -> String {
    let mut resolved = match path.strip_prefix('~') {
        Some(rest) => format!("{}{}", HOME_DIR, rest),
        None => path.to_string(),
    };
    if !resolved.starts_with('/') {
        resolved = format!("{}/{}", cwd, resolved);
    }

    let mut stack: Vec<&str> = Vec::new();
    for part in resolved.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(part),
        }
    }
    format!("/{}", stack.join("/"))
}

/// Resolve `path` to a node. Returns the node (if any) and the absolute path.
pub fn resolve<'a>(root: &'a FsNode, cwd: &str, path: &str) -> (Option<&'a FsNode>, String) {
    let abs = to_absolute(cwd, path);
    let node = lookup(root, &abs);
    (node, abs)
}

/// Mutable variant of [`resolve`], used by commands that insert nodes.
pub fn resolve_mut<'a>(
    root: &'a mut FsNode,
    cwd: &str,
    path: &str,
) -> (Option<&'a mut FsNode>, String) {
    let abs = to_absolute(cwd, path);
    let mut current = Some(root);
    for part in segments(&abs) {
        current = current
            .and_then(|node| node.children_mut())
            .and_then(|children| children.get_mut(part));
    }
    (current, abs)
}

/// Look up an already-absolute, normalized path.
pub fn lookup<'a>(root: &'a FsNode, abs: &str) -> Option<&'a FsNode> {
    let mut current = root;
    for part in segments(abs) {
        current = current.child(part)?;
    }
    Some(current)
}

/// Split an absolute path into `(parent, name)`. The root has no name.
pub fn split_parent(abs: &str) -> Option<(String, String)> {
    if abs == "/" {
        return None;
    }
    match abs.rfind('/') {
        Some(0) => Some(("/".to_string(), abs[1..].to_string())),
        Some(pos) => Some((abs[..pos].to_string(), abs[pos + 1..].to_string())),
        None => None,
    }
}

/// Join a directory path and a child name without doubling the slash.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Render `cwd` with the home directory abbreviated to `~`.
pub fn display_path(cwd: &str) -> String {
    match cwd.strip_prefix(HOME_DIR) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
        _ => cwd.to_string(),
    }
}

fn segments(abs: &str) -> impl Iterator<Item = &str> {
    abs.split('/').filter(|p| !p.is_empty())
}
