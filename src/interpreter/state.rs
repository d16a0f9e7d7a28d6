//! Session State
//!
//! Everything one shell session owns: the tree, the working directory, the
//! environment and the history. Sessions share nothing, so any number can
//! coexist.

use indexmap::IndexMap;
use std::time::Instant;

use crate::content::SiteContent;
use crate::fs::{build_from_content, lookup, to_absolute, FsNode, HOME_DIR};
use crate::interpreter::types::{ExecOutcome, ShellOptions};

#[derive(Debug, Clone)]
pub struct ShellState {
    pub cwd: String,
    pub env: IndexMap<String, String>,
    pub history: Vec<String>,
    pub fs: FsNode,
    pub started_at: Instant,
}

/// Environment every session starts with, in display order.
pub fn default_env() -> IndexMap<String, String> {
    [
        ("HOME", HOME_DIR),
        ("USER", "visitor"),
        ("SHELL", "/bin/wasm-sh"),
        ("TERM", "xterm-256color"),
        ("PATH", "/usr/bin:/bin"),
        ("HOSTNAME", "portfolio"),
        ("EDITOR", "cat"),
        ("LANG", "en_US.UTF-8"),
        ("PS1", "visitor@portfolio:~$ "),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl ShellState {
    pub fn new(fs: FsNode, options: ShellOptions) -> Self {
        let mut env = default_env();
        if let Some(extra) = options.env {
            // HashMap order is arbitrary; sort so `env` output is stable.
            let mut extra: Vec<_> = extra.into_iter().collect();
            extra.sort();
            env.extend(extra);
        }

        let cwd = match options.cwd {
            Some(requested) => {
                let abs = to_absolute(HOME_DIR, &requested);
                if lookup(&fs, &abs).is_some_and(FsNode::is_directory) {
                    abs
                } else {
                    log::warn!("starting directory {} does not exist, using {}", requested, HOME_DIR);
                    HOME_DIR.to_string()
                }
            }
            None => HOME_DIR.to_string(),
        };

        Self {
            cwd,
            env,
            history: Vec::new(),
            fs,
            started_at: Instant::now(),
        }
    }

    /// Apply the session-level parts of an outcome.
    pub fn apply(&mut self, outcome: &ExecOutcome) {
        if let Some(cwd) = &outcome.new_cwd {
            self.cwd = cwd.clone();
        }
    }
}

/// Fresh session over `content`, at home, with the default environment.
pub fn init_session(content: &SiteContent) -> ShellState {
    init_session_with(content, ShellOptions::default())
}

pub fn init_session_with(content: &SiteContent, options: ShellOptions) -> ShellState {
    ShellState::new(build_from_content(content), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_init_session_defaults() {
        let state = init_session(&SiteContent::sample());
        assert_eq!(state.cwd, "/home/visitor");
        assert!(state.history.is_empty());
        assert_eq!(state.env.get("USER").map(String::as_str), Some("visitor"));
        assert_eq!(state.env.keys().next().map(String::as_str), Some("HOME"));
        assert!(lookup(&state.fs, "/home/visitor/about.txt").is_some());
    }

    #[test]
    fn test_options_cwd_and_env() {
        let mut env = HashMap::new();
        env.insert("USER".to_string(), "guest".to_string());
        env.insert("EXTRA".to_string(), "1".to_string());
        let state = init_session_with(
            &SiteContent::sample(),
            ShellOptions { cwd: Some("~/projects".to_string()), env: Some(env) },
        );
        assert_eq!(state.cwd, "/home/visitor/projects");
        assert_eq!(state.env.get("USER").map(String::as_str), Some("guest"));
        assert_eq!(state.env.get("EXTRA").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_missing_cwd_falls_back_home() {
        let state = init_session_with(
            &SiteContent::sample(),
            ShellOptions { cwd: Some("/nowhere".to_string()), env: None },
        );
        assert_eq!(state.cwd, HOME_DIR);
    }

    #[test]
    fn test_sessions_are_independent() {
        let content = SiteContent::sample();
        let mut a = init_session(&content);
        let b = init_session(&content);
        a.fs.set("scratch", FsNode::dir());
        a.cwd = "/".to_string();
        assert!(lookup(&b.fs, "/scratch").is_none());
        assert_eq!(b.cwd, HOME_DIR);
    }

    #[test]
    fn test_apply_new_cwd() {
        let mut state = init_session(&SiteContent::sample());
        state.apply(&ExecOutcome { new_cwd: Some("/etc".to_string()), ..Default::default() });
        assert_eq!(state.cwd, "/etc");
        state.apply(&ExecOutcome::default());
        assert_eq!(state.cwd, "/etc");
    }
}
