// src/commands/registry.rs
use std::collections::HashMap;
use std::sync::Arc;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its name and all of its aliases.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let cmd: Arc<dyn Command> = Arc::from(cmd);
        for alias in cmd.aliases() {
            self.commands.insert(alias.to_string(), Arc::clone(&cmd));
        }
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// All registered names, aliases included, in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::base64_cmd::Base64Command;
use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::env::{EnvCommand, ExportCommand, PrintenvCommand};
use super::exit_cmd::ExitCommand;
use super::find::FindCommand;
use super::fun::{CowsayCommand, FortuneCommand, NeofetchCommand};
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::HelpCommand;
use super::hexdump_cmd::HexdumpCommand;
use super::history_cmd::HistoryCommand;
use super::hostname_cmd::HostnameCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::restricted::restricted_commands;
use super::system::{ManCommand, UnameCommand, UptimeCommand};
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::true_cmd::{FalseCommand, TrueCommand};
use super::wc::WcCommand;
use super::which_cmd::WhichCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every builtin the shell provides.
pub fn register_builtins(registry: &mut CommandRegistry) {
    // Filesystem
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(FindCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));

    // Text processing
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(TailCommand));
    registry.register(Box::new(WcCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(HexdumpCommand));
    registry.register(Box::new(Base64Command));

    // Session and system
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(EnvCommand));
    registry.register(Box::new(PrintenvCommand));
    registry.register(Box::new(ExportCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(HostnameCommand));
    registry.register(Box::new(UnameCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(UptimeCommand));
    registry.register(Box::new(WhichCommand));
    registry.register(Box::new(ManCommand));
    registry.register(Box::new(TrueCommand));
    registry.register(Box::new(FalseCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(ExitCommand));

    // Fun
    registry.register(Box::new(FortuneCommand));
    registry.register(Box::new(CowsayCommand));
    registry.register(Box::new(NeofetchCommand));

    for cmd in restricted_commands() {
        registry.register(cmd);
    }
}

/// Create a registry holding every builtin.
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
