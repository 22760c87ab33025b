//! # Built-in Commands
//!
//! The command set the bot starts with. Built once at startup and handed to
//! the [`Executor`](crate::executor::Executor).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod info;
pub mod quick;

use std::sync::Arc;
use std::time::Instant;

use crate::command::{new_command, new_literal, Command};

/// Help entry for a built-in command
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub name: &'static str,
    /// Argument synopsis shown after the name
    pub usage: &'static str,
    pub description: &'static str,
    pub literal: bool,
}

/// All built-in commands, in evaluation order
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "ping",
        usage: "",
        description: "Quick ping",
        literal: false,
    },
    CommandInfo {
        name: "echo",
        usage: " <text>",
        description: "Repeat the text back",
        literal: false,
    },
    CommandInfo {
        name: "help",
        usage: "",
        description: "Show this help message",
        literal: false,
    },
    CommandInfo {
        name: "uptime",
        usage: "",
        description: "Show how long the bot has been running",
        literal: false,
    },
    CommandInfo {
        name: "version",
        usage: "",
        description: "Show the bot version",
        literal: false,
    },
    CommandInfo {
        name: "o/",
        usage: "",
        description: "Wave back",
        literal: true,
    },
];

/// One help line per built-in command.
pub fn help_lines(trigger: &str) -> Vec<String> {
    let mut lines = vec!["**Commands**".to_string()];

    lines.extend(COMMANDS.iter().map(|info| {
        let prefix = if info.literal { "" } else { trigger };
        format!("`{}{}{}` - {}", prefix, info.name, info.usage, info.description)
    }));

    lines
}

/// Build the built-in command list.
pub fn builtin_commands(trigger: &str, started: Instant) -> Vec<Arc<dyn Command>> {
    let help = help_lines(trigger);

    vec![
        new_command("ping", |ctx| async move { ctx.reply(quick::ping()).await }),
        new_command("echo", |ctx| async move {
            let text = quick::echo(&ctx.content)?;
            ctx.send(text).await
        }),
        new_command("help", move |ctx| {
            let help = help.clone();
            async move { ctx.send_list(&help).await }
        }),
        new_command("uptime", move |ctx| async move {
            ctx.reply(info::uptime(started)).await
        }),
        new_command("version", |ctx| async move { ctx.reply(info::version()).await }),
        new_literal("o/", |ctx| async move { ctx.send(quick::wave()).await }),
    ]
}
