//! # Commands
//!
//! A command is a name, a matching mode, and an async handler.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! Prefixed commands match `<trigger><name>` followed by a space or the end
//! of the message. Literal commands ignore the trigger and only match a
//! message equal to their name.

use anyhow::Result;
use serenity::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::context::CommandContext;
use crate::text::has_command_prefix;

/// A command the executor can run.
#[async_trait]
pub trait Command: Send + Sync {
    /// The word that triggers this command
    fn name(&self) -> &str;

    /// Whether the command matches the whole message instead of
    /// `<trigger><name>`
    fn skips_prefix(&self) -> bool;

    async fn apply(&self, ctx: CommandContext) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Matches `<trigger><name>` with optional arguments
    Prefixed,
    /// Matches a message equal to the name
    Literal,
}

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

type Handler = Box<dyn Fn(CommandContext) -> HandlerFuture + Send + Sync>;

/// A command backed by a closure.
pub struct FnCommand {
    kind: CommandKind,
    incantation: String,
    handler: Handler,
}

#[async_trait]
impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.incantation
    }

    fn skips_prefix(&self) -> bool {
        self.kind == CommandKind::Literal
    }

    async fn apply(&self, ctx: CommandContext) -> Result<()> {
        (self.handler)(ctx).await
    }
}

/// Define a command of the given kind.
///
/// `incantation` must not be empty: an empty literal would match every empty
/// message and an empty prefixed name would match the bare trigger.
pub fn command_fn<F, Fut>(kind: CommandKind, incantation: impl Into<String>, f: F) -> Arc<dyn Command>
where
    F: Fn(CommandContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let incantation = incantation.into();
    debug_assert!(!incantation.is_empty(), "command name must not be empty");

    Arc::new(FnCommand {
        kind,
        incantation,
        handler: Box::new(move |ctx| Box::pin(f(ctx))),
    })
}

/// Define a prefixed command.
///
/// # Example
/// ```
/// use discord_commands::command::{new_command, Command};
///
/// let ping = new_command("ping", |ctx| async move { ctx.reply("Pong!").await });
/// assert_eq!(ping.name(), "ping");
/// assert!(!ping.skips_prefix());
/// ```
pub fn new_command<F, Fut>(incantation: impl Into<String>, f: F) -> Arc<dyn Command>
where
    F: Fn(CommandContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    command_fn(CommandKind::Prefixed, incantation, f)
}

/// Define a literal command.
pub fn new_literal<F, Fut>(incantation: impl Into<String>, f: F) -> Arc<dyn Command>
where
    F: Fn(CommandContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    command_fn(CommandKind::Literal, incantation, f)
}

/// Whether `message` triggers `command` under `trigger`.
pub fn matches(trigger: &str, message: &str, command: &dyn Command) -> bool {
    if command.skips_prefix() {
        command.name() == message
    } else {
        has_command_prefix(trigger, command.name(), message)
    }
}
