//! # Command Executor
//!
//! Matches incoming messages against the registered commands and runs every
//! match as its own task.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! Failures never escape [`Executor::apply`]: a failing handler gets an error
//! embed in the originating channel and an error log line, and does not
//! affect other commands matched by the same message.

use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::{Id, JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::command::{matches, Command};
use crate::context::CommandContext;
use crate::message::IncomingMessage;
use crate::reply::Reply;
use crate::session::Session;
use crate::text::{split_args, strip_prefix};

/// Runs commands.
pub struct Executor {
    commands: Vec<Arc<dyn Command>>,
}

impl Executor {
    /// Commands are evaluated in the order given.
    pub fn new(commands: Vec<Arc<dyn Command>>) -> Self {
        Executor { commands }
    }

    /// Whether any registered command matches `message`.
    pub fn has_match(&self, trigger: &str, message: &str) -> bool {
        self.commands
            .iter()
            .any(|cmd| matches(trigger, message, cmd.as_ref()))
    }

    /// Run every command matching `message` and wait for all of them.
    ///
    /// Each handler gets a child of `cancel` that is canceled when this call
    /// returns. Returns the number of commands dispatched.
    pub async fn apply(
        &self,
        cancel: &CancellationToken,
        trigger: &str,
        message: IncomingMessage,
        session: Arc<dyn Session>,
    ) -> usize {
        let scope = cancel.child_token();
        let _guard = scope.clone().drop_guard();

        let message = Arc::new(message);
        let mut tasks = JoinSet::new();
        let mut names: HashMap<Id, String> = HashMap::new();

        for cmd in &self.commands {
            if !matches(trigger, &message.content, cmd.as_ref()) {
                continue;
            }

            let ctx = build_context(trigger, cmd.as_ref(), &message, &session, &scope);
            let cmd = Arc::clone(cmd);

            let name = cmd.name().to_string();
            let handle = tasks.spawn(async move { apply_command(cmd, ctx).await });
            names.insert(handle.id(), name);
        }

        let dispatched = tasks.len();

        while let Some(joined) = tasks.join_next().await {
            let Err(e) = joined else {
                continue;
            };
            let name = names.get(&e.id()).map(String::as_str).unwrap_or("?");
            report_aborted(name, e, &message, session.as_ref()).await;
        }

        dispatched
    }
}

fn build_context(
    trigger: &str,
    cmd: &dyn Command,
    message: &Arc<IncomingMessage>,
    session: &Arc<dyn Session>,
    scope: &CancellationToken,
) -> CommandContext {
    let (args, content) = if cmd.skips_prefix() {
        (vec![message.content.clone()], message.content.clone())
    } else {
        let content = strip_prefix(trigger, cmd.name())(&message.content);
        (split_args(&content), content)
    };

    CommandContext {
        message: Arc::clone(message),
        args,
        content,
        session: Arc::clone(session),
        cancel: scope.child_token(),
    }
}

/// A handler panicked or its task was aborted.
async fn report_aborted(name: &str, err: JoinError, message: &IncomingMessage, session: &dyn Session) {
    error!(
        "Command did not complete cmd={} err={} {}",
        name,
        err,
        message.fields()
    );

    let reason = if err.is_panic() {
        format!("Command {} crashed", name)
    } else {
        format!("Command {} was aborted", name)
    };
    let reply = Reply::error(&reason).in_reply_to(message.id.clone());

    if let Err(reply_err) = session.send(&message.channel_id, reply).await {
        error!(
            "Failed to report command error to channel cmd={} err={:#} {}",
            name,
            reply_err.context(reason),
            message.fields()
        );
    }
}

async fn apply_command(cmd: Arc<dyn Command>, ctx: CommandContext) {
    info!("Executing command cmd={} {}", cmd.name(), ctx.message.fields());

    let Err(err) = cmd.apply(ctx.clone()).await else {
        return;
    };

    error!(
        "Command failed cmd={} err={:#} {}",
        cmd.name(),
        err,
        ctx.message.fields()
    );

    if let Err(reply_err) = ctx.error(&err).await {
        let reply_err = reply_err.context(format!("command {} failed: {:#}", cmd.name(), err));
        error!(
            "Failed to report command error to channel cmd={} err={:#} {}",
            cmd.name(),
            reply_err,
            ctx.message.fields()
        );
    }
}
