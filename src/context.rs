//! Per-invocation command context.

use anyhow::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::message::IncomingMessage;
use crate::reply::{chunk_items, Reply, MAX_MESSAGE_LENGTH};
use crate::session::Session;

/// Everything a command handler gets for one matched message.
#[derive(Clone)]
pub struct CommandContext {
    /// The message that triggered the command
    pub message: Arc<IncomingMessage>,
    /// Tokens after the trigger and command name. Literal commands get the
    /// whole message as their single argument.
    pub args: Vec<String>,
    /// Message content with the trigger and command name removed
    pub content: String,
    pub session: Arc<dyn Session>,
    /// Canceled once the dispatching `Executor::apply` call returns
    pub cancel: CancellationToken,
}

impl CommandContext {
    /// Send a plain message to the originating channel.
    pub async fn send(&self, text: impl Into<String>) -> Result<()> {
        self.session
            .send(&self.message.channel_id, Reply::text(text))
            .await
    }

    /// Send a message threaded to the originating message.
    pub async fn reply(&self, text: impl Into<String>) -> Result<()> {
        self.session
            .send(
                &self.message.channel_id,
                Reply::text(text).in_reply_to(self.message.id.clone()),
            )
            .await
    }

    /// Send a list of items, split across as many messages as needed to stay
    /// under the message length limit.
    pub async fn send_list<S: AsRef<str>>(&self, items: &[S]) -> Result<()> {
        for chunk in chunk_items(items, MAX_MESSAGE_LENGTH) {
            self.send(chunk).await?;
        }
        Ok(())
    }

    /// Report a command failure as a red embed threaded to the originating
    /// message.
    pub async fn error(&self, err: &anyhow::Error) -> Result<()> {
        self.session
            .send(
                &self.message.channel_id,
                Reply::error(&format!("{err:#}")).in_reply_to(self.message.id.clone()),
            )
            .await
    }
}
