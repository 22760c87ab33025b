//! Transport-neutral view of an inbound chat message.

use serenity::model::channel::Message;
use std::fmt;

/// The parts of an inbound message the executor and commands look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingMessage {
    pub id: String,
    pub channel_id: String,
    /// `None` for direct messages
    pub guild_id: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub author_bot: bool,
    pub content: String,
}

impl IncomingMessage {
    /// Link that jumps to this message in the Discord client.
    pub fn permalink(&self) -> String {
        format!(
            "https://discord.com/channels/{}/{}/{}",
            self.guild_id.as_deref().unwrap_or("@me"),
            self.channel_id,
            self.id
        )
    }

    /// Log metadata for this message.
    pub fn fields(&self) -> MessageFields<'_> {
        MessageFields(self)
    }
}

impl From<&Message> for IncomingMessage {
    fn from(msg: &Message) -> Self {
        IncomingMessage {
            id: msg.id.to_string(),
            channel_id: msg.channel_id.to_string(),
            guild_id: msg.guild_id.map(|id| id.to_string()),
            author_id: msg.author.id.to_string(),
            author_name: msg.author.name.clone(),
            author_bot: msg.author.bot,
            content: msg.content.clone(),
        }
    }
}

/// Renders message metadata as `key=value` pairs for log lines.
pub struct MessageFields<'a>(&'a IncomingMessage);

impl fmt::Display for MessageFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.0;
        write!(
            f,
            "username={:?} guild={} channel={} message={} content={:?} url={}",
            msg.author_name,
            msg.guild_id.as_deref().unwrap_or("-"),
            msg.channel_id,
            msg.id,
            msg.content,
            msg.permalink()
        )
    }
}
