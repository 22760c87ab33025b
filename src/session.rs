//! The "send message" capability commands reply through.

use anyhow::Result;
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use serenity::utils::Colour;

use crate::reply::Reply;

/// Sends replies to a chat channel.
#[async_trait]
pub trait Session: Send + Sync {
    async fn send(&self, channel_id: &str, reply: Reply) -> Result<()>;
}

#[async_trait]
impl Session for Http {
    async fn send(&self, channel_id: &str, reply: Reply) -> Result<()> {
        let channel = ChannelId(channel_id.parse::<u64>()?);
        let reference = match reply.reference.as_deref() {
            Some(id) => Some(MessageId(id.parse::<u64>()?)),
            None => None,
        };

        channel
            .send_message(self, |m| {
                if let Some(content) = &reply.content {
                    m.content(content);
                }
                if let Some(embed) = &reply.embed {
                    m.embed(|e| {
                        e.description(&embed.description)
                            .colour(Colour::new(embed.colour))
                    });
                }
                if let Some(message_id) = reference {
                    m.reference_message((channel, message_id));
                }
                m
            })
            .await?;

        Ok(())
    }
}
