//! # Outbound Replies
//!
//! Message payloads sent back to a channel, plus length-bounded chunking for
//! list output.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

/// Discord's limit on the length of a single message
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Discord's limit on the length of an embed description
pub const MAX_EMBED_DESCRIPTION_LENGTH: usize = 4096;

/// Sidebar colour of error embeds (Discord red)
pub const ERROR_COLOUR: u32 = 0xED4245;

/// A message to send to a channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Plain text body
    pub content: Option<String>,
    pub embed: Option<Embed>,
    /// Message id this reply is threaded to
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub description: String,
    pub colour: u32,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Error embed carrying `message` in a red sidebar.
    pub fn error(message: &str) -> Self {
        Reply {
            embed: Some(Embed {
                description: truncate_chars(message, MAX_EMBED_DESCRIPTION_LENGTH),
                colour: ERROR_COLOUR,
            }),
            ..Default::default()
        }
    }

    /// Thread this reply to the given message.
    pub fn in_reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reference = Some(message_id.into());
        self
    }
}

/// Greedily pack `items` into newline-joined chunks of at most `max_len`
/// characters. Items are never split, so an item longer than `max_len` is
/// sent on its own.
pub fn chunk_items<S: AsRef<str>>(items: &[S], max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for item in items {
        let item = item.as_ref();
        let item_len = item.chars().count();

        if !current.is_empty() && current_len + 1 + item_len > max_len {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(item);
        current_len += item_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
