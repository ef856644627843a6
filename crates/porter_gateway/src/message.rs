//! Outbound message addressing and content.

use crate::{ChannelId, MessageId, UserId};
use derive_getters::Getters;
use derive_new::new;

/// Fully-qualified reference to a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, new)]
pub struct MessageRef {
    /// Channel the message lives in.
    channel: ChannelId,
    /// The message itself.
    message: MessageId,
}

/// Where an outbound message should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
pub enum MessageTarget {
    /// A guild or private channel.
    Channel(ChannelId),
    /// A user's direct-message conversation, opened on demand.
    User(UserId),
}

/// A titled rich-content card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, new)]
pub struct EmbedContent {
    /// Author-line title.
    author_name: String,
    /// Optional author-line icon URL.
    icon_url: Option<String>,
    /// Body text.
    description: String,
    /// Optional footer line (the session page counter).
    footer: Option<String>,
    /// Optional accent colour as 0xRRGGBB.
    colour: Option<u32>,
}

impl EmbedContent {
    /// A red error card with the given title, the shape used for visible
    /// user errors like an unknown help query.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title.into(), None, String::new(), None, Some(0xed_42_45))
    }
}

/// Content of an outbound send or edit.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum OutboundContent {
    /// Plain text.
    Text(String),
    /// A rich embed.
    Embed(EmbedContent),
}

impl From<&str> for OutboundContent {
    fn from(text: &str) -> Self {
        OutboundContent::Text(text.to_owned())
    }
}
