//! Inbound gateway events.

use crate::{ChannelHandle, ChannelId, MessageId, MessageRef, UserId};

/// One structured event delivered by the platform adapter.
///
/// The adapter guarantees causal ordering per channel for the structural
/// events (a delete never precedes its create); everything else may
/// interleave arbitrarily, so consumers re-validate ids instead of assuming
/// delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// The connection is up and the guild is visible.
    Ready,
    /// A message arrived in a guild channel or DM.
    MessageReceived {
        /// Author identity.
        author: UserId,
        /// Author display name, for logs and user-facing strings.
        author_name: String,
        /// Channel the message arrived in.
        channel: ChannelId,
        /// Raw message text.
        content: String,
        /// Whether this was a direct message.
        private: bool,
    },
    /// A reaction was added to a message.
    ReactionAdded {
        /// The reacted-to message.
        message: MessageRef,
        /// Who reacted.
        user: UserId,
        /// The reaction emoji as a string.
        emoji: String,
    },
    /// A message was deleted.
    MessageDeleted {
        /// The deleted message.
        message: MessageId,
    },
    /// A guild channel was created.
    ChannelCreated {
        /// The new channel.
        channel: ChannelHandle,
    },
    /// A guild channel was deleted.
    ChannelDeleted {
        /// The deleted channel.
        channel: ChannelHandle,
    },
    /// A guild channel changed (rename or attribute update).
    ChannelUpdated {
        /// State before the change, when the platform provides it.
        old: Option<ChannelHandle>,
        /// State after the change.
        new: ChannelHandle,
    },
    /// A member joined the guild.
    MemberJoined {
        /// The new member.
        user: UserId,
        /// Their display name.
        display_name: String,
    },
}
