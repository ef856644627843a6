//! Recording gateway for tests.
//!
//! Enabled with the `mock` feature. Records every outbound request, serves a
//! configurable channel list, and can inject one-shot failures.

use crate::{
    ChannelHandle, ChannelId, Gateway, MessageId, MessageRef, MessageTarget, OutboundContent,
    UserId,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use porter_error::{GatewayError, GatewayErrorKind, GatewayResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// One recorded outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    /// `send_message` call.
    SendMessage {
        /// Delivery target.
        target: MessageTarget,
        /// Sent content.
        content: OutboundContent,
    },
    /// `edit_message` call.
    EditMessage {
        /// Edited message.
        message: MessageRef,
        /// Replacement content.
        content: OutboundContent,
    },
    /// `delete_message` call.
    DeleteMessage {
        /// Deleted message.
        message: MessageRef,
    },
    /// `add_reaction` call.
    AddReaction {
        /// Target message.
        message: MessageRef,
        /// Reaction emoji.
        emoji: String,
    },
    /// `remove_reaction` call.
    RemoveReaction {
        /// Target message.
        message: MessageRef,
        /// Reaction emoji.
        emoji: String,
        /// Whose reaction.
        user: UserId,
    },
    /// `rename_channel` call.
    RenameChannel {
        /// Target channel.
        channel: ChannelId,
        /// Requested name.
        name: String,
    },
    /// `delete_channel` call.
    DeleteChannel {
        /// Target channel.
        channel: ChannelId,
    },
}

/// A [`Gateway`] that records requests instead of performing them.
#[derive(Debug, Default)]
pub struct MockGateway {
    requests: Mutex<Vec<RecordedRequest>>,
    channels: Mutex<Vec<ChannelHandle>>,
    failures: Mutex<VecDeque<GatewayErrorKind>>,
    next_message_id: AtomicU64,
}

impl MockGateway {
    /// A mock with no channels and no queued failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose `all_channels` serves the given list.
    pub fn with_channels(channels: Vec<ChannelHandle>) -> Self {
        let mock = Self::new();
        *mock.channels.lock() = channels;
        mock
    }

    /// Queue an error; the next outbound request consumes and returns it.
    pub fn push_failure(&self, kind: GatewayErrorKind) {
        self.failures.lock().push_back(kind);
    }

    /// Everything recorded so far, in request order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Recorded requests matching a predicate.
    pub fn requests_where(
        &self,
        predicate: impl Fn(&RecordedRequest) -> bool,
    ) -> Vec<RecordedRequest> {
        self.requests.lock().iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Drop the recorded history, keeping channels and queued failures.
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    fn record(&self, request: RecordedRequest) -> GatewayResult<()> {
        if let Some(kind) = self.failures.lock().pop_front() {
            return Err(GatewayError::new(kind));
        }
        self.requests.lock().push(request);
        Ok(())
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn send_message(
        &self,
        target: MessageTarget,
        content: OutboundContent,
    ) -> GatewayResult<MessageRef> {
        self.record(RecordedRequest::SendMessage {
            target,
            content,
        })?;
        let id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1;
        let channel = match target {
            MessageTarget::Channel(channel) => channel,
            // DM conversations get a synthetic channel id derived from the user.
            MessageTarget::User(user) => ChannelId::new(u64::MAX - user.get()),
        };
        Ok(MessageRef::new(channel, MessageId::new(id)))
    }

    async fn edit_message(
        &self,
        message: MessageRef,
        content: OutboundContent,
    ) -> GatewayResult<()> {
        self.record(RecordedRequest::EditMessage { message, content })
    }

    async fn delete_message(&self, message: MessageRef) -> GatewayResult<()> {
        self.record(RecordedRequest::DeleteMessage { message })
    }

    async fn add_reaction(&self, message: MessageRef, emoji: &str) -> GatewayResult<()> {
        self.record(RecordedRequest::AddReaction {
            message,
            emoji: emoji.to_owned(),
        })
    }

    async fn remove_reaction(
        &self,
        message: MessageRef,
        emoji: &str,
        user: UserId,
    ) -> GatewayResult<()> {
        self.record(RecordedRequest::RemoveReaction {
            message,
            emoji: emoji.to_owned(),
            user,
        })
    }

    async fn rename_channel(&self, channel: ChannelId, name: &str) -> GatewayResult<()> {
        self.record(RecordedRequest::RenameChannel {
            channel,
            name: name.to_owned(),
        })
    }

    async fn delete_channel(&self, channel: ChannelId) -> GatewayResult<()> {
        self.record(RecordedRequest::DeleteChannel { channel })
    }

    async fn all_channels(&self) -> GatewayResult<Vec<ChannelHandle>> {
        Ok(self.channels.lock().clone())
    }
}
