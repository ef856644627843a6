//! The outbound request surface of the platform adapter.

use crate::{ChannelHandle, ChannelId, MessageRef, MessageTarget, OutboundContent, UserId};
use async_trait::async_trait;
use porter_error::GatewayResult;

/// Outbound operations the core may request from the chat platform.
///
/// Every method is a suspension point: the caller yields until the platform
/// acknowledges. Implementations must be shareable across event handler
/// tasks.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Deliver a new message, returning a reference used for later edits and
    /// deletion.
    async fn send_message(
        &self,
        target: MessageTarget,
        content: OutboundContent,
    ) -> GatewayResult<MessageRef>;

    /// Replace the content of an existing message in place.
    async fn edit_message(
        &self,
        message: MessageRef,
        content: OutboundContent,
    ) -> GatewayResult<()>;

    /// Delete a message.
    async fn delete_message(&self, message: MessageRef) -> GatewayResult<()>;

    /// Attach a reaction to a message on the bot's behalf.
    async fn add_reaction(&self, message: MessageRef, emoji: &str) -> GatewayResult<()>;

    /// Remove one user's reaction from a message.
    async fn remove_reaction(
        &self,
        message: MessageRef,
        emoji: &str,
        user: UserId,
    ) -> GatewayResult<()>;

    /// Rename a guild channel.
    async fn rename_channel(&self, channel: ChannelId, name: &str) -> GatewayResult<()>;

    /// Delete a guild channel.
    async fn delete_channel(&self, channel: ChannelId) -> GatewayResult<()>;

    /// Enumerate every channel in the guild, categories included.
    async fn all_channels(&self) -> GatewayResult<Vec<ChannelHandle>>;
}
