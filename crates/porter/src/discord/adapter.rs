//! Outbound requests over serenity's HTTP client.

use async_trait::async_trait;
use porter_error::{GatewayError, GatewayErrorKind, GatewayResult};
use porter_gateway::{
    ChannelHandle, ChannelId, ChannelKind, EmbedContent, Gateway, MessageId, MessageRef,
    MessageTarget, OutboundContent, UserId,
};
use serenity::builder::{
    CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, EditChannel, EditMessage,
};
use serenity::http::Http;
use serenity::model::channel::{ChannelType, GuildChannel, ReactionType};
use serenity::model::id::{
    ChannelId as DiscordChannelId, GuildId, MessageId as DiscordMessageId,
    UserId as DiscordUserId,
};
use std::sync::Arc;
use tracing::debug;

/// [`Gateway`] implementation over serenity's HTTP client, scoped to one
/// guild.
pub struct SerenityGateway {
    http: Arc<Http>,
    guild: GuildId,
}

impl SerenityGateway {
    /// Create a gateway for the given guild.
    pub fn new(http: Arc<Http>, guild_id: u64) -> Self {
        Self {
            http,
            guild: GuildId::new(guild_id),
        }
    }

    /// Map a serenity error onto the gateway error taxonomy, so the core can
    /// tell a vanished target from a transport failure.
    fn map_err(what: &str, err: serenity::Error) -> GatewayError {
        if let serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(ref resp)) =
            err
        {
            match resp.status_code.as_u16() {
                404 => {
                    return GatewayError::new(GatewayErrorKind::NotFound(format!(
                        "{what}: {}",
                        resp.error.message
                    )));
                }
                403 => {
                    return GatewayError::new(GatewayErrorKind::Forbidden(format!(
                        "{what}: {}",
                        resp.error.message
                    )));
                }
                401 => return GatewayError::new(GatewayErrorKind::InvalidToken),
                _ => {}
            }
        }
        GatewayError::new(GatewayErrorKind::Transport(format!("{what}: {err}")))
    }

    fn build_embed(embed: &EmbedContent) -> CreateEmbed {
        let mut author = CreateEmbedAuthor::new(embed.author_name());
        if let Some(icon) = embed.icon_url() {
            author = author.icon_url(icon);
        }
        let mut builder = CreateEmbed::new()
            .author(author)
            .description(embed.description());
        if let Some(footer) = embed.footer() {
            builder = builder.footer(CreateEmbedFooter::new(footer));
        }
        if let Some(colour) = embed.colour() {
            builder = builder.colour(*colour);
        }
        builder
    }

    /// Resolve a delivery target to a concrete channel, opening the DM
    /// conversation when the target is a user.
    async fn resolve_target(&self, target: MessageTarget) -> GatewayResult<DiscordChannelId> {
        match target {
            MessageTarget::Channel(channel) => Ok(DiscordChannelId::new(channel.get())),
            MessageTarget::User(user) => {
                let dm = DiscordUserId::new(user.get())
                    .create_dm_channel(&*self.http)
                    .await
                    .map_err(|e| Self::map_err("open dm channel", e))?;
                Ok(dm.id)
            }
        }
    }

}

/// Convert a serenity guild channel into the adapter-neutral handle.
pub(super) fn channel_handle(channel: &GuildChannel) -> ChannelHandle {
    let kind = match channel.kind {
        ChannelType::Text => ChannelKind::Text,
        ChannelType::Voice => ChannelKind::Voice,
        ChannelType::Category => ChannelKind::Category,
        _ => ChannelKind::Other,
    };
    ChannelHandle::new(ChannelId::new(channel.id.get()), channel.name.clone(), kind)
}

#[async_trait]
impl Gateway for SerenityGateway {
    async fn send_message(
        &self,
        target: MessageTarget,
        content: OutboundContent,
    ) -> GatewayResult<MessageRef> {
        let channel = self.resolve_target(target).await?;
        let builder = match &content {
            OutboundContent::Text(text) => CreateMessage::new().content(text),
            OutboundContent::Embed(embed) => CreateMessage::new().embed(Self::build_embed(embed)),
        };
        let message = channel
            .send_message(&*self.http, builder)
            .await
            .map_err(|e| Self::map_err("send message", e))?;
        debug!(channel = %channel, message = %message.id, "Message sent");
        Ok(MessageRef::new(
            ChannelId::new(channel.get()),
            MessageId::new(message.id.get()),
        ))
    }

    async fn edit_message(
        &self,
        message: MessageRef,
        content: OutboundContent,
    ) -> GatewayResult<()> {
        let builder = match &content {
            OutboundContent::Text(text) => EditMessage::new().content(text),
            OutboundContent::Embed(embed) => EditMessage::new().embed(Self::build_embed(embed)),
        };
        DiscordChannelId::new(message.channel().get())
            .edit_message(
                &*self.http,
                DiscordMessageId::new(message.message().get()),
                builder,
            )
            .await
            .map_err(|e| Self::map_err("edit message", e))?;
        Ok(())
    }

    async fn delete_message(&self, message: MessageRef) -> GatewayResult<()> {
        DiscordChannelId::new(message.channel().get())
            .delete_message(&*self.http, DiscordMessageId::new(message.message().get()))
            .await
            .map_err(|e| Self::map_err("delete message", e))
    }

    async fn add_reaction(&self, message: MessageRef, emoji: &str) -> GatewayResult<()> {
        self.http
            .create_reaction(
                DiscordChannelId::new(message.channel().get()),
                DiscordMessageId::new(message.message().get()),
                &ReactionType::Unicode(emoji.to_owned()),
            )
            .await
            .map_err(|e| Self::map_err("add reaction", e))
    }

    async fn remove_reaction(
        &self,
        message: MessageRef,
        emoji: &str,
        user: UserId,
    ) -> GatewayResult<()> {
        self.http
            .delete_reaction(
                DiscordChannelId::new(message.channel().get()),
                DiscordMessageId::new(message.message().get()),
                DiscordUserId::new(user.get()),
                &ReactionType::Unicode(emoji.to_owned()),
            )
            .await
            .map_err(|e| Self::map_err("remove reaction", e))
    }

    async fn rename_channel(&self, channel: ChannelId, name: &str) -> GatewayResult<()> {
        DiscordChannelId::new(channel.get())
            .edit(&*self.http, EditChannel::new().name(name))
            .await
            .map_err(|e| Self::map_err("rename channel", e))?;
        Ok(())
    }

    async fn delete_channel(&self, channel: ChannelId) -> GatewayResult<()> {
        DiscordChannelId::new(channel.get())
            .delete(&*self.http)
            .await
            .map_err(|e| Self::map_err("delete channel", e))?;
        Ok(())
    }

    async fn all_channels(&self) -> GatewayResult<Vec<ChannelHandle>> {
        let channels = self
            .http
            .get_channels(self.guild)
            .await
            .map_err(|e| Self::map_err("list channels", e))?;
        Ok(channels.iter().map(channel_handle).collect())
    }
}
