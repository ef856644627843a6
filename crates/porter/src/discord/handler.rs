//! Serenity event handler translating gateway traffic into core events.

use crate::Porter;
use porter_gateway::{ChannelId, GatewayEvent, MessageId, MessageRef, UserId};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::{GuildChannel, Message, Reaction};
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::guild::Member;
use serenity::model::id::{
    ChannelId as DiscordChannelId, GuildId, MessageId as DiscordMessageId,
};
use std::sync::Arc;
use tracing::info;

use super::adapter::channel_handle;

/// Event handler for the Porter Discord bot.
///
/// Filters traffic down to the configured guild (plus DMs) and hands
/// structured events to [`Porter::dispatch`].
pub struct PorterHandler {
    porter: Arc<Porter>,
    guild: GuildId,
}

impl PorterHandler {
    /// Create a handler feeding the given core.
    pub fn new(porter: Arc<Porter>, guild_id: u64) -> Self {
        Self {
            porter,
            guild: GuildId::new(guild_id),
        }
    }

    /// Gateway intents the bot subscribes to.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::GUILD_MESSAGE_REACTIONS
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::DIRECT_MESSAGE_REACTIONS
            | GatewayIntents::MESSAGE_CONTENT
    }

    fn our_guild(&self, guild_id: GuildId) -> bool {
        guild_id == self.guild
    }
}

#[async_trait]
impl EventHandler for PorterHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Logged in");
        self.porter.dispatch(GatewayEvent::Ready).await;
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if let Some(guild_id) = msg.guild_id {
            if !self.our_guild(guild_id) {
                return;
            }
        }
        let event = GatewayEvent::MessageReceived {
            author: UserId::new(msg.author.id.get()),
            author_name: msg.author.display_name().to_string(),
            channel: ChannelId::new(msg.channel_id.get()),
            content: msg.content.clone(),
            private: msg.guild_id.is_none(),
        };
        self.porter.dispatch(event).await;
    }

    async fn reaction_add(&self, _ctx: Context, reaction: Reaction) {
        let Some(user) = reaction.user_id else {
            return;
        };
        let event = GatewayEvent::ReactionAdded {
            message: MessageRef::new(
                ChannelId::new(reaction.channel_id.get()),
                MessageId::new(reaction.message_id.get()),
            ),
            user: UserId::new(user.get()),
            emoji: reaction.emoji.to_string(),
        };
        self.porter.dispatch(event).await;
    }

    async fn message_delete(
        &self,
        _ctx: Context,
        _channel_id: DiscordChannelId,
        deleted_message_id: DiscordMessageId,
        _guild_id: Option<GuildId>,
    ) {
        let event = GatewayEvent::MessageDeleted {
            message: MessageId::new(deleted_message_id.get()),
        };
        self.porter.dispatch(event).await;
    }

    async fn channel_create(&self, _ctx: Context, channel: GuildChannel) {
        if !self.our_guild(channel.guild_id) {
            return;
        }
        let event = GatewayEvent::ChannelCreated {
            channel: channel_handle(&channel),
        };
        self.porter.dispatch(event).await;
    }

    async fn channel_delete(
        &self,
        _ctx: Context,
        channel: GuildChannel,
        _messages: Option<Vec<Message>>,
    ) {
        if !self.our_guild(channel.guild_id) {
            return;
        }
        let event = GatewayEvent::ChannelDeleted {
            channel: channel_handle(&channel),
        };
        self.porter.dispatch(event).await;
    }

    async fn channel_update(&self, _ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        if !self.our_guild(new.guild_id) {
            return;
        }
        let event = GatewayEvent::ChannelUpdated {
            old: old.as_ref().map(channel_handle),
            new: channel_handle(&new),
        };
        self.porter.dispatch(event).await;
    }

    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        if !self.our_guild(new_member.guild_id) {
            return;
        }
        let event = GatewayEvent::MemberJoined {
            user: UserId::new(new_member.user.id.get()),
            display_name: new_member.display_name().to_string(),
        };
        self.porter.dispatch(event).await;
    }
}
