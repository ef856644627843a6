//! Chat platform adapter contract for the Porter community bot.
//!
//! The core never talks to a chat platform directly. Inbound traffic arrives
//! as [`GatewayEvent`] values; outbound requests go through the [`Gateway`]
//! trait. The production implementation wraps serenity's HTTP client in the
//! `porter` facade crate; tests use the [`mock::MockGateway`] recorder.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod event;
mod gateway;
mod id;
mod message;
#[cfg(feature = "mock")]
pub mod mock;

pub use channel::{ChannelHandle, ChannelKind};
pub use event::GatewayEvent;
pub use gateway::Gateway;
pub use id::{ChannelId, MessageId, UserId};
pub use message::{EmbedContent, MessageRef, MessageTarget, OutboundContent};
