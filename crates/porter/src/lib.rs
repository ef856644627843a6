//! Community concierge bot: member applications, informational content and
//! interactive paginated help/character-lookup sessions over the Discord
//! gateway.
//!
//! The crate glues the engine crates together:
//! - [`Porter`] owns the shared state and dispatches [`GatewayEvent`]s from
//!   the platform adapter into the session engine, the channel registry and
//!   the command router
//! - [`Router`] maps prefix commands onto the feature set (help, info,
//!   character, apply, version)
//! - the `discord` module adapts serenity to the [`porter_gateway`] contract
//!
//! [`GatewayEvent`]: porter_gateway::GatewayEvent

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod config;
mod discord;
mod dispatch;
mod features;
mod router;
mod state;

pub use cli::{Cli, Commands};
pub use config::PorterConfig;
pub use discord::{PorterBot, PorterHandler, SerenityGateway};
pub use dispatch::Porter;
pub use router::{CommandContext, CommandHandler, CommandSpec, Router};
pub use state::PorterState;
