//! Discord client setup and lifecycle.

use super::{PorterHandler, SerenityGateway};
use crate::{Porter, PorterConfig};
use porter_error::{GatewayError, GatewayErrorKind, PorterResult};
use serenity::Client;
use serenity::http::Http;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main Discord client for the Porter bot.
///
/// # Example
/// ```no_run
/// use porter::{PorterBot, PorterConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = PorterConfig::from_file("porter.toml")?;
///     let token = PorterConfig::token()?;
///
///     let mut bot = PorterBot::new(token, config).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct PorterBot {
    client: Client,
}

impl PorterBot {
    /// Build the client: assemble the core around a serenity-backed gateway
    /// and register the event handler.
    #[instrument(skip(token, config), fields(guild_id = config.guild_id))]
    pub async fn new(token: String, config: PorterConfig) -> PorterResult<Self> {
        info!("Initializing Porter Discord bot");

        let http = Arc::new(Http::new(&token));
        let gateway = Arc::new(SerenityGateway::new(http, config.guild_id));
        let guild_id = config.guild_id;
        let porter = Arc::new(Porter::new(gateway, config)?);
        let handler = PorterHandler::new(porter, guild_id);

        let client = Client::builder(&token, PorterHandler::intents())
            .event_handler(handler)
            .await
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::Transport(format!(
                    "failed to build client: {e}"
                )))
            })?;

        info!("Serenity client built");
        Ok(Self { client })
    }

    /// Run the bot until the process is stopped or the connection dies.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> PorterResult<()> {
        info!("Starting Discord bot");
        self.client.start().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::Transport(format!("client error: {e}")))
        })?;
        Ok(())
    }
}
