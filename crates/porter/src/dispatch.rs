//! Top-level event dispatch.

use crate::{PorterConfig, PorterState, Router, features};
use porter_core::Catalog;
use porter_error::PorterResult;
use porter_gateway::{Gateway, GatewayEvent};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// The assembled bot core: shared state plus the command router.
///
/// The platform adapter feeds [`GatewayEvent`]s into [`Porter::dispatch`];
/// everything downstream of that call is platform-independent. Dispatch
/// never returns an error — it is the top-level handler, so it logs whatever
/// bubbles up.
pub struct Porter {
    state: Arc<PorterState>,
    router: Arc<Router>,
}

impl Porter {
    /// Assemble the bot: load the catalog, wire the state and register the
    /// feature list.
    pub fn new(gateway: Arc<dyn Gateway>, config: PorterConfig) -> PorterResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin()?,
        };
        let prefix = config.prefix.clone();
        let state = Arc::new(PorterState::new(gateway, config, catalog));
        let mut router = Router::new(prefix);
        features::register_all(&mut router);
        info!(commands = router.commands_sorted().len(), "Porter core assembled");
        Ok(Self {
            state,
            router: Arc::new(router),
        })
    }

    /// The shared state.
    pub fn state(&self) -> &Arc<PorterState> {
        &self.state
    }

    /// The command router.
    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// Route one inbound event to the session engine, the channel registry
    /// or the command router.
    #[instrument(skip(self, event))]
    pub async fn dispatch(&self, event: GatewayEvent) {
        match event {
            GatewayEvent::Ready => {
                info!("Gateway ready, discovering channels");
                if let Err(e) = self.state.registry().populate().await {
                    error!(error = %e, "Channel discovery failed");
                }
            }
            GatewayEvent::MessageReceived {
                author,
                author_name,
                channel,
                content,
                private,
            } => {
                if self.router.resolves(&content) {
                    if let Err(e) = self
                        .router
                        .dispatch(&self.state, author, &author_name, channel, private, &content)
                        .await
                    {
                        error!(error = %e, "Command failed");
                    }
                } else if private {
                    if let Err(e) =
                        features::apply::handle_direct_message(&self.state, author, &author_name, &content)
                            .await
                    {
                        error!(error = %e, "Application answer handling failed");
                    }
                }
            }
            GatewayEvent::ReactionAdded {
                message,
                user,
                emoji,
            } => {
                if let Err(e) = self
                    .state
                    .sessions()
                    .handle_reaction(message, user, &emoji)
                    .await
                {
                    error!(error = %e, "Session reaction handling failed");
                }
            }
            GatewayEvent::MessageDeleted { message } => {
                self.state.sessions().handle_message_delete(message).await;
            }
            GatewayEvent::ChannelCreated { channel } => {
                if let Err(e) = self.state.registry().handle_created(channel).await {
                    error!(error = %e, "Channel create handling failed");
                }
            }
            GatewayEvent::ChannelDeleted { channel } => {
                self.state.registry().handle_deleted(&channel).await;
            }
            GatewayEvent::ChannelUpdated { old, new } => {
                if let Err(e) = self.state.registry().handle_updated(old.as_ref(), new).await {
                    error!(error = %e, "Channel update handling failed");
                }
            }
            GatewayEvent::MemberJoined { display_name, .. } => {
                if let Err(e) = features::info::welcome(&self.state, &display_name).await {
                    error!(error = %e, "Welcome greeting failed");
                }
            }
        }
    }
}
