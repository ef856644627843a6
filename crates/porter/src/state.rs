//! Shared state wired through every feature.

use parking_lot::Mutex;
use porter_core::{Catalog, MemberApplication, PageLimits, Question};
use porter_error::GatewayResult;
use porter_gateway::{EmbedContent, Gateway, MessageTarget, UserId};
use porter_registry::ChannelRegistry;
use porter_session::{SessionConfig, SessionManager};
use std::collections::HashMap;
use std::sync::Arc;

use crate::PorterConfig;

/// Everything the features share: the gateway, the catalog, the session
/// manager, the channel registry and the per-user application map.
pub struct PorterState {
    gateway: Arc<dyn Gateway>,
    config: PorterConfig,
    catalog: Arc<Catalog>,
    sessions: Arc<SessionManager>,
    registry: Arc<ChannelRegistry>,
    applications: Mutex<HashMap<UserId, MemberApplication>>,
    questions: Arc<[Question]>,
}

impl PorterState {
    /// Wire up the state from its parts.
    pub fn new(gateway: Arc<dyn Gateway>, config: PorterConfig, catalog: Catalog) -> Self {
        let limits = PageLimits::with_max_lines(config.max_page_size, config.max_help_lines);
        let sessions = Arc::new(SessionManager::new(
            gateway.clone(),
            SessionConfig::new(config.session_timeout(), limits),
        ));
        let registry = Arc::new(ChannelRegistry::new(
            gateway.clone(),
            config.report_channel.clone(),
        ));
        let questions: Arc<[Question]> = Arc::from(catalog.apply.questions.clone());
        Self {
            gateway,
            config,
            catalog: Arc::new(catalog),
            sessions,
            registry,
            applications: Mutex::new(HashMap::new()),
            questions,
        }
    }

    /// The platform adapter.
    pub fn gateway(&self) -> &Arc<dyn Gateway> {
        &self.gateway
    }

    /// The loaded configuration.
    pub fn config(&self) -> &PorterConfig {
        &self.config
    }

    /// The loaded string catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session manager.
    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    /// The channel registry.
    pub fn registry(&self) -> &Arc<ChannelRegistry> {
        &self.registry
    }

    /// The per-user application map. The lock is synchronous; never hold it
    /// across an await.
    pub fn applications(&self) -> &Mutex<HashMap<UserId, MemberApplication>> {
        &self.applications
    }

    /// The questionnaire shared by every application.
    pub fn questions(&self) -> Arc<[Question]> {
        self.questions.clone()
    }

    /// Send a plain-text direct message.
    pub async fn dm(&self, user: UserId, text: impl Into<String>) -> GatewayResult<()> {
        self.gateway
            .send_message(MessageTarget::User(user), text.into().into())
            .await
            .map(|_| ())
    }

    /// Send a red error card, the visible-error shape shared by the help and
    /// character features.
    pub async fn send_error(&self, target: MessageTarget, title: impl Into<String>) -> GatewayResult<()> {
        self.gateway
            .send_message(target, EmbedContent::error(title).into())
            .await
            .map(|_| ())
    }
}
