//! Session registration, event routing and the inactivity timer.

use crate::{Session, SessionContent, SessionPhase};
use derive_getters::Getters;
use parking_lot::Mutex;
use porter_core::{NavigationAction, PageLimits};
use porter_error::SessionResult;
use porter_gateway::{Gateway, MessageId, MessageRef, MessageTarget, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, instrument, warn};

/// Tunables shared by every session the manager starts.
#[derive(Debug, Clone, Getters)]
pub struct SessionConfig {
    /// Inactivity window after the last qualifying interaction.
    timeout: Duration,
    /// Page limits handed to the content builder.
    limits: PageLimits,
}

impl SessionConfig {
    /// Create a config with an explicit timeout and page limits.
    pub fn new(timeout: Duration, limits: PageLimits) -> Self {
        Self { timeout, limits }
    }
}

impl Default for SessionConfig {
    /// One minute of inactivity, eight content lines per page.
    fn default() -> Self {
        Self::new(Duration::from_secs(60), PageLimits::with_max_lines(2048, 8))
    }
}

/// Owns every live session, keyed by the session's message id.
///
/// Map membership is the event subscription: a reaction or deletion event for
/// a message id not in the map is simply not session traffic. The map is
/// guarded by a synchronous lock that is never held across an await; each
/// session has its own async lock for the navigation paths that do suspend.
pub struct SessionManager {
    gateway: Arc<dyn Gateway>,
    config: SessionConfig,
    sessions: Mutex<HashMap<MessageId, Arc<AsyncMutex<Session>>>>,
}

impl SessionManager {
    /// Create a manager sending through the given gateway.
    pub fn new(gateway: Arc<dyn Gateway>, config: SessionConfig) -> Self {
        Self {
            gateway,
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The configured tunables.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Current page index of a live session, for introspection.
    pub async fn current_page(&self, message: MessageId) -> Option<usize> {
        let session = self.sessions.lock().get(&message).cloned()?;
        let guard = session.lock().await;
        Some(guard.current_page())
    }

    /// Begin a session: build pages, render the first page, register for
    /// events, attach reactions and arm the inactivity timer.
    ///
    /// Returns the reference of the rendered message.
    #[instrument(skip(self, content), fields(author = %author))]
    pub async fn start(
        self: &Arc<Self>,
        content: &dyn SessionContent,
        author: UserId,
        destination: MessageTarget,
    ) -> SessionResult<MessageRef> {
        let pages = content.build_pages(self.config.limits()).await?;
        info!(pages = pages.len(), "Starting session");

        let mut session = Session::new(
            author,
            destination,
            content.title(),
            content.icon_url(),
            pages,
        );

        let message = self
            .gateway
            .send_message(destination, session.render().into())
            .await?;
        session.message = Some(message);
        session.phase = SessionPhase::Active;

        let key = *message.message();
        let page_count = session.page_count();
        self.arm_timer(&mut session, key);
        self.sessions
            .lock()
            .insert(key, Arc::new(AsyncMutex::new(session)));

        // Navigation icons only make sense with something to navigate.
        if page_count > 1 {
            for action in NavigationAction::iter() {
                self.attach_reaction(message, action).await;
            }
        } else {
            self.attach_reaction(message, NavigationAction::Stop).await;
        }

        Ok(message)
    }

    /// Route a reaction-added event.
    ///
    /// Events for unknown messages, foreign users or unmapped emoji are
    /// ignored without a timer reset. A qualifying event resets the timer,
    /// applies exactly one navigation action, re-renders in place when the
    /// page changed, and removes the triggering reaction for re-use.
    #[instrument(skip(self), fields(message = %message.message(), user = %user, emoji))]
    pub async fn handle_reaction(
        self: &Arc<Self>,
        message: MessageRef,
        user: UserId,
        emoji: &str,
    ) -> SessionResult<()> {
        let Some(session) = self.sessions.lock().get(message.message()).cloned() else {
            return Ok(());
        };
        let mut guard = session.lock().await;
        if guard.phase() != SessionPhase::Active {
            return Ok(());
        }
        if guard.author() != user {
            debug!("Ignoring reaction from non-owner");
            return Ok(());
        }
        let Some(action) = NavigationAction::from_emoji(emoji) else {
            debug!("Ignoring unmapped reaction");
            return Ok(());
        };

        let key = *message.message();
        self.arm_timer(&mut guard, key);

        if action == NavigationAction::Stop {
            info!("Session stopped by owner");
            self.stop_locked(&mut guard, key).await;
            return Ok(());
        }

        let target = guard.navigation_target(action);
        if target != guard.current_page() {
            guard.current_page = target;
            let render = guard.render();
            self.gateway.edit_message(message, render.into()).await?;
        }

        // Put the icon back so the owner can press it again.
        if let Err(e) = self.gateway.remove_reaction(message, emoji, user).await {
            debug!(error = %e, "Could not remove triggering reaction");
        }
        Ok(())
    }

    /// Route a message-deleted event: the session's message disappearing
    /// externally stops the session.
    #[instrument(skip(self), fields(message = %message))]
    pub async fn handle_message_delete(self: &Arc<Self>, message: MessageId) {
        let Some(session) = self.sessions.lock().get(&message).cloned() else {
            return;
        };
        let mut guard = session.lock().await;
        if guard.phase() != SessionPhase::Active {
            return;
        }
        info!("Session message deleted externally, stopping");
        self.stop_locked(&mut guard, message).await;
    }

    /// Inactivity timer expiry; ignored when the epoch is stale (the timer
    /// was re-armed after this task was spawned) or the session already
    /// stopped.
    async fn expire(self: &Arc<Self>, key: MessageId, epoch: u64) {
        let Some(session) = self.sessions.lock().get(&key).cloned() else {
            return;
        };
        let mut guard = session.lock().await;
        if guard.timer_epoch != epoch || guard.phase() != SessionPhase::Active {
            return;
        }
        info!(message = %key, "Session timed out");
        self.stop_locked(&mut guard, key).await;
    }

    /// Cancel and re-arm the inactivity timer.
    fn arm_timer(self: &Arc<Self>, session: &mut Session, key: MessageId) {
        if let Some(handle) = session.timer.take() {
            handle.abort();
        }
        session.timer_epoch += 1;
        let epoch = session.timer_epoch;
        let timeout = *self.config.timeout();
        let manager = Arc::downgrade(self);
        session.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if let Some(manager) = manager.upgrade() {
                manager.expire(key, epoch).await;
            }
        }));
    }

    /// Terminal transition: deregister, cancel the timer and attempt message
    /// removal. Removal failures are expected here (the message may already
    /// be gone) and never propagate.
    async fn stop_locked(&self, session: &mut Session, key: MessageId) {
        session.phase = SessionPhase::Stopped;
        if let Some(handle) = session.timer.take() {
            handle.abort();
        }
        self.sessions.lock().remove(&key);

        if let Some(message) = session.message {
            if let Err(e) = self.gateway.delete_message(message).await {
                if e.is_gone() {
                    debug!(error = %e, "Session message already gone");
                } else {
                    warn!(error = %e, "Failed to remove session message");
                }
            }
        }
    }

    async fn attach_reaction(&self, message: MessageRef, action: NavigationAction) {
        if let Err(e) = self.gateway.add_reaction(message, action.emoji()).await {
            warn!(error = %e, ?action, "Failed to attach navigation reaction");
        }
    }
}
