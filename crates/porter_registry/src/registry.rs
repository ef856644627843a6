//! The channel registry and its conflict resolution.

use parking_lot::Mutex;
use porter_error::GatewayResult;
use porter_gateway::{ChannelHandle, ChannelId, Gateway, MessageTarget};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Default)]
struct Inner {
    channels: HashMap<String, ChannelHandle>,
    /// Channels undergoing self-initiated correction; events for these ids
    /// are our own corrections coming back, not external changes.
    pending: HashSet<ChannelId>,
}

/// Name-keyed directory of one guild's channels.
///
/// Mutated only by its own event handlers; commands read through
/// [`ChannelRegistry::get`]. Structural container categories never enter the
/// map. Events for a single channel arrive in causal order, but events for
/// different channels may interleave arbitrarily.
pub struct ChannelRegistry {
    gateway: Arc<dyn Gateway>,
    report_channel: String,
    inner: Mutex<Inner>,
}

impl ChannelRegistry {
    /// Create an empty registry that posts clash notices to the channel with
    /// the given name.
    pub fn new(gateway: Arc<dyn Gateway>, report_channel: impl Into<String>) -> Self {
        Self {
            gateway,
            report_channel: report_channel.into(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Look up a channel by name.
    pub fn get(&self, name: &str) -> Option<ChannelHandle> {
        self.inner.lock().channels.get(name).cloned()
    }

    /// Number of tracked channels.
    pub fn len(&self) -> usize {
        self.inner.lock().channels.len()
    }

    /// Whether no channel is tracked.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().channels.is_empty()
    }

    /// Number of in-flight self-initiated corrections.
    pub fn pending_corrections(&self) -> usize {
        self.inner.lock().pending.len()
    }

    /// Rebuild the map from a full enumeration of the guild's channels,
    /// skipping structural container categories.
    #[instrument(skip(self))]
    pub async fn populate(&self) -> GatewayResult<()> {
        let channels = self.gateway.all_channels().await?;
        let mut map = HashMap::new();
        for channel in channels {
            if channel.is_category() {
                continue;
            }
            if let Some(previous) = map.insert(channel.name().clone(), channel) {
                warn!(name = %previous.name(), "Duplicate channel name during discovery");
            }
        }
        let tracked = map.len();
        self.inner.lock().channels = map;
        info!(tracked, "Discovered guild channels");
        Ok(())
    }

    /// A channel was created.
    ///
    /// A name clash means the newcomer is rejected outright: a notice goes to
    /// the reporting channel, the newcomer is marked in the exclusion set and
    /// deleted, and no entry is added for it.
    #[instrument(skip(self, channel), fields(name = %channel.name(), id = %channel.id()))]
    pub async fn handle_created(&self, channel: ChannelHandle) -> GatewayResult<()> {
        if channel.is_category() {
            return Ok(());
        }

        let clash = {
            let mut inner = self.inner.lock();
            match inner.channels.get(channel.name()) {
                Some(existing) if existing.id() != channel.id() => {
                    inner.pending.insert(*channel.id());
                    true
                }
                _ => {
                    inner
                        .channels
                        .insert(channel.name().clone(), channel.clone());
                    false
                }
            }
        };

        if clash {
            warn!("Created channel clashes with an existing name, deleting it");
            self.notify(format!(
                "Channel name clash: \"{}\" already exists, removing the new channel.",
                channel.name()
            ))
            .await;
            self.gateway.delete_channel(*channel.id()).await?;
        } else {
            debug!("Tracking new channel");
        }
        Ok(())
    }

    /// A channel was deleted.
    ///
    /// Deletions the registry itself requested only drain the exclusion set;
    /// the name slot was never theirs. External deletions drop the entry.
    #[instrument(skip(self, channel), fields(name = %channel.name(), id = %channel.id()))]
    pub async fn handle_deleted(&self, channel: &ChannelHandle) {
        let mut inner = self.inner.lock();
        if inner.pending.remove(channel.id()) {
            debug!("Self-initiated deletion confirmed");
            return;
        }
        let key = inner
            .channels
            .iter()
            .find(|(_, tracked)| tracked.id() == channel.id())
            .map(|(name, _)| name.clone());
        if let Some(key) = key {
            inner.channels.remove(&key);
            info!("Channel removed from registry");
        }
    }

    /// A channel changed.
    ///
    /// Same name: refresh the handle. Renamed to a free name: move the
    /// entry. Renamed onto an occupied name: notify, mark pending revert and
    /// request a rename back to the old name; until the reverting event
    /// arrives the entry stays under the old name pointing at the pre-revert
    /// handle.
    #[instrument(skip(self, old, new), fields(name = %new.name(), id = %new.id()))]
    pub async fn handle_updated(
        &self,
        old: Option<&ChannelHandle>,
        new: ChannelHandle,
    ) -> GatewayResult<()> {
        if new.is_category() {
            return Ok(());
        }
        let id = *new.id();

        enum Outcome {
            Done,
            Clash { old_name: String },
        }

        let outcome = {
            let mut inner = self.inner.lock();

            // Our own revert arriving; consume the marker and refresh.
            if inner.pending.remove(&id) {
                debug!("Self-initiated revert confirmed");
                inner.channels.retain(|_, tracked| *tracked.id() != id);
                inner.channels.insert(new.name().clone(), new.clone());
                return Ok(());
            }

            let old_name = old
                .map(|o| o.name().clone())
                .or_else(|| {
                    inner
                        .channels
                        .iter()
                        .find(|(_, tracked)| *tracked.id() == id)
                        .map(|(name, _)| name.clone())
                });

            match old_name {
                // First sight of this channel; track it like a creation.
                None => {
                    inner.channels.insert(new.name().clone(), new.clone());
                    Outcome::Done
                }
                Some(old_name) if old_name == *new.name() => {
                    inner.channels.insert(old_name, new.clone());
                    Outcome::Done
                }
                Some(old_name) => {
                    let occupied = inner
                        .channels
                        .get(new.name())
                        .is_some_and(|existing| *existing.id() != id);
                    if occupied {
                        // Keep the old key, remember the pre-revert handle.
                        inner.pending.insert(id);
                        inner.channels.insert(old_name.clone(), new.clone());
                        Outcome::Clash { old_name }
                    } else {
                        inner.channels.remove(&old_name);
                        inner.channels.insert(new.name().clone(), new.clone());
                        Outcome::Done
                    }
                }
            }
        };

        match outcome {
            Outcome::Done => Ok(()),
            Outcome::Clash { old_name } => {
                warn!(%old_name, "Rename clashes with an existing name, reverting");
                self.notify(format!(
                    "Channel name clash: \"{}\" is already taken, renaming \"{}\" back.",
                    new.name(),
                    old_name
                ))
                .await;
                self.gateway.rename_channel(id, &old_name).await
            }
        }
    }

    /// Post a clash notice to the reporting channel. Failures here must not
    /// derail the corrective action itself.
    async fn notify(&self, text: String) {
        let target = self
            .inner
            .lock()
            .channels
            .get(&self.report_channel)
            .map(|channel| *channel.id());
        match target {
            Some(id) => {
                if let Err(e) = self
                    .gateway
                    .send_message(MessageTarget::Channel(id), text.into())
                    .await
                {
                    warn!(error = %e, "Failed to deliver clash notice");
                }
            }
            None => warn!(
                report_channel = %self.report_channel,
                "Reporting channel is not tracked, dropping clash notice"
            ),
        }
    }
}
