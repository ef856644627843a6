//! Guild channel handles.

use crate::ChannelId;
use derive_getters::Getters;
use derive_new::new;

/// The kind of a guild channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChannelKind {
    /// A text channel.
    Text,
    /// A voice channel.
    Voice,
    /// A structural container grouping other channels. Never tracked by the
    /// channel registry.
    Category,
    /// Anything else the platform may grow.
    Other,
}

/// Identity plus mutable display state of one guild channel.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct ChannelHandle {
    /// Stable channel identity.
    id: ChannelId,
    /// Current display name; the registry key.
    name: String,
    /// Channel kind.
    kind: ChannelKind,
}

impl ChannelHandle {
    /// Whether this handle is a structural container rather than a channel.
    pub fn is_category(&self) -> bool {
        *self.kind() == ChannelKind::Category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_detection() {
        let channel = ChannelHandle::new(ChannelId::new(1), "events".into(), ChannelKind::Category);
        assert!(channel.is_category());
        let channel = ChannelHandle::new(ChannelId::new(2), "chat".into(), ChannelKind::Text);
        assert!(!channel.is_category());
    }
}
