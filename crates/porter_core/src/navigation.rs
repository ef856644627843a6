//! Reaction-driven page navigation actions.

use strum::EnumIter;

/// One of the five recognized page-navigation actions.
///
/// The variants iterate in display order, which is also the order the
/// reaction icons are attached to a session message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, derive_more::Display)]
pub enum NavigationAction {
    /// Jump to the first page (no-op when already first).
    First,
    /// Jump to the previous page (no-op when already first).
    Previous,
    /// Jump to the next page (no-op when already last).
    Next,
    /// Jump to the last page (no-op when already last).
    Last,
    /// Request session termination.
    Stop,
}

impl NavigationAction {
    /// The reaction emoji representing this action.
    pub const fn emoji(self) -> &'static str {
        match self {
            NavigationAction::First => "\u{23ee}",
            NavigationAction::Previous => "\u{2b05}",
            NavigationAction::Next => "\u{27a1}",
            NavigationAction::Last => "\u{23ed}",
            NavigationAction::Stop => "\u{1f5d1}",
        }
    }

    /// Look up the action bound to a reaction emoji, if any.
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            "\u{23ee}" => Some(NavigationAction::First),
            "\u{2b05}" => Some(NavigationAction::Previous),
            "\u{27a1}" => Some(NavigationAction::Next),
            "\u{23ed}" => Some(NavigationAction::Last),
            "\u{1f5d1}" => Some(NavigationAction::Stop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn emoji_round_trip() {
        for action in NavigationAction::iter() {
            assert_eq!(NavigationAction::from_emoji(action.emoji()), Some(action));
        }
    }

    #[test]
    fn unknown_emoji_is_none() {
        assert_eq!(NavigationAction::from_emoji("\u{1f600}"), None);
        assert_eq!(NavigationAction::from_emoji(""), None);
    }

    #[test]
    fn display_order() {
        let order: Vec<NavigationAction> = NavigationAction::iter().collect();
        assert_eq!(order[0], NavigationAction::First);
        assert_eq!(order[4], NavigationAction::Stop);
    }
}
