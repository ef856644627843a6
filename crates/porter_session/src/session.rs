//! State of one live interactive message.

use porter_core::{NavigationAction, Page};
use porter_gateway::{EmbedContent, MessageRef, MessageTarget, UserId};
use tokio::task::JoinHandle;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, pages not yet rendered.
    Unprepared,
    /// Rendered and responding to reactions.
    Active,
    /// Terminal; a stopped session is never reused.
    Stopped,
}

/// One live interactive message shown to exactly one user.
///
/// The session owns the navigation state and the inactivity timer; the
/// platform owns the underlying message. `current_page` stays within
/// `[0, pages.len() - 1]` for every sequence of navigation actions.
#[derive(Debug)]
pub struct Session {
    pub(crate) author: UserId,
    pub(crate) destination: MessageTarget,
    pub(crate) title: String,
    pub(crate) icon_url: Option<String>,
    pub(crate) pages: Vec<Page>,
    pub(crate) current_page: usize,
    pub(crate) phase: SessionPhase,
    pub(crate) message: Option<MessageRef>,
    pub(crate) timer_epoch: u64,
    pub(crate) timer: Option<JoinHandle<()>>,
}

impl Session {
    pub(crate) fn new(
        author: UserId,
        destination: MessageTarget,
        title: String,
        icon_url: Option<String>,
        pages: Vec<Page>,
    ) -> Self {
        debug_assert!(!pages.is_empty(), "a paginator always yields a page");
        Self {
            author,
            destination,
            title,
            icon_url,
            pages,
            current_page: 0,
            phase: SessionPhase::Unprepared,
            message: None,
            timer_epoch: 0,
            timer: None,
        }
    }

    /// The user who owns this session.
    pub fn author(&self) -> UserId {
        self.author
    }

    /// Current page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the first page is showing.
    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    /// Whether the last page is showing.
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.pages.len() - 1
    }

    /// The page index a navigation action would land on.
    ///
    /// Navigation never wraps: `Previous` on the first page and `Next` on the
    /// last page return the current index.
    pub(crate) fn navigation_target(&self, action: NavigationAction) -> usize {
        match action {
            NavigationAction::First => 0,
            NavigationAction::Previous => self.current_page.saturating_sub(1),
            NavigationAction::Next => (self.current_page + 1).min(self.pages.len() - 1),
            NavigationAction::Last => self.pages.len() - 1,
            NavigationAction::Stop => self.current_page,
        }
    }

    /// Render the current page as an embed.
    ///
    /// The page counter footer only appears when there is something to
    /// navigate.
    pub(crate) fn render(&self) -> EmbedContent {
        let footer = (self.pages.len() > 1)
            .then(|| format!("Page {} / {}", self.current_page + 1, self.pages.len()));
        EmbedContent::new(
            self.title.clone(),
            self.icon_url.clone(),
            self.pages[self.current_page].text(),
            footer,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use porter_gateway::ChannelId;

    fn session(pages: usize) -> Session {
        Session::new(
            UserId::new(7),
            MessageTarget::Channel(ChannelId::new(1)),
            "Help".into(),
            None,
            (0..pages).map(|i| Page::from_lines([format!("page {i}")])).collect(),
        )
    }

    #[test]
    fn next_never_exceeds_last() {
        let mut s = session(3);
        for _ in 0..10 {
            s.current_page = s.navigation_target(NavigationAction::Next);
        }
        assert_eq!(s.current_page, 2);
    }

    #[test]
    fn previous_never_underflows() {
        let mut s = session(3);
        for _ in 0..10 {
            s.current_page = s.navigation_target(NavigationAction::Previous);
        }
        assert_eq!(s.current_page, 0);
    }

    #[test]
    fn first_and_last_jump() {
        let mut s = session(5);
        s.current_page = 3;
        assert_eq!(s.navigation_target(NavigationAction::First), 0);
        assert_eq!(s.navigation_target(NavigationAction::Last), 4);
    }

    #[test]
    fn footer_only_when_paginating() {
        let s = session(1);
        assert_eq!(s.render().footer(), &None);
        let s = session(2);
        assert_eq!(s.render().footer(), &Some("Page 1 / 2".to_owned()));
    }
}
