//! Session engine behavior over a recording gateway.

use async_trait::async_trait;
use porter_core::{NavigationAction, Page, PageLimits, Paginator};
use porter_error::{GatewayErrorKind, SessionResult};
use porter_gateway::mock::{MockGateway, RecordedRequest};
use porter_gateway::{ChannelId, MessageTarget, OutboundContent, UserId};
use porter_session::{SessionConfig, SessionContent, SessionManager};
use std::sync::Arc;
use std::time::Duration;

const OWNER: UserId = UserId::new(7);
const OTHER: UserId = UserId::new(8);
const CHANNEL: ChannelId = ChannelId::new(100);

struct ListContent {
    entries: Vec<String>,
}

impl ListContent {
    fn with_entries(count: usize) -> Self {
        Self {
            entries: (0..count).map(|i| format!("entry {i}")).collect(),
        }
    }
}

#[async_trait]
impl SessionContent for ListContent {
    fn title(&self) -> String {
        "Test list".into()
    }

    async fn build_pages(&self, limits: &PageLimits) -> SessionResult<Vec<Page>> {
        let mut paginator = Paginator::new(limits.clone());
        for entry in &self.entries {
            paginator.add_line(entry, false)?;
        }
        Ok(paginator.into_pages())
    }
}

fn manager(gateway: &Arc<MockGateway>, timeout: Duration) -> Arc<SessionManager> {
    Arc::new(SessionManager::new(
        gateway.clone(),
        SessionConfig::new(timeout, PageLimits::with_max_lines(2048, 8)),
    ))
}

/// Let spawned timer tasks run.
async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

fn edits(gateway: &MockGateway) -> Vec<RecordedRequest> {
    gateway.requests_where(|r| matches!(r, RecordedRequest::EditMessage { .. }))
}

fn deletes(gateway: &MockGateway) -> Vec<RecordedRequest> {
    gateway.requests_where(|r| matches!(r, RecordedRequest::DeleteMessage { .. }))
}

fn reactions(gateway: &MockGateway) -> Vec<String> {
    gateway
        .requests_where(|r| matches!(r, RecordedRequest::AddReaction { .. }))
        .into_iter()
        .map(|r| match r {
            RecordedRequest::AddReaction { emoji, .. } => emoji,
            _ => unreachable!(),
        })
        .collect()
}

#[tokio::test]
async fn single_page_attaches_only_stop() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(2);
    manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    assert_eq!(reactions(&gateway), vec![NavigationAction::Stop.emoji()]);
}

#[tokio::test]
async fn multi_page_attaches_all_navigation_icons() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    let attached = reactions(&gateway);
    assert_eq!(attached.len(), 5);
    assert_eq!(attached[0], NavigationAction::First.emoji());
    assert_eq!(attached[4], NavigationAction::Stop.emoji());
}

#[tokio::test]
async fn next_edits_in_place_and_recycles_reaction() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    manager
        .handle_reaction(message, OWNER, NavigationAction::Next.emoji())
        .await
        .unwrap();

    assert_eq!(manager.current_page(*message.message()).await, Some(1));
    assert_eq!(edits(&gateway).len(), 1);
    let removed = gateway.requests_where(|r| matches!(r, RecordedRequest::RemoveReaction { .. }));
    assert_eq!(removed.len(), 1);

    // The rendered page carries a counter footer.
    match edits(&gateway).pop().unwrap() {
        RecordedRequest::EditMessage { content, .. } => match content {
            OutboundContent::Embed(embed) => {
                assert_eq!(embed.footer(), &Some("Page 2 / 3".to_owned()));
            }
            OutboundContent::Text(_) => panic!("sessions render embeds"),
        },
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn first_on_first_page_is_a_quiet_no_op() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    manager
        .handle_reaction(message, OWNER, NavigationAction::First.emoji())
        .await
        .unwrap();

    assert_eq!(manager.current_page(*message.message()).await, Some(0));
    assert!(edits(&gateway).is_empty(), "no re-render on a no-op");
    // The triggering reaction is still recycled.
    let removed = gateway.requests_where(|r| matches!(r, RecordedRequest::RemoveReaction { .. }));
    assert_eq!(removed.len(), 1);
}

#[tokio::test]
async fn next_on_last_page_never_wraps() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    for _ in 0..5 {
        manager
            .handle_reaction(message, OWNER, NavigationAction::Next.emoji())
            .await
            .unwrap();
    }
    assert_eq!(manager.current_page(*message.message()).await, Some(2));
    // Two real page turns; the other three presses were bound no-ops.
    assert_eq!(edits(&gateway).len(), 2);
}

#[tokio::test]
async fn foreign_user_and_unknown_emoji_are_ignored() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();
    gateway.clear_requests();

    manager
        .handle_reaction(message, OTHER, NavigationAction::Next.emoji())
        .await
        .unwrap();
    manager
        .handle_reaction(message, OWNER, "\u{1f600}")
        .await
        .unwrap();

    assert!(gateway.requests().is_empty());
    assert_eq!(manager.current_page(*message.message()).await, Some(0));
}

#[tokio::test]
async fn stop_reaction_deletes_message_and_deregisters() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    manager
        .handle_reaction(message, OWNER, NavigationAction::Stop.emoji())
        .await
        .unwrap();

    assert!(manager.is_empty());
    assert_eq!(deletes(&gateway).len(), 1);

    // A stopped session no longer reacts to anything.
    gateway.clear_requests();
    manager
        .handle_reaction(message, OWNER, NavigationAction::Next.emoji())
        .await
        .unwrap();
    assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn external_message_delete_stops_session() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(2);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    manager.handle_message_delete(*message.message()).await;
    assert!(manager.is_empty());
}

#[tokio::test]
async fn teardown_tolerates_vanished_message() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(2);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();

    gateway.push_failure(GatewayErrorKind::NotFound("message".into()));
    manager
        .handle_reaction(message, OWNER, NavigationAction::Stop.emoji())
        .await
        .unwrap();
    assert!(manager.is_empty());
}

#[tokio::test(start_paused = true)]
async fn inactivity_timeout_stops_session() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(2);
    manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();
    settle().await;

    tokio::time::advance(Duration::from_secs(61)).await;
    settle().await;

    assert!(manager.is_empty());
    assert_eq!(deletes(&gateway).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn interaction_defers_timeout() {
    let gateway = Arc::new(MockGateway::new());
    let manager = manager(&gateway, Duration::from_secs(60));

    let content = ListContent::with_entries(20);
    let message = manager
        .start(&content, OWNER, MessageTarget::Channel(CHANNEL))
        .await
        .unwrap();
    settle().await;

    tokio::time::advance(Duration::from_secs(40)).await;
    settle().await;
    manager
        .handle_reaction(message, OWNER, NavigationAction::Next.emoji())
        .await
        .unwrap();
    settle().await;

    // 80s since start, but only 40s since the last interaction.
    tokio::time::advance(Duration::from_secs(40)).await;
    settle().await;
    assert!(!manager.is_empty());

    tokio::time::advance(Duration::from_secs(30)).await;
    settle().await;
    assert!(manager.is_empty());
}
