//! End-to-end behavior through `Porter::dispatch` over a recording gateway.

use porter::{Porter, PorterConfig};
use porter_gateway::mock::{MockGateway, RecordedRequest};
use porter_gateway::{
    ChannelHandle, ChannelId, ChannelKind, EmbedContent, GatewayEvent, MessageTarget,
    OutboundContent, UserId,
};
use std::sync::Arc;

const APPLICANT: UserId = UserId::new(77);
const GENERAL: ChannelId = ChannelId::new(13);

fn test_config() -> PorterConfig {
    toml::from_str("guild_id = 1").unwrap()
}

fn guild_gateway() -> Arc<MockGateway> {
    Arc::new(MockGateway::with_channels(vec![
        ChannelHandle::new(ChannelId::new(9), "Community".into(), ChannelKind::Category),
        ChannelHandle::new(ChannelId::new(10), "reports".into(), ChannelKind::Text),
        ChannelHandle::new(ChannelId::new(11), "chat".into(), ChannelKind::Text),
        ChannelHandle::new(ChannelId::new(12), "applications".into(), ChannelKind::Text),
        ChannelHandle::new(GENERAL, "general".into(), ChannelKind::Text),
    ]))
}

async fn ready_porter(gateway: &Arc<MockGateway>) -> Porter {
    let porter = Porter::new(gateway.clone(), test_config()).unwrap();
    porter.dispatch(GatewayEvent::Ready).await;
    porter
}

async fn private_message(porter: &Porter, user: UserId, content: &str) {
    porter
        .dispatch(GatewayEvent::MessageReceived {
            author: user,
            author_name: "Applicant".into(),
            channel: ChannelId::new(999),
            content: content.into(),
            private: true,
        })
        .await;
}

async fn guild_message(porter: &Porter, user: UserId, content: &str) {
    porter
        .dispatch(GatewayEvent::MessageReceived {
            author: user,
            author_name: "Applicant".into(),
            channel: GENERAL,
            content: content.into(),
            private: false,
        })
        .await;
}

fn dms_to(gateway: &MockGateway, user: UserId) -> Vec<String> {
    gateway
        .requests()
        .into_iter()
        .filter_map(|r| match r {
            RecordedRequest::SendMessage {
                target: MessageTarget::User(to),
                content: OutboundContent::Text(text),
            } if to == user => Some(text),
            _ => None,
        })
        .collect()
}

fn texts_to(gateway: &MockGateway, channel: ChannelId) -> Vec<String> {
    gateway
        .requests()
        .into_iter()
        .filter_map(|r| match r {
            RecordedRequest::SendMessage {
                target: MessageTarget::Channel(to),
                content: OutboundContent::Text(text),
            } if to == channel => Some(text),
            _ => None,
        })
        .collect()
}

fn embeds_to(gateway: &MockGateway, channel: ChannelId) -> Vec<EmbedContent> {
    gateway
        .requests()
        .into_iter()
        .filter_map(|r| match r {
            RecordedRequest::SendMessage {
                target: MessageTarget::Channel(to),
                content: OutboundContent::Embed(embed),
            } if to == channel => Some(embed),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn ready_discovers_channels() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    let registry = porter.state().registry();
    assert_eq!(registry.len(), 4);
    assert!(registry.get("Community").is_none());
    assert!(registry.get("applications").is_some());
}

#[tokio::test]
async fn version_command_replies_with_crate_version() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    guild_message(&porter, APPLICANT, "!version").await;

    let replies = texts_to(&gateway, GENERAL);
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0], format!("Porter v{}", env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn unknown_help_query_reports_without_starting_a_session() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    guild_message(&porter, APPLICANT, "!help blep").await;

    let errors = embeds_to(&gateway, GENERAL);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].author_name().contains("blep"));
    assert!(errors[0].colour().is_some(), "error cards carry the red accent");
    assert!(porter.state().sessions().is_empty());
}

#[tokio::test]
async fn global_help_starts_a_session() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    guild_message(&porter, APPLICANT, "!help").await;

    assert_eq!(porter.state().sessions().len(), 1);
    let listing = embeds_to(&gateway, GENERAL);
    assert_eq!(listing.len(), 1);
    // Seven commands against the eight-line cap: the listing paginates,
    // apply first and version on a later page.
    assert!(listing[0].description().contains("!apply"));
    assert_eq!(listing[0].footer(), &Some("Page 1 / 3".to_owned()));
}

#[tokio::test]
async fn command_help_names_the_query_in_the_title() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    guild_message(&porter, APPLICANT, "!help apply").await;

    let cards = embeds_to(&gateway, GENERAL);
    assert_eq!(cards.len(), 1);
    assert!(cards[0].author_name().contains("apply"));
}

#[tokio::test]
async fn dm_only_command_in_guild_redirects() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    guild_message(&porter, APPLICANT, "!apply").await;

    let notices = dms_to(&gateway, APPLICANT);
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("direct message"));
    assert!(porter.state().applications().lock().is_empty());
}

#[tokio::test]
async fn application_flow_from_start_to_submission() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    private_message(&porter, APPLICANT, "!apply").await;
    let opening = dms_to(&gateway, APPLICANT);
    // Greeting plus the first question.
    assert_eq!(opening.len(), 2);
    assert!(opening[0].contains("Thank you"));
    assert!(opening[1].contains("Steam profile"));

    let total = porter.state().questions().len();
    for i in 0..total {
        private_message(&porter, APPLICANT, &format!("answer {i}")).await;
    }

    let transcript = dms_to(&gateway, APPLICANT);
    assert!(
        transcript.last().unwrap().contains("completed the application"),
        "final answer triggers the completion prompt"
    );

    private_message(&porter, APPLICANT, "!submit").await;

    let posted = texts_to(&gateway, ChannelId::new(12));
    assert_eq!(posted.len(), 1);
    assert!(posted[0].contains("New application from Applicant"));
    assert!(posted[0].contains("Country: answer 2"));
    assert!(dms_to(&gateway, APPLICANT)
        .last()
        .unwrap()
        .contains("successfully submitted"));
    assert!(porter.state().applications().lock().is_empty());

    // A second submit finds nothing.
    private_message(&porter, APPLICANT, "!submit").await;
    assert!(dms_to(&gateway, APPLICANT)
        .last()
        .unwrap()
        .contains("Couldn't find a finished application"));
}

#[tokio::test]
async fn apply_reports_progress_mid_questionnaire() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    private_message(&porter, APPLICANT, "!apply").await;
    private_message(&porter, APPLICANT, "https://example.org/me").await;
    private_message(&porter, APPLICANT, "!apply").await;

    let transcript = dms_to(&gateway, APPLICANT);
    let progress = transcript.last().unwrap();
    assert!(progress.contains("step 2 out of"));
    assert!(progress.contains("TaleWorlds"));
}

#[tokio::test]
async fn cancel_flow() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    private_message(&porter, APPLICANT, "!cancel").await;
    assert!(dms_to(&gateway, APPLICANT)
        .last()
        .unwrap()
        .contains("Couldn't find a started application"));

    private_message(&porter, APPLICANT, "!apply").await;
    private_message(&porter, APPLICANT, "!cancel").await;
    assert!(dms_to(&gateway, APPLICANT)
        .last()
        .unwrap()
        .contains("successfully cancelled"));
    assert!(porter.state().applications().lock().is_empty());
}

#[tokio::test]
async fn stray_dm_without_application_is_ignored() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;
    gateway.clear_requests();

    private_message(&porter, APPLICANT, "hello there").await;
    assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn member_join_greets_in_welcome_channel() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    porter
        .dispatch(GatewayEvent::MemberJoined {
            user: UserId::new(5),
            display_name: "Newcomer".into(),
        })
        .await;

    let greetings = texts_to(&gateway, ChannelId::new(11));
    assert_eq!(greetings.len(), 1);
    assert!(greetings[0].contains("Newcomer"));
}

#[tokio::test]
async fn character_lookup_and_roster() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    guild_message(&porter, APPLICANT, "!character Elys").await;
    let codes = texts_to(&gateway, GENERAL);
    assert_eq!(codes.len(), 1);
    assert!(codes[0].starts_with("<BodyProperties"));

    guild_message(&porter, APPLICANT, "!character Nobody").await;
    let errors = embeds_to(&gateway, GENERAL);
    assert!(errors.last().unwrap().author_name().contains("Nobody"));

    guild_message(&porter, APPLICANT, "!character").await;
    assert_eq!(porter.state().sessions().len(), 1);
}

#[tokio::test]
async fn conflicting_rename_is_corrected_through_dispatch() {
    let gateway = guild_gateway();
    let porter = ready_porter(&gateway).await;

    porter
        .dispatch(GatewayEvent::ChannelUpdated {
            old: Some(ChannelHandle::new(
                GENERAL,
                "general".into(),
                ChannelKind::Text,
            )),
            new: ChannelHandle::new(GENERAL, "chat".into(), ChannelKind::Text),
        })
        .await;

    let renames =
        gateway.requests_where(|r| matches!(r, RecordedRequest::RenameChannel { .. }));
    assert_eq!(
        renames,
        vec![RecordedRequest::RenameChannel {
            channel: GENERAL,
            name: "general".into()
        }]
    );
    // The clash notice went to the reporting channel.
    assert_eq!(texts_to(&gateway, ChannelId::new(10)).len(), 1);
    assert_eq!(
        porter.state().registry().get("chat").unwrap().id(),
        &ChannelId::new(11)
    );
}
