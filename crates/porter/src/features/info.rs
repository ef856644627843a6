//! The `!info` command, its session, and the member-join greeting.

use crate::{CommandContext, CommandHandler, CommandSpec, PorterState, Router};
use async_trait::async_trait;
use porter_core::{InfoSection, Page, PageLimits, Paginator, fill};
use porter_error::{PorterResult, SessionResult};
use porter_gateway::MessageTarget;
use porter_session::SessionContent;
use std::sync::Arc;
use tracing::{info, warn};

/// Register the info feature.
pub fn register(router: &mut Router) {
    router.register(CommandSpec::new(
        "info",
        "",
        "Show information about the community.",
        "info",
        false,
        Arc::new(InfoCommand),
    ));
}

/// Session content backed by the catalog's info sections.
struct InfoContent {
    strings: InfoSection,
}

#[async_trait]
impl SessionContent for InfoContent {
    fn title(&self) -> String {
        self.strings.title.clone()
    }

    async fn build_pages(&self, limits: &PageLimits) -> SessionResult<Vec<Page>> {
        let mut paginator = Paginator::new(limits.clone());
        // Each catalog section is one logical unit; never split one across a
        // page boundary.
        for section in &self.strings.pages {
            let page = Page::from_lines(section.lines());
            paginator.add_page(&page)?;
        }
        Ok(paginator.into_pages())
    }
}

struct InfoCommand;

#[async_trait]
impl CommandHandler for InfoCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let content = InfoContent {
            strings: ctx.state.catalog().info.clone(),
        };
        ctx.state
            .sessions()
            .start(&content, ctx.author, ctx.reply_target())
            .await?;
        Ok(())
    }
}

/// Greet a newly joined member in the welcome channel.
pub async fn welcome(state: &PorterState, display_name: &str) -> PorterResult<()> {
    info!(member = display_name, "Member joined the guild");
    let Some(channel) = state.registry().get(&state.config().welcome_channel) else {
        warn!(
            channel = %state.config().welcome_channel,
            "Welcome channel is not tracked, skipping greeting"
        );
        return Ok(());
    };
    let greeting = fill(&state.catalog().info.welcome, &[display_name]);
    state
        .gateway()
        .send_message(MessageTarget::Channel(*channel.id()), greeting.into())
        .await?;
    Ok(())
}
