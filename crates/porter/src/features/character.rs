//! The `!character` command: roster session and face-code lookup.

use crate::{CommandContext, CommandHandler, CommandSpec, Router};
use async_trait::async_trait;
use porter_core::{CharacterSection, Page, PageLimits, Paginator, fill};
use porter_error::{PorterResult, SessionResult};
use porter_session::SessionContent;
use std::sync::Arc;
use tracing::debug;

/// Register the character feature.
pub fn register(router: &mut Router) {
    router.register(CommandSpec::new(
        "character",
        "[name]",
        "Show the character roster, or fetch a character's face code.",
        "character",
        false,
        Arc::new(CharacterCommand),
    ));
}

/// Session content listing the available characters.
struct RosterContent {
    strings: CharacterSection,
}

#[async_trait]
impl SessionContent for RosterContent {
    fn title(&self) -> String {
        self.strings.title.clone()
    }

    async fn build_pages(&self, limits: &PageLimits) -> SessionResult<Vec<Page>> {
        let mut paginator = Paginator::new(limits.clone());
        for line in self.strings.introduction.lines() {
            paginator.add_line(line, false)?;
        }
        paginator.close_page();
        for name in self.strings.roster.keys() {
            paginator.add_line(name, false)?;
        }
        Ok(paginator.into_pages())
    }
}

struct CharacterCommand;

#[async_trait]
impl CommandHandler for CharacterCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let strings = &ctx.state.catalog().characters;
        let name = ctx.args.split_whitespace().next().unwrap_or("");

        if name.is_empty() {
            let content = RosterContent {
                strings: strings.clone(),
            };
            ctx.state
                .sessions()
                .start(&content, ctx.author, ctx.reply_target())
                .await?;
            return Ok(());
        }

        match strings.roster.get(name) {
            // The raw code, as plain text, so it can be copied directly into
            // the character edition screen.
            Some(code) => {
                ctx.state
                    .gateway()
                    .send_message(ctx.reply_target(), code.as_str().into())
                    .await?;
            }
            None => {
                debug!(name, "Character query matched no roster entry");
                let title = fill(&strings.invalid_character, &[name]);
                ctx.state.send_error(ctx.reply_target(), title).await?;
            }
        }
        Ok(())
    }
}
