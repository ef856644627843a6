//! The `!help` command and its interactive session.

use crate::{CommandContext, CommandHandler, CommandSpec, Router};
use async_trait::async_trait;
use porter_core::{HelpSection, Page, PageLimits, Paginator, fill};
use porter_error::{PorterResult, SessionResult};
use porter_session::SessionContent;
use std::sync::Arc;
use tracing::debug;

const HELP_ICON: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// Register the help feature.
pub fn register(router: &mut Router) {
    router.register(CommandSpec::new(
        "help",
        "[command]",
        "Show available commands, or details about a specific command.",
        "help",
        false,
        Arc::new(HelpCommand),
    ));
}

/// Snapshot of one registered command, detached from the router's lifetime.
#[derive(Debug, Clone)]
struct CommandEntry {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
}

impl CommandEntry {
    fn from_spec(spec: &CommandSpec) -> Self {
        Self {
            name: spec.name(),
            usage: spec.usage(),
            summary: spec.summary(),
        }
    }
}

/// Session content for both the global listing and single-command help.
struct HelpContent {
    strings: HelpSection,
    prefix: String,
    query: Option<CommandEntry>,
    entries: Vec<CommandEntry>,
}

impl HelpContent {
    fn global(strings: HelpSection, prefix: String, router: &Router) -> Self {
        Self {
            strings,
            prefix,
            query: None,
            entries: router
                .commands_sorted()
                .into_iter()
                .map(CommandEntry::from_spec)
                .collect(),
        }
    }

    fn command(strings: HelpSection, prefix: String, spec: &CommandSpec) -> Self {
        Self {
            strings,
            prefix,
            query: Some(CommandEntry::from_spec(spec)),
            entries: Vec::new(),
        }
    }

    fn invocation(&self, entry: &CommandEntry) -> String {
        if entry.usage.is_empty() {
            format!("{}{}", self.prefix, entry.name)
        } else {
            format!("{}{} {}", self.prefix, entry.name, entry.usage)
        }
    }

    fn summary_line(&self, entry: &CommandEntry) -> String {
        if entry.summary.is_empty() {
            format!("*{}*", self.strings.no_details)
        } else {
            format!("*{}*", entry.summary)
        }
    }

    /// All commands, two lines plus a spacer each, with a command's block
    /// never split across a page boundary.
    fn global_pages(&self, paginator: &mut Paginator) -> SessionResult<()> {
        let max_lines = *paginator.limits().max_lines();
        for entry in &self.entries {
            if let Some(max) = max_lines {
                if paginator.open_line_count() > 0 && paginator.open_line_count() + 2 > max {
                    paginator.close_page();
                }
            }
            paginator.add_line(&format!("**`{}`**", self.invocation(entry)), false)?;
            paginator.add_line(&self.summary_line(entry), false)?;
            // The spacer stays on this page or is dropped; it never opens the
            // next one.
            if max_lines.is_none_or(|max| paginator.open_line_count() < max) {
                paginator.add_line("", false)?;
            }
        }
        Ok(())
    }

    fn command_pages(&self, entry: &CommandEntry, paginator: &mut Paginator) -> SessionResult<()> {
        paginator.add_line(&format!("**```{}```**", self.invocation(entry)), false)?;
        paginator.add_line(&self.summary_line(entry), false)?;
        Ok(())
    }
}

#[async_trait]
impl SessionContent for HelpContent {
    fn title(&self) -> String {
        match &self.query {
            Some(entry) => format!("{} | {}", self.strings.title, entry.name),
            None => self.strings.title.clone(),
        }
    }

    fn icon_url(&self) -> Option<String> {
        Some(HELP_ICON.to_owned())
    }

    async fn build_pages(&self, limits: &PageLimits) -> SessionResult<Vec<Page>> {
        let mut paginator = Paginator::new(limits.clone());
        match &self.query {
            Some(entry) => self.command_pages(entry, &mut paginator)?,
            None => self.global_pages(&mut paginator)?,
        }
        Ok(paginator.into_pages())
    }
}

struct HelpCommand;

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let strings = ctx.state.catalog().help.clone();
        let prefix = ctx.router.prefix().to_owned();
        let query = ctx.args.split_whitespace().next().unwrap_or("");

        let content = if query.is_empty() {
            HelpContent::global(strings, prefix, ctx.router)
        } else {
            match ctx.router.find(query) {
                Some(spec) => HelpContent::command(strings, prefix, spec),
                None => {
                    debug!(query, "Help query matched no command");
                    let title = fill(&ctx.state.catalog().help.invalid_query, &[query]);
                    ctx.state.send_error(ctx.reply_target(), title).await?;
                    return Ok(());
                }
            }
        };

        ctx.state
            .sessions()
            .start(&content, ctx.author, ctx.reply_target())
            .await?;
        Ok(())
    }
}
