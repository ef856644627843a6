//! Prefix command routing.
//!
//! Features register their commands as an explicit static list at startup;
//! there is no dynamic discovery. The router parses `<prefix><word> <rest>`,
//! enforces the DM-only flag, and hands the rest to the command's handler.

use crate::PorterState;
use async_trait::async_trait;
use porter_core::fill;
use porter_error::PorterResult;
use porter_gateway::{ChannelId, MessageTarget, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Everything a command handler gets to work with.
pub struct CommandContext<'a> {
    /// Shared bot state.
    pub state: &'a PorterState,
    /// The router itself, for command introspection (the help feature).
    pub router: &'a Router,
    /// Invoking user.
    pub author: UserId,
    /// Invoking user's display name.
    pub author_name: &'a str,
    /// Channel the command arrived in.
    pub channel: ChannelId,
    /// Whether the command arrived as a direct message.
    pub private: bool,
    /// Argument text after the command word, trimmed.
    pub args: &'a str,
}

impl CommandContext<'_> {
    /// Where replies to this invocation go.
    pub fn reply_target(&self) -> MessageTarget {
        MessageTarget::Channel(self.channel)
    }
}

/// An invocable command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Execute the command.
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()>;
}

/// Registration record for one command.
#[derive(Clone)]
pub struct CommandSpec {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
    feature: &'static str,
    dm_only: bool,
    handler: Arc<dyn CommandHandler>,
}

impl CommandSpec {
    /// Describe a command.
    pub fn new(
        name: &'static str,
        usage: &'static str,
        summary: &'static str,
        feature: &'static str,
        dm_only: bool,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        Self {
            name,
            usage,
            summary,
            feature,
            dm_only,
            handler,
        }
    }

    /// Command word.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Argument signature shown in help, may be empty.
    pub fn usage(&self) -> &'static str {
        self.usage
    }

    /// One-line description shown in help.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Owning feature, the help grouping key.
    pub fn feature(&self) -> &'static str {
        self.feature
    }

    /// Whether the command only runs in direct messages.
    pub fn dm_only(&self) -> bool {
        self.dm_only
    }
}

/// Prefix-based command router.
pub struct Router {
    prefix: String,
    commands: HashMap<&'static str, CommandSpec>,
}

impl Router {
    /// An empty router with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            commands: HashMap::new(),
        }
    }

    /// The command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Register a command. Re-registering a name replaces the previous entry.
    pub fn register(&mut self, spec: CommandSpec) {
        if self.commands.insert(spec.name, spec).is_some() {
            warn!("Command registered twice, keeping the later registration");
        }
    }

    /// Look up a command by its word.
    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Registered commands sorted by feature, then name — the order the
    /// global help listing uses.
    pub fn commands_sorted(&self) -> Vec<&CommandSpec> {
        let mut commands: Vec<&CommandSpec> = self.commands.values().collect();
        commands.sort_by_key(|spec| (spec.feature, spec.name));
        commands
    }

    /// Split message text into a command word and its argument rest, if the
    /// text starts with the prefix.
    pub fn parse<'a>(&self, content: &'a str) -> Option<(&'a str, &'a str)> {
        let stripped = content.strip_prefix(&self.prefix)?;
        let mut parts = stripped.splitn(2, char::is_whitespace);
        let name = parts.next()?;
        if name.is_empty() {
            return None;
        }
        Some((name, parts.next().unwrap_or("").trim()))
    }

    /// Whether the text invokes a registered command.
    pub fn resolves(&self, content: &str) -> bool {
        self.parse(content)
            .is_some_and(|(name, _)| self.commands.contains_key(name))
    }

    /// Route one inbound message.
    ///
    /// Messages without the prefix or naming no registered command are
    /// ignored. DM-only commands invoked elsewhere get the redirect notice
    /// in a DM instead of executing. Handler errors propagate to the caller,
    /// which owns user-visible reporting.
    #[instrument(skip(self, state, content), fields(author = %author))]
    pub async fn dispatch(
        &self,
        state: &PorterState,
        author: UserId,
        author_name: &str,
        channel: ChannelId,
        private: bool,
        content: &str,
    ) -> PorterResult<()> {
        let Some((name, args)) = self.parse(content) else {
            return Ok(());
        };
        let Some(spec) = self.find(name) else {
            debug!(command = name, "Ignoring unknown command");
            return Ok(());
        };

        debug!(command = name, "Dispatching command");

        if spec.dm_only() && !private {
            let notice = fill(&state.catalog().apply.dm_redirect, &[name, name]);
            state.dm(author, notice).await?;
            return Ok(());
        }

        let ctx = CommandContext {
            state,
            router: self,
            author,
            author_name,
            channel,
            private,
            args,
        };
        spec.handler.run(ctx).await
    }
}
