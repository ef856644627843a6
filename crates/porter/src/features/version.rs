//! The `!version` command.

use crate::{CommandContext, CommandHandler, CommandSpec, Router};
use async_trait::async_trait;
use porter_error::PorterResult;
use std::sync::Arc;

/// Register the version feature.
pub fn register(router: &mut Router) {
    router.register(CommandSpec::new(
        "version",
        "",
        "Show the running bot version.",
        "meta",
        false,
        Arc::new(VersionCommand),
    ));
}

struct VersionCommand;

#[async_trait]
impl CommandHandler for VersionCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let text = format!("Porter v{}", env!("CARGO_PKG_VERSION"));
        ctx.state
            .gateway()
            .send_message(ctx.reply_target(), text.into())
            .await?;
        Ok(())
    }
}
