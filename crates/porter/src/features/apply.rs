//! The member application questionnaire: `!apply`, `!submit`, `!cancel` and
//! the DM answer listener.

use crate::{CommandContext, CommandHandler, CommandSpec, PorterState, Router};
use async_trait::async_trait;
use porter_core::{MemberApplication, fill};
use porter_error::{GatewayError, GatewayErrorKind, PorterResult};
use porter_gateway::{MessageTarget, UserId};
use std::sync::Arc;
use tracing::{debug, info};

/// Register the application feature. All three commands are DM-only.
pub fn register(router: &mut Router) {
    router.register(CommandSpec::new(
        "apply",
        "",
        "Start a member application, or check the progress of the current one.",
        "apply",
        true,
        Arc::new(ApplyCommand),
    ));
    router.register(CommandSpec::new(
        "submit",
        "",
        "Submit a finished application.",
        "apply",
        true,
        Arc::new(SubmitCommand),
    ));
    router.register(CommandSpec::new(
        "cancel",
        "",
        "Cancel an in-progress application.",
        "apply",
        true,
        Arc::new(CancelCommand),
    ));
}

/// Feed one non-command direct message into the author's application, if one
/// is open.
///
/// While unfinished, the message is registered as the answer to the current
/// question; afterwards either the next question or the completion prompt is
/// sent back.
pub async fn handle_direct_message(
    state: &PorterState,
    author: UserId,
    author_name: &str,
    content: &str,
) -> PorterResult<()> {
    let reply = {
        let mut applications = state.applications().lock();
        let Some(application) = applications.get_mut(&author) else {
            return Ok(());
        };
        if !application.finished() {
            application.add_answer(content);
        }
        if application.finished() {
            debug!(member = author_name, "Application completed");
            fill(&state.catalog().apply.completed, &[&application.summary()])
        } else {
            match application.question() {
                Some(question) => question.prompt.clone(),
                None => return Ok(()),
            }
        }
    };
    state.dm(author, reply).await?;
    Ok(())
}

struct ApplyCommand;

#[async_trait]
impl CommandHandler for ApplyCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let catalog = ctx.state.catalog();

        enum Outcome {
            Started { first_question: String },
            Completed { summary: String },
            InProgress { step: String, total: String, question: String },
        }

        let outcome = {
            let mut applications = ctx.state.applications().lock();
            match applications.get(&ctx.author) {
                None => {
                    let application = MemberApplication::new(ctx.state.questions());
                    let first_question = application
                        .question()
                        .map(|q| q.prompt.clone())
                        .unwrap_or_default();
                    applications.insert(ctx.author, application);
                    Outcome::Started { first_question }
                }
                Some(application) if application.finished() => Outcome::Completed {
                    summary: application.summary(),
                },
                Some(application) => Outcome::InProgress {
                    step: application.step().to_string(),
                    total: application.total().to_string(),
                    question: application
                        .question()
                        .map(|q| q.prompt.clone())
                        .unwrap_or_default(),
                },
            }
        };

        match outcome {
            Outcome::Started { first_question } => {
                info!(member = ctx.author_name, "New application started");
                let greeting = fill(&catalog.apply.new_application, &[ctx.author_name]);
                ctx.state.dm(ctx.author, greeting).await?;
                ctx.state.dm(ctx.author, first_question).await?;
            }
            Outcome::Completed { summary } => {
                let prompt = fill(&catalog.apply.completed, &[&summary]);
                ctx.state.dm(ctx.author, prompt).await?;
            }
            Outcome::InProgress {
                step,
                total,
                question,
            } => {
                let progress = fill(&catalog.apply.progress, &[&step, &total, &question]);
                ctx.state.dm(ctx.author, progress).await?;
            }
        }
        Ok(())
    }
}

struct SubmitCommand;

#[async_trait]
impl CommandHandler for SubmitCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let catalog = ctx.state.catalog();

        let summary = {
            let applications = ctx.state.applications().lock();
            applications
                .get(&ctx.author)
                .filter(|application| application.finished())
                .map(MemberApplication::summary)
        };

        let Some(summary) = summary else {
            let notice = fill(&catalog.apply.unfinished, &[ctx.author_name]);
            ctx.state.dm(ctx.author, notice).await?;
            return Ok(());
        };

        info!(member = ctx.author_name, "Application submitted");

        let channel_name = &ctx.state.config().applications_channel;
        let channel = ctx.state.registry().get(channel_name).ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::NotFound(format!(
                "applications channel \"{channel_name}\""
            )))
        })?;
        let post = fill(&catalog.apply.submission, &[ctx.author_name, &summary]);
        ctx.state
            .gateway()
            .send_message(MessageTarget::Channel(*channel.id()), post.into())
            .await?;

        ctx.state.applications().lock().remove(&ctx.author);
        let confirmation = fill(&catalog.apply.submitted, &[ctx.author_name]);
        ctx.state.dm(ctx.author, confirmation).await?;
        Ok(())
    }
}

struct CancelCommand;

#[async_trait]
impl CommandHandler for CancelCommand {
    async fn run(&self, ctx: CommandContext<'_>) -> PorterResult<()> {
        let catalog = ctx.state.catalog();
        let removed = ctx.state.applications().lock().remove(&ctx.author).is_some();
        let notice = if removed {
            info!(member = ctx.author_name, "Application cancelled");
            fill(&catalog.apply.cancelled, &[ctx.author_name])
        } else {
            fill(&catalog.apply.not_started, &[ctx.author_name])
        };
        ctx.state.dm(ctx.author, notice).await?;
        Ok(())
    }
}
