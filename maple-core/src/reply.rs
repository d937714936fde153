use poise::serenity_prelude as serenity;

use crate::{Context, Error};

/// How the single error reply for an invocation must be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyPath {
    /// Nothing has been sent yet.
    Reply,
    /// A deferred acknowledgment is pending and must be edited.
    EditDeferred,
    /// A response already exists; append a follow-up.
    FollowUp,
}

pub fn reply_path(deferred: bool, replied: bool) -> ReplyPath {
    if deferred {
        ReplyPath::EditDeferred
    } else if replied {
        ReplyPath::FollowUp
    } else {
        ReplyPath::Reply
    }
}

/// Per-invocation marker set once a command has deferred its reply.
#[derive(Clone, Copy, Debug)]
struct Deferred;

/// Acknowledge the interaction now and remember that the real reply must be
/// an edit.
pub async fn defer_reply(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer().await?;
    ctx.set_invocation_data(Deferred).await;
    Ok(())
}

pub async fn was_deferred(ctx: Context<'_>) -> bool {
    ctx.invocation_data::<Deferred>().await.is_some()
}

/// Replace the deferred "thinking" response with `embed`.
pub async fn edit_deferred_embed(ctx: Context<'_>, embed: serenity::CreateEmbed) -> Result<(), Error> {
    match ctx {
        poise::Context::Application(app) => {
            app.interaction
                .edit_response(ctx.http(), serenity::EditInteractionResponse::new().embed(embed))
                .await?;
        }
        poise::Context::Prefix(_) => {
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ReplyPath, reply_path};

    #[test]
    fn fresh_interactions_get_a_reply() {
        assert_eq!(reply_path(false, false), ReplyPath::Reply);
    }

    #[test]
    fn deferred_interactions_are_edited() {
        // Deferring also marks the initial response as sent.
        assert_eq!(reply_path(true, true), ReplyPath::EditDeferred);
        assert_eq!(reply_path(true, false), ReplyPath::EditDeferred);
    }

    #[test]
    fn answered_interactions_get_a_follow_up() {
        assert_eq!(reply_path(false, true), ReplyPath::FollowUp);
    }
}
