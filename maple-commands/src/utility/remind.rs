use std::sync::Arc;
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::{info, warn};

use crate::CommandMeta;
use maple_core::{Context, Error};
use maple_database::model::reminders::{NewReminder, ReminderEntry};
use maple_database::now_unix_secs;
use maple_utils::embed::{MESSAGE_CONTENT_LIMIT, clamp_chars};
use maple_utils::formatting::escape_mentions;
use maple_utils::parse::parse_duration_millis;

pub const META: CommandMeta = CommandMeta {
    name: "remind",
    desc: "Set a reminder.",
    category: "utility",
    usage: "/remind <time> <message>",
    placeholder: false,
};

pub const INVALID_TIME_MESSAGE: &str = "❌ Invalid time format. Use format like: 5m, 1h, 2d";

#[poise::command(slash_command, category = "Utility")]
pub async fn remind(
    ctx: Context<'_>,
    #[description = "Time (e.g., 5m, 1h, 2d)"]
    #[max_length = 16]
    time: String,
    #[description = "Reminder message"]
    #[max_length = 1000]
    message: String,
) -> Result<(), Error> {
    let Some(delay_ms) = parse_duration_millis(&time).filter(|millis| *millis > 0) else {
        ctx.say(INVALID_TIME_MESSAGE).await?;
        return Ok(());
    };

    let delivery = ReminderDelivery {
        http: Arc::clone(&ctx.serenity_context().http),
        interaction: match ctx {
            poise::Context::Application(app) => Some(app.interaction.clone()),
            poise::Context::Prefix(_) => None,
        },
    };

    let new = NewReminder {
        user_id: ctx.author().id.get(),
        channel_id: ctx.channel_id().get(),
        message,
        fire_at: now_unix_secs().saturating_add(delay_ms.div_ceil(1000)),
    };
    let entry = ctx
        .data()
        .reminders
        .schedule(new, Duration::from_millis(delay_ms), move |entry| {
            delivery.deliver(entry)
        })
        .await?;

    info!(
        reminder_id = entry.id,
        user_id = entry.user_id,
        delay_ms,
        "reminder set"
    );
    ctx.say(format!("⏰ Reminder set for {}! (id `{}`)", time, entry.id))
        .await?;

    Ok(())
}

/// Where a fired reminder is posted.
struct ReminderDelivery {
    http: Arc<serenity::Http>,
    interaction: Option<serenity::CommandInteraction>,
}

impl ReminderDelivery {
    /// Follow up on the originating interaction, or post in the channel when the
    /// interaction token has expired.
    async fn deliver(self, entry: ReminderEntry) -> anyhow::Result<()> {
        let text = reminder_text(&entry.message);

        if let Some(interaction) = &self.interaction {
            let followup = serenity::CreateInteractionResponseFollowup::new().content(&text);
            match interaction.create_followup(&*self.http, followup).await {
                Ok(_) => return Ok(()),
                Err(source) => {
                    warn!(?source, reminder_id = entry.id, "reminder follow-up rejected");
                }
            }
        }

        serenity::ChannelId::new(entry.channel_id)
            .say(
                &*self.http,
                clamp_chars(&format!("<@{}> {}", entry.user_id, text), MESSAGE_CONTENT_LIMIT),
            )
            .await?;
        Ok(())
    }
}

pub fn reminder_text(message: &str) -> String {
    clamp_chars(
        &format!("🔔 Reminder: {}", escape_mentions(message)),
        MESSAGE_CONTENT_LIMIT,
    )
}
