use crate::CommandMeta;
use maple_core::{Context, Error};
use maple_database::model::reminders::ReminderEntry;
use maple_database::now_unix_secs;
use maple_utils::embed::{EMBED_DESCRIPTION_LIMIT, described_embed, join_within};
use maple_utils::formatting::{absolute_timestamp, escape_mentions, format_countdown};

pub const META: CommandMeta = CommandMeta {
    name: "reminders",
    desc: "List your pending reminders.",
    category: "utility",
    usage: "/reminders",
    placeholder: false,
};

#[poise::command(slash_command, category = "Utility")]
pub async fn reminders(ctx: Context<'_>) -> Result<(), Error> {
    let pending = ctx
        .data()
        .reminders
        .pending_for(ctx.author().id.get())
        .await?;

    let embed = described_embed(
        "⏰ Your Reminders",
        reminders_description(&pending, now_unix_secs()),
    );
    ctx.send(
        poise::CreateReply::default()
            .embed(embed)
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

pub fn reminders_description(entries: &[ReminderEntry], now_unix_secs: u64) -> String {
    if entries.is_empty() {
        return "No pending reminders.".to_owned();
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "`{}` {} (in {}, {})",
                entry.id,
                escape_mentions(&entry.message),
                format_countdown(entry.fire_at.saturating_sub(now_unix_secs)),
                absolute_timestamp(entry.fire_at)
            )
        })
        .collect();

    join_within(&lines, "\n", EMBED_DESCRIPTION_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::reminders_description;
    use maple_database::model::reminders::ReminderEntry;
    use maple_utils::embed::EMBED_DESCRIPTION_LIMIT;

    fn entry(id: u64, message: &str, fire_at: u64) -> ReminderEntry {
        ReminderEntry {
            id,
            user_id: 1,
            channel_id: 2,
            message: message.to_owned(),
            fire_at,
        }
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(reminders_description(&[], 0), "No pending reminders.");
    }

    #[test]
    fn lists_id_message_and_fire_time() {
        let entries = [entry(3, "stretch", 1_700_000_300)];

        assert_eq!(
            reminders_description(&entries, 1_700_000_000),
            "`3` stretch (in 5m, <t:1700000300:f>)"
        );
    }

    #[test]
    fn long_lists_stay_within_embed_limit() {
        let message = "x".repeat(900);
        let entries: Vec<ReminderEntry> = (1..=10).map(|id| entry(id, &message, 60)).collect();

        let description = reminders_description(&entries, 0);
        assert!(description.chars().count() <= EMBED_DESCRIPTION_LIMIT);
        assert!(description.ends_with("more"));
    }
}
