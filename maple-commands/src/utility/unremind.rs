use tracing::info;

use crate::CommandMeta;
use maple_core::{CommandError, Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "unremind",
    desc: "Cancel one of your pending reminders.",
    category: "utility",
    usage: "/unremind <id>",
    placeholder: false,
};

#[poise::command(slash_command, category = "Utility")]
pub async fn unremind(
    ctx: Context<'_>,
    #[description = "Reminder id from /reminders"] id: u64,
) -> Result<(), Error> {
    let cancelled = ctx
        .data()
        .reminders
        .cancel(ctx.author().id.get(), id)
        .await?;

    let Some(entry) = cancelled else {
        return Err(CommandError::NotFound {
            action: "cancel reminder",
            hint: "You have no pending reminder with that id.",
        }
        .into());
    };

    info!(reminder_id = entry.id, user_id = entry.user_id, "reminder cancelled by user");
    ctx.say(format!("🗑️ Reminder `{}` cancelled.", entry.id)).await?;

    Ok(())
}
